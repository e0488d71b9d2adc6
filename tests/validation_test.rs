//! Form validation and tech-input parsing tests.
//!
//! The key property: a submission with any required field blank after
//! trimming fails validation with a field-specific message, and the
//! handlers only write after validation passes.

use chrono::NaiveDate;

use folio_backend::models::experience::{
    ExperienceInput, format_period, parse_tech_input,
};
use folio_backend::models::portfolio::PortfolioInput;

fn portfolio_input(title: &str, excerpt: &str, description: &str, link: &str) -> PortfolioInput {
    PortfolioInput {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        description: description.to_string(),
        link: link.to_string(),
        images: Vec::new(),
    }
}

fn experience_input(title: &str, start: Option<NaiveDate>, description: &str, tech: &str) -> ExperienceInput {
    ExperienceInput {
        title: title.to_string(),
        project_start: start,
        project_end: None,
        description: description.to_string(),
        tech_input: tech.to_string(),
    }
}

fn sept(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 9, day).unwrap()
}

#[test]
fn complete_portfolio_passes() {
    let input = portfolio_input("Site", "Short", "<p>Long</p>", "https://example.com");
    assert!(input.validate().is_ok());
}

#[test]
fn blank_portfolio_fields_each_get_an_error() {
    let input = portfolio_input("", "  ", "\t", "");
    let errors = input.validate().unwrap_err();

    assert_eq!(errors.errors.len(), 4);
    assert_eq!(errors.errors["title"], "Title is required");
    assert_eq!(errors.errors["excerpt"], "Excerpt is required");
    assert_eq!(errors.errors["description"], "Description is required");
    assert_eq!(errors.errors["link"], "Link is required");
}

#[test]
fn whitespace_only_title_is_rejected() {
    let input = portfolio_input("   ", "Short", "Long", "https://example.com");
    let errors = input.validate().unwrap_err();
    assert!(errors.errors.contains_key("title"));
    assert!(!errors.errors.contains_key("excerpt"));
}

#[test]
fn complete_experience_passes() {
    let form = experience_input("Intern", Some(sept(1)), "Did things", "React, Node.js")
        .validate()
        .expect("should validate");

    assert_eq!(form.title, "Intern");
    assert_eq!(form.project_start, sept(1));
    assert_eq!(form.tech_names, vec!["React", "Node.js"]);
}

#[test]
fn missing_start_date_is_a_field_error() {
    let errors = experience_input("Intern", None, "Did things", "React")
        .validate()
        .unwrap_err();

    assert_eq!(errors.errors["project_start"], "Project start is required");
    assert_eq!(errors.errors.len(), 1);
}

#[test]
fn blank_experience_fields_each_get_an_error() {
    let errors = experience_input(" ", None, "", "  ")
        .validate()
        .unwrap_err();

    assert_eq!(errors.errors.len(), 4);
    assert_eq!(errors.errors["title"], "Title is required");
    assert_eq!(errors.errors["project_start"], "Project start is required");
    assert_eq!(errors.errors["description"], "Description is required");
    assert_eq!(errors.errors["tech_input"], "Tech stack is required");
}

// Quirk carried over from the admin form: the raw tech string is checked
// for non-emptiness, not the parsed list, so ", ," validates and yields an
// untagged experience.
#[test]
fn comma_only_tech_input_validates_to_zero_names() {
    let form = experience_input("Intern", Some(sept(1)), "Did things", " , ,")
        .validate()
        .expect("raw string is non-blank");

    assert!(form.tech_names.is_empty());
}

#[test]
fn tech_input_is_split_trimmed_and_deduped() {
    assert_eq!(
        parse_tech_input("React, Node.js, React"),
        vec!["React", "Node.js"]
    );
    assert_eq!(
        parse_tech_input("  Rust ,, Postgres ,"),
        vec!["Rust", "Postgres"]
    );
    // Exact-match dedup only: case differences are distinct names.
    assert_eq!(
        parse_tech_input("mysql, MySQL"),
        vec!["mysql", "MySQL"]
    );
    assert!(parse_tech_input("").is_empty());
}

#[test]
fn period_formats_month_abbreviation_and_year() {
    let start = NaiveDate::from_ymd_opt(2023, 9, 15).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

    assert_eq!(format_period(start, Some(end)), "Sep 2023 - Jan 2024");
}

#[test]
fn ongoing_period_renders_present() {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(format_period(start, None), "Mar 2024 - Present");
}
