pub mod experience;
pub mod experience_tech;
pub mod portfolio;
pub mod portfolio_image;
pub mod tech_stack;

use serde::Serialize;
use std::collections::BTreeMap;

/// Field-keyed validation messages for the admin forms.
///
/// Serialized as `{"errors": {"title": "Title is required", ...}}` so the
/// client can attach each message to its input. A submission that fails
/// validation performs no writes.
#[derive(Debug, Default, Serialize)]
pub struct FieldErrors {
    pub errors: BTreeMap<&'static str, &'static str>,
}

impl FieldErrors {
    /// Record `message` under `field` when `value` is blank after trimming.
    pub fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.errors.insert(field, message);
        }
    }

    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}
