use sea_orm::*;
use uuid::Uuid;

use crate::models::portfolio::{self, PortfolioInput, PortfolioWithImages};
use crate::models::portfolio_image;

/// Insert a new portfolio row (images are uploaded and recorded separately,
/// after the row exists).
pub async fn insert_portfolio(
    db: &DatabaseConnection,
    input: &PortfolioInput,
) -> Result<portfolio::Model, DbErr> {
    let new_portfolio = portfolio::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title.clone()),
        excerpt: Set(input.excerpt.clone()),
        description: Set(input.description.clone()),
        link: Set(input.link.clone()),
        created_at: Set(chrono::Utc::now()),
    };

    new_portfolio.insert(db).await
}

/// Fetch all portfolios with their nested images, newest first.
pub async fn get_all_with_images(
    db: &DatabaseConnection,
) -> Result<Vec<PortfolioWithImages>, DbErr> {
    let rows = portfolio::Entity::find()
        .find_with_related(portfolio_image::Entity)
        .order_by_desc(portfolio::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(p, images)| PortfolioWithImages::from_join(p, images))
        .collect())
}

/// The home-page teaser: the three most recently inserted portfolios,
/// newest first.
pub async fn get_teaser(db: &DatabaseConnection) -> Result<Vec<PortfolioWithImages>, DbErr> {
    let mut items = get_all_with_images(db).await?;
    items.truncate(3);
    Ok(items)
}

/// Fetch a single portfolio with its images.
pub async fn get_by_id_with_images(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<PortfolioWithImages>, DbErr> {
    let Some(item) = portfolio::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let images = item.find_related(portfolio_image::Entity).all(db).await?;
    Ok(Some(PortfolioWithImages::from_join(item, images)))
}

/// Full-field update of a portfolio row. The admin form always submits
/// every column, so there is no partial patch.
pub async fn update_portfolio(
    db: &DatabaseConnection,
    id: Uuid,
    input: &PortfolioInput,
) -> Result<portfolio::Model, DbErr> {
    let item = portfolio::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Portfolio not found".to_string()))?;

    let mut active: portfolio::ActiveModel = item.into();
    active.title = Set(input.title.clone());
    active.excerpt = Set(input.excerpt.clone());
    active.description = Set(input.description.clone());
    active.link = Set(input.link.clone());

    active.update(db).await
}

/// Delete a portfolio row by ID. Image rows cascade in the database;
/// stored objects are not touched.
pub async fn delete_portfolio(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    portfolio::Entity::delete_by_id(id).exec(db).await
}

// ── Image rows ──

/// Fetch the image rows for a portfolio (used by the replace flow to find
/// the stored objects to remove).
pub async fn get_images(
    db: &DatabaseConnection,
    portfolio_id: Uuid,
) -> Result<Vec<portfolio_image::Model>, DbErr> {
    portfolio_image::Entity::find()
        .filter(portfolio_image::Column::PortfolioId.eq(portfolio_id))
        .all(db)
        .await
}

/// Delete all image rows for a portfolio.
pub async fn delete_images(
    db: &DatabaseConnection,
    portfolio_id: Uuid,
) -> Result<DeleteResult, DbErr> {
    portfolio_image::Entity::delete_many()
        .filter(portfolio_image::Column::PortfolioId.eq(portfolio_id))
        .exec(db)
        .await
}

/// Record the public URL of a freshly uploaded image.
pub async fn insert_image(
    db: &DatabaseConnection,
    portfolio_id: Uuid,
    image_url: String,
) -> Result<portfolio_image::Model, DbErr> {
    let new_image = portfolio_image::ActiveModel {
        id: Set(Uuid::new_v4()),
        portfolio_id: Set(portfolio_id),
        image_url: Set(image_url),
    };

    new_image.insert(db).await
}
