use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::card::Card;
use crate::snowflake;

type CardRow = (String, String, String, String, String, String);

fn row_to_card(row: CardRow) -> Card {
    Card {
        id: row.0,
        title: row.1,
        description: row.2,
        image: row.3,
        created_at: row.4,
        updated_at: row.5,
    }
}

pub async fn get_card(pool: &SqlitePool, card_id: &str) -> Result<Card, AppError> {
    let row = sqlx::query_as::<_, CardRow>(
        "SELECT id, title, description, image, created_at, updated_at FROM cards WHERE id = ?",
    )
    .bind(card_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("unknown card".to_string()))?;

    Ok(row_to_card(row))
}

/// List all cards, newest first. The id is a snowflake, so it breaks
/// same-second `created_at` ties in creation order.
pub async fn list_cards(pool: &SqlitePool) -> Result<Vec<Card>, AppError> {
    let rows = sqlx::query_as::<_, CardRow>(
        "SELECT id, title, description, image, created_at, updated_at FROM cards ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_card).collect())
}

pub async fn create_card(
    pool: &SqlitePool,
    title: &str,
    description: &str,
    image: &str,
) -> Result<Card, AppError> {
    let id = snowflake::generate();

    sqlx::query("INSERT INTO cards (id, title, description, image) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(title)
        .bind(description)
        .bind(image)
        .execute(pool)
        .await?;

    get_card(pool, &id).await
}

/// Delete a card by id. Deleting an id that no longer exists is not an
/// error; the caller cannot distinguish "already deleted" from success.
pub async fn delete_card(pool: &SqlitePool, card_id: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM cards WHERE id = ?")
        .bind(card_id)
        .execute(pool)
        .await?;

    Ok(())
}
