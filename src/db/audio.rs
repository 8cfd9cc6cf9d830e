use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::audio::AudioClip;
use crate::snowflake;

type ClipRow = (String, String, String, String, String);

fn row_to_clip(row: ClipRow) -> AudioClip {
    AudioClip {
        id: row.0,
        name: row.1,
        src: row.2,
        created_at: row.3,
        updated_at: row.4,
    }
}

pub async fn get_clip(pool: &SqlitePool, clip_id: &str) -> Result<AudioClip, AppError> {
    let row = sqlx::query_as::<_, ClipRow>(
        "SELECT id, name, src, created_at, updated_at FROM audio_clips WHERE id = ?",
    )
    .bind(clip_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("unknown audio clip".to_string()))?;

    Ok(row_to_clip(row))
}

/// List all clips, newest first, snowflake id as the same-second tiebreak.
pub async fn list_clips(pool: &SqlitePool) -> Result<Vec<AudioClip>, AppError> {
    let rows = sqlx::query_as::<_, ClipRow>(
        "SELECT id, name, src, created_at, updated_at FROM audio_clips ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_clip).collect())
}

pub async fn create_clip(pool: &SqlitePool, name: &str, src: &str) -> Result<AudioClip, AppError> {
    let id = snowflake::generate();

    sqlx::query("INSERT INTO audio_clips (id, name, src) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(name)
        .bind(src)
        .execute(pool)
        .await?;

    get_clip(pool, &id).await
}

pub async fn delete_clip(pool: &SqlitePool, clip_id: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM audio_clips WHERE id = ?")
        .bind(clip_id)
        .execute(pool)
        .await?;

    Ok(())
}
