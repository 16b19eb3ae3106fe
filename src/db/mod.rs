pub mod models;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info};

use crate::config::DbConfig;
use models::{Consent, Reading};

/// Everything that can go wrong on the write path. Surfaced to the HTTP
/// layer so a failed insert is never reported as success.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize readings payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("database insert failed: {0}")]
    Insert(#[from] sqlx::Error),
}

pub async fn create_pool(db: &DbConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(db.connect_options())
        .await?;
    Ok(pool)
}

/// Insert one row into `readings`, storing the submitted readings value as
/// JSON text. Returns the row as the database persisted it.
pub async fn insert_reading(
    pool: &PgPool,
    client_id: &str,
    sensor: &str,
    readings: &serde_json::Value,
) -> Result<Reading, StoreError> {
    let readings_text = serde_json::to_string(readings)?;

    let row = sqlx::query_as::<_, Reading>(
        r#"
        INSERT INTO readings (client_id, sensor, readings)
        VALUES ($1, $2, $3)
        RETURNING id, client_id, sensor, readings, recorded_at
        "#,
    )
    .bind(client_id)
    .bind(sensor)
    .bind(&readings_text)
    .fetch_one(pool)
    .await
    .inspect_err(|e| error!(client_id = %client_id, sensor = %sensor, error = %e, "Reading insert failed"))?;

    info!(id = %row.id, client_id = %client_id, sensor = %sensor, "1 record inserted into readings");
    Ok(row)
}

/// Insert one row into `consents`.
pub async fn insert_consent(
    pool: &PgPool,
    client_id: &str,
    email: &str,
    consent: bool,
) -> Result<Consent, StoreError> {
    let row = sqlx::query_as::<_, Consent>(
        r#"
        INSERT INTO consents (client_id, email, consent)
        VALUES ($1, $2, $3)
        RETURNING id, client_id, email, consent, recorded_at
        "#,
    )
    .bind(client_id)
    .bind(email)
    .bind(consent)
    .fetch_one(pool)
    .await
    .inspect_err(|e| error!(client_id = %client_id, error = %e, "Consent insert failed"))?;

    info!(id = %row.id, client_id = %client_id, "1 record inserted into consents");
    Ok(row)
}
