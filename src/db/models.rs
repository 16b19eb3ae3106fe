use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted sensor reading submission. `id` and `recorded_at` are
/// assigned by the database; the service only ever supplies the other three
/// columns.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reading {
    pub id: Uuid,
    pub client_id: String,
    pub sensor: String,
    /// The submitted readings value, serialized to JSON text.
    pub readings: String,
    pub recorded_at: DateTime<Utc>,
}

/// A persisted consent record.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Consent {
    pub id: Uuid,
    pub client_id: String,
    pub email: String,
    pub consent: bool,
    pub recorded_at: DateTime<Utc>,
}
