use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /readings`. All three fields are required; `readings` may
/// be any JSON value and is persisted as serialized text.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadingSubmission {
    pub client_id: String,
    pub sensor: String,
    #[schema(value_type = Object)]
    pub readings: serde_json::Value,
}

/// Body of `POST /consents`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentSubmission {
    pub client_id: String,
    pub email: String,
    pub consent: bool,
}
