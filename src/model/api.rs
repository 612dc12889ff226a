use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error body returned by every endpoint on failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Generic confirmation body for operations without a richer payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
