use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The failure description
    pub detail: String,
}

/// The response for operations that report a plain outcome message
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// The outcome description
    pub detail: String,
}
