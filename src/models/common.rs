use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope written by `AppError::error_response`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ApiError,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    #[schema(example = "NOT_FOUND")]
    pub code: String,
    #[schema(example = "Customer not found: 42")]
    pub message: String,
}
