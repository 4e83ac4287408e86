use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned for every failed API request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
