use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateResourceRequestResource {
    #[validate(length(min = 3, max = 44), regex(path = "*RESOURCE_NAME_REGEX"))]
    pub resource_name: String,

    #[validate(length(min = 2, max = 64))]
    pub location: String,

    /// "sql" or "mongo"; defaults to "sql".
    pub api_kind: Option<String>,
}

lazy_static::lazy_static! {
    pub static ref RESOURCE_NAME_REGEX: regex::Regex = regex::Regex::new("^[a-z0-9][a-z0-9-]{1,42}[a-z0-9]$").expect("valid regex");
}
