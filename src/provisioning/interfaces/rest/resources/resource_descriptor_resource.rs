use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ResourceDescriptorResource {
    pub resource_name: String,
    pub location: String,
    pub api_kind: String,
    pub provisioning_state: String,
    pub document_endpoint: Option<String>,
}
