use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OperationAcceptedResource {
    pub operation_id: String,
    pub resource_name: String,
    pub state: String,
}
