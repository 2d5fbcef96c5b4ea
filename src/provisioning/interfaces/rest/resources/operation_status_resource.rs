use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OperationStatusResource {
    pub operation_id: String,
    pub kind: String,
    pub resource_name: String,
    pub state: String,
    pub error_detail: Option<String>,
    pub notified: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ListOperationsQueryResource {
    pub include_finished: Option<bool>,
}
