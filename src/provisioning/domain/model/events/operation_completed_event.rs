use chrono::{DateTime, Utc};

use crate::provisioning::domain::model::{
    entities::provisioning_operation::ProvisioningOperation,
    enums::{api_kind::ApiKind, operation_kind::OperationKind, operation_state::OperationState},
    value_objects::{resource_location::ResourceLocation, resource_name::ResourceName},
};

#[derive(Clone, Debug)]
pub struct OperationCompletedEvent {
    pub kind: OperationKind,
    pub resource_name: ResourceName,
    pub location: Option<ResourceLocation>,
    pub api_kind: Option<ApiKind>,
    pub outcome: OperationState,
    pub error_detail: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl OperationCompletedEvent {
    pub fn from_operation(operation: &ProvisioningOperation, occurred_at: DateTime<Utc>) -> Self {
        Self {
            kind: operation.kind(),
            resource_name: operation.resource_name().clone(),
            location: operation.location().cloned(),
            api_kind: operation.api_kind(),
            outcome: operation.state(),
            error_detail: operation.error_detail().map(str::to_string),
            occurred_at,
        }
    }
}
