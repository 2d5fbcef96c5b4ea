use async_trait::async_trait;

use crate::provisioning::domain::model::{
    enums::api_kind::ApiKind,
    value_objects::{resource_location::ResourceLocation, resource_name::ResourceName},
};

#[derive(Clone, Debug)]
pub struct CloudAccountSpec {
    pub location: ResourceLocation,
    pub api_kind: ApiKind,
}

/// Opaque handle for a long-running provider operation. The tracker only
/// ever hands it back to `probe_operation`.
#[derive(Clone, Debug)]
pub enum CloudOperationHandle {
    Create { resource_name: ResourceName },
    Delete { resource_name: ResourceName },
}

#[derive(Clone, Debug)]
pub struct CloudOperationProbe {
    pub done: bool,
    pub succeeded: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CloudAccountDescriptor {
    pub resource_name: String,
    pub location: String,
    pub api_kind: ApiKind,
    pub provisioning_state: String,
    pub document_endpoint: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CloudGatewayError {
    #[error("cloud request rejected: {0}")]
    Rejected(String),

    #[error("cloud unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait CloudAccountFacade: Send + Sync {
    async fn begin_create(
        &self,
        resource_name: &ResourceName,
        spec: &CloudAccountSpec,
    ) -> Result<CloudOperationHandle, CloudGatewayError>;

    async fn begin_delete(
        &self,
        resource_name: &ResourceName,
    ) -> Result<CloudOperationHandle, CloudGatewayError>;

    async fn probe_operation(
        &self,
        handle: &CloudOperationHandle,
    ) -> Result<CloudOperationProbe, CloudGatewayError>;

    async fn account_exists(
        &self,
        resource_name: &ResourceName,
    ) -> Result<bool, CloudGatewayError>;

    async fn fetch_account(
        &self,
        resource_name: &ResourceName,
    ) -> Result<Option<CloudAccountDescriptor>, CloudGatewayError>;
}
