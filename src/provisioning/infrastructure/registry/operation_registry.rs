use async_trait::async_trait;

use crate::provisioning::domain::model::{
    entities::provisioning_operation::ProvisioningOperation,
    enums::provisioning_domain_error::ProvisioningDomainError,
    value_objects::operation_id::OperationId,
};

#[async_trait]
pub trait OperationRegistry: Send + Sync {
    /// Atomic check-and-insert. Rejects with `OperationConflict` when a
    /// non-terminal operation already targets the same resource name.
    async fn admit(
        &self,
        operation: ProvisioningOperation,
    ) -> Result<(), ProvisioningDomainError>;

    async fn find_by_id(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<ProvisioningOperation>, ProvisioningDomainError>;

    async fn save(
        &self,
        operation: &ProvisioningOperation,
    ) -> Result<(), ProvisioningDomainError>;

    async fn list(&self) -> Result<Vec<ProvisioningOperation>, ProvisioningDomainError>;
}
