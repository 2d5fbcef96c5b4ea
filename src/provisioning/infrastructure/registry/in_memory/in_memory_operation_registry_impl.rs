use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::provisioning::{
    domain::model::{
        entities::provisioning_operation::ProvisioningOperation,
        enums::provisioning_domain_error::ProvisioningDomainError,
        value_objects::operation_id::OperationId,
    },
    infrastructure::registry::operation_registry::OperationRegistry,
};

/// Process-lifetime operation registry. Constructed once in the composition
/// root and injected; the lock is never held across an await on the cloud
/// provider or the mailer.
#[derive(Default)]
pub struct InMemoryOperationRegistryImpl {
    operations: RwLock<HashMap<Uuid, ProvisioningOperation>>,
}

impl InMemoryOperationRegistryImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OperationRegistry for InMemoryOperationRegistryImpl {
    async fn admit(
        &self,
        operation: ProvisioningOperation,
    ) -> Result<(), ProvisioningDomainError> {
        let mut operations = self.operations.write().await;

        let in_flight_for_name = operations.values().any(|existing| {
            existing.resource_name() == operation.resource_name()
                && !existing.state().is_terminal()
        });
        if in_flight_for_name {
            return Err(ProvisioningDomainError::OperationConflict);
        }

        operations.insert(operation.id().value(), operation);
        Ok(())
    }

    async fn find_by_id(
        &self,
        operation_id: &OperationId,
    ) -> Result<Option<ProvisioningOperation>, ProvisioningDomainError> {
        let operations = self.operations.read().await;
        Ok(operations.get(&operation_id.value()).cloned())
    }

    async fn save(
        &self,
        operation: &ProvisioningOperation,
    ) -> Result<(), ProvisioningDomainError> {
        let mut operations = self.operations.write().await;
        operations.insert(operation.id().value(), operation.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ProvisioningOperation>, ProvisioningDomainError> {
        let operations = self.operations.read().await;
        let mut listed: Vec<ProvisioningOperation> = operations.values().cloned().collect();
        listed.sort_by_key(|operation| operation.created_at());
        Ok(listed)
    }
}
