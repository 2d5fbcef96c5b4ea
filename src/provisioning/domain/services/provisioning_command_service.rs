use async_trait::async_trait;

use crate::provisioning::domain::model::{
    commands::{start_create_command::StartCreateCommand, start_delete_command::StartDeleteCommand},
    entities::provisioning_operation::ProvisioningOperation,
    enums::provisioning_domain_error::ProvisioningDomainError,
};

#[async_trait]
pub trait ProvisioningCommandService: Send + Sync {
    async fn start_create(
        &self,
        command: StartCreateCommand,
    ) -> Result<ProvisioningOperation, ProvisioningDomainError>;

    async fn start_delete(
        &self,
        command: StartDeleteCommand,
    ) -> Result<ProvisioningOperation, ProvisioningDomainError>;
}
