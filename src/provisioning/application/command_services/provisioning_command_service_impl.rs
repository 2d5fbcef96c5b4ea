use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::provisioning::{
    application::workers::operation_poll_worker::{
        OperationOutcome, OperationPollWorker, PollSettings, finalize_operation,
    },
    domain::{
        model::{
            commands::{
                start_create_command::StartCreateCommand,
                start_delete_command::StartDeleteCommand,
            },
            entities::provisioning_operation::ProvisioningOperation,
            enums::provisioning_domain_error::ProvisioningDomainError,
            value_objects::operation_id::OperationId,
        },
        services::provisioning_command_service::ProvisioningCommandService,
    },
    infrastructure::registry::operation_registry::OperationRegistry,
    interfaces::acl::{
        cloud_account_facade::{CloudAccountFacade, CloudAccountSpec, CloudOperationHandle},
        notification_facade::NotificationFacade,
    },
};

/// The provisioning lifecycle tracker. Admits one operation per resource
/// name, forwards the request to the cloud gateway and hands accepted
/// operations to a background poll worker. Callers get the operation
/// snapshot back immediately; background outcomes are visible only
/// through status queries.
pub struct ProvisioningCommandServiceImpl {
    registry: Arc<dyn OperationRegistry>,
    cloud_facade: Arc<dyn CloudAccountFacade>,
    notification_facade: Arc<dyn NotificationFacade>,
    poll_settings: PollSettings,
    notification_recipient: String,
}

impl ProvisioningCommandServiceImpl {
    pub fn new(
        registry: Arc<dyn OperationRegistry>,
        cloud_facade: Arc<dyn CloudAccountFacade>,
        notification_facade: Arc<dyn NotificationFacade>,
        poll_settings: PollSettings,
        notification_recipient: String,
    ) -> Self {
        Self {
            registry,
            cloud_facade,
            notification_facade,
            poll_settings,
            notification_recipient,
        }
    }

    async fn accept_and_poll(
        &self,
        operation_id: &OperationId,
        handle: CloudOperationHandle,
    ) -> Result<ProvisioningOperation, ProvisioningDomainError> {
        let mut operation = self
            .registry
            .find_by_id(operation_id)
            .await?
            .ok_or(ProvisioningDomainError::OperationNotFound)?;
        operation.mark_running(Utc::now())?;
        self.registry.save(&operation).await?;

        let worker = OperationPollWorker::new(
            self.registry.clone(),
            self.cloud_facade.clone(),
            self.notification_facade.clone(),
            self.poll_settings.clone(),
            self.notification_recipient.clone(),
        );
        worker.spawn(operation_id.clone(), handle);

        Ok(operation)
    }

    async fn reject_at_initiation(
        &self,
        operation_id: &OperationId,
        error_detail: String,
    ) -> Result<ProvisioningOperation, ProvisioningDomainError> {
        finalize_operation(
            &self.registry,
            &self.notification_facade,
            &self.notification_recipient,
            operation_id,
            OperationOutcome::Failed(error_detail),
        )
        .await
    }
}

#[async_trait]
impl ProvisioningCommandService for ProvisioningCommandServiceImpl {
    async fn start_create(
        &self,
        command: StartCreateCommand,
    ) -> Result<ProvisioningOperation, ProvisioningDomainError> {
        let operation = ProvisioningOperation::new_create(
            command.resource_name().clone(),
            command.location().clone(),
            command.api_kind(),
            Utc::now(),
        );
        let operation_id = operation.id().clone();
        self.registry.admit(operation).await?;

        let spec = CloudAccountSpec {
            location: command.location().clone(),
            api_kind: command.api_kind(),
        };
        match self
            .cloud_facade
            .begin_create(command.resource_name(), &spec)
            .await
        {
            Ok(handle) => self.accept_and_poll(&operation_id, handle).await,
            Err(error) => {
                tracing::error!(
                    resource_name = command.resource_name().value(),
                    %error,
                    "account creation rejected upstream"
                );
                self.reject_at_initiation(&operation_id, error.to_string())
                    .await
            }
        }
    }

    async fn start_delete(
        &self,
        command: StartDeleteCommand,
    ) -> Result<ProvisioningOperation, ProvisioningDomainError> {
        // deletion targets may predate this process, so existence is
        // checked live against the provider rather than the registry
        let exists = self
            .cloud_facade
            .account_exists(command.resource_name())
            .await
            .map_err(|error| ProvisioningDomainError::Upstream(error.to_string()))?;
        if !exists {
            return Err(ProvisioningDomainError::ResourceNotFound);
        }

        let operation =
            ProvisioningOperation::new_delete(command.resource_name().clone(), Utc::now());
        let operation_id = operation.id().clone();
        self.registry.admit(operation).await?;

        match self.cloud_facade.begin_delete(command.resource_name()).await {
            Ok(handle) => self.accept_and_poll(&operation_id, handle).await,
            Err(error) => {
                tracing::error!(
                    resource_name = command.resource_name().value(),
                    %error,
                    "account deletion rejected upstream"
                );
                self.reject_at_initiation(&operation_id, error.to_string())
                    .await
            }
        }
    }
}
