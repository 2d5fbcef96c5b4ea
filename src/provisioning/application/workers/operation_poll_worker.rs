use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::time::{self, MissedTickBehavior};

use crate::{
    notifications::application::templates::notification_templates,
    provisioning::{
        domain::model::{
            entities::provisioning_operation::ProvisioningOperation,
            enums::provisioning_domain_error::ProvisioningDomainError,
            events::operation_completed_event::OperationCompletedEvent,
            value_objects::operation_id::OperationId,
        },
        infrastructure::registry::operation_registry::OperationRegistry,
        interfaces::acl::{
            cloud_account_facade::{CloudAccountFacade, CloudOperationHandle},
            notification_facade::NotificationFacade,
        },
    },
};

#[derive(Clone, Debug)]
pub struct PollSettings {
    pub interval: Duration,
    pub max_wait: Duration,
}

#[derive(Clone, Debug)]
pub enum OperationOutcome {
    Succeeded,
    Failed(String),
}

/// Records an operation's terminal state and fires the outcome
/// notification. Notification is best-effort: a transport failure is
/// logged, the state transition stands and the operation still counts
/// as notified.
pub async fn finalize_operation(
    registry: &Arc<dyn OperationRegistry>,
    notification_facade: &Arc<dyn NotificationFacade>,
    recipient: &str,
    operation_id: &OperationId,
    outcome: OperationOutcome,
) -> Result<ProvisioningOperation, ProvisioningDomainError> {
    let mut operation = registry
        .find_by_id(operation_id)
        .await?
        .ok_or(ProvisioningDomainError::OperationNotFound)?;

    match outcome {
        OperationOutcome::Succeeded => operation.mark_succeeded(Utc::now())?,
        OperationOutcome::Failed(detail) => operation.mark_failed(detail, Utc::now())?,
    }
    registry.save(&operation).await?;

    let event = OperationCompletedEvent::from_operation(&operation, Utc::now());
    let message = notification_templates::outcome_message(&event);
    if let Err(error) = notification_facade.notify(recipient, &message).await {
        tracing::warn!(
            resource_name = event.resource_name.value(),
            %error,
            "outcome notification failed"
        );
    }

    operation.mark_notified(Utc::now())?;
    registry.save(&operation).await?;

    Ok(operation)
}

/// Background task driving one in-flight operation to its terminal state.
/// One worker is spawned per accepted operation; it probes the provider at
/// a fixed interval and gives up after `max_wait`.
pub struct OperationPollWorker {
    registry: Arc<dyn OperationRegistry>,
    cloud_facade: Arc<dyn CloudAccountFacade>,
    notification_facade: Arc<dyn NotificationFacade>,
    settings: PollSettings,
    recipient: String,
}

impl OperationPollWorker {
    pub fn new(
        registry: Arc<dyn OperationRegistry>,
        cloud_facade: Arc<dyn CloudAccountFacade>,
        notification_facade: Arc<dyn NotificationFacade>,
        settings: PollSettings,
        recipient: String,
    ) -> Self {
        Self {
            registry,
            cloud_facade,
            notification_facade,
            settings,
            recipient,
        }
    }

    pub fn spawn(
        self,
        operation_id: OperationId,
        handle: CloudOperationHandle,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.run(operation_id, handle).await })
    }

    async fn run(self, operation_id: OperationId, handle: CloudOperationHandle) {
        let started = Instant::now();
        let mut ticker = time::interval(self.settings.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick resolves immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            if started.elapsed() >= self.settings.max_wait {
                self.finish(&operation_id, OperationOutcome::Failed("timeout".to_string()))
                    .await;
                return;
            }

            match self.cloud_facade.probe_operation(&handle).await {
                Ok(probe) if probe.done => {
                    let outcome = if probe.succeeded {
                        OperationOutcome::Succeeded
                    } else {
                        OperationOutcome::Failed(
                            probe
                                .error
                                .unwrap_or_else(|| "provisioning failed upstream".to_string()),
                        )
                    };
                    self.finish(&operation_id, outcome).await;
                    return;
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::error!(
                        operation_id = %operation_id.value(),
                        %error,
                        "operation probe failed"
                    );
                    self.finish(&operation_id, OperationOutcome::Failed(error.to_string()))
                        .await;
                    return;
                }
            }
        }
    }

    async fn finish(&self, operation_id: &OperationId, outcome: OperationOutcome) {
        if let Err(error) = finalize_operation(
            &self.registry,
            &self.notification_facade,
            &self.recipient,
            operation_id,
            outcome,
        )
        .await
        {
            tracing::error!(
                operation_id = %operation_id.value(),
                %error,
                "failed to record terminal operation state"
            );
        }
    }
}
