use std::sync::Arc;

use axum::Router;

use crate::{
    azure_gateway::application::acl::{
        arm_cosmos_facade_impl::ArmCosmosFacadeImpl,
        entra_token_provider_impl::EntraTokenProviderImpl,
    },
    config::app_config::AppConfig,
    notifications::application::acl::smtp_notification_facade_impl::SmtpNotificationFacadeImpl,
    provisioning::{
        application::{
            command_services::provisioning_command_service_impl::ProvisioningCommandServiceImpl,
            query_services::provisioning_query_service_impl::ProvisioningQueryServiceImpl,
            workers::operation_poll_worker::PollSettings,
        },
        infrastructure::registry::{
            in_memory::in_memory_operation_registry_impl::InMemoryOperationRegistryImpl,
            operation_registry::OperationRegistry,
        },
        interfaces::{
            acl::{cloud_account_facade::CloudAccountFacade, notification_facade::NotificationFacade},
            rest::controllers::provisioning_rest_controller::{
                ProvisioningRestControllerState, router,
            },
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_provisioning_router(config: &AppConfig) -> Result<Router, String> {
    let registry: Arc<dyn OperationRegistry> = Arc::new(InMemoryOperationRegistryImpl::new());

    let token_provider = Arc::new(EntraTokenProviderImpl::new(
        config.azure_tenant_id.clone(),
        config.azure_client_id.clone(),
        config.azure_client_secret.clone(),
        &config.arm_endpoint,
    ));
    let cloud_facade: Arc<dyn CloudAccountFacade> = Arc::new(ArmCosmosFacadeImpl::new(
        config.arm_endpoint.clone(),
        config.azure_subscription_id.clone(),
        config.azure_resource_group.clone(),
        token_provider,
    ));

    let notification_facade: Arc<dyn NotificationFacade> = Arc::new(
        SmtpNotificationFacadeImpl::new(
            &config.smtp_host,
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        )
        .map_err(|e| e.to_string())?,
    );

    let poll_settings = PollSettings {
        interval: config.poll_interval(),
        max_wait: config.poll_timeout(),
    };

    let command_service = Arc::new(ProvisioningCommandServiceImpl::new(
        registry.clone(),
        cloud_facade.clone(),
        notification_facade,
        poll_settings,
        config.notification_recipient.clone(),
    ));
    let query_service = Arc::new(ProvisioningQueryServiceImpl::new(registry, cloud_facade));

    Ok(router(ProvisioningRestControllerState {
        command_service,
        query_service,
    }))
}
