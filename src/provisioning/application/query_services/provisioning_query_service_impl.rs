use std::sync::Arc;

use async_trait::async_trait;

use crate::provisioning::{
    domain::{
        model::{
            entities::provisioning_operation::ProvisioningOperation,
            enums::provisioning_domain_error::ProvisioningDomainError,
            queries::{
                describe_resource_query::DescribeResourceQuery,
                list_operations_query::ListOperationsQuery,
                operation_status_query::OperationStatusQuery,
            },
        },
        services::provisioning_query_service::ProvisioningQueryService,
    },
    infrastructure::registry::operation_registry::OperationRegistry,
    interfaces::acl::cloud_account_facade::{CloudAccountDescriptor, CloudAccountFacade},
};

pub struct ProvisioningQueryServiceImpl {
    registry: Arc<dyn OperationRegistry>,
    cloud_facade: Arc<dyn CloudAccountFacade>,
}

impl ProvisioningQueryServiceImpl {
    pub fn new(
        registry: Arc<dyn OperationRegistry>,
        cloud_facade: Arc<dyn CloudAccountFacade>,
    ) -> Self {
        Self {
            registry,
            cloud_facade,
        }
    }
}

#[async_trait]
impl ProvisioningQueryService for ProvisioningQueryServiceImpl {
    async fn handle_status(
        &self,
        query: OperationStatusQuery,
    ) -> Result<ProvisioningOperation, ProvisioningDomainError> {
        self.registry
            .find_by_id(query.operation_id())
            .await?
            .ok_or(ProvisioningDomainError::OperationNotFound)
    }

    async fn handle_list(
        &self,
        query: ListOperationsQuery,
    ) -> Result<Vec<ProvisioningOperation>, ProvisioningDomainError> {
        let operations = self.registry.list().await?;
        if query.include_finished() {
            return Ok(operations);
        }
        Ok(operations
            .into_iter()
            .filter(|operation| !operation.state().is_terminal())
            .collect())
    }

    async fn handle_describe(
        &self,
        query: DescribeResourceQuery,
    ) -> Result<CloudAccountDescriptor, ProvisioningDomainError> {
        self.cloud_facade
            .fetch_account(query.resource_name())
            .await
            .map_err(|error| ProvisioningDomainError::Upstream(error.to_string()))?
            .ok_or(ProvisioningDomainError::ResourceNotFound)
    }
}
