use async_trait::async_trait;

use crate::provisioning::{
    domain::model::{
        entities::provisioning_operation::ProvisioningOperation,
        enums::provisioning_domain_error::ProvisioningDomainError,
        queries::{
            describe_resource_query::DescribeResourceQuery,
            list_operations_query::ListOperationsQuery,
            operation_status_query::OperationStatusQuery,
        },
    },
    interfaces::acl::cloud_account_facade::CloudAccountDescriptor,
};

#[async_trait]
pub trait ProvisioningQueryService: Send + Sync {
    async fn handle_status(
        &self,
        query: OperationStatusQuery,
    ) -> Result<ProvisioningOperation, ProvisioningDomainError>;

    async fn handle_list(
        &self,
        query: ListOperationsQuery,
    ) -> Result<Vec<ProvisioningOperation>, ProvisioningDomainError>;

    async fn handle_describe(
        &self,
        query: DescribeResourceQuery,
    ) -> Result<CloudAccountDescriptor, ProvisioningDomainError>;
}
