use crate::provisioning::domain::model::{
    enums::provisioning_domain_error::ProvisioningDomainError,
    value_objects::resource_name::ResourceName,
};

#[derive(Clone, Debug)]
pub struct DescribeResourceQuery {
    resource_name: ResourceName,
}

impl DescribeResourceQuery {
    pub fn new(resource_name: String) -> Result<Self, ProvisioningDomainError> {
        Ok(Self {
            resource_name: ResourceName::new(resource_name)?,
        })
    }

    pub fn resource_name(&self) -> &ResourceName {
        &self.resource_name
    }
}
