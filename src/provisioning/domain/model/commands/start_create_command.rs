use crate::provisioning::domain::model::{
    enums::{api_kind::ApiKind, provisioning_domain_error::ProvisioningDomainError},
    value_objects::{resource_location::ResourceLocation, resource_name::ResourceName},
};

#[derive(Clone, Debug)]
pub struct StartCreateCommand {
    resource_name: ResourceName,
    location: ResourceLocation,
    api_kind: ApiKind,
}

impl StartCreateCommand {
    pub fn new(
        resource_name: String,
        location: String,
        api_kind: String,
    ) -> Result<Self, ProvisioningDomainError> {
        Ok(Self {
            resource_name: ResourceName::new(resource_name)?,
            location: ResourceLocation::new(location)?,
            api_kind: ApiKind::parse(&api_kind)?,
        })
    }

    pub fn resource_name(&self) -> &ResourceName {
        &self.resource_name
    }

    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    pub fn api_kind(&self) -> ApiKind {
        self.api_kind
    }
}
