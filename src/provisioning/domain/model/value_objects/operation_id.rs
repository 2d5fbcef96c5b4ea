use uuid::Uuid;

use crate::provisioning::domain::model::enums::provisioning_domain_error::ProvisioningDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OperationId(Uuid);

impl OperationId {
    pub fn new(value: String) -> Result<Self, ProvisioningDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| ProvisioningDomainError::InvalidOperationId)?;
        Ok(Self(parsed))
    }

    pub fn new_random() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}
