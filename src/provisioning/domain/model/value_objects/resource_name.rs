use regex::Regex;

use crate::provisioning::domain::model::enums::provisioning_domain_error::ProvisioningDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(value: String) -> Result<Self, ProvisioningDomainError> {
        let normalized = value.trim().to_lowercase();
        let regex = Regex::new(r"^[a-z0-9][a-z0-9-]{1,42}[a-z0-9]$").expect("valid regex");

        if !regex.is_match(&normalized) {
            return Err(ProvisioningDomainError::InvalidResourceName);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
