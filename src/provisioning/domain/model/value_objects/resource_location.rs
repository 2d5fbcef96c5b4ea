use regex::Regex;

use crate::provisioning::domain::model::enums::provisioning_domain_error::ProvisioningDomainError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceLocation(String);

impl ResourceLocation {
    pub fn new(value: String) -> Result<Self, ProvisioningDomainError> {
        let normalized = value.trim().to_string();
        let regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9 ]{1,63}$").expect("valid regex");

        if !regex.is_match(&normalized) {
            return Err(ProvisioningDomainError::InvalidLocation);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
