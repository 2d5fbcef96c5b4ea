use crate::provisioning::domain::model::enums::provisioning_domain_error::ProvisioningDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApiKind {
    Sql,
    Mongo,
}

impl ApiKind {
    pub fn parse(value: &str) -> Result<Self, ProvisioningDomainError> {
        match value.trim().to_lowercase().as_str() {
            "sql" => Ok(Self::Sql),
            "mongo" => Ok(Self::Mongo),
            _ => Err(ProvisioningDomainError::InvalidApiKind),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::Mongo => "mongo",
        }
    }
}
