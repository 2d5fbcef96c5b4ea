use crate::provisioning::domain::model::{
    enums::provisioning_domain_error::ProvisioningDomainError,
    value_objects::operation_id::OperationId,
};

#[derive(Clone, Debug)]
pub struct OperationStatusQuery {
    operation_id: OperationId,
}

impl OperationStatusQuery {
    pub fn new(operation_id: String) -> Result<Self, ProvisioningDomainError> {
        Ok(Self {
            operation_id: OperationId::new(operation_id)?,
        })
    }

    pub fn operation_id(&self) -> &OperationId {
        &self.operation_id
    }
}
