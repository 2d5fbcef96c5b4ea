use chrono::{DateTime, Utc};

use crate::provisioning::domain::model::{
    enums::{
        api_kind::ApiKind, operation_kind::OperationKind, operation_state::OperationState,
        provisioning_domain_error::ProvisioningDomainError,
    },
    value_objects::{
        operation_id::OperationId, resource_location::ResourceLocation,
        resource_name::ResourceName,
    },
};

/// One tracked create/delete request against the cloud provider.
///
/// States only move forward: Pending -> Running -> Succeeded | Failed,
/// with the shortcut Pending -> Failed when the provider rejects the
/// request outright. Nothing leaves a terminal state.
#[derive(Clone, Debug)]
pub struct ProvisioningOperation {
    id: OperationId,
    kind: OperationKind,
    resource_name: ResourceName,
    location: Option<ResourceLocation>,
    api_kind: Option<ApiKind>,
    state: OperationState,
    error_detail: Option<String>,
    notified: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProvisioningOperation {
    pub fn new_create(
        resource_name: ResourceName,
        location: ResourceLocation,
        api_kind: ApiKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: OperationId::new_random(),
            kind: OperationKind::Create,
            resource_name,
            location: Some(location),
            api_kind: Some(api_kind),
            state: OperationState::Pending,
            error_detail: None,
            notified: false,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn new_delete(resource_name: ResourceName, created_at: DateTime<Utc>) -> Self {
        Self {
            id: OperationId::new_random(),
            kind: OperationKind::Delete,
            resource_name,
            location: None,
            api_kind: None,
            state: OperationState::Pending,
            error_detail: None,
            notified: false,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn restore(
        id: OperationId,
        kind: OperationKind,
        resource_name: ResourceName,
        location: Option<ResourceLocation>,
        api_kind: Option<ApiKind>,
        state: OperationState,
        error_detail: Option<String>,
        notified: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            resource_name,
            location,
            api_kind,
            state,
            error_detail,
            notified,
            created_at,
            updated_at,
        }
    }

    pub fn mark_running(&mut self, now: DateTime<Utc>) -> Result<(), ProvisioningDomainError> {
        if self.state != OperationState::Pending {
            return Err(ProvisioningDomainError::InvalidStateTransition);
        }
        self.state = OperationState::Running;
        self.updated_at = now;
        Ok(())
    }

    pub fn mark_succeeded(&mut self, now: DateTime<Utc>) -> Result<(), ProvisioningDomainError> {
        if self.state.is_terminal() {
            return Err(ProvisioningDomainError::InvalidStateTransition);
        }
        self.state = OperationState::Succeeded;
        self.error_detail = None;
        self.updated_at = now;
        Ok(())
    }

    pub fn mark_failed(
        &mut self,
        error_detail: String,
        now: DateTime<Utc>,
    ) -> Result<(), ProvisioningDomainError> {
        if self.state.is_terminal() {
            return Err(ProvisioningDomainError::InvalidStateTransition);
        }
        self.state = OperationState::Failed;
        self.error_detail = Some(error_detail);
        self.updated_at = now;
        Ok(())
    }

    pub fn mark_notified(&mut self, now: DateTime<Utc>) -> Result<(), ProvisioningDomainError> {
        if !self.state.is_terminal() || self.notified {
            return Err(ProvisioningDomainError::InvalidStateTransition);
        }
        self.notified = true;
        self.updated_at = now;
        Ok(())
    }

    pub fn id(&self) -> &OperationId {
        &self.id
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn resource_name(&self) -> &ResourceName {
        &self.resource_name
    }

    pub fn location(&self) -> Option<&ResourceLocation> {
        self.location.as_ref()
    }

    pub fn api_kind(&self) -> Option<ApiKind> {
        self.api_kind
    }

    pub fn state(&self) -> OperationState {
        self.state
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn notified(&self) -> bool {
        self.notified
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
