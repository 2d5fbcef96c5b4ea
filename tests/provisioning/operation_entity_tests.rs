use chrono::Utc;
use cosmos_provisioner_api::provisioning::domain::model::{
    entities::provisioning_operation::ProvisioningOperation,
    enums::{
        api_kind::ApiKind, operation_state::OperationState,
        provisioning_domain_error::ProvisioningDomainError,
    },
    value_objects::{resource_location::ResourceLocation, resource_name::ResourceName},
};

fn new_create_operation() -> ProvisioningOperation {
    ProvisioningOperation::new_create(
        ResourceName::new("orders-db".to_string()).expect("valid name"),
        ResourceLocation::new("East US".to_string()).expect("valid location"),
        ApiKind::Sql,
        Utc::now(),
    )
}

#[test]
fn new_operations_start_pending_and_unnotified() {
    let operation = new_create_operation();

    assert_eq!(operation.state(), OperationState::Pending);
    assert!(!operation.notified());
    assert_eq!(operation.error_detail(), None);
    assert_eq!(operation.created_at(), operation.updated_at());
}

#[test]
fn mark_running_is_only_allowed_from_pending() {
    let mut operation = new_create_operation();

    assert!(operation.mark_running(Utc::now()).is_ok());
    assert!(matches!(
        operation.mark_running(Utc::now()),
        Err(ProvisioningDomainError::InvalidStateTransition)
    ));
}

#[test]
fn pending_operations_may_fail_directly() {
    let mut operation = new_create_operation();

    assert!(
        operation
            .mark_failed("rejected upstream".to_string(), Utc::now())
            .is_ok()
    );
    assert_eq!(operation.state(), OperationState::Failed);
    assert_eq!(operation.error_detail(), Some("rejected upstream"));
}

#[test]
fn terminal_states_accept_no_further_transitions() {
    let mut operation = new_create_operation();
    operation.mark_running(Utc::now()).expect("running");
    operation
        .mark_failed("boom".to_string(), Utc::now())
        .expect("failed");

    assert!(matches!(
        operation.mark_succeeded(Utc::now()),
        Err(ProvisioningDomainError::InvalidStateTransition)
    ));
    assert!(matches!(
        operation.mark_failed("again".to_string(), Utc::now()),
        Err(ProvisioningDomainError::InvalidStateTransition)
    ));
    assert_eq!(operation.state(), OperationState::Failed);
    assert_eq!(operation.error_detail(), Some("boom"));
}

#[test]
fn mark_notified_requires_a_terminal_state_and_flips_once() {
    let mut operation = new_create_operation();
    operation.mark_running(Utc::now()).expect("running");

    assert!(matches!(
        operation.mark_notified(Utc::now()),
        Err(ProvisioningDomainError::InvalidStateTransition)
    ));

    operation.mark_succeeded(Utc::now()).expect("succeeded");
    assert!(operation.mark_notified(Utc::now()).is_ok());
    assert!(operation.notified());

    assert!(matches!(
        operation.mark_notified(Utc::now()),
        Err(ProvisioningDomainError::InvalidStateTransition)
    ));
}
