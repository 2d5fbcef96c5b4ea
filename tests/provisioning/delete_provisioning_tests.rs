use cosmos_provisioner_api::provisioning::{
    domain::{
        model::enums::{
            operation_kind::OperationKind, operation_state::OperationState,
            provisioning_domain_error::ProvisioningDomainError,
        },
        services::provisioning_command_service::ProvisioningCommandService,
    },
    infrastructure::registry::operation_registry::OperationRegistry,
};

use crate::support::{
    FakeCloudAccountFacade, FakeNotificationFacade, create_harness, delete_command,
    operation_with_state, probe_in_flight, probe_succeeded, wait_for_settled,
};

#[tokio::test]
async fn start_delete_returns_running_operation_and_settles_succeeded() {
    let cloud_facade =
        FakeCloudAccountFacade::new().with_probes(vec![probe_in_flight(), probe_succeeded()]);
    let harness = create_harness(vec![], cloud_facade, FakeNotificationFacade::new()).await;

    let operation = harness
        .command_service
        .start_delete(delete_command())
        .await
        .expect("delete should be admitted");

    assert_eq!(operation.kind(), OperationKind::Delete);
    assert_eq!(operation.state(), OperationState::Running);

    let settled = wait_for_settled(&harness, operation.id()).await;
    assert_eq!(settled.state(), OperationState::Succeeded);
    assert!(settled.notified());

    let deliveries = harness.notification_facade.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert!(deliveries[0].1.subject.contains("deleted"));
    assert!(deliveries[0].1.subject.contains("orders-db"));
    assert_eq!(harness.cloud_facade.begin_calls(), (0, 1));
}

#[tokio::test]
async fn start_delete_returns_not_found_when_account_is_missing() {
    let cloud_facade = FakeCloudAccountFacade::new().without_account();
    let harness = create_harness(vec![], cloud_facade, FakeNotificationFacade::new()).await;

    let result = harness.command_service.start_delete(delete_command()).await;

    assert!(matches!(
        result,
        Err(ProvisioningDomainError::ResourceNotFound)
    ));
    assert!(
        harness
            .registry
            .list()
            .await
            .expect("registry read")
            .is_empty()
    );
    assert_eq!(harness.cloud_facade.begin_calls(), (0, 0));
    assert!(harness.notification_facade.deliveries().is_empty());
}

#[tokio::test]
async fn start_delete_rejects_duplicate_in_flight_operation() {
    let harness = create_harness(
        vec![operation_with_state(
            OperationKind::Delete,
            OperationState::Running,
        )],
        FakeCloudAccountFacade::new(),
        FakeNotificationFacade::new(),
    )
    .await;

    let result = harness.command_service.start_delete(delete_command()).await;

    assert!(matches!(
        result,
        Err(ProvisioningDomainError::OperationConflict)
    ));
    assert_eq!(harness.cloud_facade.begin_calls(), (0, 0));
}

#[tokio::test]
async fn start_delete_surfaces_upstream_error_from_existence_check() {
    let cloud_facade = FakeCloudAccountFacade::new().fail_exists_checks();
    let harness = create_harness(vec![], cloud_facade, FakeNotificationFacade::new()).await;

    let result = harness.command_service.start_delete(delete_command()).await;

    assert!(matches!(result, Err(ProvisioningDomainError::Upstream(_))));
    assert!(
        harness
            .registry
            .list()
            .await
            .expect("registry read")
            .is_empty()
    );
}

#[tokio::test]
async fn start_delete_still_returns_operation_when_cloud_rejects() {
    let cloud_facade = FakeCloudAccountFacade::new().reject_deletes();
    let harness = create_harness(vec![], cloud_facade, FakeNotificationFacade::new()).await;

    let operation = harness
        .command_service
        .start_delete(delete_command())
        .await
        .expect("caller still gets a queryable operation");

    assert_eq!(operation.state(), OperationState::Failed);
    assert!(
        operation
            .error_detail()
            .expect("error detail populated")
            .contains("delete rejected")
    );

    let deliveries = harness.notification_facade.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert!(deliveries[0].1.subject.contains("deletion failed"));
}
