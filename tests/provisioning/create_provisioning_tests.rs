use cosmos_provisioner_api::provisioning::domain::{
    model::enums::{
        operation_kind::OperationKind, operation_state::OperationState,
        provisioning_domain_error::ProvisioningDomainError,
    },
    services::provisioning_command_service::ProvisioningCommandService,
};

use crate::support::{
    FakeCloudAccountFacade, FakeNotificationFacade, RECIPIENT, create_command, create_harness,
    operation_with_state, probe_failed, probe_in_flight, probe_succeeded, wait_for_settled,
};

#[tokio::test]
async fn start_create_returns_running_operation_and_settles_succeeded() {
    let cloud_facade = FakeCloudAccountFacade::new().with_probes(vec![
        probe_in_flight(),
        probe_in_flight(),
        probe_succeeded(),
    ]);
    let harness = create_harness(vec![], cloud_facade, FakeNotificationFacade::new()).await;

    let operation = harness
        .command_service
        .start_create(create_command())
        .await
        .expect("create should be admitted");

    assert_eq!(operation.kind(), OperationKind::Create);
    assert_eq!(operation.state(), OperationState::Running);
    assert!(!operation.notified());

    let settled = wait_for_settled(&harness, operation.id()).await;
    assert_eq!(settled.state(), OperationState::Succeeded);
    assert_eq!(settled.error_detail(), None);
    assert!(settled.notified());

    let deliveries = harness.notification_facade.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].0, RECIPIENT);
    assert!(deliveries[0].1.subject.contains("orders-db"));
    assert!(deliveries[0].1.subject.contains("created"));
    assert_eq!(harness.cloud_facade.begin_calls(), (1, 0));
}

#[tokio::test]
async fn start_create_settles_failed_when_provider_reports_failure() {
    let cloud_facade = FakeCloudAccountFacade::new()
        .with_probes(vec![probe_in_flight(), probe_failed("capacity exhausted")]);
    let harness = create_harness(vec![], cloud_facade, FakeNotificationFacade::new()).await;

    let operation = harness
        .command_service
        .start_create(create_command())
        .await
        .expect("create should be admitted");

    let settled = wait_for_settled(&harness, operation.id()).await;
    assert_eq!(settled.state(), OperationState::Failed);
    assert_eq!(settled.error_detail(), Some("capacity exhausted"));

    let deliveries = harness.notification_facade.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert!(deliveries[0].1.subject.contains("failed"));
    assert!(deliveries[0].1.body.contains("capacity exhausted"));
}

#[tokio::test]
async fn start_create_rejects_duplicate_in_flight_operation() {
    let harness = create_harness(
        vec![operation_with_state(
            OperationKind::Create,
            OperationState::Running,
        )],
        FakeCloudAccountFacade::new(),
        FakeNotificationFacade::new(),
    )
    .await;

    let result = harness.command_service.start_create(create_command()).await;

    assert!(matches!(
        result,
        Err(ProvisioningDomainError::OperationConflict)
    ));
    assert_eq!(harness.cloud_facade.begin_calls(), (0, 0));
    assert!(harness.notification_facade.deliveries().is_empty());
}

#[tokio::test]
async fn racing_creates_for_one_name_admit_exactly_one() {
    let harness = create_harness(
        vec![],
        FakeCloudAccountFacade::new(),
        FakeNotificationFacade::new(),
    )
    .await;

    let (first, second) = tokio::join!(
        harness.command_service.start_create(create_command()),
        harness.command_service.start_create(create_command()),
    );

    let admitted = [&first, &second]
        .iter()
        .filter(|result| result.is_ok())
        .count();
    assert_eq!(admitted, 1);
    assert!(
        [first, second]
            .into_iter()
            .any(|result| matches!(result, Err(ProvisioningDomainError::OperationConflict)))
    );
    assert_eq!(harness.cloud_facade.begin_calls(), (1, 0));
}

#[tokio::test]
async fn start_create_still_returns_operation_when_cloud_rejects() {
    let cloud_facade = FakeCloudAccountFacade::new().reject_creates();
    let harness = create_harness(vec![], cloud_facade, FakeNotificationFacade::new()).await;

    let operation = harness
        .command_service
        .start_create(create_command())
        .await
        .expect("caller still gets a queryable operation");

    assert_eq!(operation.state(), OperationState::Failed);
    assert!(
        operation
            .error_detail()
            .expect("error detail populated")
            .contains("create rejected")
    );
    assert!(operation.notified());

    let deliveries = harness.notification_facade.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert!(deliveries[0].1.subject.contains("failed"));
}

#[tokio::test]
async fn notifier_failure_never_rolls_back_terminal_state() {
    let cloud_facade = FakeCloudAccountFacade::new().with_probes(vec![probe_succeeded()]);
    let harness = create_harness(
        vec![],
        cloud_facade,
        FakeNotificationFacade::new().fail_sends(),
    )
    .await;

    let operation = harness
        .command_service
        .start_create(create_command())
        .await
        .expect("create should be admitted");

    let settled = wait_for_settled(&harness, operation.id()).await;
    assert_eq!(settled.state(), OperationState::Succeeded);
    assert!(settled.notified());
    assert_eq!(harness.notification_facade.deliveries().len(), 1);
}
