use std::time::Duration;

use cosmos_provisioner_api::provisioning::domain::{
    model::{
        enums::{
            operation_kind::OperationKind, operation_state::OperationState,
            provisioning_domain_error::ProvisioningDomainError,
        },
        queries::{
            list_operations_query::ListOperationsQuery,
            operation_status_query::OperationStatusQuery,
        },
    },
    services::{
        provisioning_command_service::ProvisioningCommandService,
        provisioning_query_service::ProvisioningQueryService,
    },
};
use uuid::Uuid;

use crate::support::{
    FakeCloudAccountFacade, FakeNotificationFacade, create_command, create_harness,
    operation_with_state, probe_in_flight, probe_succeeded,
};

fn rank(state: OperationState) -> u8 {
    match state {
        OperationState::Pending => 0,
        OperationState::Running => 1,
        OperationState::Succeeded | OperationState::Failed => 2,
    }
}

#[tokio::test]
async fn query_status_returns_not_found_for_unknown_id() {
    let harness = create_harness(
        vec![],
        FakeCloudAccountFacade::new(),
        FakeNotificationFacade::new(),
    )
    .await;

    let query =
        OperationStatusQuery::new(Uuid::now_v7().to_string()).expect("well-formed id");
    let result = harness.query_service.handle_status(query).await;

    assert!(matches!(
        result,
        Err(ProvisioningDomainError::OperationNotFound)
    ));
}

#[tokio::test]
async fn query_status_rejects_malformed_operation_id() {
    let result = OperationStatusQuery::new("not-an-operation-id".to_string());

    assert!(matches!(
        result,
        Err(ProvisioningDomainError::InvalidOperationId)
    ));
}

#[tokio::test]
async fn observed_states_never_move_backward() {
    let cloud_facade = FakeCloudAccountFacade::new().with_probes(vec![
        probe_in_flight(),
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

    let mut observed = vec![operation.state()];
    for _ in 0..300 {
        let query = OperationStatusQuery::new(operation.id().value().to_string())
            .expect("well-formed id");
        let current = harness
            .query_service
            .handle_status(query)
            .await
            .expect("operation stays queryable");
        observed.push(current.state());
        if current.state().is_terminal() && current.notified() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(3)).await;
    }

    assert!(observed.last().expect("at least one sample").is_terminal());
    for window in observed.windows(2) {
        assert!(
            rank(window[0]) <= rank(window[1]),
            "state moved backward: {:?}",
            observed
        );
    }
}

#[tokio::test]
async fn list_operations_excludes_finished_by_default() {
    let harness = create_harness(
        vec![operation_with_state(
            OperationKind::Create,
            OperationState::Succeeded,
        )],
        FakeCloudAccountFacade::new(),
        FakeNotificationFacade::new(),
    )
    .await;

    let operation = harness
        .command_service
        .start_create(create_command())
        .await
        .expect("create should be admitted");

    let in_flight = harness
        .query_service
        .handle_list(ListOperationsQuery::new(false))
        .await
        .expect("list should succeed");
    assert_eq!(in_flight.len(), 1);
    assert_eq!(in_flight[0].id(), operation.id());

    let all = harness
        .query_service
        .handle_list(ListOperationsQuery::new(true))
        .await
        .expect("list should succeed");
    assert_eq!(all.len(), 2);
}
