use chrono::Utc;
use cosmos_provisioner_api::provisioning::{
    domain::model::{
        commands::{
            start_create_command::StartCreateCommand, start_delete_command::StartDeleteCommand,
        },
        entities::provisioning_operation::ProvisioningOperation,
        enums::{
            api_kind::ApiKind, operation_kind::OperationKind, operation_state::OperationState,
        },
        value_objects::{
            operation_id::OperationId, resource_location::ResourceLocation,
            resource_name::ResourceName,
        },
    },
    interfaces::acl::cloud_account_facade::CloudOperationProbe,
};

pub fn create_command() -> StartCreateCommand {
    StartCreateCommand::new(
        "orders-db".to_string(),
        "East US".to_string(),
        "sql".to_string(),
    )
    .expect("valid create command")
}

pub fn delete_command() -> StartDeleteCommand {
    StartDeleteCommand::new("orders-db".to_string()).expect("valid delete command")
}

pub fn probe_in_flight() -> CloudOperationProbe {
    CloudOperationProbe {
        done: false,
        succeeded: false,
        error: None,
    }
}

pub fn probe_succeeded() -> CloudOperationProbe {
    CloudOperationProbe {
        done: true,
        succeeded: true,
        error: None,
    }
}

pub fn probe_failed(error: &str) -> CloudOperationProbe {
    CloudOperationProbe {
        done: true,
        succeeded: false,
        error: Some(error.to_string()),
    }
}

pub fn operation_with_state(
    kind: OperationKind,
    state: OperationState,
) -> ProvisioningOperation {
    let now = Utc::now();
    ProvisioningOperation::restore(
        OperationId::new_random(),
        kind,
        ResourceName::new("orders-db".to_string()).expect("valid name"),
        Some(ResourceLocation::new("East US".to_string()).expect("valid location")),
        Some(ApiKind::Sql),
        state,
        None,
        state.is_terminal(),
        now,
        now,
    )
}
