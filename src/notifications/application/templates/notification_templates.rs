//! Outcome email templates. Subjects always carry the account name and
//! the outcome so mailbox filters can key on them.

use crate::provisioning::{
    domain::model::{
        enums::{operation_kind::OperationKind, operation_state::OperationState},
        events::operation_completed_event::OperationCompletedEvent,
    },
    interfaces::acl::notification_facade::NotificationMessage,
};

pub fn outcome_message(event: &OperationCompletedEvent) -> NotificationMessage {
    let succeeded = event.outcome == OperationState::Succeeded;
    match (event.kind, succeeded) {
        (OperationKind::Create, true) => provisioning_succeeded(event),
        (OperationKind::Create, false) => provisioning_failed(event),
        (OperationKind::Delete, true) => deletion_succeeded(event),
        (OperationKind::Delete, false) => deletion_failed(event),
    }
}

fn provisioning_succeeded(event: &OperationCompletedEvent) -> NotificationMessage {
    let name = event.resource_name.value();
    let api_kind = event
        .api_kind
        .map(|kind| kind.as_str())
        .unwrap_or("unknown");
    let location = event
        .location
        .as_ref()
        .map(|location| location.value())
        .unwrap_or("unknown");

    NotificationMessage {
        subject: format!("Database account created: {name}"),
        body: format!(
            "Your managed database account has been provisioned.\n\
             \n\
             Account details:\n\
             - Name: {name}\n\
             - API kind: {api_kind}\n\
             - Location: {location}\n\
             - Completed at: {completed_at} UTC\n\
             \n\
             Next steps:\n\
             1. Create databases and containers\n\
             2. Configure access policies\n\
             3. Connect using the account's connection strings\n",
            completed_at = event.occurred_at.format("%Y-%m-%d %H:%M"),
        ),
    }
}

fn provisioning_failed(event: &OperationCompletedEvent) -> NotificationMessage {
    let name = event.resource_name.value();
    let error = event.error_detail.as_deref().unwrap_or("unknown error");

    NotificationMessage {
        subject: format!("Database account provisioning failed: {name}"),
        body: format!(
            "Provisioning of database account {name} failed.\n\
             \n\
             Error: {error}\n\
             \n\
             Required action:\n\
             1. Check the cloud portal for the resource status\n\
             2. Review the service logs for details\n\
             3. Verify the account name is still available\n\
             4. Verify the selected location currently accepts new accounts\n",
        ),
    }
}

fn deletion_succeeded(event: &OperationCompletedEvent) -> NotificationMessage {
    let name = event.resource_name.value();

    NotificationMessage {
        subject: format!("Database account deleted: {name}"),
        body: format!("Your managed database account {name} has been deleted.\n"),
    }
}

fn deletion_failed(event: &OperationCompletedEvent) -> NotificationMessage {
    let name = event.resource_name.value();
    let error = event.error_detail.as_deref().unwrap_or("unknown error");

    NotificationMessage {
        subject: format!("Database account deletion failed: {name}"),
        body: format!("Failed to delete database account {name}. Error: {error}\n"),
    }
}
