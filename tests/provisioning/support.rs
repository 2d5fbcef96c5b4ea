#[path = "support/fixtures.rs"]
mod fixtures;

pub use fakes::{FakeCloudAccountFacade, FakeNotificationFacade};
pub use fixtures::{
    create_command, delete_command, operation_with_state, probe_failed, probe_in_flight,
    probe_succeeded,
};
pub use harness::{RECIPIENT, create_harness, wait_for_settled};
