pub mod provisioning_operation;
