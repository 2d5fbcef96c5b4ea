pub mod provisioning_command_service;
pub mod provisioning_query_service;
