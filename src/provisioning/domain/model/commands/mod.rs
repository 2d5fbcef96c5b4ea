pub mod start_create_command;
pub mod start_delete_command;
