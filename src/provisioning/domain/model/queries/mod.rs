pub mod describe_resource_query;
pub mod list_operations_query;
pub mod operation_status_query;
