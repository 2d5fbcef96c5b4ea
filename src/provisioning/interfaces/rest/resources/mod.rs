pub mod create_resource_request_resource;
pub mod error_response_resource;
pub mod operation_accepted_resource;
pub mod operation_status_resource;
pub mod resource_descriptor_resource;
