pub mod operation_id;
pub mod resource_location;
pub mod resource_name;
