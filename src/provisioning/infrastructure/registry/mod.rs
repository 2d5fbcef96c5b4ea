pub mod in_memory;
pub mod operation_registry;
