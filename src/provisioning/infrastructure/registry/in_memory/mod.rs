pub mod in_memory_operation_registry_impl;
