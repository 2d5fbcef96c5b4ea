pub mod operation_completed_event;
