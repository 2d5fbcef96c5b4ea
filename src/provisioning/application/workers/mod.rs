pub mod operation_poll_worker;
