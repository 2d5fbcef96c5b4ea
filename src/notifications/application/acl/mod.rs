pub mod smtp_notification_facade_impl;
