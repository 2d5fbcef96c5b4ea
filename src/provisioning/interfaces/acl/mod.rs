pub mod cloud_account_facade;
pub mod notification_facade;
