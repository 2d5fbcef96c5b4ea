pub mod notification_templates;
