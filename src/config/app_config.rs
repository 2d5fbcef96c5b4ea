use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub azure_subscription_id: String,
    pub azure_resource_group: String,
    pub azure_tenant_id: String,
    pub azure_client_id: String,
    pub azure_client_secret: String,
    pub arm_endpoint: String,
    pub poll_interval_secs: u64,
    pub poll_timeout_secs: u64,
    pub smtp_host: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub notification_recipient: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let smtp_username = std::env::var("SMTP_USERNAME").unwrap_or_default();

        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            azure_subscription_id: std::env::var("AZURE_SUBSCRIPTION_ID").unwrap_or_default(),
            azure_resource_group: std::env::var("AZURE_RESOURCE_GROUP").unwrap_or_default(),
            azure_tenant_id: std::env::var("AZURE_TENANT_ID").unwrap_or_default(),
            azure_client_id: std::env::var("AZURE_CLIENT_ID").unwrap_or_default(),
            azure_client_secret: std::env::var("AZURE_CLIENT_SECRET").unwrap_or_default(),
            arm_endpoint: std::env::var("ARM_ENDPOINT")
                .unwrap_or_else(|_| "https://management.azure.com".to_string()),
            poll_interval_secs: std::env::var("POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .unwrap_or(15),
            poll_timeout_secs: std::env::var("POLL_TIMEOUT_SECS")
                .unwrap_or_else(|_| "1800".to_string())
                .parse()
                .unwrap_or(1800),
            smtp_host: std::env::var("SMTP_HOST")
                .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            notification_recipient: std::env::var("NOTIFICATION_RECIPIENT")
                .unwrap_or_else(|_| smtp_username.clone()),
            smtp_username,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }
}
