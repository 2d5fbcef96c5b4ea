use async_trait::async_trait;

#[derive(Clone, Debug)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("invalid mailbox address: {0}")]
    InvalidAddress(String),

    #[error("notification transport failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait NotificationFacade: Send + Sync {
    async fn notify(
        &self,
        recipient: &str,
        message: &NotificationMessage,
    ) -> Result<(), NotificationError>;
}
