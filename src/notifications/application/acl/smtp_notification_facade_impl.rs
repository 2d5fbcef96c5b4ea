use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    transport::smtp::authentication::Credentials,
};

use crate::provisioning::interfaces::acl::notification_facade::{
    NotificationError, NotificationFacade, NotificationMessage,
};

/// SMTP mailer with STARTTLS and username/password login. The sender
/// address doubles as the authenticated account.
pub struct SmtpNotificationFacadeImpl {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
}

impl SmtpNotificationFacadeImpl {
    pub fn new(
        host: &str,
        username: String,
        password: String,
    ) -> Result<Self, NotificationError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|error| NotificationError::Transport(error.to_string()))?
            .credentials(Credentials::new(username.clone(), password))
            .build();

        Ok(Self {
            transport,
            sender: username,
        })
    }
}

#[async_trait]
impl NotificationFacade for SmtpNotificationFacadeImpl {
    async fn notify(
        &self,
        recipient: &str,
        message: &NotificationMessage,
    ) -> Result<(), NotificationError> {
        let email = Message::builder()
            .from(
                self.sender
                    .parse()
                    .map_err(|_| NotificationError::InvalidAddress(self.sender.clone()))?,
            )
            .to(recipient
                .parse()
                .map_err(|_| NotificationError::InvalidAddress(recipient.to_string()))?)
            .subject(message.subject.clone())
            .body(message.body.clone())
            .map_err(|error| NotificationError::Transport(error.to_string()))?;

        self.transport
            .send(email)
            .await
            .map(|_| ())
            .map_err(|error| NotificationError::Transport(error.to_string()))
    }
}
