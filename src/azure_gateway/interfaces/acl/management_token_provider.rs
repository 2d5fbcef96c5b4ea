use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum TokenAcquisitionError {
    #[error("token endpoint rejected the request: {0}")]
    Rejected(String),

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Capability for obtaining management-plane bearer tokens. The gateway
/// never sees client secrets beyond construction time of the provider.
#[async_trait]
pub trait ManagementTokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<String, TokenAcquisitionError>;
}
