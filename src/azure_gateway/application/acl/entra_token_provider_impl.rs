use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::azure_gateway::interfaces::acl::management_token_provider::{
    ManagementTokenProvider, TokenAcquisitionError,
};

const AUTHORITY: &str = "https://login.microsoftonline.com";
// refresh slightly before the advertised expiry
const EXPIRY_SLACK: Duration = Duration::from_secs(120);

#[derive(Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Client-credentials token provider against Microsoft Entra ID. Tokens
/// are cached until shortly before expiry.
pub struct EntraTokenProviderImpl {
    http: reqwest::Client,
    tenant_id: String,
    client_id: String,
    client_secret: String,
    scope: String,
    cached: RwLock<Option<CachedToken>>,
}

impl EntraTokenProviderImpl {
    pub fn new(
        tenant_id: String,
        client_id: String,
        client_secret: String,
        arm_endpoint: &str,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            tenant_id,
            client_id,
            client_secret,
            scope: format!("{}/.default", arm_endpoint.trim_end_matches('/')),
            cached: RwLock::new(None),
        }
    }

    async fn request_token(&self) -> Result<TokenResponse, TokenAcquisitionError> {
        let token_url = format!("{}/{}/oauth2/v2.0/token", AUTHORITY, self.tenant_id);
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", self.scope.as_str()),
        ];

        let response = self
            .http
            .post(&token_url)
            .form(&form)
            .send()
            .await
            .map_err(|error| TokenAcquisitionError::Unavailable(error.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(TokenAcquisitionError::Rejected(format!(
                "{status}: {detail}"
            )));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|error| TokenAcquisitionError::Rejected(error.to_string()))
    }
}

#[async_trait]
impl ManagementTokenProvider for EntraTokenProviderImpl {
    async fn bearer_token(&self) -> Result<String, TokenAcquisitionError> {
        if let Some(cached) = self.cached.read().await.as_ref()
            && cached.expires_at > Instant::now()
        {
            return Ok(cached.value.clone());
        }

        let token = self.request_token().await?;
        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(EXPIRY_SLACK);
        *self.cached.write().await = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });

        Ok(token.access_token)
    }
}
