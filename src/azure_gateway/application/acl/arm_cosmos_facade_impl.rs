use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::{
    azure_gateway::interfaces::acl::management_token_provider::ManagementTokenProvider,
    provisioning::{
        domain::model::{enums::api_kind::ApiKind, value_objects::resource_name::ResourceName},
        interfaces::acl::cloud_account_facade::{
            CloudAccountDescriptor, CloudAccountFacade, CloudAccountSpec, CloudGatewayError,
            CloudOperationHandle, CloudOperationProbe,
        },
    },
};

const API_VERSION: &str = "2024-05-15";

#[derive(Debug, Deserialize)]
struct ArmDatabaseAccount {
    name: String,
    location: String,
    kind: Option<String>,
    properties: ArmDatabaseAccountProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArmDatabaseAccountProperties {
    provisioning_state: Option<String>,
    document_endpoint: Option<String>,
}

/// `CloudAccountFacade` implementation over the Azure Resource Manager
/// REST surface for `Microsoft.DocumentDB/databaseAccounts`.
///
/// ARM accepts create/delete with 200/201/202 and reports progress through
/// the account's `provisioningState`; a deleted account simply stops
/// existing, so delete progress is probed via 404.
pub struct ArmCosmosFacadeImpl {
    http: reqwest::Client,
    token_provider: Arc<dyn ManagementTokenProvider>,
    arm_endpoint: String,
    subscription_id: String,
    resource_group: String,
}

impl ArmCosmosFacadeImpl {
    pub fn new(
        arm_endpoint: String,
        subscription_id: String,
        resource_group: String,
        token_provider: Arc<dyn ManagementTokenProvider>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            token_provider,
            arm_endpoint: arm_endpoint.trim_end_matches('/').to_string(),
            subscription_id,
            resource_group,
        }
    }

    fn account_url(&self, resource_name: &ResourceName) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.DocumentDB/databaseAccounts/{}?api-version={}",
            self.arm_endpoint,
            self.subscription_id,
            self.resource_group,
            resource_name.value(),
            API_VERSION
        )
    }

    async fn bearer_token(&self) -> Result<String, CloudGatewayError> {
        self.token_provider
            .bearer_token()
            .await
            .map_err(|error| CloudGatewayError::Unavailable(error.to_string()))
    }

    async fn get_account(
        &self,
        resource_name: &ResourceName,
    ) -> Result<Option<ArmDatabaseAccount>, CloudGatewayError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .get(self.account_url(resource_name))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|error| CloudGatewayError::Unavailable(error.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(CloudGatewayError::Rejected(format!("{status}: {detail}")));
        }

        let account = response
            .json::<ArmDatabaseAccount>()
            .await
            .map_err(|error| CloudGatewayError::Rejected(error.to_string()))?;
        Ok(Some(account))
    }

    fn create_body(spec: &CloudAccountSpec) -> serde_json::Value {
        let location = spec.location.value();
        let mut properties = json!({
            "databaseAccountOfferType": "Standard",
            "locations": [{
                "locationName": location,
                "failoverPriority": 0,
            }],
        });

        let kind = match spec.api_kind {
            ApiKind::Sql => "GlobalDocumentDB",
            ApiKind::Mongo => {
                properties["apiProperties"] = json!({ "serverVersion": "4.2" });
                properties["capabilities"] = json!([{ "name": "EnableMongo" }]);
                "MongoDB"
            }
        };

        json!({
            "location": location,
            "kind": kind,
            "properties": properties,
        })
    }
}

#[async_trait]
impl CloudAccountFacade for ArmCosmosFacadeImpl {
    async fn begin_create(
        &self,
        resource_name: &ResourceName,
        spec: &CloudAccountSpec,
    ) -> Result<CloudOperationHandle, CloudGatewayError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .put(self.account_url(resource_name))
            .bearer_auth(token)
            .json(&Self::create_body(spec))
            .send()
            .await
            .map_err(|error| CloudGatewayError::Unavailable(error.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(CloudGatewayError::Rejected(format!("{status}: {detail}")));
        }

        Ok(CloudOperationHandle::Create {
            resource_name: resource_name.clone(),
        })
    }

    async fn begin_delete(
        &self,
        resource_name: &ResourceName,
    ) -> Result<CloudOperationHandle, CloudGatewayError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .delete(self.account_url(resource_name))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|error| CloudGatewayError::Unavailable(error.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(CloudGatewayError::Rejected(format!("{status}: {detail}")));
        }

        Ok(CloudOperationHandle::Delete {
            resource_name: resource_name.clone(),
        })
    }

    async fn probe_operation(
        &self,
        handle: &CloudOperationHandle,
    ) -> Result<CloudOperationProbe, CloudGatewayError> {
        match handle {
            CloudOperationHandle::Create { resource_name } => {
                let account = self.get_account(resource_name).await?;
                let state = account
                    .and_then(|account| account.properties.provisioning_state)
                    .unwrap_or_else(|| "Creating".to_string());

                let probe = match state.as_str() {
                    "Succeeded" => CloudOperationProbe {
                        done: true,
                        succeeded: true,
                        error: None,
                    },
                    "Failed" | "Canceled" => CloudOperationProbe {
                        done: true,
                        succeeded: false,
                        error: Some(format!("provisioning ended in state {state}")),
                    },
                    _ => CloudOperationProbe {
                        done: false,
                        succeeded: false,
                        error: None,
                    },
                };
                Ok(probe)
            }
            CloudOperationHandle::Delete { resource_name } => {
                let account = self.get_account(resource_name).await?;
                let probe = match account {
                    None => CloudOperationProbe {
                        done: true,
                        succeeded: true,
                        error: None,
                    },
                    Some(account)
                        if account.properties.provisioning_state.as_deref()
                            == Some("Failed") =>
                    {
                        CloudOperationProbe {
                            done: true,
                            succeeded: false,
                            error: Some("deletion ended in state Failed".to_string()),
                        }
                    }
                    Some(_) => CloudOperationProbe {
                        done: false,
                        succeeded: false,
                        error: None,
                    },
                };
                Ok(probe)
            }
        }
    }

    async fn account_exists(
        &self,
        resource_name: &ResourceName,
    ) -> Result<bool, CloudGatewayError> {
        Ok(self.get_account(resource_name).await?.is_some())
    }

    async fn fetch_account(
        &self,
        resource_name: &ResourceName,
    ) -> Result<Option<CloudAccountDescriptor>, CloudGatewayError> {
        let Some(account) = self.get_account(resource_name).await? else {
            return Ok(None);
        };

        let api_kind = match account.kind.as_deref() {
            Some("MongoDB") => ApiKind::Mongo,
            _ => ApiKind::Sql,
        };

        Ok(Some(CloudAccountDescriptor {
            resource_name: account.name,
            location: account.location,
            api_kind,
            provisioning_state: account
                .properties
                .provisioning_state
                .unwrap_or_else(|| "Unknown".to_string()),
            document_endpoint: account.properties.document_endpoint,
        }))
    }
}
