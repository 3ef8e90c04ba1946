//! Container task-role credentials.
//!
//! The SDK's built-in container provider only reads its endpoint from
//! process environment variables. This provider takes the endpoint
//! explicitly, either as a resource path against the fixed container
//! metadata address or as a full endpoint plus authorization token, and
//! plugs into the rest of the SDK through `ProvideCredentials`.

use aws_credential_types::provider::{self, error::CredentialsError, future, ProvideCredentials};
use aws_credential_types::Credentials;
use credchain_core::TASK_ROLE_BASE_URL;
use serde::Deserialize;
use std::time::SystemTime;

/// Credential document returned by the task-role endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TaskRoleResponse {
    access_key_id: String,
    secret_access_key: String,
    token: Option<String>,
    expiration: Option<String>,
}

/// Fetches credentials from a container task-role endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct TaskRoleCredentialsProvider {
    endpoint: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl TaskRoleCredentialsProvider {
    /// Provider for a resource path relative to the container metadata
    /// address.
    #[must_use]
    pub fn from_resource_path(resource_path: &str) -> Self {
        let path = if resource_path.starts_with('/') {
            resource_path.to_string()
        } else {
            format!("/{resource_path}")
        };
        Self {
            endpoint: format!("{TASK_ROLE_BASE_URL}{path}"),
            auth_token: None,
            client: reqwest::Client::new(),
        }
    }

    /// Provider for a full endpoint guarded by an authorization token.
    #[must_use]
    pub fn from_endpoint(endpoint: &str, auth_token: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            auth_token: Some(auth_token.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// The URL this provider will query
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> provider::Result {
        let mut request = self.client.get(&self.endpoint);
        if let Some(token) = &self.auth_token {
            request = request.header(reqwest::header::AUTHORIZATION, token.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(CredentialsError::provider_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CredentialsError::provider_error(format!(
                "task role endpoint returned status {status}"
            )));
        }

        let body: TaskRoleResponse = response
            .json()
            .await
            .map_err(CredentialsError::provider_error)?;

        if body.access_key_id.is_empty() || body.secret_access_key.is_empty() {
            return Err(CredentialsError::provider_error(
                "task role endpoint returned empty key material",
            ));
        }

        let expiry = body
            .expiration
            .as_deref()
            .and_then(parse_expiration);

        Ok(Credentials::new(
            body.access_key_id,
            body.secret_access_key,
            body.token.filter(|t| !t.is_empty()),
            expiry,
            "TaskRole",
        ))
    }
}

fn parse_expiration(raw: &str) -> Option<SystemTime> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(SystemTime::from)
}

impl ProvideCredentials for TaskRoleCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::new(self.fetch())
    }
}
