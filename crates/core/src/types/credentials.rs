//! Resolved credential material and resolution parameters.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Optional parameters steering chain resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionParams {
    /// Profile name passed to the profile-aware sources
    pub profile: Option<String>,
    /// Relative resource path for the task-role source
    pub task_role_resource_path: Option<String>,
    /// Explicit endpoint for the task-role source; paired with the token
    pub task_role_endpoint: Option<String>,
    /// Authorization token for the explicit task-role endpoint
    pub task_role_token: Option<String>,
}

impl ResolutionParams {
    /// Create empty parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile name
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the task-role resource path
    #[must_use]
    pub fn with_task_role_resource_path(mut self, path: impl Into<String>) -> Self {
        self.task_role_resource_path = Some(path.into());
        self
    }

    /// Set the explicit task-role endpoint and its authorization token
    #[must_use]
    pub fn with_task_role_endpoint(
        mut self,
        endpoint: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        self.task_role_endpoint = Some(endpoint.into());
        self.task_role_token = Some(token.into());
        self
    }

    /// Profile name as a borrowed str, treating empty as unset
    #[must_use]
    pub fn profile_name(&self) -> Option<&str> {
        self.profile.as_deref().filter(|p| !p.is_empty())
    }
}

/// Sensitive key material produced by a credential source.
///
/// Held only for the duration of materialization; the backing memory is
/// zeroed on drop and the `Debug` rendering never contains the values.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    /// Access key id
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Session token; `None` means the credential is not session-scoped
    pub session_token: Option<String>,
}

impl KeyMaterial {
    /// Create key material from its parts
    #[must_use]
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Outcome of one resolution call.
///
/// Both fields are independently optional: a source may yield credentials
/// but no region, and the region chain may succeed when every credential
/// source came up empty. Absence is a valid outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCredentials {
    /// Key material, if any source produced a non-expired, non-empty result
    pub credentials: Option<KeyMaterial>,
    /// Region derived from the ambient client configuration
    pub region: Option<String>,
}

impl ResolvedCredentials {
    /// A resolution that found neither credentials nor a region
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether any key material was found
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_shows_secret_material() {
        let material = KeyMaterial::new("AKID", "very-secret", Some("token".to_string()));
        let rendered = format!("{material:?}");
        assert!(rendered.contains("AKID"));
        assert!(!rendered.contains("very-secret"));
        assert!(!rendered.contains("token"));
    }

    #[test]
    fn empty_profile_counts_as_unset() {
        let params = ResolutionParams::new().with_profile("");
        assert_eq!(params.profile_name(), None);

        let params = ResolutionParams::new().with_profile("minio-testing");
        assert_eq!(params.profile_name(), Some("minio-testing"));
    }
}
