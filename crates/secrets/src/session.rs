//! Transient credential loading into host session configuration.

use credchain_core::{
    ResolutionParams, ResolvedCredentials, Result, OPT_ACCESS_KEY_ID, OPT_REGION,
    OPT_SECRET_ACCESS_KEY, OPT_SESSION_TOKEN, REDACTED_PLACEHOLDER,
};
use serde::{Deserialize, Serialize};

use crate::host::{require_storage_extension, HostSession};

/// Named options of the transient-loading surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadCredentialsOptions {
    /// Write the resolved region into the session (default true)
    pub set_region: bool,
    /// Replace the secret with a placeholder in the returned row
    /// (default true)
    pub redact_secret: bool,
}

impl Default for LoadCredentialsOptions {
    fn default() -> Self {
        Self {
            set_region: true,
            redact_secret: true,
        }
    }
}

/// The single row returned to the caller. `None` fields mean "not
/// found", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsRow {
    /// Access key id, or `None` when no credentials were found
    pub access_key_id: Option<String>,
    /// Secret access key; the literal placeholder when redaction is on
    pub secret_access_key: Option<String>,
    /// Session token, if the credential is session-scoped
    pub session_token: Option<String>,
    /// Region, if one was discoverable
    pub region: Option<String>,
}

/// Resolve credentials from the ambient environment and apply them to the
/// host session.
///
/// With a profile, the profile-file source is used alone; otherwise the
/// standard default chain runs. Requires the storage extension to be
/// loaded before doing any resolution work.
pub async fn load_credentials(
    host: &mut impl HostSession,
    profile: Option<&str>,
    options: LoadCredentialsOptions,
) -> Result<CredentialsRow> {
    require_storage_extension(host)?;

    let mut params = ResolutionParams::new();
    if let Some(profile) = profile {
        params = params.with_profile(profile);
    }
    let resolved = credchain_resolver::resolve(None, &params).await?;

    Ok(apply_to_session(host, &resolved, options))
}

/// Write resolved values into session options and build the result row.
///
/// The secret is written under its own option name, distinct from the
/// access key id; an early revision of this surface wrote the access-key
/// option twice, which left the secret key unset.
pub fn apply_to_session(
    host: &mut impl HostSession,
    resolved: &ResolvedCredentials,
    options: LoadCredentialsOptions,
) -> CredentialsRow {
    let mut row = CredentialsRow::default();

    if let Some(material) = &resolved.credentials {
        host.set_config_option(OPT_ACCESS_KEY_ID, &material.access_key_id);
        host.set_config_option(OPT_SECRET_ACCESS_KEY, &material.secret_access_key);
        host.set_config_option(
            OPT_SESSION_TOKEN,
            material.session_token.as_deref().unwrap_or_default(),
        );

        row.access_key_id = Some(material.access_key_id.clone());
        row.secret_access_key = Some(redact(&material.secret_access_key, options.redact_secret));
        row.session_token = material.session_token.clone();

        tracing::info!(
            access_key_id = %material.access_key_id,
            "applied resolved credentials to session configuration"
        );
    } else {
        tracing::debug!("no credentials resolved; session configuration left untouched");
    }

    if let Some(region) = resolved.region.as_deref().filter(|r| !r.is_empty()) {
        if options.set_region {
            host.set_config_option(OPT_REGION, region);
        }
        row.region = Some(region.to_string());
    }

    row
}

fn redact(secret: &str, redact_secret: bool) -> String {
    if redact_secret && !secret.is_empty() {
        REDACTED_PLACEHOLDER.to_string()
    } else {
        secret.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credchain_core::KeyMaterial;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeHost {
        options: HashMap<String, String>,
    }

    impl HostSession for FakeHost {
        fn is_extension_loaded(&self, name: &str) -> bool {
            name == "httpfs"
        }

        fn set_config_option(&mut self, name: &str, value: &str) {
            self.options.insert(name.to_string(), value.to_string());
        }
    }

    fn resolved() -> ResolvedCredentials {
        ResolvedCredentials {
            credentials: Some(KeyMaterial::new(
                "AKID",
                "shhh",
                Some("token".to_string()),
            )),
            region: Some("eu-west-1".to_string()),
        }
    }

    #[test]
    fn secret_key_lands_under_its_own_option() {
        let mut host = FakeHost::default();
        apply_to_session(&mut host, &resolved(), LoadCredentialsOptions::default());
        assert_eq!(host.options.get("s3_access_key_id").unwrap(), "AKID");
        assert_eq!(host.options.get("s3_secret_access_key").unwrap(), "shhh");
        assert_eq!(host.options.get("s3_session_token").unwrap(), "token");
        assert_eq!(host.options.get("s3_region").unwrap(), "eu-west-1");
    }

    #[test]
    fn row_redacts_the_secret_by_default() {
        let mut host = FakeHost::default();
        let row = apply_to_session(&mut host, &resolved(), LoadCredentialsOptions::default());
        assert_eq!(row.secret_access_key.as_deref(), Some("<redacted>"));
        // The session option still carries the real value.
        assert_eq!(host.options.get("s3_secret_access_key").unwrap(), "shhh");
    }

    #[test]
    fn redaction_can_be_disabled_for_the_row() {
        let mut host = FakeHost::default();
        let row = apply_to_session(
            &mut host,
            &resolved(),
            LoadCredentialsOptions {
                redact_secret: false,
                ..Default::default()
            },
        );
        assert_eq!(row.secret_access_key.as_deref(), Some("shhh"));
    }

    #[test]
    fn set_region_false_skips_the_region_option_but_reports_it() {
        let mut host = FakeHost::default();
        let row = apply_to_session(
            &mut host,
            &resolved(),
            LoadCredentialsOptions {
                set_region: false,
                ..Default::default()
            },
        );
        assert!(!host.options.contains_key("s3_region"));
        assert_eq!(row.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn absent_credentials_yield_an_empty_row_not_an_error() {
        let mut host = FakeHost::default();
        let row = apply_to_session(
            &mut host,
            &ResolvedCredentials::empty(),
            LoadCredentialsOptions::default(),
        );
        assert_eq!(row, CredentialsRow::default());
        assert!(host.options.is_empty());
    }
}
