//! Secret materialization: merge resolved credentials, caller overrides,
//! and per-service defaults into a redacted [`SecretRecord`].

use credchain_core::{
    ChainSpec, KeyMaterial, ResolutionParams, ResolvedCredentials, Result, SecretRecord,
    ServiceType, CREDENTIAL_CHAIN_PROVIDER, GCS_DEFAULT_ENDPOINT, GCS_DEFAULT_SCOPE,
    R2_DEFAULT_SCOPE, R2_ENDPOINT_SUFFIX, S3_DEFAULT_ENDPOINT, S3_DEFAULT_SCOPE,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::host::SecretCatalog;

/// Override keys copied verbatim from the caller's options into the
/// record. Anything outside this list is ignored.
const OVERRIDE_KEYS: &[&str] = &[
    "key_id",
    "secret",
    "region",
    "session_token",
    "endpoint",
    "url_style",
    "use_ssl",
    "url_compatibility_mode",
];

/// Caller input for one secret-creation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSecretInput {
    /// Target storage-service type
    pub service: ServiceType,
    /// User-visible secret name
    pub name: String,
    /// Explicit URL-prefix scope; empty means "use service defaults"
    pub scope: Vec<String>,
    /// Named options: overrides plus resolution parameters
    pub options: IndexMap<String, String>,
}

impl CreateSecretInput {
    /// Create an input for a service type and secret name
    #[must_use]
    pub fn new(service: ServiceType, name: impl Into<String>) -> Self {
        Self {
            service,
            name: name.into(),
            scope: Vec::new(),
            options: IndexMap::new(),
        }
    }

    /// Add a named option
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Set an explicit scope
    #[must_use]
    pub fn with_scope(mut self, scope: Vec<String>) -> Self {
        self.scope = scope;
        self
    }

    /// Look up a named option, treating empty values as unset
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Resolution parameters carried in the options
    #[must_use]
    pub fn resolution_params(&self) -> ResolutionParams {
        ResolutionParams {
            profile: self.option("profile").map(str::to_string),
            task_role_resource_path: self.option("task_role_resource_path").map(str::to_string),
            task_role_endpoint: self.option("task_role_endpoint").map(str::to_string),
            task_role_token: self.option("task_role_token").map(str::to_string),
        }
    }
}

/// Materialize a secret record from resolved credentials and caller input.
///
/// Overrides always win over resolved values; endpoint and URL-style
/// defaults apply only when nothing set them. Absent credentials simply
/// leave the credential keys out.
pub fn materialize(
    resolved: &ResolvedCredentials,
    input: &CreateSecretInput,
) -> Result<SecretRecord> {
    let scope = if input.scope.is_empty() {
        default_scope(input.service)
    } else {
        input.scope.clone()
    };

    let mut record = SecretRecord::new(
        input.service,
        CREDENTIAL_CHAIN_PROVIDER,
        &input.name,
        scope,
    );

    if let Some(region) = resolved.region.as_deref().filter(|r| !r.is_empty()) {
        record.set("region", region);
    }

    if let Some(material) = &resolved.credentials {
        set_key_material(&mut record, material);
    }

    for key in OVERRIDE_KEYS {
        if let Some(value) = input.options.get(*key) {
            record.set(*key, value);
        }
    }

    apply_endpoint_default(&mut record, input);
    apply_url_style_default(&mut record, input.service);

    Ok(record)
}

/// Resolve then materialize, in one call. Provider label is
/// `credential_chain`; the `chain` and `profile` options steer resolution
/// exactly as for transient loading.
pub async fn create_secret(input: &CreateSecretInput) -> Result<SecretRecord> {
    // A present-but-empty chain option is an empty chain, which resolves
    // to nothing; only a missing option selects the fallback sources.
    let chain = input
        .options
        .get("chain")
        .map(|raw| ChainSpec::parse(raw))
        .transpose()?;
    let params = input.resolution_params();
    let resolved = credchain_resolver::resolve(chain.as_ref(), &params).await?;
    tracing::debug!(
        service = %input.service,
        name = %input.name,
        found = resolved.has_credentials(),
        "materializing secret from credential chain"
    );
    materialize(&resolved, input)
}

/// Create a secret and hand ownership of the record to the host catalog.
pub async fn create_and_store_secret(
    catalog: &mut impl SecretCatalog,
    input: &CreateSecretInput,
) -> Result<()> {
    let record = create_secret(input).await?;
    catalog.store(record)
}

fn set_key_material(record: &mut SecretRecord, material: &KeyMaterial) {
    record.set("key_id", &material.access_key_id);
    record.set("secret", &material.secret_access_key);
    record.set(
        "session_token",
        material.session_token.as_deref().unwrap_or_default(),
    );
}

fn default_scope(service: ServiceType) -> Vec<String> {
    let prefixes = match service {
        ServiceType::S3 => S3_DEFAULT_SCOPE,
        ServiceType::R2 => R2_DEFAULT_SCOPE,
        ServiceType::Gcs => GCS_DEFAULT_SCOPE,
    };
    prefixes.iter().map(|p| (*p).to_string()).collect()
}

fn apply_endpoint_default(record: &mut SecretRecord, input: &CreateSecretInput) {
    let already_set = record
        .get("endpoint")
        .is_some_and(|endpoint| !endpoint.is_empty());
    if already_set {
        return;
    }

    match input.service {
        ServiceType::S3 => record.set("endpoint", S3_DEFAULT_ENDPOINT),
        ServiceType::Gcs => record.set("endpoint", GCS_DEFAULT_ENDPOINT),
        ServiceType::R2 => {
            // Without an account id there is no endpoint to construct;
            // the key stays unset.
            if let Some(account_id) = input.option("account_id") {
                record.set("endpoint", format!("{account_id}{R2_ENDPOINT_SUFFIX}"));
            }
        }
    }
}

fn apply_url_style_default(record: &mut SecretRecord, service: ServiceType) {
    let already_set = record
        .get("url_style")
        .is_some_and(|style| !style.is_empty());
    if already_set {
        return;
    }

    // Path-style for the alternate providers; S3 stays unset, which the
    // host reads as virtual-hosted addressing.
    if matches!(service, ServiceType::R2 | ServiceType::Gcs) {
        record.set("url_style", "path");
    }
}
