//! Chain execution and region resolution.

use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_config::default_provider::region::DefaultRegionChain;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_credential_types::Credentials;
use credchain_core::{ChainSpec, KeyMaterial, ResolutionParams, ResolvedCredentials, Result};
use std::time::SystemTime;

use crate::providers::{build_chain, profile_provider};

/// Resolve credentials and the ambient region in one call.
///
/// Source selection:
/// - `chain` present: the sources are tried strictly in the given order,
///   first non-expired, non-empty result wins; an explicitly empty chain
///   tries nothing and guarantees absence, it never falls back to the
///   default chain;
/// - `chain` absent, profile set: the profile-file source alone;
/// - neither: the SDK default chain, matching standard precedence.
///
/// Exhausting every source is not an error; the returned credentials are
/// simply `None`. The region is derived independently of credential
/// success and may be present or absent on its own.
pub async fn resolve(
    chain: Option<&ChainSpec>,
    params: &ResolutionParams,
) -> Result<ResolvedCredentials> {
    let provider = match chain {
        Some(spec) => build_chain(spec, params)?.map(SharedCredentialsProvider::new),
        None => match params.profile_name() {
            Some(profile) => Some(SharedCredentialsProvider::new(profile_provider(Some(
                profile,
            )))),
            None => {
                let default_chain = DefaultCredentialsChain::builder().build().await;
                Some(SharedCredentialsProvider::new(default_chain))
            }
        },
    };

    let credentials = match provider {
        Some(provider) => match provider.provide_credentials().await {
            Ok(credentials) => into_key_material(credentials),
            Err(err) => {
                tracing::debug!(error = %err, "credential chain yielded no credentials");
                None
            }
        },
        None => {
            tracing::debug!("empty credential chain; nothing to try");
            None
        }
    };

    let region = resolve_region(params.profile_name()).await;
    if credentials.is_none() {
        tracing::debug!("no credential source produced a usable result");
    }

    Ok(ResolvedCredentials {
        credentials,
        region,
    })
}

/// Resolve the region from the ambient client configuration.
///
/// Profile-aware and independent of whether any credential source
/// succeeded; `None` when no region is discoverable.
pub async fn resolve_region(profile: Option<&str>) -> Option<String> {
    let mut builder = DefaultRegionChain::builder();
    if let Some(profile) = profile {
        builder = builder.profile_name(profile);
    }
    builder
        .build()
        .region()
        .await
        .map(|region| region.as_ref().to_string())
}

/// Expired or empty credentials count as absent, matching the chain's
/// first-usable-result contract.
fn into_key_material(credentials: Credentials) -> Option<KeyMaterial> {
    if credentials.access_key_id().is_empty() || credentials.secret_access_key().is_empty() {
        return None;
    }
    if let Some(expiry) = credentials.expiry() {
        if expiry <= SystemTime::now() {
            tracing::debug!("resolved credentials are already expired; treating as absent");
            return None;
        }
    }
    Some(KeyMaterial::new(
        credentials.access_key_id(),
        credentials.secret_access_key(),
        credentials
            .session_token()
            .filter(|t| !t.is_empty())
            .map(str::to_string),
    ))
}
