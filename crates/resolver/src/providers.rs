//! Per-source provider construction.
//!
//! Each `CredentialSource` token maps to exactly one SDK provider adapter.
//! Tokens are turned into providers up front, so a misconfigured chain
//! fails before any network I/O, and the assembled
//! `CredentialsProviderChain` is what performs the first-success-wins walk.

use aws_config::environment::EnvironmentVariableCredentialsProvider;
use aws_config::imds::credentials::ImdsCredentialsProvider;
use aws_config::meta::credentials::CredentialsProviderChain;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::web_identity_token::WebIdentityTokenCredentialsProvider;
use aws_credential_types::provider::SharedCredentialsProvider;
use credchain_core::{ChainSpec, CredentialSource, Error, ResolutionParams, Result};

use crate::task_role::TaskRoleCredentialsProvider;

/// Build the provider adapter for a single chain token.
///
/// The `config`, `process`, and `sso` tokens all construct the
/// profile-file provider: the SDK resolves `credential_process` and SSO
/// profile sections through the profile machinery rather than through
/// standalone provider types.
pub fn build_provider(
    source: CredentialSource,
    params: &ResolutionParams,
) -> Result<SharedCredentialsProvider> {
    let provider = match source {
        CredentialSource::Env => {
            SharedCredentialsProvider::new(EnvironmentVariableCredentialsProvider::new())
        }
        CredentialSource::Instance => {
            SharedCredentialsProvider::new(ImdsCredentialsProvider::builder().build())
        }
        CredentialSource::Config | CredentialSource::Process | CredentialSource::Sso => {
            SharedCredentialsProvider::new(profile_provider(params.profile_name()))
        }
        CredentialSource::Sts => {
            SharedCredentialsProvider::new(WebIdentityTokenCredentialsProvider::builder().build())
        }
        CredentialSource::TaskRole => SharedCredentialsProvider::new(task_role_provider(params)?),
    };
    Ok(provider)
}

/// Assemble an ordered chain of providers, one per token.
///
/// An explicitly empty chain has nothing to try and assembles to `None`;
/// the caller treats that as guaranteed absence, not as an error and not
/// as license to fall back to the default chain.
pub fn build_chain(
    spec: &ChainSpec,
    params: &ResolutionParams,
) -> Result<Option<CredentialsProviderChain>> {
    let mut sources = spec.sources().iter();
    let first = match sources.next() {
        Some(first) => first,
        None => return Ok(None),
    };

    let mut chain = CredentialsProviderChain::first_try(first.as_str(), build_provider(*first, params)?);
    for source in sources {
        chain = chain.or_else(source.as_str(), build_provider(*source, params)?);
    }
    Ok(Some(chain))
}

/// The profile-file provider, honoring the profile name when given.
pub fn profile_provider(profile: Option<&str>) -> ProfileFileCredentialsProvider {
    let mut builder = ProfileFileCredentialsProvider::builder();
    if let Some(profile) = profile {
        builder = builder.profile_name(profile);
    }
    builder.build()
}

/// Task-role parameter rule: prefer the resource path; otherwise require
/// the endpoint and token together; otherwise the token cannot resolve.
fn task_role_provider(params: &ResolutionParams) -> Result<TaskRoleCredentialsProvider> {
    if let Some(path) = params
        .task_role_resource_path
        .as_deref()
        .filter(|p| !p.is_empty())
    {
        return Ok(TaskRoleCredentialsProvider::from_resource_path(path));
    }

    let endpoint = params
        .task_role_endpoint
        .as_deref()
        .filter(|e| !e.is_empty());
    let token = params.task_role_token.as_deref().filter(|t| !t.is_empty());

    match (endpoint, token) {
        (Some(endpoint), Some(token)) => {
            Ok(TaskRoleCredentialsProvider::from_endpoint(endpoint, token))
        }
        _ => Err(Error::invalid_input(
            "task_role credential source requires either 'task_role_resource_path' \
             or both 'task_role_endpoint' and 'task_role_token'",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_assembles_no_providers() {
        let spec = ChainSpec::new(vec![]);
        let chain = build_chain(&spec, &ResolutionParams::new()).unwrap();
        assert!(chain.is_none());
    }

    #[test]
    fn task_role_without_parameters_is_rejected() {
        let spec = ChainSpec::new(vec![CredentialSource::TaskRole]);
        let err = build_chain(&spec, &ResolutionParams::new()).unwrap_err();
        assert!(err.to_string().contains("task_role_resource_path"));
    }

    #[test]
    fn task_role_token_without_endpoint_is_rejected() {
        let spec = ChainSpec::new(vec![CredentialSource::TaskRole]);
        let params = ResolutionParams {
            task_role_token: Some("tok".to_string()),
            ..ResolutionParams::new()
        };
        assert!(build_chain(&spec, &params).is_err());
    }

    #[test]
    fn task_role_resource_path_wins_over_endpoint() {
        let params = ResolutionParams::new()
            .with_task_role_resource_path("/v2/credentials/abc")
            .with_task_role_endpoint("http://localhost:9000", "tok");
        let provider = task_role_provider(&params).unwrap();
        assert!(provider.endpoint().starts_with("http://169.254.170.2"));
    }

    #[test]
    fn every_non_task_role_token_constructs_without_parameters() {
        let params = ResolutionParams::new();
        for source in [
            CredentialSource::Env,
            CredentialSource::Instance,
            CredentialSource::Process,
            CredentialSource::Config,
            CredentialSource::Sso,
            CredentialSource::Sts,
        ] {
            assert!(build_provider(source, &params).is_ok(), "source {source}");
        }
    }
}
