//! Credential chain specifications.
//!
//! A chain spec is an ordered list of credential sources, written by users
//! as a semicolon-delimited string such as `"env;config;instance"`. Every
//! token must name a recognized source; an unrecognized token is a
//! configuration error, never a silent skip.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One mechanism for obtaining credentials.
///
/// The set is closed: new sources are added here, not through subclassing,
/// and each variant maps to exactly one provider adapter in the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    /// Environment variables (`AWS_ACCESS_KEY_ID` et al.)
    Env,
    /// Instance metadata service
    Instance,
    /// External process configured in the profile file
    Process,
    /// Profile/config file
    Config,
    /// Single sign-on
    Sso,
    /// STS web-identity assume-role
    Sts,
    /// Container task role
    TaskRole,
}

impl CredentialSource {
    /// Canonical token as it appears in a chain string
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::Env => "env",
            CredentialSource::Instance => "instance",
            CredentialSource::Process => "process",
            CredentialSource::Config => "config",
            CredentialSource::Sso => "sso",
            CredentialSource::Sts => "sts",
            CredentialSource::TaskRole => "task_role",
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "env" => Ok(CredentialSource::Env),
            "instance" => Ok(CredentialSource::Instance),
            "process" => Ok(CredentialSource::Process),
            "config" => Ok(CredentialSource::Config),
            "sso" => Ok(CredentialSource::Sso),
            "sts" => Ok(CredentialSource::Sts),
            "task_role" => Ok(CredentialSource::TaskRole),
            _ => Err(Error::invalid_input(format!(
                "unknown credential source found while parsing chain string: '{s}'"
            ))),
        }
    }
}

/// Ordered list of credential sources to try in sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSpec(Vec<CredentialSource>);

impl ChainSpec {
    /// Create a chain from an explicit source list
    #[must_use]
    pub fn new(sources: Vec<CredentialSource>) -> Self {
        Self(sources)
    }

    /// Parse a semicolon-delimited chain string.
    ///
    /// Empty segments are skipped; any other unrecognized token fails the
    /// whole parse before resolution starts.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut sources = Vec::new();
        for token in spec.split(';') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            sources.push(token.parse::<CredentialSource>()?);
        }
        Ok(Self(sources))
    }

    /// Sources in the order they will be tried
    #[must_use]
    pub fn sources(&self) -> &[CredentialSource] {
        &self.0
    }

    /// Check whether the chain has no sources
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of sources in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromStr for ChainSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ChainSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.0.iter().map(CredentialSource::as_str).collect();
        f.write_str(&tokens.join(";"))
    }
}
