//! Secret records: scoped, redacted key-value bundles describing how to
//! authenticate to a storage service.

use crate::errors::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::REDACTED_PLACEHOLDER;

/// Keys whose values are never shown in plain text.
const ALWAYS_REDACTED: &[&str] = &["secret", "session_token"];

/// Target storage-service type for a secret record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Primary object-storage service
    S3,
    /// Alternate provider addressed by account id
    R2,
    /// Generic cloud-storage variant
    Gcs,
}

impl ServiceType {
    /// Canonical lowercase name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::S3 => "s3",
            ServiceType::R2 => "r2",
            ServiceType::Gcs => "gcs",
        }
    }

    /// All supported service types
    #[must_use]
    pub fn all() -> &'static [ServiceType] {
        &[ServiceType::S3, ServiceType::R2, ServiceType::Gcs]
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "s3" => Ok(ServiceType::S3),
            "r2" => Ok(ServiceType::R2),
            "gcs" => Ok(ServiceType::Gcs),
            _ => Err(Error::invalid_input(format!(
                "unknown secret service type: '{s}'"
            ))),
        }
    }
}

/// A named, scoped key-value bundle handed to the host's secret catalog.
///
/// Values are kept in insertion order so that materializing the same
/// inputs twice yields byte-identical serialized records. The redact set
/// always contains the secret and session-token keys, whether or not
/// those keys were populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRecord {
    /// Storage-service type this secret authenticates against
    pub service: ServiceType,
    /// Provider label, e.g. `credential_chain`
    pub provider: String,
    /// User-visible secret name
    pub name: String,
    /// URL prefixes the secret applies to
    pub scope: Vec<String>,
    values: IndexMap<String, String>,
    redact: BTreeSet<String>,
}

impl SecretRecord {
    /// Construct an empty record with the unconditional redact set.
    #[must_use]
    pub fn new(
        service: ServiceType,
        provider: impl Into<String>,
        name: impl Into<String>,
        scope: Vec<String>,
    ) -> Self {
        Self {
            service,
            provider: provider.into(),
            name: name.into(),
            scope,
            values: IndexMap::new(),
            redact: ALWAYS_REDACTED.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// Set a value, overwriting any previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check whether a key is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Check whether a key is marked redact-on-display
    #[must_use]
    pub fn is_redacted(&self, key: &str) -> bool {
        self.redact.contains(key)
    }

    /// Mark an additional key as redact-on-display
    pub fn redact_key(&mut self, key: impl Into<String>) {
        self.redact.insert(key.into());
    }

    /// Redact-on-display key names, sorted
    #[must_use]
    pub fn redacted_keys(&self) -> &BTreeSet<String> {
        &self.redact
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored values
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no values are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value for `key` as shown to users, with redaction applied
    #[must_use]
    pub fn display_value(&self, key: &str) -> Option<&str> {
        let value = self.get(key)?;
        if self.is_redacted(key) && !value.is_empty() {
            Some(REDACTED_PLACEHOLDER)
        } else {
            Some(value)
        }
    }
}

impl fmt::Display for SecretRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "name={}; type={}; provider={}; scope={}",
            self.name,
            self.service,
            self.provider,
            self.scope.join(",")
        )?;
        for (key, _) in self.values.iter() {
            writeln!(
                f,
                "  {key}={}",
                self.display_value(key).unwrap_or_default()
            )?;
        }
        Ok(())
    }
}
