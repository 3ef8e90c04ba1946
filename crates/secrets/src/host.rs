//! Narrow traits describing what this library needs from the host engine.

use credchain_core::{Error, Result, SecretRecord, STORAGE_EXTENSION};

/// Host session surface: capability queries and configuration writes.
pub trait HostSession {
    /// Check whether a host extension is loaded
    fn is_extension_loaded(&self, name: &str) -> bool;

    /// Set a session configuration option by name
    fn set_config_option(&mut self, name: &str, value: &str);
}

/// Host secret catalog; ownership of stored records transfers to the host.
pub trait SecretCatalog {
    /// Persist a secret record
    fn store(&mut self, record: SecretRecord) -> Result<()>;
}

/// The storage-networking capability must be present before credentials
/// are applied; its absence is a reported error, not a crash.
pub fn require_storage_extension(host: &impl HostSession) -> Result<()> {
    if host.is_extension_loaded(STORAGE_EXTENSION) {
        Ok(())
    } else {
        Err(Error::missing_dependency(
            STORAGE_EXTENSION,
            "required for loading cloud-storage credentials",
        ))
    }
}
