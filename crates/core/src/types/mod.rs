//! Domain types for credential resolution and secret materialization.

pub mod chain;
pub mod credentials;
pub mod secret;

pub use chain::{ChainSpec, CredentialSource};
pub use credentials::{KeyMaterial, ResolutionParams, ResolvedCredentials};
pub use secret::{SecretRecord, ServiceType};
