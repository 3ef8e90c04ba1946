//! Secret materialization and the host boundary for credchain.
//!
//! This crate turns resolved credentials into the two shapes the host
//! understands:
//!
//! - a persistent, redacted [`SecretRecord`](credchain_core::SecretRecord)
//!   scoped to URL prefixes, with per-service endpoint and URL-style
//!   defaults;
//! - transient session configuration options plus a one-row summary for
//!   the `load_credentials` surface.
//!
//! The host itself is behind the narrow traits in [`host`]; nothing here
//! depends on a particular engine.

pub mod host;
pub mod materializer;
pub mod session;

pub use host::{HostSession, SecretCatalog};
pub use materializer::{create_and_store_secret, create_secret, materialize, CreateSecretInput};
pub use session::{load_credentials, CredentialsRow, LoadCredentialsOptions};
