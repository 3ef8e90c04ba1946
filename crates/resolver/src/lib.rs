//! Credential chain resolution for credchain.
//!
//! This crate walks an ordered list of credential sources until one yields
//! a non-expired, non-empty credential set, and independently derives the
//! ambient region. It builds on the AWS SDK provider stack
//! (`aws-config` / `aws-credential-types`); the one provider the SDK does
//! not offer in parameterized form, the container task role, is
//! implemented here on the SDK's `ProvideCredentials` trait.
//!
//! Exhausting every source without a result is not an error: the resolver
//! returns `ResolvedCredentials` with `credentials: None` and lets the
//! caller decide what absence means.

pub mod blocking;
pub mod providers;
pub mod resolver;
pub mod task_role;

pub use providers::build_chain;
pub use resolver::{resolve, resolve_region};
pub use task_role::TaskRoleCredentialsProvider;
