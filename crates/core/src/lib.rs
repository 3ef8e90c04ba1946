//! Core domain types, errors, and constants for the `credchain` workspace.
//!
//! This crate establishes the foundational data structures and error handling
//! used by the resolver and secret crates. It aims to provide clear,
//! type-safe, and consistent building blocks.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all possible failure modes for predictable error handling.
//! - **`types`**: Contains the domain data model, such as credential chain
//!   specifications, resolved key material, and the redacted secret record,
//!   to enforce invariants at the type level.
//! - **`constants`**: Shared static constants such as session option names,
//!   default endpoints, and URL-scheme scopes.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
