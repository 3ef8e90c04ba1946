//! Blocking entry points for synchronous host callers.
//!
//! Each call owns a fresh current-thread runtime for the duration of the
//! resolution and drops it on every exit path, so no SDK or runtime state
//! leaks across invocations.

use credchain_core::{ChainSpec, Error, ResolutionParams, ResolvedCredentials, Result};
use std::future::Future;
use tokio::runtime::Builder;

/// Run a resolution future to completion from synchronous code.
///
/// Refuses to run inside an existing async context, where blocking would
/// deadlock the caller's runtime.
pub fn run_blocking<F, T>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(Error::configuration(
            "cannot use blocking resolution from within an async runtime",
        ));
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::configuration(format!("failed to create tokio runtime: {e}")))?;

    runtime.block_on(future)
}

/// Blocking form of [`crate::resolve`].
pub fn resolve(
    chain: Option<&ChainSpec>,
    params: &ResolutionParams,
) -> Result<ResolvedCredentials> {
    run_blocking(crate::resolve(chain, params))
}
