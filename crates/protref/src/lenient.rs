//! Lenient adapter over the strict operations
//!
//! Shape failures and missing data become the empty value of the return type
//! plus a `warn!` carrying the operation and identifier. Transport failures
//! still propagate from [`degrade`].

use crate::error::{Result, UniprotError};
use tracing::warn;

fn report(err: &UniprotError) {
    warn!(
        operation = err.operation().unwrap_or("fetch"),
        identifier = err.identifier().unwrap_or(""),
        error = %err,
        "Returning empty result"
    );
}

/// Replace data errors with `empty()`; pass transport errors through.
pub fn degrade_with<T>(result: Result<T>, empty: impl FnOnce() -> T) -> Result<T> {
    match result {
        Err(err) if err.is_data_error() => {
            report(&err);
            Ok(empty())
        }
        other => other,
    }
}

/// [`degrade_with`] using `T::default()`
pub fn degrade<T: Default>(result: Result<T>) -> Result<T> {
    degrade_with(result, T::default)
}

/// For pure transforms: every error becomes `T::default()`.
pub fn or_default<T: Default>(result: Result<T>) -> T {
    result.unwrap_or_else(|err| {
        report(&err);
        T::default()
    })
}
