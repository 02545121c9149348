//! Foundational error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.  `ck-sim` does the
//! latter for configuration errors surfaced at engine construction.

use thiserror::Error;

/// The top-level error type for `ck-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ck-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
