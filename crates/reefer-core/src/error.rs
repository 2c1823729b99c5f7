//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `#[from]` or keep it as one variant — whichever keeps error sites
//! clean.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("SKU {0:?} registered twice")]
    DuplicateSku(String),
}

/// Shorthand result type for `reefer-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
