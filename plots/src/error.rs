//! Error types for plot option handling.
//!
//! `PlotError` is returned by the strict kwarg paths (`check_kwargs` and
//! `configure`). The lenient `set_kwargs` path never produces one.

use thiserror::Error;

/// Custom error type for plot option operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// A kwarg name outside the recognized option set
    #[error("{key} is not a possible kwarg")]
    UnknownOption { key: String },
}

impl PlotError {
    /// Create an UnknownOption error for the offending kwarg name
    pub fn unknown_option(key: impl Into<String>) -> Self {
        Self::UnknownOption { key: key.into() }
    }

    /// The kwarg name that caused the error
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownOption { key } => key,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
