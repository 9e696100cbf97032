// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error types for the masking engine

use thiserror::Error;

/// Errors raised by the masking engine and its configuration layer.
///
/// Masking a value never fails: malformed input degrades to the
/// strategy's fallback token. These errors cover programmer mistakes
/// and configuration problems only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskingError {
    /// A caller-supplied scratch buffer cannot hold the output.
    #[error("output buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// A rule file could not be parsed.
    #[error("invalid masking config: {0}")]
    InvalidConfig(String),

    /// Two rules target the same field.
    #[error("duplicate masking rule for field '{0}'")]
    DuplicateRule(String),
}

impl From<serde_json::Error> for MaskingError {
    fn from(err: serde_json::Error) -> Self {
        MaskingError::InvalidConfig(err.to_string())
    }
}

/// Result type for masking operations.
pub type Result<T> = std::result::Result<T, MaskingError>;
