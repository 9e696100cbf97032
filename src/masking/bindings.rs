// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PyO3 bindings for the masking engine

use pyo3::prelude::*;

use super::config::MaskingStrategy;
use super::{digits, masker, pattern};

/// Mask a value.
///
/// # Example (Python)
/// ```python
/// from value_masker import mask
///
/// mask("4111 1111 1111 1234", "creditcard")                 # "****-****-****-1234"
/// mask("Fo1234", pattern="##****")                           # "Fo****"
/// mask("john.doe@example.com", "email", enabled=False)       # unchanged
/// mask("anything")                                           # "****"
/// ```
///
/// Unknown strategy names fall back to the default mask.
#[pyfunction]
#[pyo3(signature = (value, strategy = "default", pattern = None, enabled = true))]
pub fn mask(value: Option<&str>, strategy: &str, pattern: Option<&str>, enabled: bool) -> String {
    let strategy = MaskingStrategy::parse_lenient(strategy);
    masker::mask(value, strategy, pattern, enabled)
}

/// Keep only the ASCII digits of `text`.
#[pyfunction]
pub fn normalize_digits(text: &str) -> String {
    digits::normalize_digits(text)
}

/// Apply a custom `#`/`*` pattern to `text`.
#[pyfunction]
pub fn apply_pattern(text: &str, pattern: &str) -> String {
    pattern::apply_pattern(text, pattern)
}

/// Register the module's functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mask, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_digits, m)?)?;
    m.add_function(wrap_pyfunction!(apply_pattern, m)?)?;
    Ok(())
}
