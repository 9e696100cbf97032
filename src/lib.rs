// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Deterministic masking of sensitive values
// Usable from Rust directly or from Python through PyO3

pub mod masking;

pub use masking::{mask, Masker, MaskingContext, MaskingStrategy};

/// Python module: value_masker
///
/// Exposes the masking engine to Python.
///
/// # Examples
///
/// ```python
/// from value_masker import mask, normalize_digits
///
/// mask("123-45-6789", "ssn")                 # "***-**-6789"
/// mask("1234567", pattern="###-####")         # "123-4567"
/// mask("123-45-6789", "ssn", enabled=False)   # "123-45-6789"
/// normalize_digits("4111-1111")            # "41111111"
/// ```
#[cfg(feature = "python")]
#[pyo3::pymodule]
fn value_masker(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    use pyo3::types::PyModuleMethods;

    masking::bindings::register(m)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Deterministic masking of sensitive values")?;

    Ok(())
}
