// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Value masking engine
//
// One-way masking of sensitive scalars before they cross a trust boundary:
// - Strategy dispatch with pattern override and an explicit enablement flag
// - Digit normalization ahead of card and SSN masks
// - Format-aware masks for cards, SSNs, emails and IBANs
// - Custom '#'/'*' patterns with literal synchronization

pub mod builtin;
pub mod canonical;
pub mod config;
pub mod context;
pub mod digits;
pub mod error;
pub mod masker;
pub mod pattern;

#[cfg(feature = "python")]
pub mod bindings;

pub use canonical::CanonicalText;
pub use config::{FieldRule, MaskingConfig, MaskingStrategy, SensitiveField};
pub use context::MaskingContext;
pub use error::{MaskingError, Result};
pub use masker::{mask, mask_current, DefaultMasker, Masker};
