// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Strategy dispatch
//
// `Masker` exposes one method per built-in strategy with the stock behavior as
// its default. Custom maskers override only the methods they change and keep
// the dispatch rules of `Masker::mask`.

use super::builtin;
use super::config::MaskingStrategy;
use super::context::{self, MaskingContext};
use super::pattern;

/// A masking engine.
///
/// # Example
/// ```
/// use value_masker::masking::{Masker, MaskingStrategy};
///
/// struct CardsFullyHidden;
///
/// impl Masker for CardsFullyHidden {
///     fn mask_credit_card(&self, _raw: &str) -> String {
///         "!redacted!".to_string()
///     }
/// }
///
/// let masker = CardsFullyHidden;
/// assert_eq!(masker.mask(Some("4111 1111"), MaskingStrategy::Creditcard, None, true), "!redacted!");
/// assert_eq!(masker.mask(Some("123456789"), MaskingStrategy::Ssn, None, true), "***-**-6789");
/// ```
pub trait Masker {
    /// Token returned by the default strategy.
    fn default_mask(&self) -> &str {
        builtin::DEFAULT_MASK
    }

    /// Defaults to [`builtin::mask_credit_card`].
    fn mask_credit_card(&self, raw: &str) -> String {
        builtin::mask_credit_card(raw)
    }

    /// Defaults to [`builtin::mask_ssn`].
    fn mask_ssn(&self, raw: &str) -> String {
        builtin::mask_ssn(raw)
    }

    /// Defaults to [`builtin::mask_email`].
    fn mask_email(&self, raw: &str) -> String {
        builtin::mask_email(raw)
    }

    /// Defaults to [`builtin::mask_iban`].
    fn mask_iban(&self, raw: &str) -> String {
        builtin::mask_iban(raw)
    }

    /// Defaults to [`builtin::mask_redacted`].
    fn mask_redacted(&self, raw: &str) -> String {
        builtin::mask_redacted(raw)
    }

    /// Defaults to [`Masker::default_mask`], whatever the input.
    fn mask_default(&self, _raw: &str) -> String {
        self.default_mask().to_string()
    }

    /// Defaults to [`pattern::apply_pattern`].
    fn apply_pattern(&self, raw: &str, pattern: &str) -> String {
        pattern::apply_pattern(raw, pattern)
    }

    /// Route a non-empty value to the built-in mask for `strategy`.
    fn mask_strategy(&self, raw: &str, strategy: MaskingStrategy) -> String {
        match strategy {
            MaskingStrategy::Creditcard => self.mask_credit_card(raw),
            MaskingStrategy::Ssn => self.mask_ssn(raw),
            MaskingStrategy::Email => self.mask_email(raw),
            MaskingStrategy::Iban => self.mask_iban(raw),
            MaskingStrategy::Redacted => self.mask_redacted(raw),
            MaskingStrategy::Default => self.mask_default(raw),
        }
    }

    /// Mask `value`.
    ///
    /// - disabled: `value` is returned unchanged (empty when absent)
    /// - enabled with an absent or empty value: empty
    /// - enabled with a pattern that is not blank: the pattern governs and
    ///   `strategy` is ignored
    /// - otherwise: the built-in mask for `strategy`
    fn mask(
        &self,
        value: Option<&str>,
        strategy: MaskingStrategy,
        pattern: Option<&str>,
        enabled: bool,
    ) -> String {
        if !enabled {
            return value.unwrap_or_default().to_string();
        }

        let Some(raw) = value.filter(|v| !v.is_empty()) else {
            return String::new();
        };

        match pattern.filter(|p| !p.trim().is_empty()) {
            Some(pattern) => {
                tracing::trace!("masking with custom pattern");
                self.apply_pattern(raw, pattern)
            }
            None => {
                tracing::trace!(strategy = strategy.as_str(), "masking with built-in strategy");
                self.mask_strategy(raw, strategy)
            }
        }
    }

    /// [`Masker::mask`] with enablement taken from `ctx`.
    fn mask_in(
        &self,
        value: Option<&str>,
        strategy: MaskingStrategy,
        pattern: Option<&str>,
        ctx: &MaskingContext,
    ) -> String {
        self.mask(value, strategy, pattern, ctx.enabled)
    }
}

/// The stock masking engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMasker;

impl Masker for DefaultMasker {}

/// Mask `value` with the stock engine.
///
/// ```
/// use value_masker::masking::{mask, MaskingStrategy};
///
/// assert_eq!(mask(Some("4111 1111 1111 1234"), MaskingStrategy::Creditcard, None, true), "****-****-****-1234");
/// assert_eq!(mask(Some("4111 1111 1111 1234"), MaskingStrategy::Creditcard, None, false), "4111 1111 1111 1234");
/// ```
pub fn mask(
    value: Option<&str>,
    strategy: MaskingStrategy,
    pattern: Option<&str>,
    enabled: bool,
) -> String {
    DefaultMasker.mask(value, strategy, pattern, enabled)
}

/// Mask `value` with the stock engine, reading enablement from the ambient
/// context of the current flow (see [`context::current`]).
pub fn mask_current(value: Option<&str>, strategy: MaskingStrategy, pattern: Option<&str>) -> String {
    DefaultMasker.mask(value, strategy, pattern, context::current().enabled)
}
