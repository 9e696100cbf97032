// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for value masking

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::canonical::CanonicalText;
use super::context::MaskingContext;
use super::error::{MaskingError, Result};
use super::masker::{DefaultMasker, Masker};

/// Built-in masking algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MaskingStrategy {
    #[default]
    Default, // ****
    Creditcard, // ****-****-****-1234
    Ssn,        // ***-**-6789
    Redacted,   // <redacted>
    Email,      // j*****@e****.com
    Iban,       // DE** **** **** **** 4931
}

impl MaskingStrategy {
    pub const ALL: [MaskingStrategy; 6] = [
        MaskingStrategy::Default,
        MaskingStrategy::Creditcard,
        MaskingStrategy::Ssn,
        MaskingStrategy::Redacted,
        MaskingStrategy::Email,
        MaskingStrategy::Iban,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaskingStrategy::Default => "default",
            MaskingStrategy::Creditcard => "creditcard",
            MaskingStrategy::Ssn => "ssn",
            MaskingStrategy::Redacted => "redacted",
            MaskingStrategy::Email => "email",
            MaskingStrategy::Iban => "iban",
        }
    }

    /// Parse a strategy name, treating anything unknown as `Default`.
    ///
    /// Case, surrounding whitespace, `_` and `-` are ignored, so
    /// `"credit_card"` and `"CreditCard"` both name `Creditcard`.
    pub fn parse_lenient(name: &str) -> Self {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "default" => MaskingStrategy::Default,
            "creditcard" => MaskingStrategy::Creditcard,
            "ssn" => MaskingStrategy::Ssn,
            "redacted" => MaskingStrategy::Redacted,
            "email" => MaskingStrategy::Email,
            "iban" => MaskingStrategy::Iban,
            _ => {
                tracing::debug!(name, "unknown masking strategy, using default");
                MaskingStrategy::Default
            }
        }
    }
}

impl From<String> for MaskingStrategy {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

impl FromStr for MaskingStrategy {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl fmt::Display for MaskingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one sensitive field is masked: a strategy, or a pattern that overrides it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitiveField {
    #[serde(default)]
    pub strategy: MaskingStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl SensitiveField {
    pub fn new(strategy: MaskingStrategy) -> Self {
        Self {
            strategy,
            pattern: None,
        }
    }

    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            strategy: MaskingStrategy::Default,
            pattern: Some(pattern.into()),
        }
    }

    /// Mask `value` with the stock engine.
    pub fn mask(&self, value: Option<&str>, ctx: &MaskingContext) -> String {
        self.mask_with(&DefaultMasker, value, ctx)
    }

    /// Mask `value` with a custom engine.
    pub fn mask_with<M: Masker + ?Sized>(
        &self,
        masker: &M,
        value: Option<&str>,
        ctx: &MaskingContext,
    ) -> String {
        masker.mask_in(value, self.strategy, self.pattern.as_deref(), ctx)
    }

    /// Convert `value` to canonical text, then mask it.
    ///
    /// Values without a text form (such as `None`) are treated as absent.
    pub fn mask_value<T: CanonicalText + ?Sized>(&self, value: &T, ctx: &MaskingContext) -> String {
        let text = value.canonical_text();
        self.mask(text.as_deref(), ctx)
    }
}

/// A masking rule bound to a field name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub field: String,
    #[serde(flatten)]
    pub sensitive: SensitiveField,
}

fn default_enabled() -> bool {
    true
}

/// Rule set for masking named fields
///
/// ```json
/// {
///   "enabled": true,
///   "rules": [
///     {"field": "card", "strategy": "creditcard"},
///     {"field": "account", "pattern": "##**-****"}
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub rules: Vec<FieldRule>,
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: Vec::new(),
        }
    }
}

impl MaskingConfig {
    /// Parse and validate a JSON rule set.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            rules = config.rules.len(),
            enabled = config.enabled,
            "masking config loaded"
        );
        Ok(config)
    }

    /// Reject rule sets that name a field more than once.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.field.as_str()) {
                return Err(MaskingError::DuplicateRule(rule.field.clone()));
            }
        }
        Ok(())
    }

    pub fn rule_for(&self, field: &str) -> Option<&SensitiveField> {
        self.rules
            .iter()
            .find(|rule| rule.field == field)
            .map(|rule| &rule.sensitive)
    }

    pub fn context(&self) -> MaskingContext {
        MaskingContext {
            enabled: self.enabled,
            role: None,
        }
    }

    /// Mask `value` if `field` has a rule; fields without one are returned as is.
    pub fn mask_field<'a>(&self, field: &str, value: &'a str) -> Cow<'a, str> {
        match self.rule_for(field) {
            Some(rule) => Cow::Owned(rule.mask(Some(value), &self.context())),
            None => Cow::Borrowed(value),
        }
    }
}
