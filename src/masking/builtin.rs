// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Built-in format-aware masks
// Each mask is a pure function; malformed input yields the strategy's fallback token

use once_cell::sync::Lazy;
use regex::Regex;

use super::digits::normalize_digits;

/// Generic mask used by the default strategy.
pub const DEFAULT_MASK: &str = "****";
/// Placeholder used by the redacted strategy.
pub const REDACTED_MASK: &str = "<redacted>";
/// Fallback for SSNs with no digits.
pub const SSN_FALLBACK: &str = "***-**-****";
/// Fallback for values that are not email shaped.
pub const EMAIL_FALLBACK: &str = "****@****";

const CARD_PREFIX: &str = "****-****-****-";
const SSN_PREFIX: &str = "***-**-";
const VISIBLE_TAIL: usize = 4;
const MAX_LOCAL_STARS: usize = 5;
const MAX_LABEL_STARS: usize = 4;

// Country code, check digits, BBAN; total length checked separately
static IBAN_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").expect("IBAN shape regex is valid")
});
const IBAN_MIN_LEN: usize = 15;
const IBAN_MAX_LEN: usize = 34;

/// Last `n` bytes of an ASCII string.
fn ascii_tail(s: &str, n: usize) -> &str {
    &s[s.len().saturating_sub(n)..]
}

/// Mask a payment card number, keeping at most the last four digits.
///
/// Formatting characters are ignored: `"4111 1111 1111 1234"` and
/// `"4111-1111-1111-1234"` both become `"****-****-****-1234"`.
pub fn mask_credit_card(raw: &str) -> String {
    let digits = normalize_digits(raw);
    if digits.is_empty() {
        tracing::debug!(strategy = "creditcard", "no digits found, using fallback mask");
        return DEFAULT_MASK.to_string();
    }
    format!("{CARD_PREFIX}{}", ascii_tail(&digits, VISIBLE_TAIL))
}

/// Mask a social security number as `***-**-NNNN`.
///
/// Fewer than four digits are left-padded with `*`, so `"12"` becomes
/// `"***-**-**12"`.
pub fn mask_ssn(raw: &str) -> String {
    let digits = normalize_digits(raw);
    if digits.is_empty() {
        tracing::debug!(strategy = "ssn", "no digits found, using fallback mask");
        return SSN_FALLBACK.to_string();
    }
    format!("{SSN_PREFIX}{:*>4}", ascii_tail(&digits, VISIBLE_TAIL))
}

/// Keep the first character and replace up to `max_stars` of the rest.
fn keep_first(part: &str, max_stars: usize) -> String {
    let mut chars = part.chars();
    let Some(first) = chars.next() else {
        return "*".to_string();
    };
    let stars = chars.count().min(max_stars);
    let mut out = String::with_capacity(first.len_utf8() + stars);
    out.push(first);
    out.extend(std::iter::repeat('*').take(stars));
    out
}

fn mask_local_part(local: &str) -> String {
    if local.chars().count() <= 1 {
        return "*".to_string();
    }
    keep_first(local, MAX_LOCAL_STARS)
}

fn mask_domain_label(label: &str) -> String {
    match label.chars().count() {
        0 | 1 => "*".to_string(),
        // Short labels always get four stars so their length is not revealed
        2 | 3 => keep_first(label, 0) + "****",
        _ => keep_first(label, MAX_LABEL_STARS),
    }
}

/// Mask an email address as `j*****@e****.com`.
///
/// The input must contain exactly one `@`, neither first nor last, and no
/// whitespace; anything else yields [`EMAIL_FALLBACK`]. Only the first domain
/// label is masked; everything from the first `.` of the domain is kept.
pub fn mask_email(raw: &str) -> String {
    let Some((local, domain)) = split_email(raw) else {
        tracing::debug!(strategy = "email", "value is not email shaped, using fallback mask");
        return EMAIL_FALLBACK.to_string();
    };

    let user = mask_local_part(local);
    match domain.find('.') {
        Some(dot) => {
            let (label, rest) = domain.split_at(dot);
            format!("{user}@{}{rest}", mask_domain_label(label))
        }
        None => format!("{user}@{DEFAULT_MASK}"),
    }
}

fn split_email(raw: &str) -> Option<(&str, &str)> {
    if raw.chars().any(char::is_whitespace) {
        return None;
    }
    let (local, domain) = raw.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some((local, domain))
}

/// Mask an IBAN as `DE** **** **** **** 4931`.
///
/// Spaces are stripped and letters uppercased before the shape check; values
/// that are not IBAN shaped yield [`DEFAULT_MASK`].
pub fn mask_iban(raw: &str) -> String {
    // ASCII-only case mapping; 'ß' -> "SS" would let non-IBAN input pass the shape check
    let normalized: String = raw
        .chars()
        .filter(|&c| c != ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let len = normalized.len();
    if !(IBAN_MIN_LEN..=IBAN_MAX_LEN).contains(&len) || !IBAN_SHAPE.is_match(&normalized) {
        tracing::debug!(strategy = "iban", "value is not IBAN shaped, using fallback mask");
        return DEFAULT_MASK.to_string();
    }

    // Shape check guarantees ASCII
    format!(
        "{}** **** **** **** {}",
        &normalized[..2],
        ascii_tail(&normalized, VISIBLE_TAIL)
    )
}

/// Replace any value with [`REDACTED_MASK`].
pub fn mask_redacted(_raw: &str) -> String {
    REDACTED_MASK.to_string()
}

/// Replace any value with [`DEFAULT_MASK`].
pub fn mask_default(_raw: &str) -> String {
    DEFAULT_MASK.to_string()
}
