// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Integration tests for the masking engine's public API

use value_masker::masking::context::{self, MaskingContext};
use value_masker::masking::digits::normalize_digits;
use value_masker::masking::{
    mask, mask_current, DefaultMasker, Masker, MaskingConfig, MaskingStrategy, SensitiveField,
};

fn masked(value: &str, strategy: MaskingStrategy) -> String {
    mask(Some(value), strategy, None, true)
}

#[test]
fn test_disabled_returns_input_for_every_strategy() {
    let inputs = ["4111 1111 1111 1234", "john.doe@example.com", "  spaced  ", "ünïcödé"];
    for strategy in MaskingStrategy::ALL {
        for input in inputs {
            assert_eq!(mask(Some(input), strategy, None, false), input);
            assert_eq!(mask(Some(input), strategy, Some("##**"), false), input);
        }
    }
}

#[test]
fn test_empty_input_is_empty_for_every_strategy() {
    for strategy in MaskingStrategy::ALL {
        assert_eq!(mask(Some(""), strategy, None, true), "");
        assert_eq!(mask(None, strategy, None, true), "");
        assert_eq!(mask(Some(""), strategy, Some("###"), true), "");
    }
}

#[test]
fn test_fixed_tokens() {
    assert_eq!(masked("anything", MaskingStrategy::Redacted), "<redacted>");
    assert_eq!(masked("anything", MaskingStrategy::Default), "****");
}

#[test]
fn test_credit_card() {
    assert_eq!(masked("4111 1111 1111 1234", MaskingStrategy::Creditcard), "****-****-****-1234");
    assert_eq!(
        masked("abcd4111111111111234xyz", MaskingStrategy::Creditcard),
        "****-****-****-1234"
    );
}

#[test]
fn test_ssn() {
    assert_eq!(masked("123456789", MaskingStrategy::Ssn), "***-**-6789");
    assert_eq!(masked("12", MaskingStrategy::Ssn), "***-**-**12");
}

#[test]
fn test_email() {
    assert_eq!(masked("john.doe@example.com", MaskingStrategy::Email), "j*****@e****.com");
    assert_eq!(masked("invalid-email", MaskingStrategy::Email), "****@****");
}

#[test]
fn test_iban() {
    assert_eq!(
        masked("DE44500105175407324931", MaskingStrategy::Iban),
        "DE** **** **** **** 4931"
    );
    assert_eq!(masked("INVALIDIBAN", MaskingStrategy::Iban), "****");
    assert_eq!(masked("de44ßtraße0105175407324931", MaskingStrategy::Iban), "****");
    assert_eq!(masked("DE4450010517540732ﬀ", MaskingStrategy::Iban), "****");
}

#[test]
fn test_patterns() {
    assert_eq!(mask(Some("Fo1234"), MaskingStrategy::Default, Some("##****"), true), "Fo****");
    assert_eq!(mask(Some("1234567"), MaskingStrategy::Default, Some("###-####"), true), "123-4567");
    assert_eq!(
        mask(Some("1234-456-789"), MaskingStrategy::Default, Some("*##*-***-***"), true),
        "*23*-***-***"
    );
}

#[test]
fn test_pattern_wins_over_every_strategy() {
    for strategy in MaskingStrategy::ALL {
        assert_eq!(mask(Some("Fo1234"), strategy, Some("##**"), true), "Fo****");
    }
}

#[test]
fn test_normalizer() {
    assert_eq!(normalize_digits("+1 (555) 010-9999 ext. 7"), "155501099997");
}

#[test]
fn test_custom_masker_keeps_dispatch_rules() {
    struct Partner;

    impl Masker for Partner {
        fn mask_email(&self, _raw: &str) -> String {
            "hidden@partner".to_string()
        }
    }

    assert_eq!(
        Partner.mask(Some("a@b.com"), MaskingStrategy::Email, None, true),
        "hidden@partner"
    );
    assert_eq!(Partner.mask(Some("a@b.com"), MaskingStrategy::Email, None, false), "a@b.com");
    assert_eq!(Partner.mask(Some(""), MaskingStrategy::Email, None, true), "");
    assert_eq!(
        Partner.mask(Some("DE44500105175407324931"), MaskingStrategy::Iban, None, true),
        DefaultMasker.mask(Some("DE44500105175407324931"), MaskingStrategy::Iban, None, true)
    );
}

#[test]
fn test_ambient_context_scoping() {
    let value = Some("123-45-6789");

    assert_eq!(mask_current(value, MaskingStrategy::Ssn, None), "123-45-6789");

    let inside = context::scope(MaskingContext::enabled(), || {
        mask_current(value, MaskingStrategy::Ssn, None)
    });
    assert_eq!(inside, "***-**-6789");

    // Scope ends, masking is off again
    assert_eq!(mask_current(value, MaskingStrategy::Ssn, None), "123-45-6789");
}

#[test]
fn test_rule_file_end_to_end() {
    let config = MaskingConfig::from_json(
        r###"{
            "enabled": true,
            "rules": [
                {"field": "card", "strategy": "creditcard"},
                {"field": "email", "strategy": "email"},
                {"field": "iban", "strategy": "IBAN"},
                {"field": "code", "strategy": "ssn", "pattern": "##-**"},
                {"field": "legacy", "strategy": "passport"}
            ]
        }"###,
    )
    .unwrap();

    let record = [
        ("name", "Ada Lovelace"),
        ("card", "4111-1111-1111-1234"),
        ("email", "ada@analytical.engine"),
        ("iban", "GB33 BUKB 2020 1555 5555 55"),
        ("code", "AB1234"),
        ("legacy", "X1234567"),
    ];
    let out: Vec<String> = record
        .iter()
        .map(|(field, value)| config.mask_field(field, value).into_owned())
        .collect();

    assert_eq!(
        out,
        [
            "Ada Lovelace",
            "****-****-****-1234",
            "a**@a****.engine",
            "GB** **** **** **** 5555",
            "AB-****",
            "****",
        ]
    );
}

#[test]
fn test_sensitive_field_with_canonical_values() {
    let ctx = MaskingContext::enabled();
    let card = SensitiveField::new(MaskingStrategy::Creditcard);
    assert_eq!(card.mask_value(&4111111111111234u64, &ctx), "****-****-****-1234");

    let pattern = SensitiveField::with_pattern("#.*");
    assert_eq!(pattern.mask_value(&3.75f64, &ctx), "3.**");

    assert_eq!(card.mask_value(&4111111111111234u64, &MaskingContext::disabled()), "4111111111111234");
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let value = format!("41111111111{:05}", i);
                mask(Some(value.as_str()), MaskingStrategy::Creditcard, None, true)
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        [
            "****-****-****-0000",
            "****-****-****-0001",
            "****-****-****-0002",
            "****-****-****-0003",
        ]
    );
}
