// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Canonical text for non-string scalars handed to the masking engine

use std::borrow::Cow;

/// Converts a scalar into the text the masking engine operates on.
///
/// `None` means the value has no text form and is treated as absent.
/// Numbers use their shortest round-trip form; with the `chrono` feature,
/// timestamps are RFC 3339.
pub trait CanonicalText {
    fn canonical_text(&self) -> Option<Cow<'_, str>>;
}

impl CanonicalText for str {
    fn canonical_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl CanonicalText for String {
    fn canonical_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl CanonicalText for Cow<'_, str> {
    fn canonical_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: CanonicalText + ?Sized> CanonicalText for &T {
    fn canonical_text(&self) -> Option<Cow<'_, str>> {
        (**self).canonical_text()
    }
}

impl<T: CanonicalText> CanonicalText for Option<T> {
    fn canonical_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(CanonicalText::canonical_text)
    }
}

macro_rules! canonical_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CanonicalText for $ty {
                fn canonical_text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

// Float `Display` is the shortest text that parses back to the same value
canonical_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::*;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone};
    use std::fmt::Display;

    impl<Tz: TimeZone> CanonicalText for DateTime<Tz>
    where
        Tz::Offset: Display,
    {
        fn canonical_text(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Owned(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
        }
    }

    impl CanonicalText for NaiveDateTime {
        fn canonical_text(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Owned(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()))
        }
    }

    impl CanonicalText for NaiveDate {
        fn canonical_text(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Owned(self.format("%Y-%m-%d").to_string()))
        }
    }

    impl CanonicalText for NaiveTime {
        fn canonical_text(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Owned(self.format("%H:%M:%S%.f").to_string()))
        }
    }
}
