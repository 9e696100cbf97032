// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Digit normalization ahead of card and SSN masking
// Scans eight bytes at a time and skips words with no ASCII digit

use super::error::{MaskingError, Result};

const WORD: usize = std::mem::size_of::<u64>();
const ONES: u64 = u64::from_ne_bytes([0x01; WORD]);
const HIGH_BITS: u64 = u64::from_ne_bytes([0x80; WORD]);
const LOW_BITS: u64 = u64::from_ne_bytes([0x7f; WORD]);

/// True if any byte of `word` lies in `b'0'..=b'9'`.
///
/// Bytes with the high bit set (UTF-8 continuation or lead bytes) never match.
#[inline]
fn word_has_digit(word: u64) -> bool {
    // Exclusive bounds: '0' - 1 and '9' + 1
    const BELOW: u64 = (b'0' - 1) as u64;
    const ABOVE: u64 = (b'9' + 1) as u64;

    let low = word & LOW_BITS;
    let under_upper = ONES.wrapping_mul(127 + ABOVE).wrapping_sub(low);
    let over_lower = low.wrapping_add(ONES.wrapping_mul(127 - BELOW));
    under_upper & !word & over_lower & HIGH_BITS != 0
}

#[inline]
fn scan_digits(bytes: &[u8], mut emit: impl FnMut(u8)) {
    let mut chunks = bytes.chunks_exact(WORD);
    for chunk in &mut chunks {
        let mut word = [0u8; WORD];
        word.copy_from_slice(chunk);
        if !word_has_digit(u64::from_ne_bytes(word)) {
            continue;
        }
        for &b in chunk {
            if b.is_ascii_digit() {
                emit(b);
            }
        }
    }
    for &b in chunks.remainder() {
        if b.is_ascii_digit() {
            emit(b);
        }
    }
}

/// Extract the ASCII decimal digits of `input`, preserving their order.
///
/// Letters, punctuation, whitespace and non-ASCII digits are dropped, so the
/// output is never longer than the input.
///
/// ```
/// use value_masker::masking::digits::normalize_digits;
///
/// assert_eq!(normalize_digits("4111-1111 1111-1234"), "4111111111111234");
/// assert_eq!(normalize_digits("no digits"), "");
/// ```
pub fn normalize_digits(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    scan_digits(input.as_bytes(), |b| out.push(char::from(b)));
    out
}

/// Write the ASCII digits of `input` into `out`, returning how many were written.
///
/// `out` must be at least as long as `input` in bytes. A shorter buffer is
/// rejected up front with [`MaskingError::BufferTooSmall`] rather than
/// truncating the result.
pub fn normalize_digits_into(input: &str, out: &mut [u8]) -> Result<usize> {
    if out.len() < input.len() {
        return Err(MaskingError::BufferTooSmall {
            needed: input.len(),
            actual: out.len(),
        });
    }

    let mut count = 0;
    scan_digits(input.as_bytes(), |b| {
        out[count] = b;
        count += 1;
    });
    Ok(count)
}
