// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Custom pattern masking
//
// A pattern is walked in lockstep with the input, one pattern character per step:
// - '#' copies the current input character
// - '*' masks the current input character
// - any other character is emitted as a literal and only consumes the input
//   character when the two are equal
// Input left over once the pattern runs out is masked one '*' per character.

/// Pattern character that passes the input character through.
pub const KEEP: char = '#';
/// Pattern character that replaces the input character with [`MASK`].
pub const MASK: char = '*';

/// Apply a custom masking `pattern` to `input`.
///
/// ```
/// use value_masker::masking::pattern::apply_pattern;
///
/// assert_eq!(apply_pattern("1234567", "###-####"), "123-4567");
/// assert_eq!(apply_pattern("Fo1234", "##**"), "Fo****");
/// ```
pub fn apply_pattern(input: &str, pattern: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    if pattern.is_empty() {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len().max(pattern.len()));
    let mut remaining = input.chars().peekable();

    for p in pattern.chars() {
        let Some(&c) = remaining.peek() else {
            break;
        };
        match p {
            KEEP => {
                out.push(c);
                remaining.next();
            }
            MASK => {
                out.push(MASK);
                remaining.next();
            }
            literal => {
                out.push(literal);
                if c == literal {
                    remaining.next();
                }
            }
        }
    }

    out.extend(remaining.map(|_| MASK));
    out
}
