// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

const SPECIAL_CHARS_OUTSIDE_CHAR_CLASS: [char; 10] =
    ['.', '^', '$', '*', '+', '?', '(', ')', '[', '{'];

const SPECIAL_CHARS_INSIDE_CHAR_CLASS: [char; 3] = ['^', '-', ']'];

/// Escape a string that is used as a plain literal, e.g. `a.b` -> `a\.b`.
///
/// Note that `\`, `|`, `}` and `]` are NOT escaped, so preset classes
/// such as `\d` and `\s` can be passed through.
pub fn escape_outside_char_class(s: &str) -> String {
    escape_special_chars(s, &SPECIAL_CHARS_OUTSIDE_CHAR_CLASS)
}

/// Escape a string that is placed between `[` and `]`, e.g. `a-z` -> `a\-z`.
pub fn escape_inside_char_class(s: &str) -> String {
    escape_special_chars(s, &SPECIAL_CHARS_INSIDE_CHAR_CLASS)
}

// single pass, each special char gets exactly one backslash
fn escape_special_chars(s: &str, special_chars: &[char]) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if special_chars.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
