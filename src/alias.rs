// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Shortcuts for common shapes, all defined in terms of the primitives.

use crate::{
    builder::{Pattern, RegexBuilder},
    fragment::Content,
};

const CHAR_CLASS_LETTER: &str = "A-Za-z";
const CHAR_CLASS_LOWER_CASE_LETTER: &str = "a-z";
const CHAR_CLASS_UPPER_CASE_LETTER: &str = "A-Z";

impl RegexBuilder {
    /// One occurrence of the given string.
    pub fn then(self, s: &str) -> Self {
        self.exactly(1).of(s)
    }

    pub fn some(self, chars: impl AsRef<str>) -> Self {
        self.min(1).from(chars)
    }

    pub fn maybe_some(self, chars: impl AsRef<str>) -> Self {
        self.min(0).from(chars)
    }

    pub fn maybe(self, s: &str) -> Self {
        self.max(1).of(s)
    }

    pub fn anything(self) -> Self {
        self.min(1).of_any()
    }

    /// `\r\n`, `\r` or `\n`.
    pub fn line_break(self) -> Self {
        self.either("\r\n").or("\r").or("\n")
    }

    /// Line breaks, to be preceded by a quantity, e.g. `.min(1).line_breaks()`.
    pub fn line_breaks(self) -> Self {
        self.like(&RegexBuilder::new().line_break())
    }

    /// One whitespace char, or whitespace chars with the pending quantity
    /// if one has been set and has no content yet, e.g. `.min(1).whitespace()`.
    pub fn whitespace(self) -> Self {
        if self.awaits_content() {
            self.set_content(Content::SubPattern(r"\s".to_owned()))
        } else {
            self.exactly(1).of(r"\s")
        }
    }

    pub fn tab(self) -> Self {
        self.exactly(1).of("\t")
    }

    pub fn tabs(self) -> Self {
        self.like(&RegexBuilder::new().tab())
    }

    pub fn digit(self) -> Self {
        self.exactly(1).of(r"\d")
    }

    pub fn digits(self) -> Self {
        self.like(&RegexBuilder::new().digit())
    }

    // The letter classes are ranges, so they bypass the escaping of `from`.

    pub fn letter(self) -> Self {
        self.exactly(1).letters()
    }

    pub fn letters(self) -> Self {
        self.set_content(Content::CharClass(CHAR_CLASS_LETTER.to_owned()))
    }

    pub fn lower_case_letter(self) -> Self {
        self.exactly(1).lower_case_letters()
    }

    pub fn lower_case_letters(self) -> Self {
        self.set_content(Content::CharClass(CHAR_CLASS_LOWER_CASE_LETTER.to_owned()))
    }

    pub fn upper_case_letter(self) -> Self {
        self.exactly(1).upper_case_letters()
    }

    pub fn upper_case_letters(self) -> Self {
        self.set_content(Content::CharClass(CHAR_CLASS_UPPER_CASE_LETTER.to_owned()))
    }

    /// One occurrence of another pattern.
    pub fn append<P: Pattern + ?Sized>(self, pattern: &P) -> Self {
        self.exactly(1).set_sub_pattern(pattern)
    }

    /// Zero or one occurrence of another pattern.
    pub fn optional<P: Pattern + ?Sized>(self, pattern: &P) -> Self {
        self.max(1).set_sub_pattern(pattern)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_str_eq;

    use crate::builder::RegexBuilder;

    fn assert_same(alias: RegexBuilder, primitives: RegexBuilder) {
        assert_str_eq!(alias.literal().unwrap(), primitives.literal().unwrap());
    }

    #[test]
    fn test_alias_literal_shortcuts() {
        assert_same(
            RegexBuilder::new().then("a.b"),
            RegexBuilder::new().exactly(1).of("a.b"),
        );
        assert_same(
            RegexBuilder::new().maybe("-"),
            RegexBuilder::new().max(1).of("-"),
        );
        assert_same(
            RegexBuilder::new().anything(),
            RegexBuilder::new().min(1).of_any(),
        );

        assert_str_eq!(
            RegexBuilder::new().then("a.b").literal().unwrap(),
            r"(?:(?:a\.b){1})"
        );
        assert_str_eq!(
            RegexBuilder::new().maybe("-").literal().unwrap(),
            "(?:(?:-){0,1})"
        );
    }

    #[test]
    fn test_alias_char_class_shortcuts() {
        assert_same(
            RegexBuilder::new().some("a-c"),
            RegexBuilder::new().min(1).from("a-c"),
        );
        assert_same(
            RegexBuilder::new().maybe_some("xy"),
            RegexBuilder::new().min(0).from("xy"),
        );

        assert_str_eq!(
            RegexBuilder::new().some("a-c").literal().unwrap(),
            r"(?:(?:[a\-c]){1,})"
        );
        assert_str_eq!(
            RegexBuilder::new().maybe_some("xy").literal().unwrap(),
            "(?:(?:[xy]){0,})"
        );
    }

    #[test]
    fn test_alias_line_break() {
        assert_same(
            RegexBuilder::new().line_break(),
            RegexBuilder::new().either("\r\n").or("\r").or("\n"),
        );
        assert_str_eq!(
            RegexBuilder::new().line_break().literal().unwrap(),
            "(?:(?:(?:(?:\r\n){1}))|(?:(?:(?:\r){1}))|(?:(?:(?:\n){1})))"
        );

        assert_same(
            RegexBuilder::new().min(1).line_breaks(),
            RegexBuilder::new()
                .min(1)
                .like(&RegexBuilder::new().line_break()),
        );

        let re = RegexBuilder::new()
            .then("a")
            .line_break()
            .then("b")
            .regex()
            .unwrap();
        assert!(re.is_match("a\r\nb").unwrap());
        assert!(re.is_match("a\nb").unwrap());
        assert!(re.is_match("a\rb").unwrap());
        assert!(!re.is_match("ab").unwrap());
    }

    #[test]
    fn test_alias_whitespace() {
        // without quantity
        assert_same(
            RegexBuilder::new().whitespace(),
            RegexBuilder::new().exactly(1).of(r"\s"),
        );
        assert_str_eq!(
            RegexBuilder::new().whitespace().literal().unwrap(),
            r"(?:(?:\s){1})"
        );

        // with the pending quantity
        assert_str_eq!(
            RegexBuilder::new().min(1).whitespace().literal().unwrap(),
            r"(?:(?:\s){1,})"
        );
        assert_str_eq!(
            RegexBuilder::new().max(3).whitespace().reluctantly().literal().unwrap(),
            r"(?:(?:\s){0,3}?)"
        );

        // a fragment pending without quantity is emitted first
        assert_str_eq!(
            RegexBuilder::new().of("a").whitespace().literal().unwrap(),
            r"(?:(?:a))(?:(?:\s){1})"
        );
    }

    #[test]
    fn test_alias_whitespace_after_literal() {
        // the described literal is kept and the whitespace follows it
        assert_str_eq!(
            RegexBuilder::new().then("a").whitespace().literal().unwrap(),
            r"(?:(?:a){1})(?:(?:\s){1})"
        );
        assert_str_eq!(
            RegexBuilder::new().min(2).of("a").whitespace().literal().unwrap(),
            r"(?:(?:a){2,})(?:(?:\s){1})"
        );

        let re = RegexBuilder::new()
            .then("Hello")
            .whitespace()
            .then("world")
            .regex()
            .unwrap();
        assert!(re.is_match("Hello world").unwrap());
        assert!(!re.is_match(" world").unwrap());
    }

    #[test]
    fn test_alias_tab_and_digit() {
        assert_same(
            RegexBuilder::new().tab(),
            RegexBuilder::new().exactly(1).of("\t"),
        );
        assert_same(
            RegexBuilder::new().exactly(2).tabs(),
            RegexBuilder::new()
                .exactly(2)
                .like(&RegexBuilder::new().tab()),
        );
        assert_same(
            RegexBuilder::new().digit(),
            RegexBuilder::new().exactly(1).of(r"\d"),
        );
        assert_same(
            RegexBuilder::new().min(1).digits(),
            RegexBuilder::new()
                .min(1)
                .like(&RegexBuilder::new().digit()),
        );

        assert_str_eq!(
            RegexBuilder::new().exactly(3).digits().literal().unwrap(),
            r"(?:(?:(?:(?:\d){1})){3})"
        );
    }

    #[test]
    fn test_alias_letters() {
        assert_str_eq!(
            RegexBuilder::new().letter().literal().unwrap(),
            "(?:(?:[A-Za-z]){1})"
        );
        assert_str_eq!(
            RegexBuilder::new().min(2).letters().literal().unwrap(),
            "(?:(?:[A-Za-z]){2,})"
        );
        assert_str_eq!(
            RegexBuilder::new().lower_case_letter().literal().unwrap(),
            "(?:(?:[a-z]){1})"
        );
        assert_str_eq!(
            RegexBuilder::new().max(4).lower_case_letters().literal().unwrap(),
            "(?:(?:[a-z]){0,4})"
        );
        assert_str_eq!(
            RegexBuilder::new().upper_case_letter().literal().unwrap(),
            "(?:(?:[A-Z]){1})"
        );
        assert_str_eq!(
            RegexBuilder::new().upper_case_letters().literal().unwrap(),
            "(?:(?:[A-Z]))"
        );

        let re = RegexBuilder::new()
            .start_of_input()
            .upper_case_letter()
            .min(1)
            .lower_case_letters()
            .end_of_input()
            .regex()
            .unwrap();
        assert!(re.is_match("Hello").unwrap());
        assert!(!re.is_match("hello").unwrap());
        assert!(!re.is_match("HeLlo").unwrap());
    }

    #[test]
    fn test_alias_append_and_optional() {
        let sub = RegexBuilder::new().some("ab");

        assert_same(
            RegexBuilder::new().append(&sub),
            RegexBuilder::new().exactly(1).like(&sub),
        );
        assert_same(
            RegexBuilder::new().optional(&sub),
            RegexBuilder::new().max(1).like(&sub),
        );

        assert_str_eq!(
            RegexBuilder::new().then("x").optional("y").literal().unwrap(),
            "(?:(?:x){1})(?:(?:(?:(?:y){1})){0,1})"
        );
    }
}
