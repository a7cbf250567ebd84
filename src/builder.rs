// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use fancy_regex::Regex;

use crate::{
    error::{BuildError, Error},
    escape::{escape_inside_char_class, escape_outside_char_class},
    fragment::{Content, Fragment, Quantity},
    options::{compile, Options},
};

/// Anything that can be rendered into pattern text and embedded
/// into a builder, e.g. by `either`, `or`, `like` and `ahead`.
pub trait Pattern {
    fn literal(&self) -> Result<String, BuildError>;
}

/// A plain string stands for exactly one occurrence of that string,
/// i.e. `"cat"` renders the same as `RegexBuilder::new().exactly(1).of("cat")`.
impl Pattern for str {
    fn literal(&self) -> Result<String, BuildError> {
        RegexBuilder::new().exactly(1).of(self).literal()
    }
}

impl Pattern for String {
    fn literal(&self) -> Result<String, BuildError> {
        self.as_str().literal()
    }
}

impl Pattern for RegexBuilder {
    fn literal(&self) -> Result<String, BuildError> {
        RegexBuilder::literal(self)
    }
}

/// Fluent builder of regular expressions.
///
/// Each call describes one part of a fragment (how many, of what,
/// greedy or not, captured or not). A fragment is emitted as one group
/// token when the next fragment starts, when a standalone token
/// (anchor, lookahead) is appended, or when the pattern is rendered.
///
/// e.g.
///
/// ```
/// use regex_builder::RegexBuilder;
///
/// let builder = RegexBuilder::new()
///     .start_of_input()
///     .exactly(3).digits()
///     .then("-")
///     .exactly(4).digits()
///     .end_of_input();
///
/// let re = builder.regex().unwrap();
/// assert!(re.is_match("555-1234").unwrap());
/// assert!(!re.is_match("5551234").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegexBuilder {
    // emitted tokens, concatenated in order when rendering
    tokens: Vec<String>,

    // the fragment being described
    fragment: Fragment,

    // the left branch stored by `either`, waiting for `or`
    either: Option<String>,

    options: Options,
    error: Option<BuildError>,
}

impl RegexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the pattern text.
    ///
    /// The pending fragment is rendered as if it had been flushed,
    /// the builder itself is left untouched, so rendering twice
    /// yields the same text.
    pub fn literal(&self) -> Result<String, BuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut literal = self.tokens.concat();
        if let Some(token) = self.fragment.to_token() {
            literal.push_str(&token);
        }
        Ok(literal)
    }

    /// Compile the rendered pattern with the current options.
    pub fn regex(&self) -> Result<Regex, Error> {
        let literal = self.literal()?;
        compile(&literal, self.options)
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn ignore_case(mut self) -> Self {
        self.options.case_insensitive = true;
        self
    }

    pub fn multi_line(mut self) -> Self {
        self.options.multi_line = true;
        self
    }

    // Emit the pending fragment, if it has content, and start a new one.
    fn flush(mut self) -> Self {
        if let Some(token) = self.fragment.to_token() {
            tracing::trace!(token = %token, "flush fragment");
            self.tokens.push(token);
            self.fragment = Fragment::default();
        }
        self
    }

    fn push_token(mut self, token: String) -> Self {
        tracing::trace!(token = %token, "append token");
        self.tokens.push(token);
        self
    }

    // Record a misuse, keeping the first one.
    fn fail(mut self, error: BuildError) -> Self {
        if self.error.is_none() {
            tracing::warn!(%error, "pattern construction failed");
            self.error = Some(error);
        }
        self
    }

    pub(crate) fn set_content(mut self, content: Content) -> Self {
        self.fragment.content = Some(content);
        self
    }

    // A quantity has been set for a fragment whose content is still to come.
    pub(crate) fn awaits_content(&self) -> bool {
        self.fragment.quantity != Quantity::None && self.fragment.is_empty()
    }

    // Set the content to the rendered text of another pattern.
    pub(crate) fn set_sub_pattern<P: Pattern + ?Sized>(self, pattern: &P) -> Self {
        match pattern.literal() {
            Ok(literal) => self.set_content(Content::SubPattern(literal)),
            Err(error) => self.fail(error),
        }
    }

    // Quantity

    pub fn exactly(self, n: usize) -> Self {
        let mut builder = self.flush();
        builder.fragment.quantity = Quantity::Exactly(n);
        builder
    }

    pub fn min(self, n: usize) -> Self {
        let mut builder = self.flush();
        builder.fragment.quantity = builder.fragment.quantity.with_min(n);
        builder
    }

    pub fn max(self, n: usize) -> Self {
        let mut builder = self.flush();
        builder.fragment.quantity = builder.fragment.quantity.with_max(n);
        builder
    }

    // Content

    /// Match the given string literally.
    ///
    /// An empty string is still a content, it renders an empty group.
    pub fn of(self, s: &str) -> Self {
        self.set_content(Content::Literal(escape_outside_char_class(s)))
    }

    pub fn of_any(self) -> Self {
        self.set_content(Content::AnyChar)
    }

    /// Match the text captured by the group with the given index.
    ///
    /// The index is emitted as is, `0` included, and checked by the engine.
    pub fn of_group(self, index: usize) -> Self {
        self.set_content(Content::BackReference(index))
    }

    /// Match any one of the given chars.
    pub fn from(self, chars: impl AsRef<str>) -> Self {
        self.set_content(Content::CharClass(escape_inside_char_class(
            chars.as_ref(),
        )))
    }

    pub fn from_chars(self, chars: &[char]) -> Self {
        self.from(chars.iter().collect::<String>())
    }

    /// Match any char except the given chars.
    pub fn not_from(self, chars: impl AsRef<str>) -> Self {
        self.set_content(Content::NegatedCharClass(escape_inside_char_class(
            chars.as_ref(),
        )))
    }

    pub fn not_from_chars(self, chars: &[char]) -> Self {
        self.not_from(chars.iter().collect::<String>())
    }

    /// Match another pattern, e.g. `.min(2).like(&other)`.
    pub fn like<P: Pattern + ?Sized>(self, pattern: &P) -> Self {
        self.set_sub_pattern(pattern)
    }

    // Modifiers

    /// Make the quantifier of the current fragment non-greedy.
    pub fn reluctantly(mut self) -> Self {
        self.fragment.reluctant = true;
        self
    }

    /// Capture the current fragment instead of only grouping it.
    pub fn as_group(mut self) -> Self {
        self.fragment.capturing = true;
        self
    }

    // Anchors

    /// Note that the pending fragment is NOT emitted first, it
    /// ends up after the anchor.
    pub fn start_of_input(self) -> Self {
        self.push_token("(?:^)".to_owned())
    }

    pub fn start_of_line(self) -> Self {
        self.multi_line().start_of_input()
    }

    pub fn end_of_input(self) -> Self {
        self.flush().push_token("(?:$)".to_owned())
    }

    pub fn end_of_line(self) -> Self {
        self.multi_line().end_of_input()
    }

    // Assertions

    pub fn ahead<P: Pattern + ?Sized>(self, pattern: &P) -> Self {
        let builder = self.flush();
        match pattern.literal() {
            Ok(literal) => builder.push_token(format!("(?={})", literal)),
            Err(error) => builder.fail(error),
        }
    }

    pub fn not_ahead<P: Pattern + ?Sized>(self, pattern: &P) -> Self {
        let builder = self.flush();
        match pattern.literal() {
            Ok(literal) => builder.push_token(format!("(?!{})", literal)),
            Err(error) => builder.fail(error),
        }
    }

    // Alternation

    /// Start an alternation, the branch is emitted by the following `or`.
    pub fn either<P: Pattern + ?Sized>(self, pattern: &P) -> Self {
        let mut builder = self.flush();
        match pattern.literal() {
            Ok(literal) => {
                builder.either = Some(literal);
                builder
            }
            Err(error) => builder.fail(error),
        }
    }

    /// Complete an alternation.
    ///
    /// The pending fragment, if it has content, is emitted first.
    ///
    /// After `either(a)`, appends `(?:(?:a)|(?:b))`. Otherwise the last
    /// emitted token becomes the left branch, so `.then("a").or("b")` turns
    /// `(?:(?:a){1})` into `(?:(?:a){1}|(?:b))`. This also allows chaining
    /// `or` several times.
    ///
    /// Calling it with no emitted token and no `either` is an error.
    pub fn or<P: Pattern + ?Sized>(self, pattern: &P) -> Self {
        let mut builder = self.flush();

        let branch = match pattern.literal() {
            Ok(literal) => literal,
            Err(error) => return builder.fail(error),
        };

        builder = match builder.either.take() {
            Some(left) => builder.push_token(format!("(?:(?:{})|(?:{}))", left, branch)),
            None => match builder.tokens.pop() {
                Some(last) => {
                    // every token is a group, reopen it to append the branch
                    let opened = last.strip_suffix(')').unwrap_or(&last);
                    let merged = format!("{}|(?:{}))", opened, branch);
                    builder.push_token(merged)
                }
                None => builder.fail(BuildError::DanglingAlternation),
            },
        };

        builder.fragment = Fragment::default();
        builder
    }
}
