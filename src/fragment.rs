// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// The repetition count of a fragment.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Quantity {
    /// A single occurrence, rendered without quantifier.
    #[default]
    None,
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
    Range(usize, usize),
}

impl Quantity {
    /// Set the lower bound, keeping an upper bound set earlier.
    pub fn with_min(self, min: usize) -> Self {
        match self {
            Quantity::Exactly(max) | Quantity::AtMost(max) | Quantity::Range(_, max) => {
                Quantity::Range(min, max)
            }
            Quantity::None | Quantity::AtLeast(_) => Quantity::AtLeast(min),
        }
    }

    /// Set the upper bound, keeping a lower bound set earlier.
    pub fn with_max(self, max: usize) -> Self {
        match self {
            Quantity::Exactly(min) | Quantity::AtLeast(min) | Quantity::Range(min, _) => {
                Quantity::Range(min, max)
            }
            Quantity::None | Quantity::AtMost(_) => Quantity::AtMost(max),
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::None => Ok(()),
            Quantity::Exactly(n) => write!(f, "{{{}}}", n),
            Quantity::AtLeast(min) => write!(f, "{{{},}}", min),
            Quantity::AtMost(max) => write!(f, "{{0,{}}}", max),
            Quantity::Range(min, max) if min == max => write!(f, "{{{}}}", min),
            Quantity::Range(min, max) => write!(f, "{{{},{}}}", min, max),
        }
    }
}

/// What a fragment matches.
///
/// Strings are stored already escaped (or already rendered, for
/// `SubPattern`), so displaying a content never escapes again.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Content {
    Literal(String),
    AnyChar,
    BackReference(usize),
    CharClass(String),
    NegatedCharClass(String),
    SubPattern(String),
}

impl Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Literal(s) => f.write_str(s),
            Content::AnyChar => f.write_str("."),
            Content::BackReference(index) => write!(f, "\\{}", index),
            Content::CharClass(s) => write!(f, "[{}]", s),
            Content::NegatedCharClass(s) => write!(f, "[^{}]", s),
            Content::SubPattern(s) => f.write_str(s),
        }
    }
}

/// The piece of pattern that is being described and not yet emitted.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Fragment {
    pub quantity: Quantity,
    pub content: Option<Content>,
    pub reluctant: bool,
    pub capturing: bool,
}

impl Fragment {
    /// A fragment without content has nothing to emit, even when
    /// a quantity or a modifier has been set.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Render the fragment into one group token, e.g.
    /// `(?:(?:a){2,})`, or `((?:a){2,}?)` when capturing and reluctant.
    pub fn to_token(&self) -> Option<String> {
        let content = self.content.as_ref()?;

        let capture_literal = if self.capturing { "" } else { "?:" };
        let reluctant_literal = if self.reluctant { "?" } else { "" };

        Some(format!(
            "({}(?:{}){}{})",
            capture_literal, content, self.quantity, reluctant_literal
        ))
    }
}
