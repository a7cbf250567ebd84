// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use fancy_regex::Regex;

use crate::error::Error;

/// Matching options handed to the regex engine.
///
/// Options never change the rendered pattern text, they are only
/// consulted when the pattern is compiled.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Options {
    pub case_insensitive: bool,

    // `^` and `$` match at line boundaries instead of
    // only at the start and end of the text.
    pub multi_line: bool,
}

impl Options {
    /// The inline flag group that enables these options in the engine,
    /// empty when no option is set.
    pub fn inline_flags(&self) -> &'static str {
        match (self.case_insensitive, self.multi_line) {
            (false, false) => "",
            (true, false) => "(?i)",
            (false, true) => "(?m)",
            (true, true) => "(?im)",
        }
    }
}

/// Compile a rendered pattern with the regex engine.
///
/// The pattern is not checked here, any rejection is the engine's own error.
pub fn compile(literal: &str, options: Options) -> Result<Regex, Error> {
    let pattern = format!("{}{}", options.inline_flags(), literal);

    tracing::debug!(
        pattern = %pattern,
        case_insensitive = options.case_insensitive,
        multi_line = options.multi_line,
        "compiling pattern"
    );

    Ok(Regex::new(&pattern)?)
}
