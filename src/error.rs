// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// Misuse of the builder detected while the pattern is being assembled.
///
/// Builder calls are chained by value, so a misuse is recorded in the
/// builder and reported when the pattern is rendered. The first one wins.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum BuildError {
    #[error("`or` has no left branch: nothing was emitted before it and no `either` is pending")]
    DanglingAlternation,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    // rejection from the regex engine, passed through as is
    #[error(transparent)]
    Engine(#[from] fancy_regex::Error),
}
