// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod alias;
mod builder;
mod error;
mod escape;
mod fragment;
mod options;

pub use builder::{Pattern, RegexBuilder};
pub use error::{BuildError, Error};
pub use escape::{escape_inside_char_class, escape_outside_char_class};
pub use options::Options;

pub use fancy_regex::Regex;
