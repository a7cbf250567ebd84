// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_builder::RegexBuilder;

pub fn main() {
    // equivalent to `#[\da-fA-F]{6}`
    let builder = RegexBuilder::new().then("#").exactly(6).from("0123456789abcdefABCDEF");
    println!("Pattern: {}", builder.literal().unwrap());

    let re = builder.regex().unwrap();
    let text = "The color is #ffbb33 and the background is #bbdd99.";

    // find one
    if let Some(m) = re.find(text).unwrap() {
        println!("Found match: {}", m.as_str());
    } else {
        println!("No match found");
    }

    // find all
    for m in re.find_iter(text) {
        println!("Found match: {}", m.unwrap().as_str());
    }
}
