// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_builder::RegexBuilder;

pub fn main() {
    // equivalent to `^\d{4}-\d{2}-\d{2}$`
    let re = RegexBuilder::new()
        .start_of_input()
        .exactly(4)
        .digits()
        .then("-")
        .exactly(2)
        .digits()
        .then("-")
        .exactly(2)
        .digits()
        .end_of_input()
        .regex()
        .unwrap();

    println!("{}", re.is_match("2025-04-22").unwrap()); // should be true
    println!("{}", re.is_match("04-22").unwrap()); // should be false

    // case insensitive keywords, one per line
    let re = RegexBuilder::new()
        .start_of_line()
        .either("select")
        .or("insert")
        .or("delete")
        .end_of_line()
        .ignore_case()
        .regex()
        .unwrap();

    println!("{}", re.is_match("-- query\nSELECT\n").unwrap()); // should be true
    println!("{}", re.is_match("selection").unwrap()); // should be false
}
