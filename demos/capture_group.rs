// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_builder::RegexBuilder;

const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

pub fn main() {
    // equivalent to `#([\da-fA-F]{2})([\da-fA-F]{2})([\da-fA-F]{2})`
    let re = RegexBuilder::new()
        .then("#")
        .exactly(2)
        .from(HEX_DIGITS)
        .as_group()
        .exactly(2)
        .from(HEX_DIGITS)
        .as_group()
        .exactly(2)
        .from(HEX_DIGITS)
        .as_group()
        .regex()
        .unwrap();
    let text = "The color is #ffbb33 and the background is #bbdd99.";

    // capture groups once
    if let Some(m) = re.captures(text).unwrap() {
        println!("Found match: {}", m.get(0).unwrap().as_str());
        println!("Red: {}", m.get(1).unwrap().as_str());
        println!("Green: {}", m.get(2).unwrap().as_str());
        println!("Blue: {}", m.get(3).unwrap().as_str());
    } else {
        println!("No match found");
    }

    // capture groups all
    for m in re.captures_iter(text) {
        let m = m.unwrap();
        println!("Found match: {}", m.get(0).unwrap().as_str());
        println!("Red: {}", m.get(1).unwrap().as_str());
        println!("Green: {}", m.get(2).unwrap().as_str());
        println!("Blue: {}", m.get(3).unwrap().as_str());
    }

    // back reference: a doubled word
    let re = RegexBuilder::new()
        .min(1)
        .letters()
        .as_group()
        .then(" ")
        .exactly(1)
        .of_group(1)
        .regex()
        .unwrap();
    if let Some(m) = re.find("it is is fine").unwrap() {
        println!("Doubled: {}", m.as_str());
    }
}
