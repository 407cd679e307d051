// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
use crate::gcode;

#[test]
fn clean_trims_whitespace() {
    assert_eq!(gcode::clean("  G1 X10 Y5  \r"), Some("G1 X10 Y5"));
}

#[test]
fn clean_skips_blank_lines() {
    assert_eq!(gcode::clean(""), None);
    assert_eq!(gcode::clean("   \t"), None);
    assert_eq!(gcode::clean("\r\n"), None);
}

#[test]
fn clean_strips_trailing_comment() {
    assert_eq!(gcode::clean("G28 ; home all"), Some("G28"));
}

#[test]
fn clean_skips_comment_only_lines() {
    assert_eq!(gcode::clean("; pen up first"), None);
    assert_eq!(gcode::clean("   ;"), None);
}

#[test]
fn set_zero_matches_the_firmware_command() {
    assert_eq!(gcode::SET_ZERO, "G92 X0 Y0 Z0");
}
