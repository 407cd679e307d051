// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
//! Line-level G-code handling for the host sender.
//!
//! The firmware link is line-oriented and the host treats G-code as opaque
//! text: no parsing of words, no coordinate state. The only processing is
//! deciding whether a line is worth sending at all.

/// Resets the work origin on all three axes.
pub const SET_ZERO: &str = "G92 X0 Y0 Z0";

/// Prepare a raw file line for the wire.
///
/// Trims surrounding whitespace and strips a trailing `;` comment. Returns
/// `None` when nothing transmittable remains (blank or comment-only line).
pub fn clean(line: &str) -> Option<&str> {
    let line = match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}
