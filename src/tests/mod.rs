#[cfg(test)]
// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
pub mod gcode_tests;
