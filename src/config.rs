// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
//! Board and link configuration constants.

/// Lowest usable digital pin on the target board (Uno pins 0/1 carry the UART).
pub const PIN_MIN: u8 = 2;

/// Highest digital pin on the target board.
pub const PIN_MAX: u8 = 13;

/// Number of coil wires per stepper motor.
pub const COILS_PER_AXIS: usize = 4;

/// Serial baud rate of the firmware link.
pub const BAUD_RATE: u32 = 115_200;

/// Milliseconds to wait after opening the port (board auto-resets on open).
pub const RESET_SETTLE_MS: u64 = 2_000;

/// Milliseconds between streamed G-code lines.
pub const INTER_LINE_DELAY_MS: u64 = 50;

/// Read timeout for a single response line, in milliseconds.
pub const READ_TIMEOUT_MS: u64 = 1_000;
