// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
#![no_std]

//! plotio: pin-map model and G-code line handling for a three-axis stepper plotter.

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod error;
pub mod gcode;
pub mod pins;

pub use error::{PinError, PinResult};
pub use pins::{Axis, Coil, CoilPins, Pin, PinMap, PinName};

#[cfg(test)]
pub mod tests;
