// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
//! Pin assignments for the three stepper axes.
//!
//! The twelve constants below are the single source of truth for the
//! physical wiring; consuming code refers to pins through these names (or
//! through a [`PinMap`]) and never through literal numbers, so rewiring the
//! machine means editing only this module.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{COILS_PER_AXIS, PIN_MAX, PIN_MIN};
use crate::error::{PinError, PinResult};

// X-axis coil pins
pub const X1: u8 = 2;
pub const X2: u8 = 3;
pub const X3: u8 = 4;
pub const X4: u8 = 5;

// Y-axis coil pins
pub const Y1: u8 = 6;
pub const Y2: u8 = 7;
pub const Y3: u8 = 8;
pub const Y4: u8 = 9;

// Z-axis coil pins
pub const Z1: u8 = 10;
pub const Z2: u8 = 11;
pub const Z3: u8 = 12;
pub const Z4: u8 = 13;

/// One of the three motion axes, in fixed X, Y, Z order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the four coil wires of a stepper motor, numbered 1..=4 on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coil {
    A,
    B,
    C,
    D,
}

impl Coil {
    pub const ALL: [Coil; 4] = [Coil::A, Coil::B, Coil::C, Coil::D];

    /// Zero-based position within the axis.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based wire number as printed on the silkscreen and in the names.
    pub fn wire(self) -> u8 {
        self as u8 + 1
    }
}

/// A board digital pin index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pin(pub u8);

impl Pin {
    /// True if the pin lies in the usable digital range of the board.
    pub const fn is_usable(self) -> bool {
        self.0 >= PIN_MIN && self.0 <= PIN_MAX
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Symbolic name of one coil pin: axis letter plus wire number ("X1".."Z4").
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinName {
    pub axis: Axis,
    pub coil: Coil,
}

impl PinName {
    /// All twelve names, in X1..Z4 order.
    pub const ALL: [PinName; 12] = {
        let mut all = [PinName { axis: Axis::X, coil: Coil::A }; 12];
        let axes = Axis::ALL;
        let coils = Coil::ALL;
        let mut i = 0;
        while i < 12 {
            all[i] = PinName { axis: axes[i / 4], coil: coils[i % 4] };
            i += 1;
        }
        all
    };

    /// Parse one of the twelve spellings, case-insensitive.
    pub fn parse(s: &str) -> PinResult<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(PinError::UnknownName);
        }
        let axis = match bytes[0].to_ascii_uppercase() {
            b'X' => Axis::X,
            b'Y' => Axis::Y,
            b'Z' => Axis::Z,
            _ => return Err(PinError::UnknownName),
        };
        let coil = match bytes[1] {
            b'1' => Coil::A,
            b'2' => Coil::B,
            b'3' => Coil::C,
            b'4' => Coil::D,
            _ => return Err(PinError::UnknownName),
        };
        Ok(PinName { axis, coil })
    }
}

impl fmt::Display for PinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis.letter(), self.coil.wire())
    }
}

/// The four coil pins of one axis, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CoilPins {
    pins: [Pin; COILS_PER_AXIS],
}

impl CoilPins {
    pub const fn new(pins: [u8; COILS_PER_AXIS]) -> Self {
        CoilPins {
            pins: [Pin(pins[0]), Pin(pins[1]), Pin(pins[2]), Pin(pins[3])],
        }
    }

    pub fn get(&self, coil: Coil) -> Pin {
        self.pins[coil.index()]
    }

    pub fn as_array(&self) -> [Pin; COILS_PER_AXIS] {
        self.pins
    }
}

/// The full twelve-pin assignment: one [`CoilPins`] per axis.
///
/// Built once, never mutated. [`PinMap::default`] reproduces the stock
/// wiring; a custom map must pass [`PinMap::validate`] before use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinMap {
    pub x: CoilPins,
    pub y: CoilPins,
    pub z: CoilPins,
}

impl PinMap {
    /// The stock wiring.
    pub const DEFAULT: PinMap = PinMap::new([X1, X2, X3, X4], [Y1, Y2, Y3, Y4], [Z1, Z2, Z3, Z4]);

    pub const fn new(
        x: [u8; COILS_PER_AXIS],
        y: [u8; COILS_PER_AXIS],
        z: [u8; COILS_PER_AXIS],
    ) -> Self {
        PinMap {
            x: CoilPins::new(x),
            y: CoilPins::new(y),
            z: CoilPins::new(z),
        }
    }

    pub fn coils(&self, axis: Axis) -> &CoilPins {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn pin(&self, name: PinName) -> Pin {
        self.coils(name.axis).get(name.coil)
    }

    /// All twelve assignments in X1..Z4 order.
    pub fn pins(&self) -> impl Iterator<Item = (PinName, Pin)> + '_ {
        PinName::ALL.iter().map(move |name| (*name, self.pin(*name)))
    }

    /// Checks the wiring invariants: every pin usable, no pin shared.
    pub fn validate(&self) -> PinResult<()> {
        for (name, pin) in self.pins() {
            if !pin.is_usable() {
                return Err(PinError::OutOfRange { name, pin });
            }
        }

        // Pairwise scan; 12 entries, so O(n^2) is fine.
        let names = PinName::ALL;
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                let (a, b) = (names[i], names[j]);
                if self.pin(a) == self.pin(b) {
                    return Err(PinError::Duplicate { a, b, pin: self.pin(a) });
                }
            }
        }

        Ok(())
    }
}

impl Default for PinMap {
    fn default() -> Self {
        PinMap::DEFAULT
    }
}
