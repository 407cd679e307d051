// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
//! Wiring override files.

use std::fs;
use std::path::Path;

use thiserror::Error;

use plotio::{PinError, PinMap};

#[derive(Error, Debug)]
pub enum WiringError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid wiring file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bad wiring: {0}")]
    Invalid(PinError),
}

/// Load a wiring override of the shape
/// `{"x":[2,3,4,5],"y":[6,7,8,9],"z":[10,11,12,13]}` and validate it.
pub fn load(path: &Path) -> Result<PinMap, WiringError> {
    let text = fs::read_to_string(path)?;
    let map: PinMap = serde_json::from_str(&text)?;
    map.validate().map_err(WiringError::Invalid)?;
    Ok(map)
}
