// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
use std::io::Write as _;

use plotio::{Pin, PinName};
use plotio_cli::wiring::{self, WiringError};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn load_valid_override() {
    // X and Z swapped relative to the stock wiring.
    let file = write_temp(r#"{"x":[10,11,12,13],"y":[6,7,8,9],"z":[2,3,4,5]}"#);
    let map = wiring::load(file.path()).unwrap();

    assert_eq!(map.pin(PinName::parse("X1").unwrap()), Pin(10));
    assert_eq!(map.pin(PinName::parse("Z4").unwrap()), Pin(5));
    assert!(map.validate().is_ok());
}

#[test]
fn load_rejects_duplicate_pin() {
    let file = write_temp(r#"{"x":[2,3,4,5],"y":[6,7,8,2],"z":[10,11,12,13]}"#);
    let err = wiring::load(file.path()).unwrap_err();
    assert!(matches!(err, WiringError::Invalid(_)), "got {:?}", err);
}

#[test]
fn load_rejects_reserved_uart_pin() {
    let file = write_temp(r#"{"x":[0,3,4,5],"y":[6,7,8,9],"z":[10,11,12,13]}"#);
    let err = wiring::load(file.path()).unwrap_err();
    assert!(matches!(err, WiringError::Invalid(_)), "got {:?}", err);
}

#[test]
fn load_rejects_malformed_json() {
    let file = write_temp(r#"{"x":[2,3,4,5]"#);
    let err = wiring::load(file.path()).unwrap_err();
    assert!(matches!(err, WiringError::Parse(_)), "got {:?}", err);
}

#[test]
fn load_rejects_missing_axis() {
    let file = write_temp(r#"{"x":[2,3,4,5],"y":[6,7,8,9]}"#);
    let err = wiring::load(file.path()).unwrap_err();
    assert!(matches!(err, WiringError::Parse(_)), "got {:?}", err);
}
