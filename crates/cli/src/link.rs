// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
//! Line-oriented link to the plotter firmware.
//!
//! The protocol is one command line out, one response line back. The
//! firmware may stay silent; a read timeout yields an empty response and the
//! caller carries on.

use std::io::{BufRead, BufReader, ErrorKind, Read, Write};
use std::thread;
use std::time::Duration;

use thiserror::Error;

use plotio::config::{BAUD_RATE, READ_TIMEOUT_MS, RESET_SETTLE_MS};

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LinkError>;

/// Handshake layer over any byte stream (a serial port in production, an
/// in-memory stream in tests).
pub struct Link<T: Read + Write> {
    reader: BufReader<T>,
}

impl<T: Read + Write> Link<T> {
    pub fn new(stream: T) -> Self {
        Link {
            reader: BufReader::new(stream),
        }
    }

    /// Send one line and wait for the response line the firmware prints for
    /// it. Returns an empty string when the read times out.
    pub fn send(&mut self, line: &str) -> Result<String> {
        let stream = self.reader.get_mut();
        stream.write_all(line.as_bytes())?;
        stream.write_all(b"\n")?;
        stream.flush()?;

        let mut response = String::new();
        match self.reader.read_line(&mut response) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::TimedOut => {
                tracing::debug!(line, "no response within timeout");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(response.trim().to_string())
    }

    pub fn into_inner(self) -> T {
        self.reader.into_inner()
    }
}

pub type SerialLink = Link<Box<dyn serialport::SerialPort>>;

/// Open the firmware link on `port`.
///
/// Opening the port pulls DTR and auto-resets the board, so the bootloader
/// gets [`RESET_SETTLE_MS`] to come back up before the link is handed out.
pub fn open_serial(port: &str) -> Result<SerialLink> {
    let stream = serialport::new(port, BAUD_RATE)
        .timeout(Duration::from_millis(READ_TIMEOUT_MS))
        .open()?;
    tracing::info!(port, baud = BAUD_RATE, "port open, waiting for board reset");
    thread::sleep(Duration::from_millis(RESET_SETTLE_MS));
    Ok(Link::new(stream))
}
