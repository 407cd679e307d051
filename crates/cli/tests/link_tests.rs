// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use plotio_cli::commands::send;
use plotio_cli::link::Link;

/// Byte stream standing in for the firmware side of the serial link:
/// responses are scripted up front, everything the host writes is captured.
struct ScriptedPort {
    responses: io::Cursor<Vec<u8>>,
    written: Vec<u8>,
}

impl ScriptedPort {
    fn new(responses: &str) -> Self {
        ScriptedPort {
            responses: io::Cursor::new(responses.as_bytes().to_vec()),
            written: Vec::new(),
        }
    }
}

impl Read for ScriptedPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.responses.read(buf)?;
        if n == 0 {
            // Serial reads never hit EOF; they time out.
            return Err(io::Error::new(io::ErrorKind::TimedOut, "read timeout"));
        }
        Ok(n)
    }
}

impl Write for ScriptedPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn send_frames_line_with_newline_and_reads_reply() {
    let mut link = Link::new(ScriptedPort::new("ok\n"));
    let response = link.send("G28").unwrap();
    assert_eq!(response, "ok");
    assert_eq!(link.into_inner().written, b"G28\n".to_vec());
}

#[test]
fn silent_firmware_yields_empty_response() {
    let mut link = Link::new(ScriptedPort::new(""));
    let response = link.send("G1 X10").unwrap();
    assert_eq!(response, "");
    assert_eq!(link.into_inner().written, b"G1 X10\n".to_vec());
}

#[test]
fn responses_are_trimmed_and_consumed_in_order() {
    let mut link = Link::new(ScriptedPort::new("ok 0\r\nbusy\n"));
    assert_eq!(link.send("G28").unwrap(), "ok 0");
    assert_eq!(link.send("G1 X5").unwrap(), "busy");
}

#[test]
fn stream_skips_blanks_and_comments() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "G28 ; home first\n\n; pen up\nG1 X10 Y10\nG92 X0 Y0 Z0\n"
    )
    .unwrap();

    let reader = BufReader::new(File::open(file.path()).unwrap());
    let mut link = Link::new(ScriptedPort::new("ok\nok\nok\n"));

    let (sent, skipped) = send::stream(&mut link, reader.lines(), false).unwrap();
    assert_eq!((sent, skipped), (3, 2));

    let written = link.into_inner().written;
    assert_eq!(written, b"G28\nG1 X10 Y10\nG92 X0 Y0 Z0\n".to_vec());
}

#[test]
fn stream_carries_on_when_replies_dry_up() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "G28\nG1 X1\n").unwrap();

    let reader = BufReader::new(File::open(file.path()).unwrap());
    // Only the first line gets an answer; the second times out.
    let mut link = Link::new(ScriptedPort::new("ok\n"));

    let (sent, skipped) = send::stream(&mut link, reader.lines(), false).unwrap();
    assert_eq!((sent, skipped), (2, 0));
}

#[test]
fn empty_file_sends_nothing() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let reader = BufReader::new(File::open(file.path()).unwrap());
    let mut link = Link::new(ScriptedPort::new(""));

    let (sent, skipped) = send::stream(&mut link, reader.lines(), false).unwrap();
    assert_eq!((sent, skipped), (0, 0));
    assert!(link.into_inner().written.is_empty());
}
