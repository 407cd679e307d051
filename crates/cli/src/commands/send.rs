use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use plotio::config::INTER_LINE_DELAY_MS;
use plotio::gcode;

use crate::link::{self, Link};

pub fn run(file: &Path, port: &str) -> anyhow::Result<()> {
    let reader = BufReader::new(File::open(file)?);
    let mut link = link::open_serial(port)?;

    let (sent, skipped) = stream(&mut link, reader.lines(), true)?;

    println!("\nDone: {} lines sent, {} skipped.\n", sent, skipped);
    Ok(())
}

/// Stream G-code lines through a link, one response per line.
///
/// Blank and comment-only lines are skipped. When `throttle` is set, each
/// line is followed by the standard inter-line delay so the firmware's
/// single-line buffer is never overrun. Returns (sent, skipped).
pub fn stream<T: Read + Write>(
    link: &mut Link<T>,
    lines: impl Iterator<Item = std::io::Result<String>>,
    throttle: bool,
) -> anyhow::Result<(usize, usize)> {
    let mut sent = 0usize;
    let mut skipped = 0usize;

    for line in lines {
        let line = line?;
        let Some(cmd) = gcode::clean(&line) else {
            skipped += 1;
            continue;
        };

        let response = link.send(cmd)?;
        if !response.is_empty() {
            println!(">> {}", response);
        }
        tracing::debug!(cmd, response = %response, "line sent");
        sent += 1;

        if throttle {
            thread::sleep(Duration::from_millis(INTER_LINE_DELAY_MS));
        }
    }

    Ok((sent, skipped))
}
