use plotio::gcode;

use crate::link;

pub fn run(port: &str, line: &str) -> anyhow::Result<()> {
    let Some(cmd) = gcode::clean(line) else {
        anyhow::bail!("nothing to send: line is blank or comment-only");
    };

    let mut link = link::open_serial(port)?;
    let response = link.send(cmd)?;
    if !response.is_empty() {
        println!(">> {}", response);
    }
    Ok(())
}
