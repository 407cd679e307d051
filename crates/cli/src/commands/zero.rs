use plotio::gcode;

use crate::link;

pub fn run(port: &str) -> anyhow::Result<()> {
    let mut link = link::open_serial(port)?;
    let response = link.send(gcode::SET_ZERO)?;
    if !response.is_empty() {
        println!(">> {}", response);
    }
    println!("Work origin reset ({}).", gcode::SET_ZERO);
    Ok(())
}
