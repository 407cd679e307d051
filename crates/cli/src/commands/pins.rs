use std::path::PathBuf;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use plotio::config::{PIN_MAX, PIN_MIN};
use plotio::PinMap;

use crate::wiring;

pub fn run(wiring_path: Option<PathBuf>) -> anyhow::Result<()> {
    let (map, source) = match wiring_path {
        Some(path) => {
            let map = wiring::load(&path)?;
            (map, path.display().to_string())
        }
        None => (PinMap::default(), "stock wiring".to_string()),
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Axis", "Wire", "Pin"]);

    for (name, pin) in map.pins() {
        table.add_row(vec![
            name.to_string(),
            name.axis.to_string(),
            name.coil.wire().to_string(),
            pin.to_string(),
        ]);
    }

    println!("\nPin Map ({source})\n");
    println!("{table}\n");

    match map.validate() {
        Ok(()) => {
            println!("✅ wiring OK: 12 pins, pairwise distinct, within {PIN_MIN}..={PIN_MAX}\n");
            Ok(())
        }
        Err(e) => {
            println!("❌ wiring invalid: {e}\n");
            Err(anyhow::anyhow!("{e}"))
        }
    }
}
