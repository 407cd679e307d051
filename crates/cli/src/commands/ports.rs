use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serialport::SerialPortType;

pub fn run() -> anyhow::Result<()> {
    let ports = serialport::available_ports()?;

    if ports.is_empty() {
        println!("\nNo serial ports found.\n");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Port", "Type"]);

    for port in ports {
        let kind = match port.port_type {
            SerialPortType::UsbPort(info) => format!("USB {:04x}:{:04x}", info.vid, info.pid),
            SerialPortType::BluetoothPort => "Bluetooth".to_string(),
            SerialPortType::PciPort => "PCI".to_string(),
            SerialPortType::Unknown => "Unknown".to_string(),
        };
        table.add_row(vec![port.port_name, kind]);
    }

    println!("\nAvailable Serial Ports\n");
    println!("{table}\n");

    Ok(())
}
