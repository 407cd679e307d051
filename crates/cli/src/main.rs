use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plotio_cli::commands::{pins, ports, run as run_line, send, zero};

#[derive(Parser)]
#[command(name = "plotio")]
#[command(about = "Plotio host tools - stream G-code to the plotter over serial", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available serial ports
    Ports,
    /// Stream a G-code file to the plotter, line by line
    Send {
        /// G-code file (.gcode, .nc, plain text)
        file: PathBuf,

        /// Serial port of the plotter (e.g. /dev/ttyACM0, COM3)
        #[arg(long, short)]
        port: String,
    },
    /// Reset the work origin (sends G92 X0 Y0 Z0)
    Zero {
        /// Serial port of the plotter
        #[arg(long, short)]
        port: String,
    },
    /// Send a single G-code line and print the response
    Run {
        /// The line to send
        line: String,

        /// Serial port of the plotter
        #[arg(long, short)]
        port: String,
    },
    /// Show the active pin map and check the wiring invariants
    Pins {
        /// Optional JSON wiring override file
        #[arg(long)]
        wiring: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ports => ports::run(),
        Commands::Send { file, port } => send::run(&file, &port),
        Commands::Zero { port } => zero::run(&port),
        Commands::Run { line, port } => run_line::run(&port, &line),
        Commands::Pins { wiring } => pins::run(wiring),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "plotio=info,plotio_cli=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
