use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gatecount_rs::{CounterConfig, GateCounter, load_scene};

#[derive(Parser, Debug)]
#[command(name = "gatecount", about = "Count gate crossings in a detection dump")]
struct Args {
    /// Detection document produced by the camera pipeline
    input: PathBuf,
    /// Camera key under eventSpecific.nnDetect
    #[arg(long)]
    camera: String,
    /// Drop the implicit closing edge between each track's last and
    /// first points (corrected variant)
    #[arg(long)]
    open_path: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    let scene = load_scene(&args.input, &args.camera)?;
    let config = CounterConfig {
        closed_path: !args.open_path,
    };
    let report = GateCounter::new(config).analyze(&scene);
    print!("{report}");
    Ok(())
}
