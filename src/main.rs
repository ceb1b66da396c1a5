//! Binary entry point: parse arguments, initialize logging, run the pipeline,
//! and map any failure to `Error: <message>` on stderr with exit code 1.

use clap::Parser;

use analyze_gamut::cli::{self, Args};

fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        // keep stdout clean for the numeric report
        builder.parse_filters("warn");
    }
    builder.try_init().ok();
}

fn main() {
    init_logging();
    let args = Args::parse();
    if let Err(err) = cli::run(&args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
