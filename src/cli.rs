//! The command-line surface and the pipeline it drives: load CSV, analyze,
//! render, report. Kept in the library so the whole run is exercisable from
//! integration tests; the binary only parses arguments and maps errors to an
//! exit code.

use std::path::PathBuf;

use clap::Parser;

use crate::analysis;
use crate::chart;
use crate::error::GamutResult;
use crate::gamut::Reference;
use crate::measurement;

/// Color Gamut Analyzer: compares measured display primaries against a
/// reference standard on the CIE 1931 chromaticity diagram.
#[derive(Debug, Parser)]
#[command(name = "analyze-gamut", version, about = "Color Gamut Analyzer")]
pub struct Args {
    /// Measurement CSV file (columns: Color, x, y; rows R, G, B, W)
    #[arg(long, value_name = "path")]
    pub inputcsv: PathBuf,

    /// Reference standard
    #[arg(long, value_enum, value_name = "gamut")]
    pub reference: Reference,

    /// Output plot filename (png/jpg/bmp/svg); opens a viewer if omitted
    #[arg(long, value_name = "path")]
    pub output: Option<PathBuf>,
}

/// Runs the whole analysis: one pass, no retries. The numeric report goes to
/// stdout whether the chart was saved to a file or shown interactively.
pub fn run(args: &Args) -> GamutResult<()> {
    let measurements = measurement::load_measurements_from_path(&args.inputcsv)?;
    let reference = args.reference.gamut();
    let result = analysis::analyze(&measurements, reference);

    match &args.output {
        Some(path) => {
            chart::render_chart(&measurements, reference, &result, path)?;
            log::info!("chart written to {}", path.display());
        }
        None => {
            let path = chart::show_chart(&measurements, reference, &result)?;
            log::info!("chart opened from {}", path.display());
        }
    }

    println!("\n{}", result);
    Ok(())
}
