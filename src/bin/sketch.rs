//! Sketch Binary
//!
//! Loads a GeoJSON FeatureCollection, lists or edits its features,
//! and exports the result.

use anyhow::Context;
use clap::Parser;
use geofeed::sketch::EXPORT_FILE;
use geofeed::sketch::Edit;
use geofeed::sketch::Sketch;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "sketch", about = "Inspect and edit GeoJSON feature files")]
enum Command {
    /// List the features in a file.
    Inspect { file: PathBuf },
    /// Add points or remove features, then export.
    Edit {
        file: PathBuf,
        /// `point:LON,LAT` or `remove:INDEX`. Repeatable.
        #[arg(long = "edit", required = true)]
        edits: Vec<Edit>,
        #[arg(long, default_value = EXPORT_FILE)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    geofeed::log();
    match run(Command::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Inspect { file } => {
            let sketch = Sketch::load(&file).context("Invalid GeoJSON file!")?;
            println!("{} features in {}", sketch.len(), file.display());
            for (i, feature) in sketch.features().iter().enumerate() {
                println!(
                    "{:>3}. {:<10} {:<24} {} positions",
                    i,
                    feature.geometry.kind(),
                    feature.name().unwrap_or("-"),
                    feature.geometry.coords().count()
                );
            }
            Ok(())
        }
        Command::Edit {
            file,
            edits,
            output,
        } => {
            let mut sketch = Sketch::load(&file).context("Invalid GeoJSON file!")?;
            sketch.apply(edits)?;
            sketch.save(&output)
        }
    }
}
