//! Command-line interface implementation

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::compose::{select_layers, LoadPhase, RenderState};
use crate::models::CardProtoData;
use crate::proto::{normalize, RawProtoPayload};
use crate::quality::resolve_quality_name;
use crate::sizing::{BoxSize, SizeUnits};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Cardface - inspect card payload normalization and layer selection
#[derive(Parser)]
#[command(name = "cardface")]
#[command(about = "Cardface - inspect card payload normalization and layer selection")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a card payload and print the strict record as JSON
    Normalize {
        /// Input JSON file containing one card payload
        input: PathBuf,

        /// Treat the input as caller-supplied data (lenient mode) instead of
        /// a raw API payload (strict envelope unwrapping)
        #[arg(long)]
        direct: bool,
    },

    /// Print the layer stack a card would render, as JSON
    Layers {
        /// Input JSON file containing one raw card payload
        input: PathBuf,

        /// Finish quality tier
        #[arg(short, long, default_value = "1")]
        quality: u8,

        /// Use the legacy 8-tier quality mapping
        #[arg(long)]
        legacy: bool,

        /// Host content-box width in pixels
        #[arg(long, default_value = "0")]
        width: f64,

        /// Host content-box height in pixels
        #[arg(long, default_value = "0")]
        height: f64,

        /// Responsive-size hint forwarded to image layers
        #[arg(long, default_value = "")]
        sizes: String,

        /// Show the loading-state stack instead of the loaded one
        #[arg(long)]
        loading: bool,
    },

    /// Resolve a quality tier to its name
    Quality {
        /// Finish quality tier
        tier: u8,

        /// Use the legacy 8-tier quality mapping
        #[arg(long)]
        legacy: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { input, direct } => run_normalize(&input, direct),
        Commands::Layers { input, quality, legacy, width, height, sizes, loading } => {
            run_layers(&input, quality, legacy, width, height, &sizes, loading)
        }
        Commands::Quality { tier, legacy } => run_quality(tier, legacy),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(input: &Path) -> Result<T, ExitCode> {
    let file = match File::open(input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        eprintln!("Error: Cannot parse '{}': {}", input.display(), e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Execute the normalize command
fn run_normalize(input: &Path, direct: bool) -> ExitCode {
    let data = if direct {
        // Lenient mode: missing fields default silently.
        match read_json::<CardProtoData>(input) {
            Ok(data) => data,
            Err(code) => return code,
        }
    } else {
        let raw = match read_json::<RawProtoPayload>(input) {
            Ok(raw) => raw,
            Err(code) => return code,
        };
        match normalize(&raw) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    };

    match serde_json::to_string_pretty(&data) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the layers command
fn run_layers(
    input: &Path,
    quality: u8,
    legacy: bool,
    width: f64,
    height: f64,
    sizes: &str,
    loading: bool,
) -> ExitCode {
    let quality_name = match resolve_quality_name(quality, legacy) {
        Ok(name) => name,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let raw = match read_json::<RawProtoPayload>(input) {
        Ok(raw) => raw,
        Err(code) => return code,
    };
    let data = match normalize(&raw) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let phase = if loading { LoadPhase::Loading } else { LoadPhase::Ready };
    let layers = select_layers(&RenderState {
        phase: &phase,
        data: &data,
        quality_name,
        size_units: SizeUnits::from_box(BoxSize::new(width, height)),
        responsive_sizes: sizes,
    });

    match serde_json::to_string_pretty(&layers) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the quality command
fn run_quality(tier: u8, legacy: bool) -> ExitCode {
    match resolve_quality_name(tier, legacy) {
        Ok(name) => {
            println!("{}", name);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_INVALID_ARGS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
