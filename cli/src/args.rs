use std::path::PathBuf;

use clap::{Parser, Subcommand};
use modelhdr_core::io::WritePolicy;

#[derive(Parser, Debug)]
#[command(name = "modelhdr")]
#[command(about = "Embed a model binary in a C header as a const byte array")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a binary file into a guarded C header
    Convert {
        /// Binary to embed [env: MODELHDR_INPUT, default: brightness_model.tflite]
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Header to create [env: MODELHDR_OUTPUT, default: brightness_model.h]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Array name [env: MODELHDR_NAME, default: brightness_model]
        #[arg(short, long)]
        name: Option<String>,

        /// Layered under env and flags: JSON file with ConverterConfig fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write policy: atomic or in-place [env: MODELHDR_WRITE_POLICY]
        #[arg(long, value_parser = parse_policy, conflicts_with = "in_place")]
        policy: Option<WritePolicy>,

        /// Shorthand for --policy in-place
        #[arg(long)]
        in_place: bool,

        /// Print the telemetry snapshot as JSON
        #[arg(long)]
        stats: bool,
    },

    /// Parse and validate an emitted header
    Verify {
        /// Header file to check
        header: PathBuf,

        /// Binary the payload must match
        #[arg(long)]
        against: Option<PathBuf>,
    },
}

fn parse_policy(s: &str) -> Result<WritePolicy, String> {
    s.parse()
}
