//! modelhdr CLI: model binary -> C header.

mod args;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::debug;
use modelhdr_core::prelude::*;

use crate::args::{Cli, Commands};

fn main() -> ExitCode {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { input, output, name, config, policy, in_place, stats } => {
            let policy = if in_place { Some(WritePolicy::InPlace) } else { policy };
            cmd_convert(config.as_deref(), input, output, name, policy, stats)
        }
        Commands::Verify { header, against } => cmd_verify(&header, against.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ConverterConfig> {
    let base = match path {
        Some(p) => {
            let text = fs::read_to_string(p).with_context(|| format!("reading config {}", p.display()))?;
            ConverterConfig::from_json(&text).with_context(|| format!("parsing config {}", p.display()))?
        }
        None => ConverterConfig::default(),
    };
    base.with_env().map_err(|e| anyhow!(e))
}

fn cmd_convert(
    config: Option<&Path>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    name: Option<String>,
    policy: Option<WritePolicy>,
    stats: bool,
) -> anyhow::Result<()> {
    let mut cfg = load_config(config)?;
    if let Some(p) = input {
        cfg.input_file = p;
    }
    if let Some(p) = output {
        cfg.output_file = p;
    }
    if let Some(n) = name {
        cfg.variable_name = n;
    }
    if let Some(p) = policy {
        cfg.write_policy = p;
    }
    debug!("resolved config: {:?}", cfg);

    let snapshot = convert_with_config(&cfg)?;

    println!("Header file {} created successfully.", cfg.output_file.display());
    if stats {
        println!("{}", snapshot.to_json()?);
    }
    Ok(())
}

fn cmd_verify(header: &Path, against: Option<&Path>) -> anyhow::Result<()> {
    let decoded = verify_header_file(header, against)?;
    println!("OK {}: {} bytes", decoded.identifier, decoded.bytes.len());
    Ok(())
}
