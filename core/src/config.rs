//! Converter configuration.
//! Defaults mirror the brightness-model export. Layers, lowest first:
//! defaults, optional JSON file, `MODELHDR_*` environment, CLI flags.
use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{env_keys, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_VARIABLE_NAME};
use crate::io::WritePolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Binary artifact to embed.
    pub input_file: PathBuf,
    /// Header file to create or replace.
    pub output_file: PathBuf,
    /// Array name; also drives the guard and `_len` names.
    pub variable_name: String,
    pub write_policy: WritePolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            variable_name: DEFAULT_VARIABLE_NAME.to_string(),
            write_policy: WritePolicy::Atomic,
        }
    }
}

impl ConverterConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::default().with_env()
    }

    /// `self` overridden by the process environment.
    pub fn with_env(self) -> Result<Self, String> {
        self.with_lookup(|key| env::var(key).ok())
    }

    /// `self` overridden by whatever `lookup` returns for each `MODELHDR_*` key.
    /// Empty values are ignored.
    pub fn with_lookup<F>(self, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = self;

        if let Some(v) = get(env_keys::INPUT) {
            cfg.input_file = PathBuf::from(v);
        }
        if let Some(v) = get(env_keys::OUTPUT) {
            cfg.output_file = PathBuf::from(v);
        }
        if let Some(v) = get(env_keys::NAME) {
            cfg.variable_name = v;
        }
        if let Some(v) = get(env_keys::WRITE_POLICY) {
            cfg.write_policy = v
                .parse()
                .map_err(|e| format!("{}: {}", env_keys::WRITE_POLICY, e))?;
        }
        Ok(cfg)
    }

    /// Parse a JSON config document; missing fields keep their defaults.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
