use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

/// Input list read when nothing else is configured
pub const DEFAULT_INPUT: &str = "./class_inst_list";

/// Config file picked up from the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "instgen.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the instruction list, relative to the working directory
    pub input: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid instgen configuration")
    }

    /// Read a config file that must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file `{}`", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in config file `{}`", path.display()))
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `config_path` must exist. Without one, `instgen.toml` in
    /// `working_dir` is used when present, otherwise the defaults apply.
    /// `input_override` replaces whatever input the file chose.
    pub fn resolve(
        config_path: Option<&Path>,
        input_override: Option<PathBuf>,
        working_dir: &Path,
    ) -> Result<Self> {
        let mut config = if let Some(path) = config_path {
            debug!("Using config file {:?}", path);
            Self::from_file(path)?
        } else {
            let implicit = working_dir.join(CONFIG_FILE_NAME);
            if implicit.is_file() {
                debug!("Using config file {:?}", implicit);
                Self::from_file(&implicit)?
            } else {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        if let Some(input) = input_override {
            debug!("Input overridden on the command line: {:?}", input);
            config.input = input;
        }

        debug!("Instruction list path: {:?}", config.input);
        Ok(config)
    }
}
