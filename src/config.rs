//! Game configuration and command-line arguments.
//!
//! Settings come from `~/.dungeon-dice/config.json` (or a path passed with
//! `--config`) and are then overridden by command-line flags. A missing
//! config file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_DIR_NAME: &str = ".dungeon-dice";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_LOG_FILTER: &str = "dungeon_dice=warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the dice (None = seeded from entropy)
    pub seed: Option<u64>,

    /// tracing-subscriber filter used when RUST_LOG is unset
    pub log_filter: String,

    /// Whether to roll a d6 for the player at startup
    pub intro_roll: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            intro_roll: true,
        }
    }
}

impl GameConfig {
    /// Default config location, `~/.dungeon-dice/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config at `path`, falling back to defaults if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves the config for a run: file first, then flag overrides.
    pub fn resolve(options: &RunOptions) -> Result<Self, ConfigError> {
        let path = options.config_path.clone().or_else(Self::default_path);
        let mut config = match path {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        if options.seed.is_some() {
            config.seed = options.seed;
        }
        Ok(config)
    }
}

/// Flags accepted by a normal run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub seed: Option<u64>,
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
    Version,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--seed" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                let value = value.as_ref();
                let seed = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(value.to_string()))?;
                options.seed = Some(seed);
            }
            "--config" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--config"))?;
                options.config_path = Some(PathBuf::from(value.as_ref()));
            }
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }

    Ok(Command::Run(options))
}

pub fn usage() -> String {
    [
        "Dungeon Dice - Text-Based Role-Playing Game",
        "",
        "Usage: dungeon-dice [options]",
        "",
        "Options:",
        "  --seed <N>       Seed the dice for a reproducible session",
        "  --config <PATH>  Read settings from PATH instead of ~/.dungeon-dice/config.json",
        "  --version        Show version information",
        "  --help           Show this help message",
    ]
    .join("\n")
}
