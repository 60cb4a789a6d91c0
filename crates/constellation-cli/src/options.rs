//! Command-line and environment options.
//!
//! Resolution order for each setting: command-line flag, then environment
//! variable, then built-in default.

use std::path::{Path, PathBuf};

use constellation_layout::{ConfigError, ConstellationConfig, Size};
use thiserror::Error;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "CONSTELLATION_CONFIG";

/// Environment variable overriding the render width.
pub const WIDTH_ENV: &str = "CONSTELLATION_WIDTH";

/// Environment variable overriding the render height.
pub const HEIGHT_ENV: &str = "CONSTELLATION_HEIGHT";

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Usage: constellation [CONFIG.json] [--width W] [--height H] [--compact]

Composes the constellation layout and prints it as JSON on stdout.

Without CONFIG.json, $CONSTELLATION_CONFIG is used, else the built-in preset.
Render size defaults to $CONSTELLATION_WIDTH/$CONSTELLATION_HEIGHT, else the
authored size. Set RUST_LOG to adjust logging (stderr).";

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the configuration file failed
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for a constellation
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the layout failed
    #[error("cannot serialize layout: {0}")]
    Output(#[from] serde_json::Error),

    /// Writing to stdout failed
    #[error("cannot write layout: {0}")]
    Write(#[from] std::io::Error),

    /// The configuration was rejected by the layout engine
    #[error(transparent)]
    Layout(#[from] ConfigError),

    /// A flag or value could not be understood
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Resolved options for one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    /// Configuration file, if any
    pub config: Option<PathBuf>,
    /// Requested render width
    pub width: Option<f64>,
    /// Requested render height
    pub height: Option<f64>,
    /// Print single-line JSON
    pub compact: bool,
    /// Print usage and exit
    pub help: bool,
}

impl Options {
    /// Parse `args` (without the program name), falling back to `env`.
    pub fn parse<I, E>(args: I, env: E) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.help = true,
                "--compact" => options.compact = true,
                "--width" => options.width = Some(parse_dimension(&arg, args.next())?),
                "--height" => options.height = Some(parse_dimension(&arg, args.next())?),
                flag if flag.starts_with('-') => {
                    return Err(CliError::InvalidArgument(format!("unknown flag {flag}")));
                }
                path => {
                    if options.config.is_some() {
                        return Err(CliError::InvalidArgument(format!(
                            "unexpected extra argument {path}"
                        )));
                    }
                    options.config = Some(PathBuf::from(path));
                }
            }
        }

        if options.config.is_none() {
            options.config = env(CONFIG_ENV).filter(|p| !p.is_empty()).map(PathBuf::from);
        }
        if options.width.is_none() {
            options.width = env(WIDTH_ENV)
                .map(|v| parse_dimension(WIDTH_ENV, Some(v)))
                .transpose()?;
        }
        if options.height.is_none() {
            options.height = env(HEIGHT_ENV)
                .map(|v| parse_dimension(HEIGHT_ENV, Some(v)))
                .transpose()?;
        }

        Ok(options)
    }

    /// Parse the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Load the configuration file, or the built-in preset.
    pub fn load_config(&self) -> Result<ConstellationConfig> {
        match &self.config {
            Some(path) => load(path),
            None => Ok(ConstellationConfig::default()),
        }
    }

    /// Render size, filling a missing axis from `authored` proportionally.
    ///
    /// `None` when neither axis was requested.
    pub fn render_size(&self, authored: Size) -> Option<Size> {
        match (self.width, self.height) {
            (None, None) => None,
            (Some(w), Some(h)) => Some(Size::new(w, h)),
            (Some(w), None) => Some(Size::new(w, w * authored.height / authored.width)),
            (None, Some(h)) => Some(Size::new(h * authored.width / authored.height, h)),
        }
    }
}

fn parse_dimension(name: &str, value: Option<String>) -> Result<f64> {
    let value = value.ok_or_else(|| CliError::InvalidArgument(format!("{name} needs a value")))?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidArgument(format!("{name}: not a number: {value}")))
}

fn load(path: &Path) -> Result<ConstellationConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
