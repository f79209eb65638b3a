use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::math::hex::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Invalid format '{s}'. Valid options: text, json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// WCAG contrast checker
///
/// Computes the contrast ratio of two colors, reports AA/AAA pass/fail for
/// small and large text, and suggests nearby backgrounds that reach AA.
/// Configuration priority: CLI args > Environment variables > Config file > Defaults
#[derive(Parser, Debug)]
#[command(name = "contrast-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "WCAG color contrast checker", long_about = None)]
pub struct CliArgs {
    /// Output format: text or json
    #[arg(short, long, global = true, env = "CONTRAST_FORMAT", value_parser = clap::value_parser!(OutputFormat))]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "CONTRAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Contrast ratio, compliance and suggestions for a background/text pair
    Check {
        /// Background color (#rrggbb); falls back to the configured default
        background: Option<Color>,
        /// Text color (#rrggbb); falls back to the configured default
        foreground: Option<Color>,
        /// Evaluate one of the suggested backgrounds in place of the original
        #[arg(long)]
        select: Option<Color>,
    },
    /// Nearby variants of BASE that reach AA against PARTNER
    Suggest { base: Color, partner: Color },
    /// Check a JSON array of {"background", "foreground"} pairs
    Batch { file: PathBuf },
}

/// Contents of the optional TOML config file. Every key may be omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub default_background: Option<Color>,
    pub default_foreground: Option<Color>,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
    }
}

/// Resolved settings after layering CLI, environment, file and defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub default_background: Color,
    pub default_foreground: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Text,
            default_background: Color::WHITE,
            default_foreground: Color::BLACK,
        }
    }
}

impl Config {
    pub fn resolve(args: &CliArgs, file: FileConfig) -> Self {
        let defaults = Config::default();
        Config {
            format: args.format.or(file.format).unwrap_or(defaults.format),
            default_background: file.default_background.unwrap_or(defaults.default_background),
            default_foreground: file.default_foreground.unwrap_or(defaults.default_foreground),
        }
    }

    pub fn load(args: &CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let config = Config::resolve(args, file);
        log::debug!("config: {:?}", config);
        Ok(config)
    }
}

/// Log level implied by the `-v` count.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("contrast-check").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn check_parses_colors() {
        let args = parse(&["check", "#FFFFFF", "#000"]);
        match args.command {
            Command::Check { background, foreground, select } => {
                assert_eq!(background, Some(Color::WHITE));
                assert_eq!(foreground, Some(Color::BLACK));
                assert!(select.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn invalid_color_rejected_by_cli() {
        let result = CliArgs::try_parse_from(["contrast-check", "suggest", "#ffffff", "black"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_counts() {
        let args = parse(&["-vv", "check"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(log_filter(args.verbose), "debug");
        assert_eq!(log_filter(7), "trace");
    }

    #[test]
    fn cli_format_beats_file() {
        let args = parse(&["--format", "json", "check"]);
        let file = FileConfig {
            format: Some(OutputFormat::Text),
            ..FileConfig::default()
        };
        assert_eq!(Config::resolve(&args, file).format, OutputFormat::Json);
    }

    #[test]
    fn file_fills_defaults() {
        let file = FileConfig::from_toml(
            r##"
format = "json"
default_background = "#1e293b"
"##,
        )
        .unwrap();
        let config = Config::resolve(&parse(&["check"]), file);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.default_background.to_hex(), "#1e293b");
        assert_eq!(config.default_foreground, Color::BLACK);
    }

    #[test]
    fn file_rejects_bad_color_and_unknown_keys() {
        assert!(FileConfig::from_toml(r##"default_background = "navy""##).is_err());
        assert!(FileConfig::from_toml("threshold = 3.0").is_err());
    }

    #[test]
    fn format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
