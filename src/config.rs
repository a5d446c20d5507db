//! Command-line interface and the resolved configuration it produces.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::duration::YearMonth;
use crate::model::{ThemeMode, ThemeState};

const DEFAULT_LOG_FILE: &str = "folio.log";

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio and résumé viewer for the terminal")]
pub struct Cli {
    /// Directory containing profile.json, experience.json, ...
    #[arg(long, env = "FOLIO_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Start in this theme instead of the terminal's preference
    #[arg(long)]
    pub theme: Option<ThemeMode>,

    /// Log file (defaults to folio.log in the temp dir while the viewer runs)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// error, warn, info, debug or trace; RUST_LOG takes precedence
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// UI refresh interval in milliseconds
    #[arg(long, default_value_t = 250)]
    pub tick_ms: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every dated entry with its duration and exit
    Durations {
        /// Evaluate ongoing ranges as of this month (YYYY or YYYY-MM)
        #[arg(long, value_parser = parse_month)]
        at: Option<NaiveDate>,
    },
    /// Copy the CV into a directory under its download name
    ExportCv {
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

/// First day of the month named by `YYYY` / `YYYY-MM`.
fn parse_month(s: &str) -> Result<NaiveDate, String> {
    let ym: YearMonth = s.parse().map_err(|e| format!("{}", e))?;
    NaiveDate::from_ymd_opt(ym.year(), ym.month(), 1)
        .ok_or_else(|| format!("date out of range: {}", s))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// None logs to stderr
    pub file: Option<PathBuf>,
}

/// Settings for the interactive viewer, resolved from the CLI and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub theme: ThemeState,
    pub log: LogConfig,
    pub tick_rate: Duration,
}

impl Config {
    /// `colorfgbg` is the terminal's `COLORFGBG` value, if any.
    pub fn from_cli(cli: &Cli, colorfgbg: Option<&str>) -> Self {
        let system = crate::model::theme::system_theme(colorfgbg);
        Self {
            data_dir: cli.data_dir.clone(),
            theme: ThemeState::resolve(cli.theme, system),
            log: LogConfig {
                level: cli.log_level.clone(),
                file: Some(
                    cli.log_file
                        .clone()
                        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE)),
                ),
            },
            tick_rate: Duration::from_millis(cli.tick_ms.max(10)),
        }
    }
}

impl Cli {
    /// Logging for the one-shot subcommands: stderr unless a file was asked for.
    pub fn batch_log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.tick_ms, 250);
        assert!(cli.theme.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_theme_and_data_dir() {
        let cli =
            Cli::try_parse_from(["folio", "--theme", "light", "--data-dir", "/srv/site/data"]).unwrap();
        assert_eq!(cli.theme, Some(ThemeMode::Light));
        assert_eq!(cli.data_dir, PathBuf::from("/srv/site/data"));
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["folio", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn durations_subcommand_parses_month() {
        let cli = Cli::try_parse_from(["folio", "durations", "--at", "2024-07"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Durations {
                at: NaiveDate::from_ymd_opt(2024, 7, 1)
            })
        );
    }

    #[test]
    fn durations_subcommand_rejects_bad_month() {
        assert!(Cli::try_parse_from(["folio", "durations", "--at", "2024-13"]).is_err());
    }

    #[test]
    fn export_cv_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["folio", "export-cv"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::ExportCv {
                out: PathBuf::from(".")
            })
        );
    }

    #[test]
    fn global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "export-cv", "--data-dir", "site/data"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("site/data"));
    }

    #[test]
    fn config_prefers_cli_theme_over_terminal() {
        let cli = Cli::try_parse_from(["folio", "--theme", "dark"]).unwrap();
        let config = Config::from_cli(&cli, Some("0;15"));
        assert_eq!(config.theme.current, ThemeMode::Dark);
        assert!(config.theme.explicit);
    }

    #[test]
    fn config_uses_terminal_preference_and_temp_log() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        let config = Config::from_cli(&cli, Some("0;15"));
        assert_eq!(config.theme.current, ThemeMode::Light);
        assert!(!config.theme.explicit);
        assert!(config.log.file.unwrap().ends_with(DEFAULT_LOG_FILE));
        assert_eq!(config.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn batch_logging_goes_to_stderr_by_default() {
        let cli = Cli::try_parse_from(["folio", "durations"]).unwrap();
        assert_eq!(cli.batch_log_config().file, None);
    }
}
