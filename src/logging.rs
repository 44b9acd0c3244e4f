use std::{fs::OpenOptions, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const DEFAULT_FILTER: &str = "info";

/// Where diagnostics go for a given invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(std::path::PathBuf),
    Stderr,
    Disabled,
}

impl LogTarget {
    /// The dashboard owns the terminal, so it only logs when a file is given.
    #[must_use]
    pub fn for_cli(cli: &Cli) -> Self {
        match (&cli.log_file, cli.one_shot) {
            (Some(path), _) => Self::File(path.clone()),
            (None, true) => Self::Stderr,
            (None, false) => Self::Disabled,
        }
    }
}

pub fn init(cli: &Cli) -> Result<()> {
    match LogTarget::for_cli(cli) {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::Disabled => {}
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::test_support::state_test_cli;

    #[test]
    fn dashboard_without_log_file_stays_silent() {
        assert_eq!(LogTarget::for_cli(&state_test_cli()), LogTarget::Disabled);
    }

    #[test]
    fn one_shot_logs_to_stderr() {
        let mut cli = state_test_cli();
        cli.one_shot = true;
        assert_eq!(LogTarget::for_cli(&cli), LogTarget::Stderr);
    }

    #[test]
    fn log_file_wins_over_stderr() {
        let mut cli = state_test_cli();
        cli.one_shot = true;
        cli.log_file = Some(PathBuf::from("weather.log"));
        assert_eq!(
            LogTarget::for_cli(&cli),
            LogTarget::File(PathBuf::from("weather.log"))
        );
    }

    #[test]
    fn log_file_is_created_and_bad_paths_fail() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut cli = state_test_cli();

        cli.log_file = Some(dir.path().join("missing").join("weather.log"));
        assert!(init(&cli).is_err());

        let path = dir.path().join("weather.log");
        cli.log_file = Some(path.clone());
        init(&cli).expect("init logging");
        assert!(path.exists());
    }
}
