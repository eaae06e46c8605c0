//! Logging setup: human-readable stderr plus optional JSONL file output.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable naming an explicit log file.
pub const LOG_PATH_ENV: &str = "STUDY_LENS_LOG_PATH";
/// Environment variable naming a log directory.
pub const LOG_DIR_ENV: &str = "STUDY_LENS_LOG_DIR";

const LOG_FILE_PREFIX: &str = "study-lens.jsonl";

/// Where structured logs go, besides stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated JSONL logs.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read log destinations from the environment, letting a configured
    /// directory fill in when `STUDY_LENS_LOG_DIR` is unset.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: env_path.filter(|p| !p.as_os_str().is_empty()),
            log_dir: env_dir
                .filter(|p| !p.as_os_str().is_empty())
                .or(config_dir),
        }
    }

    /// Whether a file layer will be installed.
    pub const fn file_logging_enabled(&self) -> bool {
        self.log_path.is_some() || self.log_dir.is_some()
    }
}

/// Keeps the non-blocking file writer flushing until dropped.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Build the log filter: `RUST_LOG` first, then `-q`/`-v`, then the
/// configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(filter_directive(quiet, verbose, config_level))
}

fn filter_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, file_guard) = match file_appender(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: file_guard })
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        create_log_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::never(dir, file_name)));
    }

    if let Some(ref dir) = config.log_dir {
        create_log_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)));
    }

    Ok(None)
}

fn create_log_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
