//! Logging initialization utilities.
//!
//! Provides a single entry point `init_subscriber` that configures tracing for either
//! stderr (default) or a rolling daily log file. Logs never go to stdout: the fixture's
//! stdout carries exactly one contract line. The function is idempotent: subsequent calls
//! after the first are no-ops so tests or library reuse won't panic on duplicate
//! initialization.

use directories::ProjectDirs;
use std::{fs, path::PathBuf, sync::Once};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Settings for `init_subscriber`
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Level used when `RUST_LOG` is unset
    pub default_level: &'static str,
    /// Write to a rolling daily file under the user's cache dir instead of stderr
    pub log_to_file: bool,
    /// File name prefix for file mode
    pub file_name: &'static str,
}

impl LogOptions {
    /// Quiet stderr logging for the fixture. Only warnings surface unless `RUST_LOG` says otherwise.
    pub fn fixture() -> Self {
        Self {
            default_level: "warn",
            log_to_file: false,
            file_name: "arg_echo.log",
        }
    }

    /// Harness logging, `debug` when verbose and `info` otherwise
    pub fn harness(log_to_file: bool, verbose: bool) -> Self {
        Self {
            default_level: if verbose { "debug" } else { "info" },
            log_to_file,
            file_name: "echo_verify.log",
        }
    }
}

/// Directory used for file-mode logs, if the platform provides a cache dir
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "arg_echo", "arg_echo").map(|proj| {
        let mut dir = PathBuf::from(proj.cache_dir());
        dir.push("logs");
        dir
    })
}

/// Initialize the global tracing subscriber.
pub fn init_subscriber(options: LogOptions) {
    // Only allow one-time initialization; ignore later calls.
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(options.default_level));

        if options.log_to_file
            && let Some(log_dir) = log_dir()
        {
            if let Err(e) = fs::create_dir_all(&log_dir) {
                eprintln!("Failed to create log dir {:?}: {e}", log_dir);
            }
            let file_appender = tracing_appender::rolling::daily(&log_dir, options.file_name);
            let (nb, guard) = tracing_appender::non_blocking(file_appender);
            // Keep guard alive for program lifetime to ensure flushing.
            Box::leak(Box::new(guard));
            fmt()
                .with_env_filter(env_filter)
                .with_writer(nb)
                .with_ansi(false)
                .with_target(false)
                .init();
            tracing::debug!(
                "Logging initialized (file mode) level={} dir={:?}",
                options.default_level,
                log_dir
            );
            return;
        }

        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .init();
        tracing::debug!(
            "Logging initialized (stderr mode) level={}",
            options.default_level
        );
    });
}
