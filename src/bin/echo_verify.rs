//! Drives the `arg_echo` fixture through every argument-count branch and checks the
//! observable contract (stdout and exit status).

use anyhow::{Context, Result};
use arg_echo::logging::{LogOptions, init_subscriber};
use arg_echo::scenarios::{DEFAULT_TIMEOUT_SECS, builtin_scenarios, default_fixture_path, run_all};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

/// Verification harness for the argument echo fixture
#[derive(Parser, Debug)]
#[command(
    name = "echo_verify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Launch arg_echo with zero, one and several arguments and verify its output",
    long_about = "Runs the built-in scenario table against the arg_echo fixture. Each scenario \
                  launches the fixture as a child process and compares stdout and the exit \
                  status exactly. Exits 0 when every scenario passes, 1 otherwise."
)]
struct Args {
    /// Path to the fixture binary (default: arg_echo next to this executable)
    #[arg(long, value_name = "PATH")]
    binary: Option<PathBuf>,

    /// Per-scenario timeout in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Set the per-scenario timeout in seconds (default: 10)"
    )]
    timeout: u64,

    /// Print the report as JSON
    #[arg(long, help = "Print the report as pretty JSON instead of text")]
    json: bool,

    /// Log to rolling file instead of stderr
    #[arg(long, help = "Write logs to a rolling daily file instead of stderr")]
    log_to_file: bool,

    /// Enable verbose (debug-level) logging
    #[arg(long, help = "Enable verbose debug logging")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_subscriber(LogOptions::harness(args.log_to_file, args.verbose));

    let binary = match args.binary {
        Some(path) => path,
        None => default_fixture_path().context("Failed to locate the arg_echo fixture")?,
    };
    info!("Using fixture {:?}, timeout {}s", binary, args.timeout);

    let report = run_all(
        &binary,
        &builtin_scenarios(),
        Duration::from_secs(args.timeout),
    )
    .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_when_no_flags() {
        let args = Args::try_parse_from(["echo_verify"]).unwrap();
        assert_eq!(args.binary, None);
        assert_eq!(args.timeout, 10);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.log_to_file);
    }

    #[test]
    fn test_parses_all_flags() {
        let args = Args::try_parse_from([
            "echo_verify",
            "--binary",
            "/tmp/arg_echo",
            "--timeout",
            "3",
            "--json",
            "--verbose",
            "--log-to-file",
        ])
        .unwrap();
        assert_eq!(args.binary, Some(PathBuf::from("/tmp/arg_echo")));
        assert_eq!(args.timeout, 3);
        assert!(args.json && args.verbose && args.log_to_file);
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Args::try_parse_from(["echo_verify", "--timeout", "soon"]).is_err());
    }
}
