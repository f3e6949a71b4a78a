//! Verification harness for the echo fixture
//!
//! Launches the fixture binary once per scenario, captures stdout and the exit status and
//! compares both exactly against the expected contract line.

use crate::error::HarnessError;
use crate::timestamp::{elapsed_millis, format_current_time};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Default per-scenario timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// One invocation of the fixture and what it must produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: String,
    /// Arguments passed to the fixture, invocation name excluded
    pub args: Vec<String>,
    /// Exact stdout, trailing newline included
    pub expected_stdout: String,
    pub expected_exit: i32,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        args: &[&str],
        expected_stdout: impl Into<String>,
        expected_exit: i32,
    ) -> Self {
        Self {
            name: name.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            expected_stdout: expected_stdout.into(),
            expected_exit,
        }
    }
}

/// The scenario table covering every branch of the fixture
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("no_args", &[], "no arg passed\n", 0),
        Scenario::new("positive", &["5"], "n passed: 5\n", 0),
        Scenario::new("negative", &["-3"], "n passed: -3\n", 0),
        Scenario::new("non_numeric", &["foo"], "n passed: 0\n", 0),
        Scenario::new(
            "two_args",
            &["1", "2"],
            "too many args passed! expected <= 2, got 3\n",
            1,
        ),
        Scenario::new("explicit_plus", &["+12"], "n passed: 12\n", 0),
        Scenario::new("leading_whitespace", &["  42"], "n passed: 42\n", 0),
        Scenario::new("trailing_garbage", &["42abc"], "n passed: 42\n", 0),
        Scenario::new("empty_arg", &[""], "n passed: 0\n", 0),
        Scenario::new("flag_like_arg", &["--help"], "n passed: 0\n", 0),
        Scenario::new(
            "three_args",
            &["a", "b", "c"],
            "too many args passed! expected <= 2, got 4\n",
            1,
        ),
    ]
}

/// Observed behavior of one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub actual_stdout: String,
    pub actual_exit: i32,
    pub passed: bool,
    pub duration_ms: u64,
}

impl ScenarioResult {
    /// One-line human readable summary
    pub fn summary(&self) -> String {
        if self.passed {
            format!("PASS {} ({}ms)", self.scenario.name, self.duration_ms)
        } else {
            format!(
                "FAIL {}: expected {:?} (exit {}), got {:?} (exit {})",
                self.scenario.name,
                self.scenario.expected_stdout,
                self.scenario.expected_exit,
                self.actual_stdout,
                self.actual_exit
            )
        }
    }
}

/// Results of a full harness run
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub run_id: Uuid,
    pub started_at: String,
    pub binary: PathBuf,
    pub results: Vec<ScenarioResult>,
    pub passed: usize,
    pub failed: usize,
}

impl VerifyReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let _ = writeln!(out, "{}", result.summary());
        }
        let _ = writeln!(
            out,
            "Run {} started {}: {} passed, {} failed",
            self.run_id, self.started_at, self.passed, self.failed
        );
        out
    }
}

/// Default fixture location: `arg_echo` next to the running executable
pub fn default_fixture_path() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(format!("arg_echo{}", std::env::consts::EXE_SUFFIX)))
}

/// Launch `binary` for a single scenario and compare the outcome
pub async fn run_scenario(
    binary: &Path,
    scenario: &Scenario,
    timeout: Duration,
) -> Result<ScenarioResult, HarnessError> {
    debug!("Running scenario '{}' args={:?}", scenario.name, scenario.args);
    let start = Instant::now();

    let child = Command::new(binary)
        .args(&scenario.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    // Dropping the future on timeout drops the child, which kills it.
    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(output) => output?,
        Err(_) => {
            return Err(HarnessError::Timeout {
                scenario: scenario.name.clone(),
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            });
        }
    };

    let actual_exit = output.status.code().ok_or_else(|| HarnessError::Signaled {
        scenario: scenario.name.clone(),
    })?;
    let actual_stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.stderr.is_empty() {
        debug!(
            "Scenario '{}' stderr: {}",
            scenario.name,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let passed = actual_stdout == scenario.expected_stdout && actual_exit == scenario.expected_exit;
    let result = ScenarioResult {
        scenario: scenario.clone(),
        actual_stdout,
        actual_exit,
        passed,
        duration_ms: elapsed_millis(start),
    };

    if passed {
        info!("{}", result.summary());
    } else {
        warn!("{}", result.summary());
    }
    Ok(result)
}

/// Run every scenario sequentially against `binary`
pub async fn run_all(
    binary: &Path,
    scenarios: &[Scenario],
    timeout: Duration,
) -> Result<VerifyReport, HarnessError> {
    if !binary.is_file() {
        return Err(HarnessError::BinaryNotFound(binary.to_path_buf()));
    }

    let run_id = Uuid::new_v4();
    let started_at = format_current_time();
    info!(
        "Verification run {} against {:?} ({} scenarios)",
        run_id,
        binary,
        scenarios.len()
    );

    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        results.push(run_scenario(binary, scenario, timeout).await?);
    }

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;
    Ok(VerifyReport {
        run_id,
        started_at,
        binary: binary.to_path_buf(),
        results,
        passed,
        failed,
    })
}
