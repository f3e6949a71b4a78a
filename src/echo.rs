//! The argument echo decision.
//!
//! The fixture makes exactly one decision from the argument count and reports it on
//! stdout together with an exit status:
//!
//! | supplied args | stdout                                         | exit |
//! |---------------|------------------------------------------------|------|
//! | 0             | `no arg passed`                                | 0    |
//! | 1             | `n passed: <atoi(arg)>`                        | 0    |
//! | 2+            | `too many args passed! expected <= 2, got <N>` | 1    |
//!
//! `N` is the full argument list length, invocation name included.

use crate::atoi::atoi_os;
use crate::error::EchoError;
use std::ffi::OsStr;
use std::io::{self, Write};
use tracing::debug;

pub const NO_ARG_MESSAGE: &str = "no arg passed";

/// Decide over the supplied arguments (invocation name excluded).
pub fn decide<S: AsRef<OsStr>>(supplied: &[S]) -> Result<Option<i32>, EchoError> {
    match supplied {
        [] => Ok(None),
        [single] => Ok(Some(atoi_os(single.as_ref()))),
        _ => Err(EchoError::TooManyArguments {
            total: supplied.len() + 1,
        }),
    }
}

/// Message and exit status for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    message: String,
    exit_code: u8,
}

impl Outcome {
    /// The stdout line, without its trailing newline
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

/// Build the outcome from a full argument list, where element 0 is the invocation name.
pub fn evaluate<S: AsRef<OsStr>>(args: &[S]) -> Outcome {
    let supplied = args.get(1..).unwrap_or(&[]);
    debug!("Evaluating {} supplied argument(s)", supplied.len());

    match decide(supplied) {
        Ok(None) => Outcome {
            message: NO_ARG_MESSAGE.to_string(),
            exit_code: 0,
        },
        Ok(Some(n)) => Outcome {
            message: format!("n passed: {n}"),
            exit_code: 0,
        },
        Err(e) => Outcome {
            message: e.to_string(),
            exit_code: e.exit_code(),
        },
    }
}

/// Evaluate `args`, write the outcome line to `out` and return the exit status.
pub fn run<S: AsRef<OsStr>, W: Write>(args: &[S], mut out: W) -> io::Result<u8> {
    let outcome = evaluate(args);
    // Single write so the line is never interleaved.
    out.write_all(format!("{}\n", outcome.message()).as_bytes())?;
    out.flush()?;
    Ok(outcome.exit_code())
}
