//! Command-line fixture that echoes how many arguments it received.
//!
//! Exactly one line goes to stdout and the exit status tells the branch apart. The argument
//! list is read raw, so no token is ever treated as a flag.

use arg_echo::echo;
use arg_echo::logging::{LogOptions, init_subscriber};
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    init_subscriber(LogOptions::fixture());

    let args: Vec<OsString> = std::env::args_os().collect();

    match echo::run(&args, io::stdout().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("Failed to write to stdout: {e}");
            ExitCode::FAILURE
        }
    }
}
