//! Library module for arg_echo
//!
//! The echo fixture's decision logic and the harness that verifies it from outside the
//! process. Both binaries are thin wrappers over these modules.

pub mod atoi;
pub mod echo;
pub mod error;
pub mod logging;
pub mod scenarios;
pub mod timestamp;
