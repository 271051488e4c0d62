//! Support library for the vendgraph CLI binary.
//!
//! Exposes the CLI and logging modules so doctests and integration tests can
//! drive generation and export without spawning a subprocess.

pub mod cli;
pub mod logging;
