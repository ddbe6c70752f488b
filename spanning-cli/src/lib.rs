//! Support library for the spanning CLI binary.
//!
//! Re-exports the CLI module so doctests and integration tests can drive the
//! command pipeline with in-memory input and output.

pub mod cli;
pub mod logging;
