//! Parameter handling for the warp mesh generator.
//!
//! Holds the scalar parameters that drive mesh generation, their defaults,
//! and the command-line layer that overrides them. Argument parsing is
//! deliberately forgiving: unknown tokens are skipped rather than rejected.

mod cli;
mod error;
mod params;

pub use cli::{CliArgs, HELP_TEXT};
pub use error::ConfigError;
pub use params::{WarpParams, effective_resolution};
