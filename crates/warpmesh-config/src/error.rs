//! Parameter error types.

/// Errors that can occur while turning command-line arguments into parameters.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A flag value could not be parsed (e.g. `-r abc`).
    #[error("invalid argument: {0}")]
    Cli(#[source] clap::Error),

    /// The requested resolution rounds to an empty grid.
    #[error("invalid resolution {0}: the mesh needs at least one vertex per axis")]
    InvalidResolution(i64),
}
