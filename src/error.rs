use thiserror::Error;

use crate::command::CommandError;
use crate::config::ConfigError;

/// Errors surfaced by the outer layers (config, command input, output).
///
/// The state machine itself has no error path.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: CommandError,
    },

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
