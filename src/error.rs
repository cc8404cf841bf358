use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FullCutError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("{source_name}:{line}: invalid weight `{value}`")]
    InvalidWeight {
        source_name: String,
        line: usize,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, FullCutError>;
