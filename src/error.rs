use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by color quantization, template rendering, and the
/// generation driver. All are deterministic; none are worth retrying.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Input was not a 6-hex-digit color (optionally prefixed with `#`).
    #[error("invalid hex color code: {0:?}")]
    InvalidColorFormat(String),

    /// A flavor lacks identifiers the template requires.
    #[error("flavor {flavor:?} missing required colors: {keys:?}")]
    MissingColorKeys { flavor: String, keys: Vec<String> },

    /// Flavor name was empty or contained no word characters.
    #[error("invalid flavor name: {0:?}")]
    InvalidFlavorName(String),

    #[error("base config template not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("error reading {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing to {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
