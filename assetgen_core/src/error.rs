use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetgenError {
    /// Every disambiguation step for a class or member name was already taken.
    #[error("Naming conflict: no unique name left for `{candidate}` (node `{path}`)")]
    NamingConflict { candidate: String, path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("assetgen.toml not found in {search_start} or any parent directory")]
    ConfigNotFound { search_start: PathBuf },

    #[error("Invalid target version `{0}` (expected major[.minor[.patch]])")]
    InvalidVersion(String),

    #[error("Scan error at {path}: {message}")]
    Scan { path: PathBuf, message: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl From<walkdir::Error> for AssetgenError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        AssetgenError::Scan {
            path,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetgenError>;

impl AssetgenError {
    pub fn naming_conflict(candidate: impl Into<String>, path: impl Into<String>) -> Self {
        AssetgenError::NamingConflict {
            candidate: candidate.into(),
            path: path.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        AssetgenError::Config(message.into())
    }

    pub fn invalid_version(value: impl Into<String>) -> Self {
        AssetgenError::InvalidVersion(value.into())
    }

    pub fn scan(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        AssetgenError::Scan {
            path: path.into(),
            message: message.into(),
        }
    }
}
