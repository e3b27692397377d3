//! Environment-backed configuration
//!
//! Values come from the process environment first, then from a `.env` file
//! if one was loaded. The file never overrides a variable that is already
//! set, matching `dotenvy`'s own precedence.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::ports::ConfigProvider;

#[derive(Error, Debug)]
#[error("failed to load {path}: {source}")]
pub struct DotenvError {
    pub path: PathBuf,
    #[source]
    pub source: dotenvy::Error,
}

/// Reads configuration from the environment, falling back to `.env` values.
#[derive(Debug, Clone, Default)]
pub struct EnvConfigProvider {
    dotenv: HashMap<String, String>,
    dotenv_path: Option<PathBuf>,
}

impl EnvConfigProvider {
    /// Environment only; no `.env` file
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment plus `.env` in the current directory, if there is one.
    pub fn from_default_dotenv() -> Result<Self, DotenvError> {
        let path = PathBuf::from(".env");
        if path.is_file() {
            Self::with_dotenv(&path)
        } else {
            Ok(Self::new())
        }
    }

    /// Environment plus the given dotenv file, which must exist.
    pub fn with_dotenv(path: &Path) -> Result<Self, DotenvError> {
        let to_error = |source| DotenvError {
            path: path.to_path_buf(),
            source,
        };

        let mut dotenv = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(to_error)? {
            let (key, value) = item.map_err(to_error)?;
            dotenv.insert(key, value);
        }
        debug!(path = %path.display(), keys = dotenv.len(), "loaded dotenv file");

        Ok(Self {
            dotenv,
            dotenv_path: Some(path.to_path_buf()),
        })
    }

    /// The dotenv file in use, if any
    pub fn dotenv_path(&self) -> Option<&Path> {
        self.dotenv_path.as_deref()
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key)
            .ok()
            .or_else(|| self.dotenv.get(key).cloned())
    }
}
