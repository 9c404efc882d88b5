// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Environment configuration for the migration.

use std::{
    env,
    path::{Path, PathBuf},
};

/// Token contract address passed as the first constructor argument.
pub const TOKEN_ADDRESS_VAR: &str = "CUSTOM_TOKEN_ADDRESS";
/// Metadata base URI passed as the second constructor argument.
pub const BASE_URI_VAR: &str = "BASE_URI";

/// Values read from the environment, passed through to the deployer untouched.
///
/// A variable that is not set is `None`. Empty strings are kept as they are.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MigrationConfig {
    pub token_address: Option<String>,
    pub base_uri: Option<String>,
}

impl MigrationConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        let var = |key: &str| env::var_os(key).map(|value| value.to_string_lossy().into_owned());
        Self {
            token_address: var(TOKEN_ADDRESS_VAR),
            base_uri: var(BASE_URI_VAR),
        }
    }

    /// Read the configuration from a set of key/value pairs. Unrelated keys are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            match key.as_ref() {
                TOKEN_ADDRESS_VAR => config.token_address = Some(value.into()),
                BASE_URI_VAR => config.base_uri = Some(value.into()),
                _ => {}
            }
        }
        config
    }

    /// Read the configuration from a dotenv file without touching the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let iter =
            dotenvy::from_path_iter(path).map_err(|err| ConfigError::from_dotenv(path, err))?;
        let vars = iter
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ConfigError::from_dotenv(path, err))?;
        Ok(Self::from_vars(vars))
    }

    /// Constructor arguments in the order the contract expects them.
    pub fn constructor_args(&self) -> Vec<Option<String>> {
        vec![self.token_address.clone(), self.base_uri.clone()]
    }
}

/// Populate the process environment from a dotenv file.
///
/// With an explicit `path` the file must exist. Otherwise `.env` is searched for in the current
/// directory and its ancestors, and not finding one is fine. Variables that are already set are
/// left alone. Returns the path of the file that was loaded, if any.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|err| ConfigError::from_dotenv(path, err))?;
            debug!(@grey, "loaded environment from {}", path.display());
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(path) => {
                debug!(@grey, "loaded environment from {}", path.display());
                Ok(Some(path))
            }
            Err(err) if err.not_found() => {
                debug!(@grey, "no .env file found, using process environment");
                Ok(None)
            }
            Err(err) => Err(ConfigError::from_dotenv(Path::new(".env"), err)),
        },
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("env file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to parse env file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    fn from_dotenv(path: &Path, err: dotenvy::Error) -> Self {
        if err.not_found() {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}
