// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use powerups_tools::core::{
    artifact::ArtifactError, config::ConfigError, deployment::DeploymentError,
    migration::MigrationError,
};

pub type CliResult = Result<(), CliError>;

#[derive(Debug)]
pub struct CliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for CliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<powerups_tools::Error> for CliError {
    fn from(err: powerups_tools::Error) -> Self {
        match err {
            powerups_tools::Error::Config(err) => err.into(),
            powerups_tools::Error::Artifact(err) => err.into(),
            powerups_tools::Error::Migration(err) => err.into(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ArtifactError> for CliError {
    fn from(err: ArtifactError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<MigrationError> for CliError {
    fn from(err: MigrationError) -> Self {
        match err {
            MigrationError::Artifact(err) => err.into(),
            MigrationError::Deployment(err) => err.into(),
        }
    }
}

impl From<DeploymentError> for CliError {
    fn from(err: DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn keeps_artifact_error_kind() {
        let err: CliError = powerups_tools::Error::Migration(MigrationError::Artifact(
            ArtifactError::NotFound {
                name: "GamePowerUps".into(),
                path: PathBuf::from("build/contracts/GamePowerUps.json"),
            },
        ))
        .into();
        assert!(matches!(
            err.error.downcast_ref::<ArtifactError>(),
            Some(ArtifactError::NotFound { .. })
        ));
        assert_eq!(
            err.to_string(),
            "could not find artifact for contract GamePowerUps at build/contracts/GamePowerUps.json"
        );
    }

    #[test]
    fn keeps_deployment_error_kind() {
        let err: CliError = powerups_tools::Error::Migration(MigrationError::Deployment(
            DeploymentError::MissingConstructorArg {
                index: 0,
                name: "_customToken".into(),
            },
        ))
        .into();
        assert!(matches!(
            err.error.downcast_ref::<DeploymentError>(),
            Some(DeploymentError::MissingConstructorArg { index: 0, .. })
        ));
        assert_eq!(
            err.to_string(),
            "missing value for constructor argument 0 (_customToken)"
        );
    }

    #[test]
    fn keeps_config_error_kind() {
        let err: CliError =
            powerups_tools::Error::Config(ConfigError::NotFound("missing.env".into())).into();
        assert!(err.error.downcast_ref::<ConfigError>().is_some());
        assert_eq!(err.to_string(), "env file not found: missing.env");
    }
}
