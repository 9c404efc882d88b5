// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The `GamePowerUps` migration: resolve the artifact, then deploy it once.

use crate::core::{
    artifact::{ArtifactError, ArtifactRegistry},
    config::MigrationConfig,
    deployment::{DeployedInstance, Deployer, DeploymentError},
};

/// Name of the contract artifact this migration deploys.
pub const CONTRACT_NAME: &str = "GamePowerUps";

/// Deploys `GamePowerUps` with the token address and base URI from `config` as constructor
/// arguments.
///
/// Values are passed to the deployer exactly as configured, including missing ones. Errors from
/// the registry or the deployer are returned as they are and nothing is retried.
pub async fn migrate(
    config: MigrationConfig,
    registry: &impl ArtifactRegistry,
    deployer: &impl Deployer,
) -> Result<DeployedInstance, MigrationError> {
    let args = config.constructor_args();
    let artifact = registry.resolve(CONTRACT_NAME)?;
    debug!(@grey, "resolved artifact {}", artifact.contract_name);

    let deployed = deployer.deploy(&artifact, &args).await?;
    Ok(deployed)
}

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
}
