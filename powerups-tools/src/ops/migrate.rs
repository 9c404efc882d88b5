// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Run the `GamePowerUps` migration against a live chain.

use std::path::PathBuf;

use alloy::providers::{Provider, WalletProvider};

use crate::{
    core::{
        artifact::BuildDirectory,
        config::{load_dotenv, MigrationConfig},
        deployment::{DeployedInstance, RpcDeployer},
        migration::{self, CONTRACT_NAME},
    },
    utils::color::DebugColor,
    Result,
};

#[derive(Debug)]
pub struct MigrateConfig {
    /// Dotenv file to load; `.env` lookup is used when unset.
    pub env_file: Option<PathBuf>,
    pub artifacts_dir: PathBuf,
    pub max_fee_per_gas_wei: Option<u128>,
}

/// Load the environment, deploy `GamePowerUps` and record the deployment in its artifact.
pub async fn migrate(
    config: &MigrateConfig,
    provider: impl Provider + WalletProvider,
) -> Result<DeployedInstance> {
    load_dotenv(config.env_file.as_deref())?;
    let migration = MigrationConfig::from_env();
    debug!(@grey, "token address: {}", migration.token_address.debug_lavender());
    debug!(@grey, "base uri: {}", migration.base_uri.debug_lavender());

    let registry = BuildDirectory::new(&config.artifacts_dir);
    let deployer = RpcDeployer::builder()
        .provider(provider)
        .max_fee_per_gas_wei(config.max_fee_per_gas_wei)
        .build();

    let deployed = migration::migrate(migration, &registry, &deployer).await?;
    let path = registry.record_deployment(CONTRACT_NAME, &deployed)?;
    greyln!("saved deployment to {}", path.display());
    mintln!(
        "{} deployed at {} on chain {}",
        CONTRACT_NAME,
        deployed.address,
        deployed.chain_id
    );
    Ok(deployed)
}
