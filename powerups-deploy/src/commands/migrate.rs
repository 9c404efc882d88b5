// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use powerups_tools::ops::{self, MigrateConfig};

use crate::{
    common_args::{ArtifactArgs, AuthArgs, ProviderArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Dotenv file to load before reading CUSTOM_TOKEN_ADDRESS and BASE_URI. Defaults to the
    /// nearest `.env`, if there is one.
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let config = MigrateConfig {
        env_file: args.env_file,
        artifacts_dir: args.artifacts.artifacts_dir,
        max_fee_per_gas_wei: args.auth.get_max_fee_per_gas_wei()?,
    };
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    ops::migrate(&config, provider).await?;
    Ok(())
}
