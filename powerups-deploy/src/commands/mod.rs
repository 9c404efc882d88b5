// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod migrate;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy GamePowerUps with the token address and base URI from the environment
    #[clap(visible_alias = "m")]
    Migrate(migrate::Args),
    /// Show recorded deployments of a contract
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Migrate(args) => migrate::exec(args).await,
        Command::Networks(args) => networks::exec(args),
    }
}
