// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use powerups_tools::{core::migration::CONTRACT_NAME, ops};

use crate::{common_args::ArtifactArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contract whose artifact to read.
    #[arg(long, default_value = CONTRACT_NAME)]
    contract: String,

    #[command(flatten)]
    artifacts: ArtifactArgs,
}

pub fn exec(args: Args) -> CliResult {
    ops::networks(&args.artifacts.artifacts_dir, &args.contract)?;
    Ok(())
}
