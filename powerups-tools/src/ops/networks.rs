// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Show where a contract has been deployed.

use std::{collections::BTreeMap, path::Path};

use crate::{
    core::artifact::{ArtifactRegistry, BuildDirectory, NetworkRecord},
    utils::color::Color,
    Result,
};

/// Print and return the deployments recorded in the artifact for `contract`.
pub fn networks(
    artifacts_dir: impl AsRef<Path>,
    contract: &str,
) -> Result<BTreeMap<String, NetworkRecord>> {
    let artifact = BuildDirectory::new(artifacts_dir.as_ref()).resolve(contract)?;
    if artifact.networks.is_empty() {
        greyln!("{} has no recorded deployments", artifact.contract_name);
        return Ok(artifact.networks);
    }

    println!("{}", artifact.contract_name.mint());
    for (network, record) in &artifact.networks {
        match &record.transaction_hash {
            Some(tx_hash) => println!(
                "  {} {} {}",
                format!("{network}:").grey(),
                record.address.lavender(),
                format!("(tx {tx_hash})").grey()
            ),
            None => println!(
                "  {} {}",
                format!("{network}:").grey(),
                record.address.lavender()
            ),
        }
    }
    Ok(artifact.networks)
}
