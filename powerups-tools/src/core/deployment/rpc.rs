// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::providers::{Provider, WalletProvider};
use typed_builder::TypedBuilder;

use super::{
    calldata::deploy_code, request::DeploymentRequest, DeployedInstance, Deployer,
    DeploymentError,
};
use crate::{
    core::artifact::Artifact,
    utils::{color::DebugColor, format_gas},
};

/// Deploys contracts through a JSON-RPC provider, signing with the provider's default signer.
#[derive(Debug, TypedBuilder)]
pub struct RpcDeployer<P> {
    provider: P,
    /// Cap on the fee per gas. The node's gas price is used when unset.
    #[builder(default, setter(into))]
    max_fee_per_gas_wei: Option<u128>,
}

impl<P: Provider + WalletProvider> Deployer for RpcDeployer<P> {
    async fn deploy(
        &self,
        artifact: &Artifact,
        args: &[Option<String>],
    ) -> Result<DeployedInstance, DeploymentError> {
        let code = deploy_code(artifact, args)?;
        let sender = self.provider.default_signer_address();
        debug!(@grey, "sender address: {}", sender.debug_lavender());

        let chain_id = self.provider.get_chain_id().await?;
        debug!(@grey, "deploying {} on chain {}", artifact.contract_name, chain_id);

        let receipt = DeploymentRequest::new(sender, code, self.max_fee_per_gas_wei)
            .exec(&self.provider)
            .await?;
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress)?;

        info!(@grey, "deployed code at address: {}", address.debug_lavender());
        debug!(@grey, "gas used: {}", format_gas(receipt.gas_used));
        info!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());

        Ok(DeployedInstance {
            address,
            transaction_hash: receipt.transaction_hash,
            chain_id,
            gas_used: receipt.gas_used,
        })
    }
}
