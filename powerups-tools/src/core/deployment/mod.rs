// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, TxHash};

use crate::{core::artifact::Artifact, utils::color::DebugColor};

pub mod calldata;
pub mod request;
pub mod rpc;

pub use rpc::RpcDeployer;

/// A contract that was successfully deployed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedInstance {
    pub address: Address,
    pub transaction_hash: TxHash,
    pub chain_id: u64,
    pub gas_used: u64,
}

/// Submits contract-creation transactions.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Deploy `artifact` with `args` as its constructor arguments, waiting until the deployment
    /// either completes or fails. Exactly one deployment is attempted.
    async fn deploy(
        &self,
        artifact: &Artifact,
        args: &[Option<String>],
    ) -> Result<DeployedInstance, DeploymentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("cannot deploy {0}: artifact has no bytecode (abstract contract or interface?)")]
    NoBytecode(String),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("missing value for constructor argument {index} ({name})")]
    MissingConstructorArg { index: usize, name: String },
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in deployment receipt")]
    NoContractAddress,
}
