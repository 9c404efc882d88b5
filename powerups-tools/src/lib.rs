// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying the `GamePowerUps` contract.
//!
//! The [`core`] module holds the building blocks: environment configuration, the artifact
//! registry, the deployer and the migration that ties them together. [`ops`] wires those blocks
//! to a real build directory and RPC provider.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
