// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use migrate::{migrate, MigrateConfig};
pub use networks::networks;

mod migrate;
mod networks;
