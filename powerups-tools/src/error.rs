// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] crate::core::config::ConfigError),
    #[error("{0}")]
    Artifact(#[from] crate::core::artifact::ArtifactError),
    #[error("{0}")]
    Migration(#[from] crate::core::migration::MigrationError),
}
