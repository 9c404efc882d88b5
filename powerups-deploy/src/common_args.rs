// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::{LocalSigner, PrivateKeySigner},
};
use eyre::{eyre, Context};
use powerups_tools::core::artifact::DEFAULT_BUILD_DIR;

use crate::{
    constants::DEFAULT_ENDPOINT,
    utils::{convert_gwei_to_wei, decode0x},
};

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory holding the compiled contract artifacts
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BUILD_DIR)]
    pub artifacts_dir: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    fn build_wallet(&self) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return Ok(EthereumWallet::new(signer_from_hex(key)?));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return Ok(EthereumWallet::new(signer_from_hex(key)?));
        }

        let keystore = self
            .keystore_path
            .as_ref()
            .ok_or(eyre!("no wallet: pass --private-key, --private-key-path or --keystore-path"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer = LocalSigner::decrypt_keystore(keystore, password.trim_end())
            .wrap_err("could not decrypt keystore")?;
        Ok(EthereumWallet::new(signer))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn signer_from_hex(key: impl AsRef<str>) -> eyre::Result<PrivateKeySigner> {
    let bytes = decode0x(key)?;
    if bytes.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", bytes.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    Ok(PrivateKeySigner::from_bytes(&priv_key_bytes)?)
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// JSON-RPC endpoint of the target chain
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    /// The chain id is filled in per transaction, so no request is made here.
    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let wallet = auth.build_wallet()?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use alloy::{network::TxSigner, primitives::address};

    use super::*;

    // first anvil/hardhat development account
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn auth(private_key: Option<&str>) -> AuthArgs {
        AuthArgs {
            private_key_path: None,
            private_key: private_key.map(str::to_owned),
            keystore_path: None,
            keystore_password_path: None,
            max_fee_per_gas_gwei: None,
        }
    }

    #[test]
    fn wallet_from_private_key() {
        let wallet = auth(Some(DEV_KEY)).build_wallet().unwrap();
        assert_eq!(
            wallet.default_signer().address(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn wallet_from_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.txt");
        fs::write(&path, format!("{DEV_KEY}\n")).unwrap();
        let args = AuthArgs {
            private_key_path: Some(path),
            ..auth(None)
        };
        assert!(args.build_wallet().is_ok());
    }

    #[test]
    fn rejects_bad_keys() {
        assert!(auth(Some("")).build_wallet().is_err());
        assert!(auth(Some("0x1234")).build_wallet().is_err());
        assert!(auth(None).build_wallet().is_err());
    }

    #[test]
    fn max_fee_conversion() {
        let args = AuthArgs {
            max_fee_per_gas_gwei: Some("1.5".to_owned()),
            ..auth(None)
        };
        assert_eq!(args.get_max_fee_per_gas_wei().unwrap(), Some(1_500_000_000));
        assert_eq!(auth(None).get_max_fee_per_gas_wei().unwrap(), None);
    }
}
