// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts and where to find them.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::{Constructor, JsonAbi},
    primitives::{Address, Bytes, TxHash},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::deployment::DeployedInstance;

/// Directory Truffle writes contract artifacts to, relative to the project root.
pub const DEFAULT_BUILD_DIR: &str = "build/contracts";

/// Compiled contract: interface, creation bytecode and known deployments.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    /// Creation bytecode, without constructor arguments.
    pub bytecode: Bytes,
    /// Deployments keyed by network (chain) id.
    pub networks: BTreeMap<String, NetworkRecord>,
}

/// Where a contract was deployed on one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<TxHash>,
}

impl From<&DeployedInstance> for NetworkRecord {
    fn from(deployed: &DeployedInstance) -> Self {
        Self {
            address: deployed.address,
            transaction_hash: Some(deployed.transaction_hash),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,
    #[serde(default)]
    abi: JsonAbi,
    #[serde(default)]
    bytecode: String,
    #[serde(default)]
    networks: BTreeMap<String, Value>,
}

impl Artifact {
    /// Parse an artifact from its JSON build output.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        let bytecode = parse_bytecode(&raw.contract_name, &raw.bytecode)?;
        // Truffle keeps entries for networks it linked libraries on but never deployed to
        let networks: BTreeMap<String, NetworkRecord> = raw
            .networks
            .into_iter()
            .filter_map(|(network, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some((network, record)),
                Err(err) => {
                    debug!(@grey, "ignoring networks entry {}: {}", network, err);
                    None
                }
            })
            .collect();
        Ok(Self {
            contract_name: raw.contract_name,
            abi: raw.abi,
            bytecode,
            networks,
        })
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }

    /// Recorded deployment on the given chain, if any.
    pub fn deployment(&self, chain_id: u64) -> Option<&NetworkRecord> {
        self.networks.get(&chain_id.to_string())
    }
}

fn parse_bytecode(name: &str, bytecode: &str) -> Result<Bytes, ArtifactError> {
    let digits = bytecode.trim();
    let digits = digits.strip_prefix("0x").unwrap_or(digits);
    // solc leaves `__LibraryName__` placeholders for libraries that still need linking
    if digits.contains("__") {
        return Err(ArtifactError::UnlinkedBytecode(name.to_owned()));
    }
    hex::decode(digits)
        .map(Into::into)
        .map_err(|source| ArtifactError::InvalidBytecode {
            name: name.to_owned(),
            source,
        })
}

/// Source of contract artifacts, looked up by contract name.
pub trait ArtifactRegistry {
    fn resolve(&self, name: &str) -> Result<Artifact, ArtifactError>;
}

/// Artifacts stored as `<root>/<ContractName>.json`.
#[derive(Clone, Debug)]
pub struct BuildDirectory {
    root: PathBuf,
}

impl BuildDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    fn read(&self, name: &str) -> Result<(PathBuf, String), ArtifactError> {
        let path = self.artifact_path(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok((path, text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ArtifactError::NotFound {
                name: name.to_owned(),
                path,
            }),
            Err(source) => Err(ArtifactError::Io { path, source }),
        }
    }

    /// Store a deployment in the artifact's `networks` map.
    ///
    /// The artifact is edited as plain JSON so fields this crate does not model are kept.
    pub fn record_deployment(
        &self,
        name: &str,
        deployed: &DeployedInstance,
    ) -> Result<PathBuf, ArtifactError> {
        let (path, text) = self.read(name)?;
        let mut json: Value = serde_json::from_str(&text)?;
        let Some(artifact) = json.as_object_mut() else {
            return Err(ArtifactError::NotAnObject(path));
        };

        let networks = artifact
            .entry("networks")
            .or_insert_with(|| Value::Object(Map::new()));
        if !networks.is_object() {
            *networks = Value::Object(Map::new());
        }
        let record = serde_json::to_value(NetworkRecord::from(deployed))?;
        let entry = &mut networks[deployed.chain_id.to_string()];
        match entry {
            Value::Object(existing) => {
                if let Value::Object(fields) = record {
                    existing.extend(fields);
                }
            }
            _ => *entry = record,
        }

        let mut text = serde_json::to_string_pretty(&json)?;
        text.push('\n');
        write_atomic(&path, &text).map_err(|source| ArtifactError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(@grey, "recorded deployment in {}", path.display());
        Ok(path)
    }
}

/// Replace `path` with `text` through a temporary file in the same directory.
fn write_atomic(path: &Path, text: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

impl ArtifactRegistry for BuildDirectory {
    fn resolve(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let (path, text) = self.read(name)?;
        debug!(@grey, "reading artifact {}", path.display());
        Artifact::from_json(&text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("could not find artifact for contract {name} at {}", .path.display())]
    NotFound { name: String, path: PathBuf },
    #[error("failed to access artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid artifact json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("artifact {} is not a json object", .0.display())]
    NotAnObject(PathBuf),
    #[error("bytecode of {0} contains unlinked library references")]
    UnlinkedBytecode(String),
    #[error("invalid bytecode for {name}: {source}")]
    InvalidBytecode {
        name: String,
        #[source]
        source: hex::FromHexError,
    },
}

#[cfg(test)]
pub(crate) mod tests {
    use alloy::primitives::{address, b256};

    use super::*;

    pub(crate) const GAME_POWER_UPS: &str = r#"{
  "contractName": "GamePowerUps",
  "abi": [
    {
      "inputs": [
        { "internalType": "address", "name": "_customToken", "type": "address" },
        { "internalType": "string", "name": "_baseURI", "type": "string" }
      ],
      "stateMutability": "nonpayable",
      "type": "constructor"
    },
    {
      "inputs": [{ "internalType": "uint256", "name": "id", "type": "uint256" }],
      "name": "uri",
      "outputs": [{ "internalType": "string", "name": "", "type": "string" }],
      "stateMutability": "view",
      "type": "function"
    }
  ],
  "bytecode": "0x6080604052348015600f57600080fd5b50",
  "compiler": { "name": "solc", "version": "0.8.20+commit.a1b79de6" },
  "networks": {}
}"#;

    fn deployed(chain_id: u64) -> DeployedInstance {
        DeployedInstance {
            address: address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
            transaction_hash: b256!(
                "0x1f6f0e9a2c1d1b8a3bd5d4e5a4b6d7c8e9f00112233445566778899aabbccdd0"
            ),
            chain_id,
            gas_used: 1_234_567,
        }
    }

    #[test]
    fn parses_truffle_artifact() {
        let artifact = Artifact::from_json(GAME_POWER_UPS).unwrap();
        assert_eq!(artifact.contract_name, "GamePowerUps");
        assert_eq!(artifact.bytecode.len(), 17);
        assert!(artifact.networks.is_empty());

        let constructor = artifact.constructor().unwrap();
        let types: Vec<_> = constructor.inputs.iter().map(|p| p.ty.as_str()).collect();
        assert_eq!(types, ["address", "string"]);
    }

    #[test]
    fn rejects_unlinked_bytecode() {
        let json = r#"{ "contractName": "Linked", "abi": [], "bytecode": "0x6080__$a1b2c3$__6040" }"#;
        let err = Artifact::from_json(json).unwrap_err();
        assert!(matches!(err, ArtifactError::UnlinkedBytecode(name) if name == "Linked"));
    }

    #[test]
    fn rejects_bad_hex() {
        let json = r#"{ "contractName": "Odd", "abi": [], "bytecode": "0x608" }"#;
        let err = Artifact::from_json(json).unwrap_err();
        assert!(matches!(err, ArtifactError::InvalidBytecode { .. }));
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let registry = BuildDirectory::new(dir.path());
        let err = registry.resolve("GamePowerUps").unwrap_err();
        match err {
            ArtifactError::NotFound { name, path } => {
                assert_eq!(name, "GamePowerUps");
                assert_eq!(path, dir.path().join("GamePowerUps.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn records_deployment_and_keeps_other_fields() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let registry = BuildDirectory::new(dir.path());
        fs::write(registry.artifact_path("GamePowerUps"), GAME_POWER_UPS)?;

        let instance = deployed(1337);
        registry.record_deployment("GamePowerUps", &instance)?;

        let artifact = registry.resolve("GamePowerUps")?;
        let record = artifact.deployment(1337).unwrap();
        assert_eq!(record.address, instance.address);
        assert_eq!(record.transaction_hash, Some(instance.transaction_hash));
        assert!(artifact.deployment(1).is_none());

        let text = fs::read_to_string(registry.artifact_path("GamePowerUps"))?;
        let json: Value = serde_json::from_str(&text)?;
        assert_eq!(json["compiler"]["name"], "solc");
        // keys stay in build output order
        let position = |key: &str| text.find(&format!("\"{key}\"")).unwrap();
        assert!(position("contractName") < position("abi"));
        assert!(position("bytecode") < position("compiler"));
        assert!(position("compiler") < position("networks"));

        let files: Vec<_> = fs::read_dir(dir.path())?.collect::<Result<_, _>>()?;
        assert_eq!(files.len(), 1);
        Ok(())
    }

    #[test]
    fn skips_network_entries_without_a_deployment() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let registry = BuildDirectory::new(dir.path());
        let json = r#"{
            "contractName": "GamePowerUps",
            "abi": [],
            "bytecode": "0x00",
            "networks": {
                "1": { "events": {}, "links": { "PowerUpLib": "0x0000000000000000000000000000000000000001" } },
                "5": { "address": "0x5FbDB2315678afecb367f032d93F642f64180aa3", "transactionHash": "0x1234" },
                "1337": {
                    "events": {},
                    "links": {},
                    "address": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
                    "transactionHash": "0x1f6f0e9a2c1d1b8a3bd5d4e5a4b6d7c8e9f00112233445566778899aabbccdd0"
                }
            }
        }"#;
        fs::write(registry.artifact_path("GamePowerUps"), json)?;

        let artifact = registry.resolve("GamePowerUps")?;
        assert!(artifact.deployment(1).is_none());
        assert!(artifact.deployment(5).is_none());
        let record = artifact.deployment(1337).unwrap();
        assert_eq!(
            record.address,
            address!("5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert_eq!(record.transaction_hash, Some(deployed(1337).transaction_hash));
        assert_eq!(artifact.networks.len(), 1);
        Ok(())
    }

    #[test]
    fn recording_merges_into_existing_network_entry() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let registry = BuildDirectory::new(dir.path());
        let json = r#"{
            "contractName": "GamePowerUps",
            "abi": [],
            "bytecode": "0x00",
            "networks": { "5777": { "events": {}, "links": { "PowerUpLib": "0x0000000000000000000000000000000000000001" } } }
        }"#;
        fs::write(registry.artifact_path("GamePowerUps"), json)?;
        assert!(registry.resolve("GamePowerUps")?.deployment(5777).is_none());

        let instance = deployed(5777);
        registry.record_deployment("GamePowerUps", &instance)?;

        let text = fs::read_to_string(registry.artifact_path("GamePowerUps"))?;
        let json: Value = serde_json::from_str(&text)?;
        assert!(json["networks"]["5777"]["links"].is_object());
        let artifact = Artifact::from_json(&text)?;
        assert_eq!(artifact.deployment(5777).unwrap().address, instance.address);
        Ok(())
    }
}
