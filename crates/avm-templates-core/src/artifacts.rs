//! Persistence for instantiated contracts.
//!
//! Saves a [`ContractArtifact`] as pretty JSON so the program and its address can be handed
//! to deployment tooling or reloaded later.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{Result, TemplateError};
use crate::program::{decode_program, ContractTemplate};

/// On-disk form of a built contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifact {
    /// Template name, e.g. `htlc`.
    pub template: String,
    /// Program address.
    pub address: String,
    /// Program bytes in standard base64.
    pub program: String,
}

impl ContractArtifact {
    pub fn new(template: &str, contract: &ContractTemplate) -> Self {
        Self {
            template: template.to_string(),
            address: contract.address().to_string(),
            program: contract.program_base64(),
        }
    }

    /// Decode the program and check that it still hashes to the recorded address.
    pub fn to_contract(&self) -> Result<ContractTemplate> {
        let recorded = Address::decode(&self.address)?;
        let contract = ContractTemplate::from_program(decode_program(&self.program)?);
        if contract.address() != recorded {
            return Err(TemplateError::InvalidProgram(format!(
                "program hashes to {}, artifact records {}",
                contract.address(),
                self.address
            )));
        }
        Ok(contract)
    }
}

/// Save an artifact to `path`, creating parent directories.
pub fn save(artifact: &ContractArtifact, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(artifact).map_err(|e| TemplateError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load an artifact from `path`.
pub fn load(path: &Path) -> Result<ContractArtifact> {
    let contents = std::fs::read_to_string(path).map_err(|e| TemplateError::ConfigNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    let artifact: ContractArtifact =
        serde_json::from_str(&contents).map_err(|e| TemplateError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(artifact)
}
