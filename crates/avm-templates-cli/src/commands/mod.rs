//! CLI command implementations for avm-templates.
//!
//! Each module corresponds to a subcommand (`avm-templates <command>`).

pub mod address;
pub mod build;
pub mod inject;
pub mod template;

use std::path::Path;

use anyhow::Result;

use avm_templates_core::artifacts::{self, ContractArtifact};
use avm_templates_core::ContractTemplate;

use crate::output;

/// Print a built contract and, if requested, persist it as a JSON artifact.
pub(crate) fn emit(template: &str, contract: &ContractTemplate, out: Option<&Path>) -> Result<()> {
    output::print_success(&format!("Built {template} contract"));
    output::print_contract(contract);

    if let Some(path) = out {
        artifacts::save(&ContractArtifact::new(template, contract), path)?;
        output::print_key_value("Saved", &path.display().to_string());
    }
    Ok(())
}
