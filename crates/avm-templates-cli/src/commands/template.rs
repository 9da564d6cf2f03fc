use std::path::Path;

use anyhow::Result;

use avm_templates_core::templates::LogicTemplate;

use crate::output;

/// Build one of the bundled contracts from command-line parameters.
pub fn run(params: &dyn LogicTemplate, out: Option<&Path>) -> Result<()> {
    output::print_header(&format!("avm-templates {}", params.name()));

    let contract = params.instantiate()?;
    super::emit(params.name(), &contract, out)
}
