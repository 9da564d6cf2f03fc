use std::path::Path;

use anyhow::Result;

use avm_templates_core::config::TemplateRequest;

use crate::output;

/// Build a contract from a JSON request file.
///
/// The request's `template` field selects the contract; the remaining fields are its
/// parameters.
pub fn run(request_path: &Path, out: Option<&Path>) -> Result<()> {
    output::print_header("avm-templates build");
    output::print_key_value("Request", &request_path.display().to_string());

    let request = TemplateRequest::load(request_path)?;
    let template = request.template();
    output::print_key_value("Template", template.name());

    let contract = template.instantiate()?;
    super::emit(template.name(), &contract, out)
}
