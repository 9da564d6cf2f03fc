use anyhow::Result;

use avm_templates_core::program::decode_program;
use avm_templates_core::Address;

use crate::output;

/// Print the address controlled by a base64 program.
pub fn run(program: &str) -> Result<()> {
    output::print_header("avm-templates address");

    let bytes = decode_program(program)?;
    output::print_key_value("Size", &format!("{} bytes", bytes.len()));
    output::print_key_value("Address", &Address::from_program(&bytes).to_string());
    Ok(())
}
