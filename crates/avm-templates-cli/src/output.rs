//! Terminal output formatting for the avm-templates CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use console::style;

use avm_templates_core::ContractTemplate;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print the address, size and encodings of a built program.
pub fn print_contract(contract: &ContractTemplate) {
    print_key_value("Address", &contract.address().to_string());
    print_key_value("Size", &format!("{} bytes", contract.program().len()));
    print_key_value("Program (base64)", &contract.program_base64());
    print_key_value("Program (hex)", &hex::encode(contract.program()));
}
