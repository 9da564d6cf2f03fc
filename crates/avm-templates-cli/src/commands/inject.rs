use std::path::Path;

use anyhow::{Context, Result};

use avm_templates_core::program::decode_program;
use avm_templates_core::{inject, ContractTemplate, Placeholder, TemplateValue};

use crate::output;

/// Inject values into an arbitrary program.
///
/// Integers replace a 1-byte placeholder; raw bytes and addresses replace a 32-byte one.
/// Substitutions are applied in ascending offset order regardless of the order the flags
/// were given in.
pub fn run(
    program: &str,
    uints: &[String],
    bytes: &[String],
    addresses: &[String],
    out: Option<&Path>,
) -> Result<()> {
    output::print_header("avm-templates inject");

    let original = decode_program(program)?;
    let (placeholders, values) = collect_substitutions(uints, bytes, addresses)?;
    if placeholders.is_empty() {
        anyhow::bail!("nothing to inject; pass at least one of --uint, --bytes, --address");
    }

    tracing::debug!(?placeholders, ?values, "parsed substitutions");

    output::print_key_value("Original size", &format!("{} bytes", original.len()));
    output::print_key_value("Placeholders", &placeholders.len().to_string());

    let injected = inject(&original, &placeholders, &values)?;
    super::emit("custom", &ContractTemplate::from_program(injected), out)
}

/// Parse every flag into a placeholder/value pair, sorted by offset.
fn collect_substitutions(
    uints: &[String],
    bytes: &[String],
    addresses: &[String],
) -> Result<(Vec<Placeholder>, Vec<TemplateValue>)> {
    let mut pairs = Vec::with_capacity(uints.len() + bytes.len() + addresses.len());

    for arg in uints {
        let (offset, value) = split_arg(arg)?;
        let value: u64 = value
            .parse()
            .with_context(|| format!("invalid integer in --uint {arg}"))?;
        pairs.push((Placeholder::uint(offset), TemplateValue::Uint(value)));
    }
    for arg in bytes {
        let (offset, value) = split_arg(arg)?;
        pairs.push((Placeholder::bytes32(offset), TemplateValue::base64_bytes32(value)?));
    }
    for arg in addresses {
        let (offset, value) = split_arg(arg)?;
        pairs.push((Placeholder::bytes32(offset), TemplateValue::address(value)?));
    }

    pairs.sort_by_key(|(placeholder, _)| placeholder.offset);
    Ok(pairs.into_iter().unzip())
}

/// Split `OFFSET=VALUE`.
fn split_arg(arg: &str) -> Result<(usize, &str)> {
    let (offset, value) = arg
        .split_once('=')
        .with_context(|| format!("expected OFFSET=VALUE, got '{arg}'"))?;
    let offset = offset
        .trim()
        .parse()
        .with_context(|| format!("invalid offset in '{arg}'"))?;
    Ok((offset, value.trim()))
}
