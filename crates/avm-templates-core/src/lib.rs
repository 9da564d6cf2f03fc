//! Core library for the avm-templates toolkit.
//!
//! Instantiates precompiled Algorand logic-signature programs by injecting caller-supplied
//! values at known placeholder offsets. The [`injector`] does the byte-level work: it
//! encodes integers as uvarints, writes 32-byte identifiers verbatim and keeps every later
//! placeholder aligned while the program grows.
//!
//! Around it sit the pieces needed to use the result:
//! - [`address`] — address decoding/encoding and program-address derivation
//! - [`program`] — the instantiated [`program::ContractTemplate`] and base64 transport
//! - [`templates`] — the HTLC, Split and DynamicFee contracts
//! - [`config`] / [`artifacts`] — JSON request files and built-contract persistence

pub mod address;
pub mod artifacts;
pub mod config;
pub mod error;
pub mod injector;
pub mod program;
pub mod templates;
pub mod varint;

pub use address::Address;
pub use error::{Result, TemplateError};
pub use injector::{inject, Placeholder, TemplateValue};
pub use program::ContractTemplate;
