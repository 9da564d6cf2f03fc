//! Dynamic fee contract.
//!
//! Authorizes a single payment of `amount` to `receiver` in the round window
//! `[first_valid, last_valid]`, closing any remainder to `close_remainder`. The payment is
//! grouped with a second transaction in which another party reimburses the fee, so the
//! contract author does not need to know the fee in advance. The `lease` makes the payment
//! unique within its validity window.
//!
//! Only the program is produced here; building and signing the transaction group is left
//! to an SDK.

use serde::{Deserialize, Serialize};

use super::{embedded, LogicTemplate};
use crate::address::Address;
use crate::error::Result;
use crate::injector::{Placeholder, TemplateValue};

pub const LAYOUT: &[Placeholder] = &[
    Placeholder::uint(5),     // amount
    Placeholder::uint(6),     // first_valid
    Placeholder::uint(7),     // last_valid
    Placeholder::bytes32(11), // receiver
    Placeholder::bytes32(44), // close_remainder
    Placeholder::bytes32(77), // lease
];

/// Parameters of a dynamic fee contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicFee {
    pub receiver: String,
    /// Where leftover funds go; the zero address when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_remainder: Option<String>,
    /// Base64 of the 32-byte lease.
    pub lease: String,
    pub amount: u64,
    pub first_valid: u64,
    pub last_valid: u64,
}

impl LogicTemplate for DynamicFee {
    fn name(&self) -> &'static str {
        "dynamic-fee"
    }

    fn reference_program(&self) -> &'static str {
        embedded::DYNAMIC_FEE
    }

    fn placeholders(&self) -> &'static [Placeholder] {
        LAYOUT
    }

    fn values(&self) -> Result<Vec<TemplateValue>> {
        let close_remainder = match &self.close_remainder {
            Some(addr) => TemplateValue::address(addr)?,
            None => TemplateValue::from(Address::zero()),
        };
        Ok(vec![
            TemplateValue::Uint(self.amount),
            TemplateValue::Uint(self.first_valid),
            TemplateValue::Uint(self.last_valid),
            TemplateValue::address(&self.receiver)?,
            close_remainder,
            TemplateValue::base64_bytes32(&self.lease)?,
        ])
    }
}
