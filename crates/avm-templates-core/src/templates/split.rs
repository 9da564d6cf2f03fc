//! Split contract.
//!
//! Payments out of the contract account must go to `receiver_one` and `receiver_two` in a
//! group of two, in the proportion `ratio_numerator : ratio_denominator`, and the first
//! receiver must get at least `min_pay`. After `expiry_round` the remaining balance can be
//! closed out to `owner`. Each transaction in the group pays at most `max_fee`.

use serde::{Deserialize, Serialize};

use super::{embedded, LogicTemplate};
use crate::error::{Result, TemplateError};
use crate::injector::{Placeholder, TemplateValue};

pub const LAYOUT: &[Placeholder] = &[
    Placeholder::uint(4),     // max_fee
    Placeholder::uint(7),     // expiry_round
    Placeholder::uint(8),     // ratio_numerator
    Placeholder::uint(9),     // ratio_denominator
    Placeholder::uint(10),    // min_pay
    Placeholder::bytes32(14), // owner
    Placeholder::bytes32(47), // receiver_one
    Placeholder::bytes32(80), // receiver_two
];

/// Parameters of a split contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub owner: String,
    pub receiver_one: String,
    pub receiver_two: String,
    pub ratio_numerator: u64,
    pub ratio_denominator: u64,
    pub expiry_round: u64,
    pub min_pay: u64,
    pub max_fee: u64,
}

impl LogicTemplate for Split {
    fn name(&self) -> &'static str {
        "split"
    }

    fn reference_program(&self) -> &'static str {
        embedded::SPLIT
    }

    fn placeholders(&self) -> &'static [Placeholder] {
        LAYOUT
    }

    fn values(&self) -> Result<Vec<TemplateValue>> {
        if self.ratio_denominator == 0 {
            return Err(TemplateError::InvalidParameter {
                name: "ratio_denominator",
                reason: "must be non-zero".into(),
            });
        }
        Ok(vec![
            TemplateValue::Uint(self.max_fee),
            TemplateValue::Uint(self.expiry_round),
            TemplateValue::Uint(self.ratio_numerator),
            TemplateValue::Uint(self.ratio_denominator),
            TemplateValue::Uint(self.min_pay),
            TemplateValue::address(&self.owner)?,
            TemplateValue::address(&self.receiver_one)?,
            TemplateValue::address(&self.receiver_two)?,
        ])
    }
}
