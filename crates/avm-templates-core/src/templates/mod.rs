//! Contract templates built on the placeholder injector.
//!
//! Every template pairs a precompiled reference program from [`embedded`] with a fixed
//! placeholder layout. Instantiating a template decodes the reference program, converts the
//! caller's parameters into [`TemplateValue`]s, injects them and derives the address of the
//! resulting program.
//!
//! ## Adding a new template
//!
//! 1. Add the base64 reference program to [`embedded`]
//! 2. Write the placeholder layout in ascending offset order
//! 3. Implement [`LogicTemplate`] and add a golden test against a known program
//!
//! **Warning**: the layout and the reference program must stay in sync. The injector rejects
//! layouts that overrun the buffer or are out of order, but it cannot detect a layout that
//! points at the wrong bytes.

pub mod dynamic_fee;
pub mod embedded;
pub mod htlc;
pub mod split;

pub use dynamic_fee::DynamicFee;
pub use htlc::{HashFunction, Htlc};
pub use split::Split;

use crate::error::Result;
use crate::injector::{inject, Placeholder, TemplateValue};
use crate::program::{decode_program, ContractTemplate};

/// A precompiled program with a fixed placeholder layout.
pub trait LogicTemplate {
    /// Template identifier: "htlc", "split", "dynamic-fee".
    fn name(&self) -> &'static str;

    /// Base64 reference program.
    fn reference_program(&self) -> &'static str;

    /// Placeholder layout of [`Self::reference_program`], ascending by offset.
    fn placeholders(&self) -> &'static [Placeholder];

    /// Values for each placeholder, in layout order.
    ///
    /// Address strings and base64 parameters are decoded here, so malformed input fails
    /// before any byte of the program is touched.
    fn values(&self) -> Result<Vec<TemplateValue>>;

    /// Substitute the parameters into the reference program.
    fn instantiate(&self) -> Result<ContractTemplate> {
        let values = self.values()?;
        let reference = decode_program(self.reference_program())?;
        let program = inject(&reference, self.placeholders(), &values)?;
        let contract = ContractTemplate::from_program(program);
        tracing::info!(
            template = self.name(),
            address = %contract.address(),
            size = contract.program().len(),
            "instantiated template"
        );
        Ok(contract)
    }
}
