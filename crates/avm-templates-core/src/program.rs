//! Instantiated contracts and base64 program transport.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::address::Address;
use crate::error::{Result, TemplateError};

/// A fully substituted program and the address it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractTemplate {
    program: Vec<u8>,
    address: Address,
}

impl ContractTemplate {
    /// Wrap a finished program, deriving its address.
    pub fn from_program(program: Vec<u8>) -> Self {
        let address = Address::from_program(&program);
        Self { program, address }
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// The program in standard base64, as submitted alongside a logic signature.
    pub fn program_base64(&self) -> String {
        encode_program(&self.program)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn into_program(self) -> Vec<u8> {
        self.program
    }
}

/// Decode a standard-base64 program.
pub fn decode_program(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| TemplateError::InvalidProgram(e.to_string()))
}

/// Encode a program as standard base64.
pub fn encode_program(program: &[u8]) -> String {
    STANDARD.encode(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_program() {
        assert_eq!(decode_program("ASABASI=").unwrap(), vec![0x01, 0x20, 0x01, 0x01, 0x22]);
    }

    #[test]
    fn test_decode_program_trims_whitespace() {
        assert_eq!(decode_program("ASABASI=\n").unwrap().len(), 5);
    }

    #[test]
    fn test_decode_program_invalid() {
        assert!(matches!(
            decode_program("ASABASI"),
            Err(TemplateError::InvalidProgram(_))
        ));
    }

    #[test]
    fn test_contract_template_accessors() {
        let program = vec![0x01, 0x20, 0x01, 0x01, 0x22];
        let contract = ContractTemplate::from_program(program.clone());
        assert_eq!(contract.program(), program.as_slice());
        assert_eq!(contract.program_base64(), "ASABASI=");
        assert_eq!(contract.address(), Address::from_program(&program));
        assert_eq!(contract.into_program(), program);
    }
}
