//! Hash time-locked contract.
//!
//! Funds held by the contract account can leave in exactly two ways:
//! 1. to `receiver`, by supplying a preimage whose hash equals `hash_image`;
//! 2. to `owner`, once the transaction's first valid round is past `expiry_round`.
//!
//! Every transaction must pay at most `max_fee`. The contract is the usual building block
//! for cross-chain atomic swaps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{embedded, LogicTemplate};
use crate::error::{Result, TemplateError};
use crate::injector::{Placeholder, TemplateValue};

/// Placeholder layout of both HTLC reference programs.
pub const LAYOUT: &[Placeholder] = &[
    Placeholder::uint(3),     // max_fee
    Placeholder::uint(6),     // expiry_round
    Placeholder::bytes32(10), // receiver
    Placeholder::bytes32(43), // hash_image
    Placeholder::bytes32(76), // owner
];

/// Hash applied to the preimage argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFunction {
    Sha256,
    Keccak256,
}

impl HashFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Keccak256 => "keccak256",
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashFunction {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sha256" => Ok(Self::Sha256),
            "keccak256" => Ok(Self::Keccak256),
            other => Err(TemplateError::UnknownHashFunction(other.to_string())),
        }
    }
}

/// Parameters of a hash time-locked contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Htlc {
    /// Address that may reclaim the funds after `expiry_round`.
    pub owner: String,
    /// Address that receives the funds on a valid preimage.
    pub receiver: String,
    pub hash_function: HashFunction,
    /// Base64 of the 32-byte hash image.
    pub hash_image: String,
    pub expiry_round: u64,
    pub max_fee: u64,
}

impl LogicTemplate for Htlc {
    fn name(&self) -> &'static str {
        "htlc"
    }

    fn reference_program(&self) -> &'static str {
        match self.hash_function {
            HashFunction::Sha256 => embedded::HTLC_SHA256,
            HashFunction::Keccak256 => embedded::HTLC_KECCAK256,
        }
    }

    fn placeholders(&self) -> &'static [Placeholder] {
        LAYOUT
    }

    fn values(&self) -> Result<Vec<TemplateValue>> {
        Ok(vec![
            TemplateValue::Uint(self.max_fee),
            TemplateValue::Uint(self.expiry_round),
            TemplateValue::address(&self.receiver)?,
            TemplateValue::base64_bytes32(&self.hash_image)?,
            TemplateValue::address(&self.owner)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_params() -> Htlc {
        Htlc {
            owner: "726KBOYUJJNE5J5UHCSGQGWIBZWKCBN4WYD7YVSTEXEVNFPWUIJ7TAEOPM".into(),
            receiver: "42NJMHTPFVPXVSDGA6JGKUV6TARV5UZTMPFIREMLXHETRKIVW34QFSDFRE".into(),
            hash_function: HashFunction::Sha256,
            hash_image: "f4OxZX/x/FO5LcGBSKHWXfwtSx+j1ncoSt3SABJtkGk=".into(),
            expiry_round: 600_000,
            max_fee: 1_000,
        }
    }

    #[test]
    fn test_htlc_golden() {
        let contract = golden_params().instantiate().unwrap();
        assert_eq!(
            contract.program_base64(),
            "ASAE6AcBAMDPJCYDIOaalh5vLV96yGYHkmVSvpgjXtMzY8qIkYu5yTipFbb5IH+DsWV/8fxTuS3BgUih1l38LUsfo9Z3KErd0gASbZBpIP68oLsUSlpOp7Q4pGgayA5soQW8tgf8VlMlyVaV9qITMQEiDjEQIxIQMQcyAxIQMQgkEhAxCSgSLQEpEhAxCSoSMQIlDRAREA=="
        );
        assert_eq!(
            contract.address().to_string(),
            "KNBD7ATNUVQ4NTLOI72EEUWBVMBNKMPHWVBCETERV2W7T2YO6CVMLJRBM4"
        );
    }

    #[test]
    fn test_htlc_keccak_golden() {
        let params = Htlc {
            hash_function: HashFunction::Keccak256,
            ..golden_params()
        };
        let contract = params.instantiate().unwrap();
        assert_eq!(contract.program().len(), 151);
        assert_eq!(
            contract.address().to_string(),
            "L2FGAYTHYHR67Q2B7V2CLXCILABR6MIIKALIA5AQIQMBYDMIUP5FZ66UT4"
        );
    }

    #[test]
    fn test_hash_function_from_str() {
        assert_eq!("sha256".parse::<HashFunction>().unwrap(), HashFunction::Sha256);
        assert_eq!("keccak256".parse::<HashFunction>().unwrap(), HashFunction::Keccak256);
        assert!(matches!(
            "md5".parse::<HashFunction>(),
            Err(TemplateError::UnknownHashFunction(_))
        ));
    }

    // --- Edge case tests ---

    #[test]
    fn test_htlc_invalid_owner() {
        let params = Htlc {
            owner: "not-an-address".into(),
            ..golden_params()
        };
        assert!(matches!(
            params.instantiate(),
            Err(TemplateError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_htlc_short_hash_image() {
        let params = Htlc {
            hash_image: "AAAA".into(),
            ..golden_params()
        };
        assert!(matches!(
            params.instantiate(),
            Err(TemplateError::InvalidBytes32(_))
        ));
    }

    #[test]
    fn test_htlc_serde_roundtrip() {
        let json = serde_json::to_string(&golden_params()).unwrap();
        assert!(json.contains("\"hash_function\":\"sha256\""));
        let back: Htlc = serde_json::from_str(&json).unwrap();
        assert_eq!(back, golden_params());
    }
}
