//! Template request files.
//!
//! A request names a template and carries its parameters, so a contract can be rebuilt
//! reproducibly from a file checked in next to the deployment scripts:
//!
//! ```json
//! {
//!   "template": "split",
//!   "owner": "WO3QIJ6T4DZHBX5PWJH26JLHFSRT7W7M2DJOULPXDTUS6TUX7ZRIO4KDFY",
//!   "receiver_one": "W6UUUSEAOGLBHT7VFT4H2SDATKKSG6ZBUIJXTZMSLW36YS44FRP5NVAU7U",
//!   "receiver_two": "XCIBIN7RT4ZXGBMVAMU3QS6L5EKB7XGROC5EPCNHHYXUIBAA5Q6C5Y7NEU",
//!   "ratio_numerator": 30,
//!   "ratio_denominator": 100,
//!   "expiry_round": 123456,
//!   "min_pay": 10000,
//!   "max_fee": 5000000
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};
use crate::program::ContractTemplate;
use crate::templates::{DynamicFee, Htlc, LogicTemplate, Split};

/// A template name together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "kebab-case")]
pub enum TemplateRequest {
    Htlc(Htlc),
    Split(Split),
    DynamicFee(DynamicFee),
}

impl TemplateRequest {
    /// Load a request from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| TemplateError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| TemplateError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the request as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| TemplateError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn template(&self) -> &dyn LogicTemplate {
        match self {
            Self::Htlc(t) => t,
            Self::Split(t) => t,
            Self::DynamicFee(t) => t,
        }
    }

    pub fn instantiate(&self) -> Result<ContractTemplate> {
        self.template().instantiate()
    }
}
