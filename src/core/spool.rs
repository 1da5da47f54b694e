//! Spool types and their fixed weights

use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spool sizes that can be invoiced
///
/// Each variant carries a fixed weight in pounds that feeds the price
/// calculation. The wire names match what the order form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpoolType {
    #[serde(rename = "33lb")]
    Lb33,
    #[serde(rename = "44lb")]
    Lb44,
    #[serde(rename = "550lb")]
    Lb550,
}

impl SpoolType {
    /// Every known spool type, in catalog order
    pub const ALL: [SpoolType; 3] = [SpoolType::Lb33, SpoolType::Lb44, SpoolType::Lb550];

    /// Weight of one spool in pounds
    pub fn weight(self) -> f64 {
        match self {
            SpoolType::Lb33 => 33.0,
            SpoolType::Lb44 => 44.0,
            SpoolType::Lb550 => 550.0,
        }
    }

    /// Name used on the wire and in the order form
    pub fn as_str(self) -> &'static str {
        match self {
            SpoolType::Lb33 => "33lb",
            SpoolType::Lb44 => "44lb",
            SpoolType::Lb550 => "550lb",
        }
    }
}

impl fmt::Display for SpoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpoolType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spool| spool.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSpoolType {
                value: s.to_string(),
            })
    }
}
