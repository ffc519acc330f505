use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A partition of a flight's seat inventory.
///
/// Variants are listed in display order; no other ordering is implied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FareClass {
    #[default]
    First,
    Business,
    Economy,
}

impl FareClass {
    pub const ALL: [FareClass; 3] = [FareClass::First, FareClass::Business, FareClass::Economy];

    pub fn as_str(&self) -> &'static str {
        match self {
            FareClass::First => "First",
            FareClass::Business => "Business",
            FareClass::Economy => "Economy",
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FareClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FareClass::ALL
            .into_iter()
            .find(|fare| fare.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::ValidationError(format!("Unknown fare class: {}", s)))
    }
}

impl TryFrom<String> for FareClass {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
