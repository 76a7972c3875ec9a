//! Risk categories and their annual return assumptions

use crate::error::ProjectorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative investor risk preference
///
/// Closed set: every category carries a fixed annual return and a fixed
/// allocation plan, so adding one means extending every `match` below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum RiskCategory {
    #[default]
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskCategory {
    /// All categories in the order the input form lists them
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Conservative,
        RiskCategory::Balanced,
        RiskCategory::Aggressive,
    ];

    /// Assumed annual return for the category
    pub fn annual_return(self) -> f64 {
        match self {
            RiskCategory::Conservative => 0.03,
            RiskCategory::Balanced => 0.06,
            RiskCategory::Aggressive => 0.09,
        }
    }

    /// Lowercase identifier used in JSON, CSV and CLI arguments
    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Conservative => "conservative",
            RiskCategory::Balanced => "balanced",
            RiskCategory::Aggressive => "aggressive",
        }
    }

    /// Label shown on the original input form
    pub fn form_label(self) -> &'static str {
        match self {
            RiskCategory::Conservative => "保守型",
            RiskCategory::Balanced => "穩健型",
            RiskCategory::Aggressive => "積極型",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskCategory::Conservative => write!(f, "Conservative"),
            RiskCategory::Balanced => write!(f, "Balanced"),
            RiskCategory::Aggressive => write!(f, "Aggressive"),
        }
    }
}

impl FromStr for RiskCategory {
    type Err = ProjectorError;

    /// Accepts the identifier (any case) or the form label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RiskCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed) || c.form_label() == trimmed)
            .ok_or_else(|| ProjectorError::InvalidCategory(s.to_string()))
    }
}

impl TryFrom<String> for RiskCategory {
    type Error = ProjectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
