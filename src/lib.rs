//! code-entry library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Characters a code may contain (the keyboard type of the entry row).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    #[default]
    Numeric,
    Alphanumeric,
    Any,
}

impl Charset {
    /// Whether every character of `text` belongs to this set.
    pub fn accepts(self, text: &str) -> bool {
        text.chars().all(|c| match self {
            Charset::Numeric => c.is_ascii_digit(),
            Charset::Alphanumeric => c.is_alphanumeric(),
            Charset::Any => !c.is_control(),
        })
    }

    /// Name as written on the command line and in the config file.
    pub fn label(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }

    /// Case-insensitive parse of a charset name, surrounding whitespace ignored.
    pub fn parse_name(raw: &str) -> Result<Self, String> {
        <Self as ValueEnum>::from_str(raw.trim(), true)
    }
}
