//! Call/put discriminator.

use super::error::InstrumentError;
use std::fmt;
use std::str::FromStr;

/// Type of a European vanilla option.
///
/// Parsing is case-insensitive and surrounding whitespace is ignored; any
/// other text is rejected with [`InstrumentError::UnknownOptionType`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert!(OptionType::Call.is_call());
/// assert_eq!(" put ".parse::<OptionType>().unwrap(), OptionType::Put);
/// assert_eq!(OptionType::Put.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum OptionType {
    /// Right to buy: payoff max(S - K, 0)
    Call,
    /// Right to sell: payoff max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns `true` for a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(InstrumentError::UnknownOptionType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = InstrumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
