//! Identifier types for portfolio entities.

use std::fmt;

/// Identifier used when a position does not name its underlying.
pub const DEFAULT_UNDERLYING: &str = "UNDERLYING";

/// Identifier of the underlying an option is written on.
///
/// Positions sharing an identifier share one Monte Carlo shock when the
/// per-underlying shock model is selected. The default identifier is
/// [`DEFAULT_UNDERLYING`].
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::UnderlyingId;
///
/// let id = UnderlyingId::new("AAPL");
/// assert_eq!(id.as_str(), "AAPL");
/// assert_eq!(UnderlyingId::default().as_str(), "UNDERLYING");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnderlyingId(String);

impl UnderlyingId {
    /// Creates a new underlying ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UnderlyingId {
    fn default() -> Self {
        Self::new(DEFAULT_UNDERLYING)
    }
}

impl fmt::Display for UnderlyingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UnderlyingId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for UnderlyingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let a: UnderlyingId = "SPX".into();
        let b: UnderlyingId = String::from("SPX").into();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "SPX");
    }

    #[test]
    fn test_default() {
        assert_eq!(UnderlyingId::default(), UnderlyingId::new(DEFAULT_UNDERLYING));
    }
}
