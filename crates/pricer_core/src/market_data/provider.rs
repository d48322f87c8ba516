//! Quote lookup by instrument identifier.

use super::error::MarketDataError;
use super::quote::MarketQuote;
use std::collections::HashMap;

/// Source of current market quotes.
///
/// Implementations may be backed by configuration, a cache or an external
/// feed. Lookups of unknown instruments fail with
/// [`MarketDataError::InstrumentNotFound`].
pub trait QuoteProvider {
    /// Returns the current quote for `instrument`.
    fn quote(&self, instrument: &str) -> Result<MarketQuote, MarketDataError>;
}

/// In-memory quote provider.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::{MarketQuote, QuoteProvider, StaticQuoteProvider};
///
/// let provider: StaticQuoteProvider = [("SPY", MarketQuote::new(450.0, 0.18).unwrap())]
///     .into_iter()
///     .collect();
/// assert_eq!(provider.quote("SPY").unwrap().volatility(), 0.18);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticQuoteProvider {
    quotes: HashMap<String, MarketQuote>,
}

impl StaticQuoteProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the quote for `instrument`.
    pub fn insert(&mut self, instrument: impl Into<String>, quote: MarketQuote) {
        self.quotes.insert(instrument.into(), quote);
    }

    /// Number of instruments quoted.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns `true` if no instruments are quoted.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Iterates over the quoted instrument identifiers.
    pub fn instruments(&self) -> impl Iterator<Item = &str> {
        self.quotes.keys().map(String::as_str)
    }
}

impl QuoteProvider for StaticQuoteProvider {
    fn quote(&self, instrument: &str) -> Result<MarketQuote, MarketDataError> {
        self.quotes
            .get(instrument)
            .copied()
            .ok_or_else(|| MarketDataError::InstrumentNotFound {
                instrument: instrument.to_string(),
            })
    }
}

impl<S: Into<String>> FromIterator<(S, MarketQuote)> for StaticQuoteProvider {
    fn from_iter<I: IntoIterator<Item = (S, MarketQuote)>>(iter: I) -> Self {
        Self {
            quotes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_provider() {
        let provider = StaticQuoteProvider::new();
        assert!(provider.is_empty());
        assert_eq!(
            provider.quote("AAPL"),
            Err(MarketDataError::InstrumentNotFound {
                instrument: "AAPL".to_string()
            })
        );
    }

    #[test]
    fn test_insert_and_replace() {
        let mut provider = StaticQuoteProvider::new();
        provider.insert("AAPL", MarketQuote::new(190.0, 0.25).unwrap());
        provider.insert("AAPL", MarketQuote::new(195.0, 0.24).unwrap());

        assert_eq!(provider.len(), 1);
        let quote = provider.quote("AAPL").unwrap();
        assert_eq!(quote.underlying_price(), 195.0);
        assert_eq!(quote.volatility(), 0.24);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut provider = StaticQuoteProvider::new();
        provider.insert("AAPL", MarketQuote::new(190.0, 0.25).unwrap());
        assert!(provider.quote("aapl").is_err());
    }

    #[test]
    fn test_instruments_listing() {
        let provider: StaticQuoteProvider = [
            ("A", MarketQuote::new(1.0, 0.1).unwrap()),
            ("B", MarketQuote::new(2.0, 0.2).unwrap()),
        ]
        .into_iter()
        .collect();
        let mut ids: Vec<&str> = provider.instruments().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["A", "B"]);
    }
}
