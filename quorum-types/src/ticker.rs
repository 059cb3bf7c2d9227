use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{Market, QuorumError};

/// A validated ticker symbol bound to the market it was requested under.
///
/// The market is carried with the symbol because it decides connector
/// eligibility (see [`Market`]); the same symbol string can be looked up under
/// different markets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker {
    symbol: String,
    market: Market,
}

impl Ticker {
    /// Build a ticker from a raw symbol and market.
    ///
    /// The symbol is trimmed and upper-cased.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the symbol is empty or contains whitespace.
    pub fn new(symbol: impl Into<String>, market: Market) -> Result<Self, QuorumError> {
        let symbol = symbol.into().trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(QuorumError::InvalidArg("empty ticker symbol".to_string()));
        }
        if symbol.chars().any(char::is_whitespace) {
            return Err(QuorumError::InvalidArg(format!(
                "ticker symbol contains whitespace: {symbol:?}"
            )));
        }
        Ok(Self { symbol, market })
    }

    /// The normalized symbol string.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The market this ticker was requested under.
    #[must_use]
    pub const fn market(&self) -> Market {
        self.market
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.symbol, self.market)
    }
}
