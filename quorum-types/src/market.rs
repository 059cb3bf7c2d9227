use core::fmt;
use serde::{Deserialize, Serialize};

/// Fixed source/target language codes for a translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    /// Source language code (e.g. "zh-CN").
    pub source: &'static str,
    /// Target language code (e.g. "en").
    pub target: &'static str,
}

/// Simplified Chinese to English, the pair used for the regional disclosure
/// sources.
pub const ZH_CN_TO_EN: LanguagePair = LanguagePair {
    source: "zh-CN",
    target: "en",
};

/// Market selector driving which connectors are eligible for a ticker.
///
/// Markets gate capabilities the same way the asset kind gates providers in a
/// multi-provider market-data router: connectors advertise support per market
/// and the orchestrator only routes to supporting connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Market {
    /// United States, SEC-regulated listings.
    UsSec,
    /// Mainland China A-shares.
    ChinaAShares,
    /// Taiwan Stock Exchange listings.
    TaiwanTsec,
}

impl Market {
    /// All selectable markets, in presentation order.
    pub const ALL: [Self; 3] = [Self::UsSec, Self::ChinaAShares, Self::TaiwanTsec];

    /// Human-facing selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UsSec => "USA (SEC)",
            Self::ChinaAShares => "China (A-Shares)",
            Self::TaiwanTsec => "Taiwan (TSEC)",
        }
    }

    /// Language pair to apply to disclosure text for this market, if any.
    ///
    /// `None` means disclosures (when present) are already in the display
    /// language and no translation pass runs.
    #[must_use]
    pub const fn translation(self) -> Option<LanguagePair> {
        match self {
            Self::UsSec => None,
            Self::ChinaAShares | Self::TaiwanTsec => Some(ZH_CN_TO_EN),
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
