//! Query windows: CLI flag ⇄ provider tag ⇄ display label.

use std::{fmt, str::FromStr};

use clap::ValueEnum;

/// Time window a series covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Timeframe {
    #[value(name = "1h")]
    Hour,
    #[value(name = "4h")]
    FourHours,
    #[value(name = "1d")]
    Day,
    #[value(name = "7d")]
    Week,
    #[value(name = "1m")]
    Month,
    #[value(name = "3m")]
    Quarter,
    #[value(name = "1y")]
    Year,
    #[default]
    #[value(name = "5y")]
    FiveYears,
    #[value(name = "10y")]
    All,
}

impl Timeframe {
    const ALL: [Self; 9] = [
        Self::Hour,
        Self::FourHours,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::Year,
        Self::FiveYears,
        Self::All,
    ];

    /// Tag understood by the trends provider.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Hour => "now 1-H",
            Self::FourHours => "now 4-H",
            Self::Day => "now 1-d",
            Self::Week => "now 7-d",
            Self::Month => "today 1-m",
            Self::Quarter => "today 3-m",
            Self::Year => "today 12-m",
            Self::FiveYears => "today 5-y",
            Self::All => "all",
        }
    }

    /// Short label shown in chart titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hour => "1H",
            Self::FourHours => "4H",
            Self::Day => "1D",
            Self::Week => "7D",
            Self::Month => "1M",
            Self::Quarter => "3M",
            Self::Year => "1Y",
            Self::FiveYears => "5Y",
            Self::All => "10Y",
        }
    }

    /// CLI spelling (`5y`, `10y`, …).
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Hour => "1h",
            Self::FourHours => "4h",
            Self::Day => "1d",
            Self::Week => "7d",
            Self::Month => "1m",
            Self::Quarter => "3m",
            Self::Year => "1y",
            Self::FiveYears => "5y",
            Self::All => "10y",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }

    /// Multi-year windows get year-only axis dates.
    #[must_use]
    pub const fn is_long_range(self) -> bool {
        matches!(self, Self::FiveYears | Self::All)
    }
}

impl FromStr for Timeframe {
    type Err = std::convert::Infallible;

    /// Accepts either a CLI flag or a provider tag.  Unknown input falls back
    /// to the five year window.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(Self::ALL
            .into_iter()
            .find(|t| t.flag().eq_ignore_ascii_case(s))
            .or_else(|| Self::from_tag(s))
            .unwrap_or_default())
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} TREND", self.label())
    }
}
