use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel value the site selector emits for "every site".
pub const ALL_SITES: &str = "ALL";

/// The site selector's current value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteChoice {
    #[default]
    All,
    Site(String),
}

impl SiteChoice {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_SITES) {
            Self::All
        } else {
            Self::Site(s.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(name) => name,
        }
    }

    /// Whether a record from `site` passes this choice.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(name) => name == site,
        }
    }
}

impl From<String> for SiteChoice {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<SiteChoice> for String {
    fn from(choice: SiteChoice) -> Self {
        match choice {
            SiteChoice::All => ALL_SITES.to_string(),
            SiteChoice::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload-mass bounds in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }

    /// Swap reversed endpoints so `low <= high`. The bounds themselves are
    /// kept as requested; a range past the data simply matches nothing.
    pub fn ordered(self) -> Self {
        if self.low <= self.high {
            self
        } else {
            Self {
                low: self.high,
                high: self.low,
            }
        }
    }

    pub fn is_finite(&self) -> bool {
        self.low.is_finite() && self.high.is_finite()
    }
}

/// The user's current filter choices. Owned by the UI layer, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorState {
    pub site: SiteChoice,
    pub payload_range: PayloadRange,
}

impl SelectorState {
    /// All sites over the given range (normally the dataset's full range).
    pub fn all_sites(payload_range: PayloadRange) -> Self {
        Self {
            site: SiteChoice::All,
            payload_range,
        }
    }
}

/// A change emitted by one of the two selector controls.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    SiteChanged(SiteChoice),
    RangeChanged(PayloadRange),
}
