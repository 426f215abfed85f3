use serde::{Deserialize, Serialize};

use super::PayloadRange;

/// A single launch attempt.
///
/// Records are read once from the source table and never modified. The
/// `outcome` field corresponds to the source's binary `class` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub flight_number: u32,
    pub launch_site: String,
    /// Payload mass in kilograms. Always finite and non-negative.
    pub payload_mass_kg: f64,
    pub booster_version: String,
    /// Coarse booster family (e.g. `FT`, `B5`), used to color scatter points.
    pub booster_version_category: String,
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    /// Whether the payload falls inside `range`, inclusive on both ends.
    pub fn payload_within(&self, range: &PayloadRange) -> bool {
        range.contains(self.payload_mass_kg)
    }
}

/// The binary result of a launch attempt.
///
/// - `Success`: `class` = 1 in the source table
/// - `Failure`: `class` = 0 in the source table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    /// The 0/1 indicator summed when counting successes.
    pub fn as_class(&self) -> u8 {
        match self {
            Self::Success => 1,
            Self::Failure => 0,
        }
    }

    /// Parse the source table's `class` cell. Accepts `1`/`0` and their float
    /// spellings (`1.0`/`0.0`).
    pub fn from_class(s: &str) -> Option<Self> {
        match s.trim() {
            "1" | "1.0" => Some(Self::Success),
            "0" | "0.0" => Some(Self::Failure),
            _ => None,
        }
    }
}

/// Values derived from the dataset once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub launches: usize,
    pub successes: usize,
    pub min_payload: f64,
    pub max_payload: f64,
    /// Distinct launch sites, sorted by name.
    pub sites: Vec<String>,
}

impl DatasetSummary {
    pub fn failures(&self) -> usize {
        self.launches - self.successes
    }

    /// The full observed payload range.
    pub fn payload_range(&self) -> PayloadRange {
        PayloadRange {
            low: self.min_payload,
            high: self.max_payload,
        }
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }
}
