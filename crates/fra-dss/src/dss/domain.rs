use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Administrative unit with the indicator attributes consumed by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    pub id: String,
    pub name: String,
    /// Lower values mean more water stress.
    pub groundwater_index: f64,
    pub agri_area_ha: f64,
    pub forest_degradation_level: f64,
    pub poverty_score: f64,
    pub water_bodies_count: u32,
    pub population: u32,
    pub homestead_count: u32,
}

/// Assistance program and the weights it attaches to each eligibility flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: String,
    pub name: String,
    /// Informational criteria; scoring ignores them.
    #[serde(default)]
    pub eligibility: Vec<String>,
    #[serde(default)]
    pub evidence_keys: Vec<String>,
    pub weights: SchemeWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeWeights {
    pub low_water: f64,
    pub agri: f64,
    pub degradation: f64,
    pub poverty: f64,
}

/// Binary eligibility flags derived from a village's continuous indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorFlags {
    pub low_water: u8,
    pub agri: u8,
    pub degradation: u8,
    pub poverty: u8,
}

/// Indicator names a scheme may list in `evidence_keys`, in evidence check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvidenceKey {
    GroundwaterIndex,
    AgriAreaHa,
    ForestDegradationLevel,
    PovertyScore,
    WaterBodiesCount,
}

impl EvidenceKey {
    pub const ORDERED: [EvidenceKey; 5] = [
        EvidenceKey::GroundwaterIndex,
        EvidenceKey::AgriAreaHa,
        EvidenceKey::ForestDegradationLevel,
        EvidenceKey::PovertyScore,
        EvidenceKey::WaterBodiesCount,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EvidenceKey::GroundwaterIndex => "groundwaterIndex",
            EvidenceKey::AgriAreaHa => "agriAreaHa",
            EvidenceKey::ForestDegradationLevel => "forestDegradationLevel",
            EvidenceKey::PovertyScore => "povertyScore",
            EvidenceKey::WaterBodiesCount => "waterBodiesCount",
        }
    }
}

impl FromStr for EvidenceKey {
    type Err = UnknownEvidenceKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ORDERED
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| UnknownEvidenceKey(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown evidence key '{0}'")]
pub struct UnknownEvidenceKey(pub String);

/// Priority tier of a recommendation. Declaration order is the ranking order.
///
/// Serialized as "High", "Medium" or "Low"; parsing ignores case and surrounding spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Ordinal used when sorting; larger sorts first.
    pub const fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(UnknownPriority(value.to_string())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = UnknownPriority;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority '{0}' (expected High, Medium or Low)")]
pub struct UnknownPriority(pub String);

/// Scored, annotated suggestion to apply a scheme to a village.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub scheme_id: String,
    pub scheme_name: String,
    pub village_id: String,
    pub village_name: String,
    pub priority: Priority,
    pub score: f64,
    pub evidence: Vec<String>,
    pub justification: String,
    pub estimated_budget: u64,
    pub affected_households: u64,
}

impl Recommendation {
    /// Stable key for a (scheme, village) pairing.
    pub fn key(&self) -> String {
        format!("{}-{}", self.scheme_id, self.village_id)
    }
}
