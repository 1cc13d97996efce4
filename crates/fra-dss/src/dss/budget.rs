use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Scheme, Village};

/// Share of homesteads assumed reachable by a scheme rollout.
pub const COVERAGE_SHARE: f64 = 0.6;
/// Smallest rollout worth planning for, in households.
pub const MIN_AFFECTED_HOUSEHOLDS: u64 = 10;
/// Per-household cost for schemes without a dedicated entry, in rupees.
pub const DEFAULT_COST_PER_HOUSEHOLD: u64 = 20_000;

/// Rupee cost per household, keyed by scheme id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    per_household: BTreeMap<String, u64>,
    default_cost: u64,
}

impl CostTable {
    pub fn new(default_cost: u64) -> Self {
        Self {
            per_household: BTreeMap::new(),
            default_cost,
        }
    }

    pub fn standard() -> Self {
        let mut table = Self::new(DEFAULT_COST_PER_HOUSEHOLD);
        table.insert("JJM", 15_000);
        table.insert("PMKISAN", 6_000);
        table.insert("CAMPA", 25_000);
        table.insert("MGNREGA-WC", 18_000);
        table
    }

    pub fn insert(&mut self, scheme_id: impl Into<String>, cost: u64) {
        self.per_household.insert(scheme_id.into(), cost);
    }

    pub fn cost_for(&self, scheme_id: &str) -> u64 {
        self.per_household
            .get(scheme_id)
            .copied()
            .unwrap_or(self.default_cost)
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEstimate {
    pub affected_households: u64,
    pub estimated_budget: u64,
}

/// Households reached by a rollout in this village.
pub fn affected_households(village: &Village) -> u64 {
    let covered = (f64::from(village.homestead_count) * COVERAGE_SHARE).floor() as u64;
    covered.max(MIN_AFFECTED_HOUSEHOLDS)
}

pub fn estimate_impact_with(village: &Village, scheme: &Scheme, costs: &CostTable) -> ImpactEstimate {
    let affected_households = affected_households(village);
    ImpactEstimate {
        affected_households,
        estimated_budget: affected_households.saturating_mul(costs.cost_for(&scheme.id)),
    }
}

/// Budget and household estimate using the standard cost table.
pub fn estimate_impact(village: &Village, scheme: &Scheme) -> ImpactEstimate {
    estimate_impact_with(village, scheme, &CostTable::standard())
}
