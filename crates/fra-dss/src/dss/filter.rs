use serde::{Deserialize, Serialize};

use super::domain::{Priority, Recommendation, Scheme, Village};
use super::recommend::RecommendationEngine;
use super::scoring::{has_agriculture, is_degraded, is_high_poverty, is_low_water};

/// Post-generation filter. An empty list places no constraint on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationFilter {
    pub villages: Vec<String>,
    pub priorities: Vec<Priority>,
    pub schemes: Vec<String>,
}

impl RecommendationFilter {
    pub fn is_empty(&self) -> bool {
        self.villages.is_empty() && self.priorities.is_empty() && self.schemes.is_empty()
    }

    pub fn matches(&self, recommendation: &Recommendation) -> bool {
        admits(&self.villages, &recommendation.village_id)
            && admits(&self.priorities, &recommendation.priority)
            && admits(&self.schemes, &recommendation.scheme_id)
    }

    pub fn apply(&self, recommendations: &[Recommendation]) -> Vec<Recommendation> {
        recommendations
            .iter()
            .filter(|recommendation| self.matches(recommendation))
            .cloned()
            .collect()
    }
}

fn admits<T, Q>(allowed: &[T], value: &Q) -> bool
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    allowed.is_empty() || allowed.iter().any(|candidate| candidate == value)
}

/// Keep recommendations matching every non-empty filter dimension, in input order.
pub fn filter_recommendations(
    recommendations: &[Recommendation],
    filter: &RecommendationFilter,
) -> Vec<Recommendation> {
    filter.apply(recommendations)
}

/// Village pre-filter applied before the cross product. Each enabled criterion
/// requires the matching eligibility flag to be raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EligibilityCriteria {
    pub low_water: bool,
    pub has_agriculture: bool,
    pub forest_degradation: bool,
    pub high_poverty: bool,
}

impl EligibilityCriteria {
    pub fn is_empty(&self) -> bool {
        !(self.low_water || self.has_agriculture || self.forest_degradation || self.high_poverty)
    }

    pub fn admits(&self, village: &Village) -> bool {
        (!self.low_water || is_low_water(village))
            && (!self.has_agriculture || has_agriculture(village))
            && (!self.forest_degradation || is_degraded(village))
            && (!self.high_poverty || is_high_poverty(village))
    }

    pub fn apply(&self, villages: &[Village]) -> Vec<Village> {
        villages
            .iter()
            .filter(|village| self.admits(village))
            .cloned()
            .collect()
    }
}

/// The dashboard pipeline: pre-filter villages, generate, then filter results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationQuery {
    pub criteria: EligibilityCriteria,
    pub filter: RecommendationFilter,
}

impl RecommendationQuery {
    pub fn run(
        &self,
        engine: &RecommendationEngine,
        villages: &[Village],
        schemes: &[Scheme],
    ) -> Vec<Recommendation> {
        let eligible = self.criteria.apply(villages);
        let generated = engine.generate(&eligible, schemes);
        let recommendations = self.filter.apply(&generated);

        tracing::debug!(
            villages = villages.len(),
            eligible_villages = eligible.len(),
            schemes = schemes.len(),
            generated = generated.len(),
            returned = recommendations.len(),
            "recommendation query evaluated"
        );

        recommendations
    }
}
