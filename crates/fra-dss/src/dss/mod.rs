//! Village/scheme eligibility scoring and recommendation ranking.
//!
//! Every function here is pure and total: inputs are borrowed, never mutated, and
//! malformed values degrade into low scores rather than errors. Range checks belong
//! to [`crate::ingest`].

mod budget;
pub mod domain;
mod evidence;
mod filter;
mod justification;
mod recommend;
mod scoring;
mod summary;

#[cfg(test)]
mod tests;

pub use budget::{
    affected_households, estimate_impact, estimate_impact_with, CostTable, ImpactEstimate,
    COVERAGE_SHARE, DEFAULT_COST_PER_HOUSEHOLD, MIN_AFFECTED_HOUSEHOLDS,
};
pub use domain::{
    EvidenceKey, IndicatorFlags, Priority, Recommendation, Scheme, SchemeWeights,
    UnknownEvidenceKey, UnknownPriority, Village,
};
pub use evidence::build_evidence;
pub use filter::{
    filter_recommendations, EligibilityCriteria, RecommendationFilter, RecommendationQuery,
};
pub use justification::{build_justification, JustificationTable, JustificationTemplate};
pub use recommend::{generate_recommendations, sort_recommendations, RecommendationEngine};
pub use scoring::{
    classify_priority, score_scheme, score_village, AGRI_AREA_THRESHOLD_HA,
    DEGRADATION_THRESHOLD, LOW_WATER_THRESHOLD, POVERTY_THRESHOLD,
};
pub use summary::{format_budget, GroupedRecommendations, PriorityCounts, RecommendationSummary};
