use std::cmp::Ordering;

use super::budget::{estimate_impact_with, CostTable};
use super::domain::{Recommendation, Scheme, Village};
use super::evidence::build_evidence;
use super::justification::JustificationTable;
use super::scoring::{classify_priority, score_scheme};

/// Stateless generator that scores every (village, scheme) pairing.
///
/// The lookup tables are injectable so deployments can add local schemes without
/// touching scoring. [`RecommendationEngine::default`] uses the standard tables.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    justifications: JustificationTable,
    costs: CostTable,
}

impl RecommendationEngine {
    pub fn new(justifications: JustificationTable, costs: CostTable) -> Self {
        Self {
            justifications,
            costs,
        }
    }

    pub fn recommend(&self, village: &Village, scheme: &Scheme) -> Recommendation {
        let score = score_scheme(village, scheme);
        let priority = classify_priority(score);
        let evidence = build_evidence(village, scheme);
        let justification = self.justifications.render(village, scheme, priority);
        let impact = estimate_impact_with(village, scheme, &self.costs);

        Recommendation {
            scheme_id: scheme.id.clone(),
            scheme_name: scheme.name.clone(),
            village_id: village.id.clone(),
            village_name: village.name.clone(),
            priority,
            score,
            evidence,
            justification,
            estimated_budget: impact.estimated_budget,
            affected_households: impact.affected_households,
        }
    }

    /// Full villages x schemes cross product, ranked by priority then score.
    pub fn generate(&self, villages: &[Village], schemes: &[Scheme]) -> Vec<Recommendation> {
        let mut recommendations = Vec::with_capacity(villages.len() * schemes.len());
        for village in villages {
            for scheme in schemes {
                recommendations.push(self.recommend(village, scheme));
            }
        }

        sort_recommendations(&mut recommendations);
        recommendations
    }
}

/// Generate and rank recommendations with the standard lookup tables.
pub fn generate_recommendations(villages: &[Village], schemes: &[Scheme]) -> Vec<Recommendation> {
    RecommendationEngine::default().generate(villages, schemes)
}

/// Stable sort: priority descending, then score descending.
pub fn sort_recommendations(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(ranking);
}

fn ranking(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.priority
        .rank()
        .cmp(&a.priority.rank())
        .then_with(|| sort_key(b.score).total_cmp(&sort_key(a.score)))
}

// total_cmp stays total when a weight produces NaN; adding 0.0 folds -0.0 into 0.0
// so the two zeros keep their generation order.
fn sort_key(score: f64) -> f64 {
    score + 0.0
}
