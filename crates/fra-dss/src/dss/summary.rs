use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{Priority, Recommendation};
use super::evidence::fixed;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    fn bump(&mut self, priority: Priority) {
        match priority {
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }
}

/// Aggregate figures shown above a recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub total: usize,
    pub villages_covered: usize,
    pub by_priority: PriorityCounts,
    pub total_estimated_budget: u64,
    pub total_affected_households: u64,
}

impl RecommendationSummary {
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let mut by_priority = PriorityCounts::default();
        let mut villages = BTreeSet::new();
        let mut total_estimated_budget: u64 = 0;
        let mut total_affected_households: u64 = 0;

        for recommendation in recommendations {
            by_priority.bump(recommendation.priority);
            villages.insert(recommendation.village_id.as_str());
            total_estimated_budget =
                total_estimated_budget.saturating_add(recommendation.estimated_budget);
            total_affected_households =
                total_affected_households.saturating_add(recommendation.affected_households);
        }

        Self {
            total: recommendations.len(),
            villages_covered: villages.len(),
            by_priority,
            total_estimated_budget,
            total_affected_households,
        }
    }

    pub fn headline(&self) -> String {
        format!(
            "{} recommendations across {} villages",
            self.total, self.villages_covered
        )
    }
}

/// Recommendations grouped by tier, High first, each group keeping input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedRecommendations {
    pub high: Vec<Recommendation>,
    pub medium: Vec<Recommendation>,
    pub low: Vec<Recommendation>,
}

impl GroupedRecommendations {
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let mut grouped = Self::default();
        for recommendation in recommendations {
            let bucket = match recommendation.priority {
                Priority::High => &mut grouped.high,
                Priority::Medium => &mut grouped.medium,
                Priority::Low => &mut grouped.low,
            };
            bucket.push(recommendation.clone());
        }
        grouped
    }

    pub fn group(&self, priority: Priority) -> &[Recommendation] {
        match priority {
            Priority::High => &self.high,
            Priority::Medium => &self.medium,
            Priority::Low => &self.low,
        }
    }

    /// Non-empty groups in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, &[Recommendation])> + '_ {
        Priority::ALL
            .into_iter()
            .map(|priority| (priority, self.group(priority)))
            .filter(|(_, group)| !group.is_empty())
    }
}

/// Compact rupee rendering using crore (Cr), lakh (L) and thousand (K) units.
pub fn format_budget(amount: u64) -> String {
    let value = amount as f64;
    if amount >= 10_000_000 {
        format!("₹{}Cr", fixed(value / 10_000_000.0, 1))
    } else if amount >= 100_000 {
        format!("₹{}L", fixed(value / 100_000.0, 1))
    } else if amount >= 1_000 {
        format!("₹{}K", fixed(value / 1_000.0, 0))
    } else {
        format!("₹{amount}")
    }
}
