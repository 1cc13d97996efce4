use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dss::{Priority, Recommendation};

/// Identifier wrapper for stored action plans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanId(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Planner form contents for one recommendation, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlanDraft {
    pub recommendation: Recommendation,
    #[serde(default)]
    pub assigned_department: String,
    #[serde(default)]
    pub planned_start: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_duration_months: Option<u32>,
    /// Falls back to the recommendation's estimate when absent.
    #[serde(default)]
    pub budget_allocated: Option<u64>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default)]
    pub risk_assessment: RiskLevel,
}

impl ActionPlanDraft {
    pub fn for_recommendation(recommendation: Recommendation) -> Self {
        Self {
            recommendation,
            assigned_department: String::new(),
            planned_start: None,
            estimated_duration_months: None,
            budget_allocated: None,
            notes: String::new(),
            milestones: Vec::new(),
            risk_assessment: RiskLevel::Low,
        }
    }
}

/// Lifecycle of a saved plan. Plans only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Draft,
    Approved,
    InProgress,
    Completed,
}

impl PlanStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PlanStatus::Draft => "draft",
            PlanStatus::Approved => "approved",
            PlanStatus::InProgress => "in_progress",
            PlanStatus::Completed => "completed",
        }
    }

    pub const fn next(self) -> Option<PlanStatus> {
        match self {
            PlanStatus::Draft => Some(PlanStatus::Approved),
            PlanStatus::Approved => Some(PlanStatus::InProgress),
            PlanStatus::InProgress => Some(PlanStatus::Completed),
            PlanStatus::Completed => None,
        }
    }

    pub fn can_advance_to(self, target: PlanStatus) -> bool {
        self.next() == Some(target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub id: PlanId,
    pub recommendation: Recommendation,
    pub assigned_department: String,
    pub planned_start: Option<NaiveDate>,
    pub estimated_duration_months: Option<u32>,
    pub budget_allocated: u64,
    pub notes: String,
    pub milestones: Vec<String>,
    pub risk_assessment: RiskLevel,
    pub status: PlanStatus,
    pub created_at: DateTime<Utc>,
}

impl ActionPlan {
    /// Start and end dates, starting from the creation date when no start was planned.
    pub fn timeline(&self) -> Option<(NaiveDate, NaiveDate)> {
        let months = self.estimated_duration_months?;
        let start = self
            .planned_start
            .unwrap_or_else(|| self.created_at.date_naive());
        let end = start.checked_add_months(Months::new(months))?;
        Some((start, end))
    }

    pub fn view(&self) -> PlanView {
        PlanView {
            id: self.id.clone(),
            status: self.status.label(),
            scheme_id: self.recommendation.scheme_id.clone(),
            village_id: self.recommendation.village_id.clone(),
            priority: self.recommendation.priority,
            assigned_department: self.assigned_department.clone(),
            budget_allocated: self.budget_allocated,
            milestones: self.milestones.clone(),
            risk_assessment: self.risk_assessment,
            created_at: self.created_at,
            timeline: self.timeline().map(|(start, end)| PlanTimeline { start, end }),
        }
    }
}

/// Flattened representation returned by the plan endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub id: PlanId,
    pub status: &'static str,
    pub scheme_id: String,
    pub village_id: String,
    pub priority: Priority,
    pub assigned_department: String,
    pub budget_allocated: u64,
    pub milestones: Vec<String>,
    pub risk_assessment: RiskLevel,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<PlanTimeline>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanTimeline {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
