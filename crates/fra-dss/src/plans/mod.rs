//! Action plans drafted against individual recommendations.
//!
//! Plans live in a caller-supplied repository; nothing in [`crate::dss`] reads them back.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ActionPlan, ActionPlanDraft, PlanId, PlanStatus, PlanTimeline, PlanView, RiskLevel,
};
pub use repository::{ActionPlanRepository, RepositoryError};
pub use router::plan_router;
pub use service::{ActionPlanService, DraftError, PlanServiceError, MAX_MILESTONES};
