use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{ActionPlan, ActionPlanDraft, PlanId, PlanStatus};
use super::repository::{ActionPlanRepository, RepositoryError};

pub const MAX_MILESTONES: usize = 3;

/// Validates planner drafts and drives plan status through its lifecycle.
pub struct ActionPlanService<R> {
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> ActionPlanService<R>
where
    R: ActionPlanRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_plan_id(&self, draft: &ActionPlanDraft) -> PlanId {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        PlanId(format!("{}-{seq}", draft.recommendation.key()))
    }

    /// Save a draft as a new plan in `Draft` status.
    pub fn create(&self, draft: ActionPlanDraft) -> Result<ActionPlan, PlanServiceError> {
        if draft.estimated_duration_months == Some(0) {
            return Err(DraftError::ZeroDuration.into());
        }

        let milestones: Vec<String> = draft
            .milestones
            .iter()
            .map(|milestone| milestone.trim())
            .filter(|milestone| !milestone.is_empty())
            .map(str::to_string)
            .collect();
        if milestones.len() > MAX_MILESTONES {
            return Err(DraftError::TooManyMilestones {
                count: milestones.len(),
            }
            .into());
        }

        let id = self.next_plan_id(&draft);
        let budget_allocated = draft
            .budget_allocated
            .unwrap_or(draft.recommendation.estimated_budget);

        let plan = ActionPlan {
            id,
            assigned_department: draft.assigned_department.trim().to_string(),
            planned_start: draft.planned_start,
            estimated_duration_months: draft.estimated_duration_months,
            budget_allocated,
            notes: draft.notes,
            milestones,
            risk_assessment: draft.risk_assessment,
            status: PlanStatus::Draft,
            created_at: Utc::now(),
            recommendation: draft.recommendation,
        };

        let stored = self.repository.insert(plan)?;
        tracing::info!(plan_id = %stored.id.0, "action plan saved");
        Ok(stored)
    }

    pub fn get(&self, id: &PlanId) -> Result<ActionPlan, PlanServiceError> {
        let plan = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(plan)
    }

    /// All plans, oldest first.
    pub fn list(&self) -> Result<Vec<ActionPlan>, PlanServiceError> {
        let mut plans = self.repository.list()?;
        plans.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(plans)
    }

    /// Move a plan to `target`, which must be the status immediately after its current one.
    pub fn advance(&self, id: &PlanId, target: PlanStatus) -> Result<ActionPlan, PlanServiceError> {
        let mut plan = self.get(id)?;
        if !plan.status.can_advance_to(target) {
            return Err(PlanServiceError::Transition {
                from: plan.status,
                to: target,
            });
        }

        let expected = plan.status;
        plan.status = target;
        self.repository.update(plan.clone(), expected)?;
        tracing::info!(plan_id = %plan.id.0, status = target.label(), "action plan advanced");
        Ok(plan)
    }

    pub fn remove(&self, id: &PlanId) -> Result<ActionPlan, PlanServiceError> {
        Ok(self.repository.remove(id)?)
    }
}

/// Rejections raised while turning a draft into a plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("estimated duration must be at least one month")]
    ZeroDuration,
    #[error("at most 3 milestones are tracked, got {count}")]
    TooManyMilestones { count: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum PlanServiceError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error("cannot move plan from {} to {}", .from.label(), .to.label())]
    Transition { from: PlanStatus, to: PlanStatus },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
