use super::domain::{ActionPlan, PlanId, PlanStatus};

/// Storage abstraction for saved plans; the engine never reads from it.
pub trait ActionPlanRepository: Send + Sync {
    fn insert(&self, plan: ActionPlan) -> Result<ActionPlan, RepositoryError>;
    /// Replace the stored plan only while its stored status is still `expected`.
    fn update(&self, plan: ActionPlan, expected: PlanStatus) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &PlanId) -> Result<Option<ActionPlan>, RepositoryError>;
    fn list(&self) -> Result<Vec<ActionPlan>, RepositoryError>;
    fn remove(&self, id: &PlanId) -> Result<ActionPlan, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("record changed to {} in the meantime", .current.label())]
    StatusChanged { current: PlanStatus },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
