use chrono::NaiveDate;
use fra_dss::config::DataConfig;
use fra_dss::dss::RecommendationEngine;
use fra_dss::error::AppError;
use fra_dss::ingest::{Dataset, DatasetLoader, ValidationMode};
use fra_dss::plans::{ActionPlan, ActionPlanRepository, PlanId, PlanStatus, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dataset: Arc<Dataset>,
    pub(crate) engine: Arc<RecommendationEngine>,
    pub(crate) loader: DatasetLoader,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryActionPlanRepository {
    plans: Arc<Mutex<HashMap<PlanId, ActionPlan>>>,
}

impl InMemoryActionPlanRepository {
    fn guard(&self) -> Result<MutexGuard<'_, HashMap<PlanId, ActionPlan>>, RepositoryError> {
        self.plans
            .lock()
            .map_err(|_| RepositoryError::Unavailable("plan store mutex poisoned".to_string()))
    }
}

impl ActionPlanRepository for InMemoryActionPlanRepository {
    fn insert(&self, plan: ActionPlan) -> Result<ActionPlan, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&plan.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(plan.id.clone(), plan.clone());
        Ok(plan)
    }

    fn update(&self, plan: ActionPlan, expected: PlanStatus) -> Result<(), RepositoryError> {
        let mut guard = self.guard()?;
        let stored = guard.get_mut(&plan.id).ok_or(RepositoryError::NotFound)?;
        if stored.status != expected {
            return Err(RepositoryError::StatusChanged {
                current: stored.status,
            });
        }
        *stored = plan;
        Ok(())
    }

    fn fetch(&self, id: &PlanId) -> Result<Option<ActionPlan>, RepositoryError> {
        Ok(self.guard()?.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ActionPlan>, RepositoryError> {
        Ok(self.guard()?.values().cloned().collect())
    }

    fn remove(&self, id: &PlanId) -> Result<ActionPlan, RepositoryError> {
        self.guard()?.remove(id).ok_or(RepositoryError::NotFound)
    }
}

pub(crate) fn validation_mode(config: &DataConfig) -> ValidationMode {
    if config.strict_validation {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    }
}

/// Load configured data files, falling back to the bundled sample dataset.
pub(crate) fn load_dataset(config: &DataConfig) -> Result<Dataset, AppError> {
    let loader = DatasetLoader::new(validation_mode(config));
    Ok(loader.load(config)?)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
