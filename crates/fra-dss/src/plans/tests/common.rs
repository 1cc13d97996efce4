use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::dss::{Recommendation, RecommendationEngine, Scheme, SchemeWeights, Village};
use crate::plans::domain::{ActionPlan, ActionPlanDraft, PlanId, PlanStatus, RiskLevel};
use crate::plans::repository::{ActionPlanRepository, RepositoryError};
use crate::plans::service::ActionPlanService;

pub(super) fn recommendation() -> Recommendation {
    let village = Village {
        id: "V-KHW".to_string(),
        name: "Khairwani".to_string(),
        groundwater_index: 0.3,
        agri_area_ha: 60.0,
        forest_degradation_level: 0.6,
        poverty_score: 0.7,
        water_bodies_count: 4,
        population: 420,
        homestead_count: 80,
    };
    let scheme = Scheme {
        id: "JJM".to_string(),
        name: "Jal Jeevan Mission".to_string(),
        eligibility: Vec::new(),
        evidence_keys: vec!["groundwaterIndex".to_string()],
        weights: SchemeWeights {
            low_water: 2.0,
            agri: 0.0,
            degradation: 0.0,
            poverty: 1.0,
        },
    };
    RecommendationEngine::default().recommend(&village, &scheme)
}

pub(super) fn draft() -> ActionPlanDraft {
    ActionPlanDraft {
        assigned_department: "  Water Resources Department ".to_string(),
        planned_start: NaiveDate::from_ymd_opt(2025, 11, 30),
        estimated_duration_months: Some(3),
        notes: "Coordinate with gram sabha before survey".to_string(),
        milestones: vec![
            "Hydrogeological survey".to_string(),
            " ".to_string(),
            "Tap connections".to_string(),
        ],
        risk_assessment: RiskLevel::Medium,
        ..ActionPlanDraft::for_recommendation(recommendation())
    }
}

pub(super) fn build_service() -> (ActionPlanService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ActionPlanService::new(repository.clone());
    (service, repository)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    plans: Mutex<HashMap<PlanId, ActionPlan>>,
}

impl ActionPlanRepository for MemoryRepository {
    fn insert(&self, plan: ActionPlan) -> Result<ActionPlan, RepositoryError> {
        let mut guard = self.plans.lock().unwrap();
        if guard.contains_key(&plan.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(plan.id.clone(), plan.clone());
        Ok(plan)
    }

    fn update(&self, plan: ActionPlan, expected: PlanStatus) -> Result<(), RepositoryError> {
        let mut guard = self.plans.lock().unwrap();
        match guard.get_mut(&plan.id) {
            Some(existing) if existing.status != expected => Err(RepositoryError::StatusChanged {
                current: existing.status,
            }),
            Some(existing) => {
                *existing = plan;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &PlanId) -> Result<Option<ActionPlan>, RepositoryError> {
        Ok(self.plans.lock().unwrap().get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ActionPlan>, RepositoryError> {
        Ok(self.plans.lock().unwrap().values().cloned().collect())
    }

    fn remove(&self, id: &PlanId) -> Result<ActionPlan, RepositoryError> {
        self.plans
            .lock()
            .unwrap()
            .remove(id)
            .ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl ActionPlanRepository for UnavailableRepository {
    fn insert(&self, _plan: ActionPlan) -> Result<ActionPlan, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _plan: ActionPlan, _expected: PlanStatus) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &PlanId) -> Result<Option<ActionPlan>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ActionPlan>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _id: &PlanId) -> Result<ActionPlan, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
