use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ActionPlanDraft, PlanId, PlanStatus, PlanView};
use super::repository::{ActionPlanRepository, RepositoryError};
use super::service::{ActionPlanService, PlanServiceError};

/// Router builder exposing the action planner endpoints.
pub fn plan_router<R>(service: Arc<ActionPlanService<R>>) -> Router
where
    R: ActionPlanRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/dss/plans",
            post(create_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/dss/plans/:plan_id",
            get(fetch_handler::<R>).delete(remove_handler::<R>),
        )
        .route(
            "/api/v1/dss/plans/:plan_id/status",
            post(advance_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusChange {
    pub(crate) status: PlanStatus,
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ActionPlanService<R>>>,
    axum::Json(draft): axum::Json<ActionPlanDraft>,
) -> Response
where
    R: ActionPlanRepository + 'static,
{
    match service.create(draft) {
        Ok(plan) => (StatusCode::CREATED, axum::Json(plan.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ActionPlanService<R>>>) -> Response
where
    R: ActionPlanRepository + 'static,
{
    match service.list() {
        Ok(plans) => {
            let views: Vec<PlanView> = plans.iter().map(|plan| plan.view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<ActionPlanService<R>>>,
    Path(plan_id): Path<String>,
) -> Response
where
    R: ActionPlanRepository + 'static,
{
    match service.get(&PlanId(plan_id)) {
        Ok(plan) => (StatusCode::OK, axum::Json(plan.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn advance_handler<R>(
    State(service): State<Arc<ActionPlanService<R>>>,
    Path(plan_id): Path<String>,
    axum::Json(change): axum::Json<StatusChange>,
) -> Response
where
    R: ActionPlanRepository + 'static,
{
    match service.advance(&PlanId(plan_id), change.status) {
        Ok(plan) => (StatusCode::OK, axum::Json(plan.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn remove_handler<R>(
    State(service): State<Arc<ActionPlanService<R>>>,
    Path(plan_id): Path<String>,
) -> Response
where
    R: ActionPlanRepository + 'static,
{
    match service.remove(&PlanId(plan_id)) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: PlanServiceError) -> Response {
    let status = match &error {
        PlanServiceError::Draft(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PlanServiceError::Transition { .. } => StatusCode::CONFLICT,
        PlanServiceError::Repository(RepositoryError::Conflict)
        | PlanServiceError::Repository(RepositoryError::StatusChanged { .. }) => {
            StatusCode::CONFLICT
        }
        PlanServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        PlanServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
