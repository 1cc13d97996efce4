use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Extension;
use axum::Json;
use fra_dss::dss::{
    format_budget, EligibilityCriteria, GroupedRecommendations, Priority, Recommendation,
    RecommendationFilter, RecommendationQuery, RecommendationSummary, Scheme, UnknownPriority,
    Village,
};
use fra_dss::error::AppError;
use fra_dss::ingest::ValidationIssue;
use fra_dss::plans::{plan_router, ActionPlanRepository, ActionPlanService};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Query-string form of a recommendation request. List values are comma separated.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RecommendationParams {
    pub(crate) village: Option<String>,
    pub(crate) priority: Option<String>,
    pub(crate) scheme: Option<String>,
    pub(crate) low_water: bool,
    pub(crate) has_agriculture: bool,
    pub(crate) forest_degradation: bool,
    pub(crate) high_poverty: bool,
}

impl RecommendationParams {
    pub(crate) fn into_query(self) -> Result<RecommendationQuery, UnknownPriority> {
        let priorities = split_list(self.priority.as_deref())
            .iter()
            .map(|value| value.parse::<Priority>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RecommendationQuery {
            criteria: EligibilityCriteria {
                low_water: self.low_water,
                has_agriculture: self.has_agriculture,
                forest_degradation: self.forest_degradation,
                high_poverty: self.high_poverty,
            },
            filter: RecommendationFilter {
                villages: split_list(self.village.as_deref()),
                priorities,
                schemes: split_list(self.scheme.as_deref()),
            },
        })
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Inline dataset evaluated without touching the loaded one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluateRequest {
    pub(crate) villages: Vec<Village>,
    pub(crate) schemes: Vec<Scheme>,
    #[serde(default)]
    pub(crate) criteria: EligibilityCriteria,
    #[serde(default)]
    pub(crate) filter: RecommendationFilter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendationsResponse {
    pub(crate) summary: RecommendationSummary,
    pub(crate) recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) issues: Vec<ValidationIssue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryResponse {
    pub(crate) headline: String,
    pub(crate) formatted_budget: String,
    pub(crate) summary: RecommendationSummary,
    pub(crate) top_by_priority: GroupedRecommendations,
}

const TOP_PER_PRIORITY: usize = 3;

pub(crate) fn with_dss_routes<R>(plans: Arc<ActionPlanService<R>>) -> axum::Router
where
    R: ActionPlanRepository + 'static,
{
    plan_router(plans)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(
            "/api/v1/dss/recommendations",
            get(recommendations_endpoint).post(evaluate_endpoint),
        )
        .route("/api/v1/dss/summary", get(summary_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn recommendations_endpoint(
    Extension(state): Extension<AppState>,
    Query(params): Query<RecommendationParams>,
) -> Response {
    let query = match params.into_query() {
        Ok(query) => query,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let recommendations = query.run(&state.engine, &state.dataset.villages, &state.dataset.schemes);
    let body = RecommendationsResponse {
        summary: RecommendationSummary::from_recommendations(&recommendations),
        recommendations,
        issues: Vec::new(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn evaluate_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let EvaluateRequest {
        villages,
        schemes,
        criteria,
        filter,
    } = request;

    let villages = state.loader.check_villages(villages)?;
    let schemes = state.loader.check_schemes(schemes)?;

    let query = RecommendationQuery { criteria, filter };
    let recommendations = query.run(&state.engine, &villages.records, &schemes.records);

    let mut issues = villages.issues;
    issues.extend(schemes.issues);

    Ok(Json(RecommendationsResponse {
        summary: RecommendationSummary::from_recommendations(&recommendations),
        recommendations,
        issues,
    }))
}

pub(crate) async fn summary_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<SummaryResponse> {
    let recommendations = state
        .engine
        .generate(&state.dataset.villages, &state.dataset.schemes);
    let summary = RecommendationSummary::from_recommendations(&recommendations);

    let mut top_by_priority = GroupedRecommendations::from_recommendations(&recommendations);
    top_by_priority.high.truncate(TOP_PER_PRIORITY);
    top_by_priority.medium.truncate(TOP_PER_PRIORITY);
    top_by_priority.low.truncate(TOP_PER_PRIORITY);

    Json(SummaryResponse {
        headline: summary.headline(),
        formatted_budget: format_budget(summary.total_estimated_budget),
        summary,
        top_by_priority,
    })
}
