use crate::cli::ServeArgs;
use crate::infra::{load_dataset, validation_mode, AppState, InMemoryActionPlanRepository};
use crate::routes::with_dss_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fra_dss::config::AppConfig;
use fra_dss::dss::RecommendationEngine;
use fra_dss::error::AppError;
use fra_dss::ingest::DatasetLoader;
use fra_dss::plans::ActionPlanService;
use fra_dss::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let dataset = load_dataset(&config.data)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dataset: Arc::new(dataset),
        engine: Arc::new(RecommendationEngine::default()),
        loader: DatasetLoader::new(validation_mode(&config.data)),
    };

    let repository = Arc::new(InMemoryActionPlanRepository::default());
    let plan_service = Arc::new(ActionPlanService::new(repository));

    let app = with_dss_routes(plan_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "decision support service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
