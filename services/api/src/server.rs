use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_portal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use placements::config::AppConfig;
use placements::db;
use placements::error::AppError;
use placements::portal::{OfficerDesk, PlacementStore, StudentPortal};
use placements::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let pool = db::connect(&config.database).await?;
    let store = PlacementStore::new(pool);
    let portal = Arc::new(StudentPortal::new(store.clone()));
    let desk = Arc::new(OfficerDesk::new(store));

    let app = with_portal_routes(portal, desk)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "placement portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
