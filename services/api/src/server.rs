use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReceiptRepository};
use crate::routes::with_receipt_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use receipt_rewards::config::AppConfig;
use receipt_rewards::error::AppError;
use receipt_rewards::receipts::ReceiptService;
use receipt_rewards::telemetry;
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

    let repository = Arc::new(InMemoryReceiptRepository::default());
    let ids = config.receipts.id_strategy.generator();
    let receipt_service = Arc::new(ReceiptService::new(repository, ids));

    let app = with_receipt_routes(receipt_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        id_strategy = ?config.receipts.id_strategy,
        %addr,
        "receipt rewards service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
