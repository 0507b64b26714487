use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};

use super::domain::{PointsView, ProcessedReceiptView, Receipt, ReceiptId};
use super::repository::ReceiptRepository;
use super::service::ReceiptService;
use crate::error::AppError;

/// Router builder exposing the intake and points lookup endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessedReceiptView>, AppError>
where
    R: ReceiptRepository + 'static,
{
    // Every decoding failure is reported as 400, whatever status axum would pick.
    let Json(receipt) = payload?;
    let record = service.process(receipt)?;
    Ok(Json(record.processed_view()))
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<PointsView>, AppError>
where
    R: ReceiptRepository + 'static,
{
    let points = service.points(&ReceiptId(id))?;
    Ok(Json(PointsView { points }))
}
