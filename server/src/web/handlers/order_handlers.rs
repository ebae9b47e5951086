// storefront_app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::orders::{self, AdvanceOutcome, StatusChangeRequest};
use crate::state::AppState;
use crate::store::OrderStore;

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = app_state.store.list_orders().await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::get_order", skip(app_state))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let order = app_state
    .store
    .get_order(order_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("order {}", order_id)))?;
  Ok(HttpResponse::Ok().json(order))
}

// Feeds the back-office status selector: the legal next actions, each with
// its requirement flags, plus the progress-bar position.
#[instrument(name = "handler::list_transitions", skip(app_state))]
pub async fn list_transitions_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let actions = orders::available_actions(app_state.store.as_ref(), path.into_inner()).await?;
  let order = &actions.order;
  Ok(HttpResponse::Ok().json(json!({
    "orderId": order.id,
    "orderNumber": &order.order_number,
    "currentStatus": order.order_status,
    "paymentStatus": order.payment_status,
    "progressPercent": order.progress_percent(),
    "version": order.version,
    "transitions": actions.transitions,
    "nextAutomaticStatus": actions.next_automatic,
  })))
}

#[instrument(name = "handler::change_status", skip(app_state, body))]
pub async fn change_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  body: web::Json<StatusChangeRequest>,
) -> Result<HttpResponse, AppError> {
  let updated = orders::change_status(app_state.store.as_ref(), path.into_inner(), body.into_inner()).await?;
  let progress = updated.progress_percent();
  Ok(HttpResponse::Ok().json(json!({
    "order": updated,
    "progressPercent": progress,
  })))
}

#[instrument(name = "handler::advance_order", skip(app_state))]
pub async fn advance_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  match orders::advance(app_state.store.as_ref(), path.into_inner()).await? {
    AdvanceOutcome::Advanced(order) => Ok(HttpResponse::Ok().json(json!({
      "advanced": true,
      "order": order,
    }))),
    AdvanceOutcome::Nothing(order) => Ok(HttpResponse::Ok().json(json!({
      "advanced": false,
      "order": order,
    }))),
  }
}
