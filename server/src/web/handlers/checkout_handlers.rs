// storefront_app/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::checkout::{self, CheckoutRequest};
use crate::state::AppState;

#[instrument(
  name = "handler::start_checkout",
  skip(app_state, body),
  fields(customer_email = %body.email)
)]
pub async fn start_checkout_handler(
  app_state: web::Data<AppState>,
  body: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
  let outcome = checkout::place_order(app_state.get_ref(), body.into_inner()).await?;
  Ok(HttpResponse::Created().json(json!({
    "message": "Order placed.",
    "orderId": outcome.order.id,
    "orderNumber": &outcome.order.order_number,
    "orderStatus": outcome.order.order_status,
    "totalCents": outcome.order.total_cents,
    "confirmationEmailSent": outcome.confirmation_email_sent,
  })))
}
