// storefront_app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::OrderStore;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.store.list_products().await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = app_state
    .store
    .get_product(product_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("product {}", product_id)))?;
  Ok(HttpResponse::Ok().json(product))
}

#[derive(Debug, Deserialize)]
pub struct StockAdjustment {
  /// Signed change to the stock count (restock positive, correction negative).
  pub delta: i32,
}

#[instrument(name = "handler::adjust_stock", skip(app_state, body), fields(delta = body.delta))]
pub async fn adjust_stock_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  body: web::Json<StockAdjustment>,
) -> Result<HttpResponse, AppError> {
  let product = app_state
    .store
    .adjust_product_stock(path.into_inner(), body.delta)
    .await?;
  Ok(HttpResponse::Ok().json(json!({
    "productId": product.id,
    "stockQuantity": product.stock_quantity,
  })))
}
