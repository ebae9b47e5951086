// storefront_app/src/services/checkout.rs

//! The checkout flow: price the cart from the catalog, take stock, create
//! the order in `pending`, send the (optional) confirmation email.
//!
//! Prices come from the product catalog, never from the client; the money
//! invariant `total = subtotal + tax + shipping - discount` therefore holds
//! by construction at creation time.

use futures_util::future::try_join_all;
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result as AppResult};
use crate::models::{NewOrder, Order, OrderItem, Product};
use crate::services::email_mock;
use crate::state::AppState;
use crate::store::OrderStore;
use orderflow::OrderPriority;

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutItemRequest {
  pub product_id: Uuid,
  pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
  pub customer_name: String,
  pub email: String,
  pub phone: String,
  pub address: String,
  pub city: String,
  pub notes: Option<String>,
  pub priority: Option<OrderPriority>,
  pub items: Vec<CheckoutItemRequest>,
  #[serde(default)]
  pub shipping_cents: i32,
  #[serde(default)]
  pub discount_cents: i32,
}

#[derive(Debug)]
pub struct CheckoutOutcome {
  pub order: Order,
  pub confirmation_email_sent: bool,
}

fn validate(request: &CheckoutRequest) -> AppResult<()> {
  let required = [
    ("customer_name", &request.customer_name),
    ("email", &request.email),
    ("phone", &request.phone),
    ("address", &request.address),
    ("city", &request.city),
  ];
  for (field, value) in required {
    if value.trim().is_empty() {
      return Err(AppError::Validation(format!("'{}' must not be empty", field)));
    }
  }
  if request.items.is_empty() {
    return Err(AppError::Validation("order must contain at least one item".to_string()));
  }
  if request.items.iter().any(|i| i.quantity < 1) {
    return Err(AppError::Validation("item quantities must be at least 1".to_string()));
  }
  if request.shipping_cents < 0 || request.discount_cents < 0 {
    return Err(AppError::Validation("amounts must be non-negative".to_string()));
  }
  Ok(())
}

fn line_item(product: &Product, quantity: i32) -> OrderItem {
  OrderItem {
    product_id: product.id,
    name: product.name.clone(),
    unit_price_cents: product.price_cents,
    original_price_cents: None,
    quantity,
    image_url: product.image_url.clone(),
    status_tag: (product.stock_quantity == 0).then(|| "preorder".to_string()),
  }
}

fn order_number() -> String {
  let suffix = Uuid::new_v4().simple().to_string();
  format!("ORD-{}", suffix[..8].to_uppercase())
}

#[instrument(
  name = "service::place_order",
  skip(state, request),
  fields(customer_email = %request.email, item_count = request.items.len())
)]
pub async fn place_order(state: &AppState, request: CheckoutRequest) -> AppResult<CheckoutOutcome> {
  validate(&request)?;

  // 1. Price every line from the catalog.
  let products = try_join_all(request.items.iter().map(|item| state.store.get_product(item.product_id))).await?;
  let mut items = Vec::with_capacity(request.items.len());
  for (requested, product) in request.items.iter().zip(products) {
    let product =
      product.ok_or_else(|| AppError::Validation(format!("unknown product {}", requested.product_id)))?;
    items.push(line_item(&product, requested.quantity));
  }

  let subtotal_cents: i32 = items.iter().map(|i| i.unit_price_cents * i.quantity).sum();
  let tax_cents = (subtotal_cents as i64 * state.config.tax_rate_bps as i64 / 10_000) as i32;
  let total_cents = subtotal_cents + tax_cents + request.shipping_cents - request.discount_cents;
  if total_cents < 0 {
    return Err(AppError::Validation("discount exceeds the order total".to_string()));
  }

  // 2. Take stock before creating the order; a failing line aborts the
  // checkout and returns what was already taken.
  let mut taken: Vec<(Uuid, i32)> = Vec::new();
  for item in &items {
    match state.store.adjust_product_stock(item.product_id, -item.quantity).await {
      Ok(_) => taken.push((item.product_id, item.quantity)),
      Err(err) => {
        for (product_id, quantity) in taken {
          if let Err(restore_err) = state.store.adjust_product_stock(product_id, quantity).await {
            warn!(product_id = %product_id, error = %restore_err, "failed to restore stock after aborted checkout");
          }
        }
        return Err(err);
      }
    }
  }

  // 3. Create the order in pending.
  let order = state
    .store
    .create_order(NewOrder {
      order_number: order_number(),
      items,
      subtotal_cents,
      tax_cents,
      shipping_cents: request.shipping_cents,
      discount_cents: request.discount_cents,
      total_cents,
      customer_name: request.customer_name,
      email: request.email,
      phone: request.phone,
      address: request.address,
      city: request.city,
      notes: request.notes,
      priority: request.priority,
    })
    .await?;
  debug_assert!(order.totals_are_consistent());
  info!(order_number = %order.order_number, total_cents = order.total_cents, "order created");

  // 4. Confirmation email is an optional step: log and carry on if the
  // mock provider fails.
  let confirmation_email_sent = match email_mock::send_order_confirmation(
    &order.email,
    &state.config.mock_email_sender,
    &order.order_number,
    order.total_cents,
  )
  .await
  {
    Ok(sent) => {
      info!(message_id = %sent.message_id, "confirmation email sent");
      true
    }
    Err(err) => {
      warn!(order_number = %order.order_number, error = %err, "confirmation email failed");
      false
    }
  };

  Ok(CheckoutOutcome {
    order,
    confirmation_email_sent,
  })
}
