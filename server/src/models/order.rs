// storefront_app/src/models/order.rs

use chrono::{DateTime, NaiveDate, Utc};
use orderflow::{OrderPriority, OrderStatus, PaymentStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of an order, snapshotted at purchase time. Price changes in the
/// catalog never rewrite past orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
  pub product_id: Uuid,
  pub name: String,
  pub unit_price_cents: i32,
  /// Pre-discount price, when the item was on sale at purchase time.
  pub original_price_cents: Option<i32>,
  pub quantity: i32,
  pub image_url: Option<String>,
  /// Free-form availability tag carried from the catalog, e.g. "preorder".
  pub status_tag: Option<String>,
}

/// One customer purchase.
///
/// `order_status` is only ever changed through the workflow's transition
/// table; `version` is the optimistic-concurrency column the store checks
/// on every status or payment write.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
  pub id: Uuid,
  pub order_number: String,
  pub order_status: OrderStatus,
  pub payment_status: PaymentStatus,
  pub priority: Option<OrderPriority>,
  pub items: Vec<OrderItem>,
  pub subtotal_cents: i32,
  pub tax_cents: i32,
  pub shipping_cents: i32,
  pub discount_cents: i32,
  pub total_cents: i32,
  pub customer_name: String,
  pub email: String,
  pub phone: String,
  pub address: String,
  pub city: String,
  pub notes: Option<String>,
  pub admin_notes: Option<String>,
  pub tracking_number: Option<String>,
  pub estimated_delivery_date: Option<NaiveDate>,
  pub actual_delivery_date: Option<NaiveDate>,
  pub version: i32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Order {
  pub fn progress_percent(&self) -> u8 {
    self.order_status.progress_percent()
  }

  /// The creation-time money invariant: total = subtotal + tax + shipping - discount.
  pub fn totals_are_consistent(&self) -> bool {
    self.total_cents == self.subtotal_cents + self.tax_cents + self.shipping_cents - self.discount_cents
  }
}

/// Creation payload. The checkout service computes the money fields (and is
/// responsible for the totals invariant); the store assigns identity,
/// initial statuses, `version = 0`, and timestamps.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub order_number: String,
  pub items: Vec<OrderItem>,
  pub subtotal_cents: i32,
  pub tax_cents: i32,
  pub shipping_cents: i32,
  pub discount_cents: i32,
  pub total_cents: i32,
  pub customer_name: String,
  pub email: String,
  pub phone: String,
  pub address: String,
  pub city: String,
  pub notes: Option<String>,
  pub priority: Option<OrderPriority>,
}
