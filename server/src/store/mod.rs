// storefront_app/src/store/mod.rs

//! Persistence boundary for orders and the product catalog.
//!
//! Both status axes are written through compare-and-swap on the order's
//! `version` column: two operators can read the same order, both compute a
//! legal transition, and only the first write lands; the second gets a
//! conflict instead of silently overwriting the first's intent.

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

use crate::errors::Result as AppResult;
use crate::models::{NewOrder, Order, Product};
use async_trait::async_trait;
use orderflow::{OrderStatus, PaymentStatus};
use uuid::Uuid;

/// A validated status write. Built from an `orderflow::AppliedTransition`
/// by the order service; the store trusts the fields but still owns the
/// version check.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
  pub new_status: OrderStatus,
  /// Overwrites the stored note when `Some`; `None` keeps the existing one.
  pub admin_notes: Option<String>,
  /// Overwrites the stored tracking number when `Some`.
  pub tracking_number: Option<String>,
  /// The version the caller read before deciding. The write fails with a
  /// conflict when the row has moved on.
  pub expected_version: i32,
}

#[async_trait]
pub trait OrderStore: Send + Sync {
  /// Inserts the order in `pending`/`pending` with `version = 0`.
  async fn create_order(&self, new_order: NewOrder) -> AppResult<Order>;

  async fn get_order(&self, id: Uuid) -> AppResult<Option<Order>>;

  /// Newest first, for the back-office list view.
  async fn list_orders(&self) -> AppResult<Vec<Order>>;

  /// CAS write of the fulfilment status. Bumps `version`, stamps
  /// `updated_at`, and records `actual_delivery_date` when the new status
  /// is `delivered`.
  async fn update_order_status(&self, id: Uuid, update: StatusUpdate) -> AppResult<Order>;

  /// CAS write of the payment status.
  async fn update_payment_status(
    &self,
    id: Uuid,
    payment_status: PaymentStatus,
    expected_version: i32,
  ) -> AppResult<Order>;

  async fn get_product(&self, id: Uuid) -> AppResult<Option<Product>>;

  async fn list_products(&self) -> AppResult<Vec<Product>>;

  /// Applies a signed stock delta, refusing to take stock below zero.
  async fn adjust_product_stock(&self, id: Uuid, delta: i32) -> AppResult<Product>;
}
