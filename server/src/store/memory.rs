// storefront_app/src/store/memory.rs

//! In-memory store with the same CAS semantics as the Postgres one. Used by
//! the service tests; also handy for running the server without a database.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{AppError, Result as AppResult};
use crate::models::{NewOrder, Order, Product};
use crate::store::{OrderStore, StatusUpdate};
use orderflow::{OrderStatus, PaymentStatus};

#[derive(Default)]
struct MemoryInner {
  orders: HashMap<Uuid, Order>,
  products: HashMap<Uuid, Product>,
}

#[derive(Default)]
pub struct MemoryStore {
  // Lock guards are never held across an await point; every method does
  // its work synchronously under the lock and returns.
  inner: RwLock<MemoryInner>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds a catalog entry, replacing any previous one with the same id.
  pub fn insert_product(&self, product: Product) {
    self.inner.write().products.insert(product.id, product);
  }
}

#[async_trait]
impl OrderStore for MemoryStore {
  async fn create_order(&self, new_order: NewOrder) -> AppResult<Order> {
    let now = Utc::now();
    let order = Order {
      id: Uuid::new_v4(),
      order_number: new_order.order_number,
      order_status: OrderStatus::Pending,
      payment_status: PaymentStatus::Pending,
      priority: new_order.priority,
      items: new_order.items,
      subtotal_cents: new_order.subtotal_cents,
      tax_cents: new_order.tax_cents,
      shipping_cents: new_order.shipping_cents,
      discount_cents: new_order.discount_cents,
      total_cents: new_order.total_cents,
      customer_name: new_order.customer_name,
      email: new_order.email,
      phone: new_order.phone,
      address: new_order.address,
      city: new_order.city,
      notes: new_order.notes,
      admin_notes: None,
      tracking_number: None,
      estimated_delivery_date: None,
      actual_delivery_date: None,
      version: 0,
      created_at: now,
      updated_at: now,
    };
    debug!(order_id = %order.id, order_number = %order.order_number, "creating order in memory store");
    self.inner.write().orders.insert(order.id, order.clone());
    Ok(order)
  }

  async fn get_order(&self, id: Uuid) -> AppResult<Option<Order>> {
    Ok(self.inner.read().orders.get(&id).cloned())
  }

  async fn list_orders(&self) -> AppResult<Vec<Order>> {
    let mut orders: Vec<Order> = self.inner.read().orders.values().cloned().collect();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(orders)
  }

  async fn update_order_status(&self, id: Uuid, update: StatusUpdate) -> AppResult<Order> {
    let mut inner = self.inner.write();
    let order = inner
      .orders
      .get_mut(&id)
      .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;

    if order.version != update.expected_version {
      return Err(AppError::Conflict(format!(
        "order {} changed since it was read (expected version {}, found {})",
        id, update.expected_version, order.version
      )));
    }

    order.order_status = update.new_status;
    if update.admin_notes.is_some() {
      order.admin_notes = update.admin_notes;
    }
    if update.tracking_number.is_some() {
      order.tracking_number = update.tracking_number;
    }
    if update.new_status == OrderStatus::Delivered && order.actual_delivery_date.is_none() {
      order.actual_delivery_date = Some(Utc::now().date_naive());
    }
    order.version += 1;
    order.updated_at = Utc::now();
    Ok(order.clone())
  }

  async fn update_payment_status(
    &self,
    id: Uuid,
    payment_status: PaymentStatus,
    expected_version: i32,
  ) -> AppResult<Order> {
    let mut inner = self.inner.write();
    let order = inner
      .orders
      .get_mut(&id)
      .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;

    if order.version != expected_version {
      return Err(AppError::Conflict(format!(
        "order {} changed since it was read (expected version {}, found {})",
        id, expected_version, order.version
      )));
    }

    order.payment_status = payment_status;
    order.version += 1;
    order.updated_at = Utc::now();
    Ok(order.clone())
  }

  async fn get_product(&self, id: Uuid) -> AppResult<Option<Product>> {
    Ok(self.inner.read().products.get(&id).cloned())
  }

  async fn list_products(&self) -> AppResult<Vec<Product>> {
    let mut products: Vec<Product> = self.inner.read().products.values().cloned().collect();
    products.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(products)
  }

  async fn adjust_product_stock(&self, id: Uuid, delta: i32) -> AppResult<Product> {
    let mut inner = self.inner.write();
    let product = inner
      .products
      .get_mut(&id)
      .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;

    let new_quantity = product.stock_quantity + delta;
    if new_quantity < 0 {
      return Err(AppError::Conflict(format!(
        "insufficient stock for product '{}' ({} on hand, {} requested)",
        product.name, product.stock_quantity, -delta
      )));
    }
    product.stock_quantity = new_quantity;
    product.updated_at = Utc::now();
    Ok(product.clone())
  }
}
