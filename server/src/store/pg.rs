// storefront_app/src/store/pg.rs

//! Postgres-backed store. Statuses are stored as lowercase text and parsed
//! back through the workflow's `FromStr` boundary, so a corrupted column
//! surfaces as a typed error instead of a mystery status deep in business
//! logic. See schema.sql for the table definitions.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result as AppResult};
use crate::models::{NewOrder, Order, OrderItem, Product};
use crate::store::{OrderStore, StatusUpdate};
use orderflow::{OrderPriority, OrderStatus, PaymentStatus};

const ORDER_COLUMNS: &str = "id, order_number, order_status, payment_status, priority, items, \
   subtotal_cents, tax_cents, shipping_cents, discount_cents, total_cents, \
   customer_name, email, phone, address, city, notes, admin_notes, tracking_number, \
   estimated_delivery_date, actual_delivery_date, version, created_at, updated_at";

const PRODUCT_COLUMNS: &str = "id, name, description, price_cents, stock_quantity, image_url, created_at, updated_at";

pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Inserts a small fixed catalog for local development; existing rows are
  /// left untouched.
  pub async fn seed_demo_products(&self) -> AppResult<()> {
    let demo = [
      (
        Uuid::from_u128(0xA1),
        "Field Jacket",
        "Waxed-cotton field jacket",
        18_900,
        25,
      ),
      (Uuid::from_u128(0xA2), "Canvas Tote", "Heavy canvas tote bag", 4_500, 120),
      (
        Uuid::from_u128(0xA3),
        "Merino Beanie",
        "Ribbed merino wool beanie",
        2_900,
        60,
      ),
    ];
    for (id, name, description, price_cents, stock) in demo {
      sqlx::query(
        "INSERT INTO products (id, name, description, price_cents, stock_quantity) \
         VALUES ($1, $2, $3, $4, $5) ON CONFLICT (id) DO NOTHING",
      )
      .bind(id)
      .bind(name)
      .bind(description)
      .bind(price_cents)
      .bind(stock)
      .execute(&self.pool)
      .await?;
    }
    info!("Demo product catalog ensured.");
    Ok(())
  }
}

/// Raw row shape: status columns come back as text and are parsed in
/// `TryFrom`, keeping the workflow library free of any sqlx dependency.
#[derive(Debug, FromRow)]
struct OrderRow {
  id: Uuid,
  order_number: String,
  order_status: String,
  payment_status: String,
  priority: Option<String>,
  items: Json<Vec<OrderItem>>,
  subtotal_cents: i32,
  tax_cents: i32,
  shipping_cents: i32,
  discount_cents: i32,
  total_cents: i32,
  customer_name: String,
  email: String,
  phone: String,
  address: String,
  city: String,
  notes: Option<String>,
  admin_notes: Option<String>,
  tracking_number: Option<String>,
  estimated_delivery_date: Option<NaiveDate>,
  actual_delivery_date: Option<NaiveDate>,
  version: i32,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
  type Error = AppError;

  fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
    Ok(Order {
      id: row.id,
      order_number: row.order_number,
      order_status: OrderStatus::from_str(&row.order_status)?,
      payment_status: PaymentStatus::from_str(&row.payment_status)?,
      priority: row.priority.as_deref().map(OrderPriority::from_str).transpose()?,
      items: row.items.0,
      subtotal_cents: row.subtotal_cents,
      tax_cents: row.tax_cents,
      shipping_cents: row.shipping_cents,
      discount_cents: row.discount_cents,
      total_cents: row.total_cents,
      customer_name: row.customer_name,
      email: row.email,
      phone: row.phone,
      address: row.address,
      city: row.city,
      notes: row.notes,
      admin_notes: row.admin_notes,
      tracking_number: row.tracking_number,
      estimated_delivery_date: row.estimated_delivery_date,
      actual_delivery_date: row.actual_delivery_date,
      version: row.version,
      created_at: row.created_at,
      updated_at: row.updated_at,
    })
  }
}

#[async_trait]
impl OrderStore for PgStore {
  #[instrument(skip(self, new_order), fields(order_number = %new_order.order_number))]
  async fn create_order(&self, new_order: NewOrder) -> AppResult<Order> {
    let sql = format!(
      "INSERT INTO orders (order_number, order_status, payment_status, priority, items, \
         subtotal_cents, tax_cents, shipping_cents, discount_cents, total_cents, \
         customer_name, email, phone, address, city, notes) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
       RETURNING {ORDER_COLUMNS}"
    );
    let row: OrderRow = sqlx::query_as(&sql)
      .bind(&new_order.order_number)
      .bind(OrderStatus::Pending.as_str())
      .bind(PaymentStatus::Pending.as_str())
      .bind(new_order.priority.map(|p| p.as_str()))
      .bind(Json(&new_order.items))
      .bind(new_order.subtotal_cents)
      .bind(new_order.tax_cents)
      .bind(new_order.shipping_cents)
      .bind(new_order.discount_cents)
      .bind(new_order.total_cents)
      .bind(&new_order.customer_name)
      .bind(&new_order.email)
      .bind(&new_order.phone)
      .bind(&new_order.address)
      .bind(&new_order.city)
      .bind(&new_order.notes)
      .fetch_one(&self.pool)
      .await?;
    row.try_into()
  }

  async fn get_order(&self, id: Uuid) -> AppResult<Option<Order>> {
    let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
    let row: Option<OrderRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
    row.map(Order::try_from).transpose()
  }

  async fn list_orders(&self) -> AppResult<Vec<Order>> {
    let sql = format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC");
    let rows: Vec<OrderRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
    rows.into_iter().map(Order::try_from).collect()
  }

  #[instrument(skip(self, update), fields(order_id = %id, new_status = %update.new_status))]
  async fn update_order_status(&self, id: Uuid, update: StatusUpdate) -> AppResult<Order> {
    let sql = format!(
      "UPDATE orders SET \
         order_status = $1, \
         admin_notes = COALESCE($2, admin_notes), \
         tracking_number = COALESCE($3, tracking_number), \
         actual_delivery_date = CASE WHEN $1 = 'delivered' THEN CURRENT_DATE ELSE actual_delivery_date END, \
         version = version + 1, \
         updated_at = NOW() \
       WHERE id = $4 AND version = $5 \
       RETURNING {ORDER_COLUMNS}"
    );
    let row: Option<OrderRow> = sqlx::query_as(&sql)
      .bind(update.new_status.as_str())
      .bind(&update.admin_notes)
      .bind(&update.tracking_number)
      .bind(id)
      .bind(update.expected_version)
      .fetch_optional(&self.pool)
      .await?;

    match row {
      Some(row) => row.try_into(),
      // No row matched: either the order is gone or its version moved on.
      None => match self.get_order(id).await? {
        Some(current) => Err(AppError::Conflict(format!(
          "order {} changed since it was read (expected version {}, found {})",
          id, update.expected_version, current.version
        ))),
        None => Err(AppError::NotFound(format!("order {}", id))),
      },
    }
  }

  #[instrument(skip(self), fields(order_id = %id, payment_status = %payment_status))]
  async fn update_payment_status(
    &self,
    id: Uuid,
    payment_status: PaymentStatus,
    expected_version: i32,
  ) -> AppResult<Order> {
    let sql = format!(
      "UPDATE orders SET payment_status = $1, version = version + 1, updated_at = NOW() \
       WHERE id = $2 AND version = $3 \
       RETURNING {ORDER_COLUMNS}"
    );
    let row: Option<OrderRow> = sqlx::query_as(&sql)
      .bind(payment_status.as_str())
      .bind(id)
      .bind(expected_version)
      .fetch_optional(&self.pool)
      .await?;

    match row {
      Some(row) => row.try_into(),
      None => match self.get_order(id).await? {
        Some(current) => Err(AppError::Conflict(format!(
          "order {} changed since it was read (expected version {}, found {})",
          id, expected_version, current.version
        ))),
        None => Err(AppError::NotFound(format!("order {}", id))),
      },
    }
  }

  async fn get_product(&self, id: Uuid) -> AppResult<Option<Product>> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
    let product = sqlx::query_as::<_, Product>(&sql).bind(id).fetch_optional(&self.pool).await?;
    Ok(product)
  }

  async fn list_products(&self) -> AppResult<Vec<Product>> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name");
    let products = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
    Ok(products)
  }

  #[instrument(skip(self), fields(product_id = %id, delta))]
  async fn adjust_product_stock(&self, id: Uuid, delta: i32) -> AppResult<Product> {
    let sql = format!(
      "UPDATE products SET stock_quantity = stock_quantity + $1, updated_at = NOW() \
       WHERE id = $2 AND stock_quantity + $1 >= 0 \
       RETURNING {PRODUCT_COLUMNS}"
    );
    let product: Option<Product> = sqlx::query_as(&sql).bind(delta).bind(id).fetch_optional(&self.pool).await?;

    match product {
      Some(product) => Ok(product),
      None => match self.get_product(id).await? {
        Some(current) => Err(AppError::Conflict(format!(
          "insufficient stock for product '{}' ({} on hand, {} requested)",
          current.name, current.stock_quantity, -delta
        ))),
        None => Err(AppError::NotFound(format!("product {}", id))),
      },
    }
  }
}
