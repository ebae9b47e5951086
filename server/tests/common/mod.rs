// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::Utc;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::Level;
use uuid::Uuid;

use storefront_app::config::AppConfig;
use storefront_app::models::{NewOrder, Order, OrderItem, Product};
use storefront_app::services::checkout::{CheckoutItemRequest, CheckoutRequest};
use storefront_app::state::AppState;
use storefront_app::store::{MemoryStore, OrderStore};

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// Fixed catalog ids so tests can assert on specific products.
pub const JACKET_ID: Uuid = Uuid::from_u128(0xA1);
pub const TOTE_ID: Uuid = Uuid::from_u128(0xA2);

pub fn product(id: Uuid, name: &str, price_cents: i32, stock_quantity: i32) -> Product {
  let now = Utc::now();
  Product {
    id,
    name: name.to_string(),
    description: None,
    price_cents,
    stock_quantity,
    image_url: Some(format!("/images/{}.jpg", name.to_lowercase().replace(' ', "-"))),
    created_at: now,
    updated_at: now,
  }
}

/// A memory-backed AppState seeded with a small catalog: 25 jackets at
/// $189.00 and 120 totes at $45.00, with a 10% tax rate.
pub fn test_state() -> (AppState, Arc<MemoryStore>) {
  setup_tracing();
  let store = Arc::new(MemoryStore::new());
  store.insert_product(product(JACKET_ID, "Field Jacket", 18_900, 25));
  store.insert_product(product(TOTE_ID, "Canvas Tote", 4_500, 120));

  let config = AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "postgres://unused-in-tests".to_string(),
    app_base_url: "http://127.0.0.1".to_string(),
    tax_rate_bps: 1_000, // 10% keeps expected totals easy to read
    mock_email_sender: "noreply@example.com".to_string(),
    webhook_shared_secret: None,
    seed_db: false,
  };

  let state = AppState {
    store: store.clone() as Arc<dyn OrderStore>,
    config: Arc::new(config),
  };
  (state, store)
}

pub fn checkout_request(items: Vec<CheckoutItemRequest>) -> CheckoutRequest {
  CheckoutRequest {
    customer_name: "Avery Quinn".to_string(),
    email: "avery@example.com".to_string(),
    phone: "+1-555-0100".to_string(),
    address: "12 Foundry Lane".to_string(),
    city: "Portland".to_string(),
    notes: None,
    priority: None,
    items,
    shipping_cents: 500,
    discount_cents: 0,
  }
}

pub fn item(product_id: Uuid, quantity: i32) -> CheckoutItemRequest {
  CheckoutItemRequest { product_id, quantity }
}

/// Inserts an order directly through the store, bypassing checkout, for
/// store-level tests.
pub async fn seed_order(store: &MemoryStore) -> Order {
  store
    .create_order(NewOrder {
      order_number: "ORD-TEST0001".to_string(),
      items: vec![OrderItem {
        product_id: JACKET_ID,
        name: "Field Jacket".to_string(),
        unit_price_cents: 18_900,
        original_price_cents: None,
        quantity: 1,
        image_url: None,
        status_tag: None,
      }],
      subtotal_cents: 18_900,
      tax_cents: 1_890,
      shipping_cents: 500,
      discount_cents: 0,
      total_cents: 21_290,
      customer_name: "Avery Quinn".to_string(),
      email: "avery@example.com".to_string(),
      phone: "+1-555-0100".to_string(),
      address: "12 Foundry Lane".to_string(),
      city: "Portland".to_string(),
      notes: None,
      priority: None,
    })
    .await
    .expect("seeding an order must succeed")
}
