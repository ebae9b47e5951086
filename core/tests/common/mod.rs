// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use orderflow::{OrderStatus, PaymentStatus, StatusTransition, ORDER_WORKFLOW_CONFIG};
use tracing::Level;

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

/// Looks up the table row for `(from, to)`, panicking if the table does not
/// define it. Tests use this to assert on a row's guard flags directly.
pub fn row(from: OrderStatus, to: OrderStatus) -> &'static StatusTransition {
  ORDER_WORKFLOW_CONFIG
    .iter()
    .find(|t| t.from == from && t.to == to)
    .unwrap_or_else(|| panic!("no transition row {} -> {}", from, to))
}

/// The `to` statuses of a listing, in the order returned.
pub fn targets(transitions: &[&'static StatusTransition]) -> Vec<OrderStatus> {
  transitions.iter().map(|t| t.to).collect()
}

/// Every `(order status, payment status)` combination.
pub fn all_status_pairs() -> Vec<(OrderStatus, PaymentStatus)> {
  let mut pairs = Vec::new();
  for status in OrderStatus::ALL {
    for payment in PaymentStatus::ALL {
      pairs.push((status, payment));
    }
  }
  pairs
}
