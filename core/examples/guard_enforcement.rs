// orderflow/examples/guard_enforcement.rs

use orderflow::{apply_transition, OrderStatus, PaymentStatus, TransitionRequest};
use tracing::{info, warn};

// Walks a shipment through the guard checks: first without the required
// tracking number (rejected with a typed failure), then with it.
fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Guard Enforcement Example ---");

  let current = OrderStatus::Processing;
  let payment = PaymentStatus::Paid;

  // 1. An operator submits "mark as shipped" without a tracking number.
  let bare = TransitionRequest::new(OrderStatus::Shipped);
  match apply_transition(current, payment, &bare) {
    Ok(_) => unreachable!("the ship transition requires tracking"),
    Err(err) => warn!("rejected as expected: {}", err),
  }

  // 2. The same request with the tracking number collected.
  let complete = TransitionRequest::new(OrderStatus::Shipped).with_tracking_number("TRK-440128");
  match apply_transition(current, payment, &complete) {
    Ok(applied) => info!(
      "accepted: '{}' moves the order to {} (tracking {})",
      applied.transition.label,
      applied.target(),
      applied.tracking_number.as_deref().unwrap_or("-")
    ),
    Err(err) => unreachable!("guards satisfied, but got: {}", err),
  }

  // 3. Delivered orders accept no changes at all.
  let late_edit = TransitionRequest::new(OrderStatus::Processing).with_admin_notes("re-open for repack");
  if let Err(err) = apply_transition(OrderStatus::Delivered, payment, &late_edit) {
    warn!("delivered orders are closed: {}", err);
  }
}
