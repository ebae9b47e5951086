// orderflow/examples/status_actions.rs

use orderflow::{available_transitions, next_automatic_status, OrderStatus, PaymentStatus};
use tracing::info;

// Prints what a back-office status selector would offer for every order
// status, the way the order-management UI consumes the library.
fn main() {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Status Actions Example ---");

  let payment = PaymentStatus::Paid;
  for status in OrderStatus::ALL {
    info!(
      "{} ({}%): progress bar position",
      status,
      status.progress_percent()
    );

    let transitions = available_transitions(status, payment);
    if transitions.is_empty() {
      info!("  no actions available");
    }
    for transition in transitions {
      let mut requirements = Vec::new();
      if transition.requires_admin_notes {
        requirements.push("admin note");
      }
      if transition.requires_tracking {
        requirements.push("tracking number");
      }
      let requirements = if requirements.is_empty() {
        "none".to_string()
      } else {
        requirements.join(", ")
      };
      info!(
        "  [{}] -> {} (requires: {}): {}",
        transition.label, transition.to, requirements, transition.description
      );
    }

    if let Some(next) = next_automatic_status(status, payment) {
      info!("  automatable next step: {}", next);
    }
  }
}
