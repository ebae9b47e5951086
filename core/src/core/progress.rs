// orderflow/src/core/progress.rs

//! Projection of an order's status onto a 0..=100 progress percentage, for
//! back-office progress bars and customer-facing tracking views.

use super::status::OrderStatus;

impl OrderStatus {
  /// Fixed projection of the status onto a percentage.
  ///
  /// Monotonically non-decreasing along the happy path
  /// (pending 20, confirmed 40, processing 60, shipped 80, delivered 100).
  /// `Cancelled` is 0 by definition, not as a fallback: because the enum is
  /// closed there is no "unrecognized status" case for it to collide with,
  /// and the mapping is total.
  pub fn progress_percent(self) -> u8 {
    match self {
      OrderStatus::Pending => 20,
      OrderStatus::Confirmed => 40,
      OrderStatus::Processing => 60,
      OrderStatus::Shipped => 80,
      OrderStatus::Delivered => 100,
      OrderStatus::Cancelled => 0,
    }
  }
}
