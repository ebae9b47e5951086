// orderflow/src/core/status.rs

//! Closed enumerations for the two status axes of an order, plus the
//! optional handling priority.
//!
//! These are the only status values the workflow knows about. Anything
//! arriving from outside the process (JSON, database text columns) must pass
//! through serde or `FromStr`, both of which reject unrecognized values at
//! the boundary instead of letting free-form strings reach business logic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkflowError;

/// The fulfilment-lifecycle stage of an order.
///
/// New orders are created in `Pending` by the checkout path. Every later
/// value must be reachable from `Pending` via the transition table in
/// `crate::transition::config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Confirmed,
  Processing,
  Shipped,
  Delivered,
  Cancelled,
}

impl OrderStatus {
  /// Every status, in lifecycle order. Handy for exhaustive iteration in
  /// callers and tests.
  pub const ALL: [OrderStatus; 6] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Confirmed => "confirmed",
      OrderStatus::Processing => "processing",
      OrderStatus::Shipped => "shipped",
      OrderStatus::Delivered => "delivered",
      OrderStatus::Cancelled => "cancelled",
    }
  }

  /// True for statuses with no outgoing transitions.
  ///
  /// Only `Delivered` qualifies. `Cancelled` is NOT terminal: the table
  /// defines an intentional restore path back to `Pending`.
  pub fn is_terminal(self) -> bool {
    matches!(self, OrderStatus::Delivered)
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderStatus {
  type Err = WorkflowError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(OrderStatus::Pending),
      "confirmed" => Ok(OrderStatus::Confirmed),
      "processing" => Ok(OrderStatus::Processing),
      "shipped" => Ok(OrderStatus::Shipped),
      "delivered" => Ok(OrderStatus::Delivered),
      "cancelled" => Ok(OrderStatus::Cancelled),
      other => Err(WorkflowError::UnrecognizedOrderStatus {
        value: other.to_string(),
      }),
    }
  }
}

/// Whether money has been captured for the order. Tracked independently of
/// the fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
  Pending,
  Paid,
  Refunded,
  Failed,
}

impl PaymentStatus {
  pub const ALL: [PaymentStatus; 4] = [
    PaymentStatus::Pending,
    PaymentStatus::Paid,
    PaymentStatus::Refunded,
    PaymentStatus::Failed,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      PaymentStatus::Pending => "pending",
      PaymentStatus::Paid => "paid",
      PaymentStatus::Refunded => "refunded",
      PaymentStatus::Failed => "failed",
    }
  }
}

impl fmt::Display for PaymentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PaymentStatus {
  type Err = WorkflowError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(PaymentStatus::Pending),
      "paid" => Ok(PaymentStatus::Paid),
      "refunded" => Ok(PaymentStatus::Refunded),
      "failed" => Ok(PaymentStatus::Failed),
      other => Err(WorkflowError::UnrecognizedPaymentStatus {
        value: other.to_string(),
      }),
    }
  }
}

/// Optional handling priority carried by the order record. The workflow
/// never consults it; it exists so back-office views can sort and badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
  Low,
  Normal,
  High,
  Urgent,
}

impl OrderPriority {
  pub fn as_str(self) -> &'static str {
    match self {
      OrderPriority::Low => "low",
      OrderPriority::Normal => "normal",
      OrderPriority::High => "high",
      OrderPriority::Urgent => "urgent",
    }
  }
}

impl fmt::Display for OrderPriority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderPriority {
  type Err = WorkflowError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "low" => Ok(OrderPriority::Low),
      "normal" => Ok(OrderPriority::Normal),
      "high" => Ok(OrderPriority::High),
      "urgent" => Ok(OrderPriority::Urgent),
      other => Err(WorkflowError::UnrecognizedOrderPriority {
        value: other.to_string(),
      }),
    }
  }
}
