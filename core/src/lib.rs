// src/lib.rs

//! Orderflow: a pure, table-driven order-status workflow library.
//!
//! Orderflow is the single authority for the fulfilment lifecycle of a retail
//! order. It answers, without side effects:
//!  - Which status changes are legal from the order's current status.
//!  - What each change requires before it may be persisted (admin note,
//!    tracking number, payment-status gate).
//!  - Which change, if any, could fire without human confirmation.
//!  - How far along the order is, as a percentage.
//!
//! The library reads and writes no state of its own. Callers consult it,
//! collect whatever a transition requires, and hand the validated result to
//! their persistence layer. `apply_transition` is the one enforcement point:
//! it checks legality and guard requirements together and returns a typed
//! failure instead of trusting every caller to remember the checks.

// Declare modules according to the planned structure
pub mod core;
pub mod transition;
pub mod workflow;
pub mod error;

// --- Re-exports for the Public API ---

// The two status axes and the optional priority tag
pub use crate::core::status::{OrderPriority, OrderStatus, PaymentStatus};

// The fixed transition table and its row type
pub use crate::transition::config::{StatusTransition, ORDER_WORKFLOW_CONFIG};

// Typed guard enforcement: what the caller supplies, and what it gets back
pub use crate::transition::guard::{AppliedTransition, TransitionRequest};

// The query and enforcement operations
pub use crate::workflow::{apply_transition, available_transitions, can_transition_to, next_automatic_status};

pub use crate::error::{WorkflowError, WorkflowResult};
