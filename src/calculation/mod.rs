//! Calculation logic for the payroll engine.
//!
//! This module contains the pure per-rule functions the engine composes:
//! attendance summarisation, unpaid leave day totals, performance bonus
//! extraction, training cost collection, and the final gross/net assembly
//! with the negative-net policy.

mod attendance;
mod bonus;
mod leave;
mod pay;
mod training;

pub use attendance::{AttendanceSummary, summarize_attendance};
pub use bonus::performance_bonus;
pub use leave::unpaid_leave_days;
pub use pay::{PayInputs, apply_net_policy, compute_pay};
pub use training::{TrainingCostResult, collect_training_costs};
