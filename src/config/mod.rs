//! Settings for the payroll engine.
//!
//! Settings resolve the values the computation cannot derive from data:
//! which leave type is unpaid, the name the cash account is looked up by,
//! and how a negative net pay is handled.

mod loader;
mod types;

pub use types::{
    DEFAULT_CASH_ACCOUNT_NAME, DEFAULT_UNPAID_LEAVE_TYPE, NegativeNetPolicy, PayrollSettings,
};
