//! Settings types for the payroll engine.

use serde::{Deserialize, Serialize};

/// The default leave-type identifier treated as unpaid leave.
pub const DEFAULT_UNPAID_LEAVE_TYPE: &str = "unpaid";

/// The default name of the cash account used for ledger postings.
pub const DEFAULT_CASH_ACCOUNT_NAME: &str = "Cash & Cash Equivalents";

/// How a negative computed net pay is handled.
///
/// `Allow` pays the negative amount out as-is, `FloorToZero` clamps the
/// payable amount to zero, and `Reject` fails the run before any write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeNetPolicy {
    /// Record the negative net amount unchanged.
    #[default]
    Allow,
    /// Record zero instead of a negative amount.
    FloorToZero,
    /// Fail the run with a validation error.
    Reject,
}

/// Runtime settings for the payroll engine.
///
/// Every field has a default, so a settings file only needs to name the
/// values it overrides.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{NegativeNetPolicy, PayrollSettings};
///
/// let settings = PayrollSettings::default();
/// assert_eq!(settings.unpaid_leave_type_id, "unpaid");
/// assert_eq!(settings.cash_account_name, "Cash & Cash Equivalents");
/// assert_eq!(settings.negative_net_policy, NegativeNetPolicy::Allow);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// The leave-type identifier whose approved requests reduce pay.
    #[serde(default = "default_unpaid_leave_type")]
    pub unpaid_leave_type_id: String,
    /// The name the cash account is resolved by for ledger postings.
    #[serde(default = "default_cash_account_name")]
    pub cash_account_name: String,
    /// How a negative computed net pay is handled.
    #[serde(default)]
    pub negative_net_policy: NegativeNetPolicy,
}

fn default_unpaid_leave_type() -> String {
    DEFAULT_UNPAID_LEAVE_TYPE.to_string()
}

fn default_cash_account_name() -> String {
    DEFAULT_CASH_ACCOUNT_NAME.to_string()
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            unpaid_leave_type_id: default_unpaid_leave_type(),
            cash_account_name: default_cash_account_name(),
            negative_net_policy: NegativeNetPolicy::default(),
        }
    }
}
