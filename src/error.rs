//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while processing a payroll run.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Callers that
/// run payroll from a job queue can use [`EngineError::is_retryable`] to
/// decide whether a failed invocation should be retried.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::CashAccountNotFound {
///     name: "Cash & Cash Equivalents".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Cash account not found: Cash & Cash Equivalents"
/// );
/// assert!(!error.is_retryable());
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A pay period string was not in `YYYY-MM` form.
    #[error("Invalid pay period '{value}': expected YYYY-MM")]
    InvalidPeriod {
        /// The value that failed to parse.
        value: String,
    },

    /// The cash account required for ledger posting does not exist.
    ///
    /// This is a configuration error: the whole operation aborts and
    /// nothing is committed.
    #[error("Cash account not found: {name}")]
    CashAccountNotFound {
        /// The account name that was looked up.
        name: String,
    },

    /// A payroll record already exists for this employee and period.
    #[error("Payroll already processed for employee '{employee_id}' in period {period}")]
    DuplicatePayroll {
        /// The employee the duplicate run was attempted for.
        employee_id: String,
        /// The pay period of the duplicate run.
        period: String,
    },

    /// Net pay came out negative and the configured policy rejects it.
    #[error("Computed net pay {amount} is negative")]
    NegativeNetPay {
        /// The negative net amount that was computed.
        amount: Decimal,
    },

    /// A write to the backing store failed.
    ///
    /// All writes of the invocation are rolled back; the caller may retry.
    #[error("Persistence failure: {message}")]
    Persistence {
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true if the failed operation may be retried by the caller.
    ///
    /// Only persistence failures are transient. Configuration errors,
    /// conflicts, and validation errors will fail the same way on every
    /// attempt, so retrying them is pointless.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Persistence { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
