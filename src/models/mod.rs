//! Domain models for the payroll engine.
//!
//! This module contains the employee master data, the pay period type,
//! the read-only fact records gathered per run, and the output records
//! a successful run produces.

mod employee;
mod facts;
mod outputs;
mod period;

pub use employee::{Department, Employee, Team, UserRef};
pub use facts::{
    AttendanceRecord, AttendanceStatus, EnrolledTraining, LeaveRequest, LeaveStatus,
    OnboardingRecord, OnboardingStatus, PerformanceReview, ReviewStatus, Training,
    TrainingEnrollment,
};
pub use outputs::{
    BANK_CASH_ACCOUNT, CashAccount, DocumentMeta, Expense, LedgerPosting, PAYROLL_EXPENSE_ACCOUNT,
    PAYROLL_TRANSACTION_KIND, PayBreakdown, PayrollRecord, PayrollRun, Payslip,
};
pub use period::PayPeriod;
