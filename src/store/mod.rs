//! Collaborator contracts for the payroll engine.
//!
//! The engine's only boundary is its data access: a read side gathering
//! payroll facts ([`FactStore`]) and a write side committing a run's
//! outputs all-or-nothing ([`PayrollUnitOfWork`]). Implementations back
//! these traits with whatever persistence layer the host system uses;
//! [`memory::InMemoryStore`] backs them with plain memory for tests.

pub mod memory;

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, CashAccount, Department, EnrolledTraining, LeaveRequest, OnboardingRecord,
    PayPeriod, PayrollRun, PerformanceReview, Team,
};

/// Read access to the upstream payroll fact sources.
///
/// Every query is scoped by explicit employee identity and period; there
/// is no ambient context. Empty results are normal (they contribute zero
/// to the computation) — only genuine store failures are errors.
pub trait FactStore {
    /// Attendance rows for the employee whose date falls in the period.
    fn attendance_in_period(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Approved leave requests whose date range counts toward the period
    /// (start-in, end-in, or spanning; see [`PayPeriod::overlaps`]).
    fn approved_leave_overlapping(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> EngineResult<Vec<LeaveRequest>>;

    /// The employee's completed performance review for exactly this
    /// period, if any. When several exist the first match wins.
    fn completed_review(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> EngineResult<Option<PerformanceReview>>;

    /// The employee's training enrollments whose training date range
    /// counts toward the period, joined with their trainings.
    fn enrollments_overlapping(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> EngineResult<Vec<EnrolledTraining>>;

    /// The employee's completed onboarding record, if any.
    fn completed_onboarding(&self, employee_id: &str) -> EngineResult<Option<OnboardingRecord>>;

    /// Department lookup.
    fn department(&self, department_id: &str) -> EngineResult<Option<Department>>;

    /// Team lookup.
    fn team(&self, team_id: &str) -> EngineResult<Option<Team>>;

    /// Resolves a cash account by its display name.
    fn cash_account_by_name(&self, name: &str) -> EngineResult<Option<CashAccount>>;
}

/// Atomic write access for payroll runs.
///
/// A run's outputs — payroll record, ledger posting, expenses, payslip
/// artifact and document — are committed as one unit: either every write
/// succeeds or none is observable. The (employee, period) uniqueness
/// constraint is enforced inside [`commit`](PayrollUnitOfWork::commit)
/// itself, so concurrent invocations cannot both land.
pub trait PayrollUnitOfWork {
    /// Whether a payroll record already exists for this employee and
    /// period. Used as a cheap pre-check before computing anything.
    fn payroll_exists(&self, employee_id: &str, period: &PayPeriod) -> EngineResult<bool>;

    /// Persists the whole run, or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicatePayroll`] when a record for the
    /// run's (employee, period) pair already exists, and
    /// [`EngineError::Persistence`] on store failure; in both cases no
    /// write of this run is observable afterwards.
    ///
    /// [`EngineError::DuplicatePayroll`]: crate::error::EngineError::DuplicatePayroll
    /// [`EngineError::Persistence`]: crate::error::EngineError::Persistence
    fn commit(&self, run: PayrollRun) -> EngineResult<()>;
}
