//! Payroll run orchestration.
//!
//! [`PayrollEngine`] gathers the period's facts, computes the pay
//! breakdown, and commits the run's outputs through the unit of work.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    PayInputs, apply_net_policy, collect_training_costs, compute_pay, performance_bonus,
    summarize_attendance, unpaid_leave_days,
};
use crate::config::PayrollSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Employee, LedgerPosting, PayBreakdown, PayPeriod, PayrollRecord, PayrollRun, Payslip,
};
use crate::store::{FactStore, PayrollUnitOfWork};

/// The result of a successful payroll run.
#[derive(Debug, Clone)]
pub struct PayrollOutcome {
    /// The created payroll record.
    pub record: PayrollRecord,
    /// The component sheet of the computation.
    pub breakdown: PayBreakdown,
    /// Reporting context gathered from the informational reads
    /// (onboarding, department, team). Never feeds the arithmetic.
    pub reporting: serde_json::Value,
}

/// Processes payroll for one employee and period at a time.
///
/// A run is a single synchronous unit of work: facts are read, pay is
/// computed, and the payroll record, ledger posting, training expenses,
/// and payslip are committed atomically. Invoking a run twice for the
/// same (employee, period) pair yields a conflict, never duplicate rows.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollSettings;
/// use payroll_engine::engine::PayrollEngine;
/// use payroll_engine::models::{CashAccount, Employee, PayPeriod, UserRef};
/// use payroll_engine::store::memory::InMemoryStore;
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new();
/// store.add_cash_account(CashAccount {
///     id: "acc_cash".to_string(),
///     name: "Cash & Cash Equivalents".to_string(),
/// });
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     user: UserRef {
///         id: "user_001".to_string(),
///         name: "Jane Doe".to_string(),
///     },
///     department_id: "dept_eng".to_string(),
///     team_id: None,
///     salary: Some(Decimal::from(5000)),
///     overtime_rate: None,
///     daily_rate: None,
/// };
/// let period: PayPeriod = "2024-03".parse().unwrap();
///
/// let engine = PayrollEngine::new(PayrollSettings::default());
/// let outcome = engine
///     .process_payroll(&store, &store, &employee, &period)
///     .unwrap();
/// assert_eq!(outcome.record.amount, Decimal::from(5000));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollEngine {
    settings: PayrollSettings,
}

impl PayrollEngine {
    /// Creates an engine with the given settings.
    pub fn new(settings: PayrollSettings) -> Self {
        Self { settings }
    }

    /// The settings this engine runs with.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Processes payroll for an employee over a pay period.
    ///
    /// Reads attendance, leave, performance, training, and onboarding
    /// facts for the period, computes gross, deductions, and net, then
    /// commits the payroll record, ledger posting, one expense per
    /// qualifying training enrollment, and the payslip document as one
    /// atomic batch. Missing optional facts contribute zero; only the
    /// cash account is required.
    ///
    /// # Errors
    ///
    /// - [`EngineError::DuplicatePayroll`] when the pair was already
    ///   processed (pre-check or commit-time; nothing is written).
    /// - [`EngineError::CashAccountNotFound`] when the configured cash
    ///   account does not exist (nothing is written).
    /// - [`EngineError::NegativeNetPay`] when net is negative under the
    ///   `reject` policy (nothing is written).
    /// - [`EngineError::Persistence`] when the commit fails; all writes
    ///   of this run are rolled back and the caller may retry.
    pub fn process_payroll<F, U>(
        &self,
        facts: &F,
        uow: &U,
        employee: &Employee,
        period: &PayPeriod,
    ) -> EngineResult<PayrollOutcome>
    where
        F: FactStore,
        U: PayrollUnitOfWork,
    {
        let run_id = Uuid::new_v4();

        if uow.payroll_exists(&employee.id, period)? {
            warn!(
                run_id = %run_id,
                employee_id = %employee.id,
                period = %period,
                "Payroll already processed for this period"
            );
            return Err(EngineError::DuplicatePayroll {
                employee_id: employee.id.clone(),
                period: period.to_string(),
            });
        }

        let attendance = facts.attendance_in_period(&employee.id, period)?;
        let summary = summarize_attendance(&attendance);

        let leave = facts.approved_leave_overlapping(&employee.id, period)?;
        let unpaid_days = unpaid_leave_days(&leave, &self.settings.unpaid_leave_type_id);

        let review = facts.completed_review(&employee.id, period)?;
        let bonus = performance_bonus(review.as_ref());

        let today = Utc::now().date_naive();
        let enrollments = facts.enrollments_overlapping(&employee.id, period)?;
        let training = collect_training_costs(&enrollments, &employee.user, today);

        // Informational reads: surfaced in the reporting context only.
        let onboarding = facts.completed_onboarding(&employee.id)?;
        let department = facts.department(&employee.department_id)?;
        let team = match &employee.team_id {
            Some(team_id) => facts.team(team_id)?,
            None => None,
        };

        let breakdown = compute_pay(&PayInputs {
            base_salary: employee.base_salary(),
            overtime_hours: summary.overtime_hours,
            overtime_rate: employee.overtime_rate_or_zero(),
            bonus,
            absence_days: summary.absence_days,
            unpaid_leave_days: unpaid_days,
            daily_rate: employee.daily_rate_or_zero(),
            training_cost: training.total_cost,
        });
        let payable = apply_net_policy(breakdown.net, self.settings.negative_net_policy)?;

        let cash_account = facts
            .cash_account_by_name(&self.settings.cash_account_name)?
            .ok_or_else(|| {
                warn!(
                    run_id = %run_id,
                    account_name = %self.settings.cash_account_name,
                    "Cash account missing, aborting run"
                );
                EngineError::CashAccountNotFound {
                    name: self.settings.cash_account_name.clone(),
                }
            })?;

        let record = PayrollRecord {
            id: Uuid::new_v4(),
            employee_id: employee.id.clone(),
            period: *period,
            amount: payable,
            created_at: Utc::now(),
        };
        let posting =
            LedgerPosting::for_payroll(&employee.user.name, period, payable, &cash_account, today);
        let payslip = Payslip::render(employee, period, payable);

        let reporting = serde_json::json!({
            "onboarding_completed": onboarding.is_some(),
            "department": department.map(|d| d.name),
            "team": team.map(|t| t.name),
        });

        let expense_count = training.expenses.len();
        uow.commit(PayrollRun {
            record: record.clone(),
            posting,
            expenses: training.expenses,
            payslip,
        })?;

        info!(
            run_id = %run_id,
            employee_id = %employee.id,
            period = %period,
            gross = %breakdown.gross,
            deductions = %breakdown.deductions,
            net = %payable,
            expenses = expense_count,
            "Payroll processed"
        );

        Ok(PayrollOutcome {
            record,
            breakdown,
            reporting,
        })
    }
}

impl Default for PayrollEngine {
    fn default() -> Self {
        Self::new(PayrollSettings::default())
    }
}
