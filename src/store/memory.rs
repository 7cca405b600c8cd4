//! In-memory store implementation.
//!
//! [`InMemoryStore`] backs both sides of the store contract with
//! mutex-guarded collections. It is the implementation used by the test
//! suites and benchmarks; the commit path stages nothing until every
//! check has passed, so a failed run leaves no trace, matching the
//! atomicity the trait demands.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, CashAccount, Department, DocumentMeta, EnrolledTraining, Expense,
    LeaveRequest, LeaveStatus, LedgerPosting, OnboardingRecord, OnboardingStatus, PayPeriod,
    PayrollRecord, PayrollRun, PerformanceReview, ReviewStatus, Team, Training,
    TrainingEnrollment,
};

use super::{FactStore, PayrollUnitOfWork};

#[derive(Debug, Default)]
struct State {
    attendance: Vec<AttendanceRecord>,
    leave: Vec<LeaveRequest>,
    reviews: Vec<PerformanceReview>,
    trainings: HashMap<String, Training>,
    enrollments: Vec<TrainingEnrollment>,
    onboarding: Vec<OnboardingRecord>,
    departments: HashMap<String, Department>,
    teams: HashMap<String, Team>,
    cash_accounts: Vec<CashAccount>,
    payrolls: Vec<PayrollRecord>,
    postings: Vec<LedgerPosting>,
    expenses: Vec<Expense>,
    documents: Vec<DocumentMeta>,
    objects: HashMap<String, String>,
    fail_next_commit: bool,
}

/// An in-memory implementation of [`FactStore`] and [`PayrollUnitOfWork`].
///
/// # Example
///
/// ```
/// use payroll_engine::models::CashAccount;
/// use payroll_engine::store::PayrollUnitOfWork;
/// use payroll_engine::store::memory::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// store.add_cash_account(CashAccount {
///     id: "acc_cash".to_string(),
///     name: "Cash & Cash Equivalents".to_string(),
/// });
/// let period = "2024-03".parse().unwrap();
/// assert!(!store.payroll_exists("emp_001", &period).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // Recover the data on poisoning; the store holds no invariants
        // that a panicked writer could have left half-applied.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Adds an attendance row.
    pub fn add_attendance(&self, record: AttendanceRecord) {
        self.lock().attendance.push(record);
    }

    /// Adds a leave request.
    pub fn add_leave(&self, request: LeaveRequest) {
        self.lock().leave.push(request);
    }

    /// Adds a performance review.
    pub fn add_review(&self, review: PerformanceReview) {
        self.lock().reviews.push(review);
    }

    /// Adds a training course.
    pub fn add_training(&self, training: Training) {
        self.lock().trainings.insert(training.id.clone(), training);
    }

    /// Enrolls an employee in a training course.
    pub fn enroll(&self, employee_id: &str, training_id: &str) {
        self.lock().enrollments.push(TrainingEnrollment {
            employee_id: employee_id.to_string(),
            training_id: training_id.to_string(),
        });
    }

    /// Adds an onboarding record.
    pub fn add_onboarding(&self, record: OnboardingRecord) {
        self.lock().onboarding.push(record);
    }

    /// Adds a department lookup row.
    pub fn add_department(&self, department: Department) {
        self.lock()
            .departments
            .insert(department.id.clone(), department);
    }

    /// Adds a team lookup row.
    pub fn add_team(&self, team: Team) {
        self.lock().teams.insert(team.id.clone(), team);
    }

    /// Adds a cash account.
    pub fn add_cash_account(&self, account: CashAccount) {
        self.lock().cash_accounts.push(account);
    }

    /// Makes the next [`commit`](PayrollUnitOfWork::commit) fail with a
    /// persistence error, for exercising the rollback and retry paths.
    pub fn fail_next_commit(&self) {
        self.lock().fail_next_commit = true;
    }

    /// All committed payroll records.
    pub fn payroll_records(&self) -> Vec<PayrollRecord> {
        self.lock().payrolls.clone()
    }

    /// All committed ledger postings.
    pub fn ledger_postings(&self) -> Vec<LedgerPosting> {
        self.lock().postings.clone()
    }

    /// All committed expenses.
    pub fn expenses(&self) -> Vec<Expense> {
        self.lock().expenses.clone()
    }

    /// All committed document metadata records.
    pub fn documents(&self) -> Vec<DocumentMeta> {
        self.lock().documents.clone()
    }

    /// Reads a stored artifact by path.
    pub fn read_object(&self, path: &str) -> Option<String> {
        self.lock().objects.get(path).cloned()
    }

    /// The number of stored artifacts.
    pub fn object_count(&self) -> usize {
        self.lock().objects.len()
    }
}

impl FactStore for InMemoryStore {
    fn attendance_in_period(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .lock()
            .attendance
            .iter()
            .filter(|r| r.employee_id == employee_id && period.contains(r.date))
            .cloned()
            .collect())
    }

    fn approved_leave_overlapping(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> EngineResult<Vec<LeaveRequest>> {
        Ok(self
            .lock()
            .leave
            .iter()
            .filter(|r| {
                r.employee_id == employee_id
                    && r.status == LeaveStatus::Approved
                    && period.overlaps(r.start_date, r.end_date)
            })
            .cloned()
            .collect())
    }

    fn completed_review(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> EngineResult<Option<PerformanceReview>> {
        Ok(self
            .lock()
            .reviews
            .iter()
            .find(|r| {
                r.employee_id == employee_id
                    && r.review_period == *period
                    && r.status == ReviewStatus::Completed
            })
            .cloned())
    }

    fn enrollments_overlapping(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> EngineResult<Vec<EnrolledTraining>> {
        let state = self.lock();
        Ok(state
            .enrollments
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .filter_map(|e| {
                let training = state.trainings.get(&e.training_id)?;
                period
                    .overlaps(training.start_date, training.end_date)
                    .then(|| EnrolledTraining {
                        enrollment: e.clone(),
                        training: training.clone(),
                    })
            })
            .collect())
    }

    fn completed_onboarding(&self, employee_id: &str) -> EngineResult<Option<OnboardingRecord>> {
        Ok(self
            .lock()
            .onboarding
            .iter()
            .find(|r| r.employee_id == employee_id && r.status == OnboardingStatus::Completed)
            .cloned())
    }

    fn department(&self, department_id: &str) -> EngineResult<Option<Department>> {
        Ok(self.lock().departments.get(department_id).cloned())
    }

    fn team(&self, team_id: &str) -> EngineResult<Option<Team>> {
        Ok(self.lock().teams.get(team_id).cloned())
    }

    fn cash_account_by_name(&self, name: &str) -> EngineResult<Option<CashAccount>> {
        Ok(self
            .lock()
            .cash_accounts
            .iter()
            .find(|a| a.name == name)
            .cloned())
    }
}

impl PayrollUnitOfWork for InMemoryStore {
    fn payroll_exists(&self, employee_id: &str, period: &PayPeriod) -> EngineResult<bool> {
        Ok(self
            .lock()
            .payrolls
            .iter()
            .any(|r| r.employee_id == employee_id && r.period == *period))
    }

    fn commit(&self, run: PayrollRun) -> EngineResult<()> {
        let mut state = self.lock();

        if state.fail_next_commit {
            state.fail_next_commit = false;
            return Err(EngineError::Persistence {
                message: "injected commit failure".to_string(),
            });
        }

        // Uniqueness is re-checked under the same lock that applies the
        // writes, so two concurrent runs for one pair cannot both commit.
        let duplicate = state
            .payrolls
            .iter()
            .any(|r| r.employee_id == run.record.employee_id && r.period == run.record.period);
        if duplicate {
            return Err(EngineError::DuplicatePayroll {
                employee_id: run.record.employee_id.clone(),
                period: run.record.period.to_string(),
            });
        }

        let PayrollRun {
            record,
            posting,
            expenses,
            payslip,
        } = run;

        state.payrolls.push(record);
        state.postings.push(posting);
        state.expenses.extend(expenses);
        state.objects.insert(payslip.path.clone(), payslip.body);
        state.documents.push(payslip.document);

        Ok(())
    }
}
