//! End-to-end tests for the payroll engine.
//!
//! This suite runs full payroll invocations against the in-memory store,
//! covering the reference pay scenario, zero-fact defaults, the
//! (employee, period) uniqueness guard, full rollback on fatal errors,
//! leave and training period-boundary membership, per-enrollment expense
//! fan-out, and the negative-net policies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::config::{NegativeNetPolicy, PayrollSettings};
use payroll_engine::engine::PayrollEngine;
use payroll_engine::error::EngineError;
use payroll_engine::models::{
    AttendanceRecord, AttendanceStatus, CashAccount, Department, Employee, LeaveRequest,
    LeaveStatus, OnboardingRecord, OnboardingStatus, PayPeriod, PerformanceReview, ReviewStatus,
    Team, Training, UserRef,
};
use payroll_engine::store::memory::InMemoryStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn march() -> PayPeriod {
    "2024-03".parse().unwrap()
}

fn test_employee() -> Employee {
    Employee {
        id: "emp_001".to_string(),
        user: UserRef {
            id: "user_001".to_string(),
            name: "Jane Doe".to_string(),
        },
        department_id: "dept_eng".to_string(),
        team_id: Some("team_platform".to_string()),
        salary: Some(dec("5000")),
        overtime_rate: Some(dec("20")),
        daily_rate: Some(dec("150")),
    }
}

/// A store seeded with the cash account and org lookups every run needs.
fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    store.add_cash_account(CashAccount {
        id: "acc_cash".to_string(),
        name: "Cash & Cash Equivalents".to_string(),
    });
    store.add_department(Department {
        id: "dept_eng".to_string(),
        name: "Engineering".to_string(),
    });
    store.add_team(Team {
        id: "team_platform".to_string(),
        name: "Platform".to_string(),
    });
    store
}

fn attendance(day: u32, status: AttendanceStatus, overtime: &str) -> AttendanceRecord {
    AttendanceRecord {
        employee_id: "emp_001".to_string(),
        date: date(2024, 3, day),
        status,
        overtime_hours: dec(overtime),
    }
}

fn unpaid_leave(start: NaiveDate, end: NaiveDate, days: &str) -> LeaveRequest {
    LeaveRequest {
        employee_id: "emp_001".to_string(),
        status: LeaveStatus::Approved,
        leave_type_id: "unpaid".to_string(),
        start_date: start,
        end_date: end,
        days_requested: dec(days),
    }
}

fn training(id: &str, title: &str, start: NaiveDate, end: NaiveDate, cost: &str) -> Training {
    Training {
        id: id.to_string(),
        title: title.to_string(),
        start_date: start,
        end_date: end,
        cost_per_participant: Some(dec(cost)),
    }
}

/// Seeds the reference scenario: 10 overtime hours, 1 absence, 2 unpaid
/// leave days, a 300 bonus, and one training costing 100.
fn seed_reference_scenario(store: &InMemoryStore) {
    store.add_attendance(attendance(4, AttendanceStatus::Present, "4"));
    store.add_attendance(attendance(5, AttendanceStatus::Present, "6"));
    store.add_attendance(attendance(6, AttendanceStatus::Absent, "0"));
    store.add_leave(unpaid_leave(date(2024, 3, 11), date(2024, 3, 12), "2"));
    store.add_review(PerformanceReview {
        employee_id: "emp_001".to_string(),
        review_period: march(),
        status: ReviewStatus::Completed,
        bonus: Some(dec("300")),
    });
    store.add_training(training(
        "tr_001",
        "Safety Induction",
        date(2024, 3, 18),
        date(2024, 3, 19),
        "100",
    ));
    store.enroll("emp_001", "tr_001");
}

fn assert_nothing_persisted(store: &InMemoryStore) {
    assert!(store.payroll_records().is_empty());
    assert!(store.ledger_postings().is_empty());
    assert!(store.expenses().is_empty());
    assert!(store.documents().is_empty());
    assert_eq!(store.object_count(), 0);
}

// =============================================================================
// Reference scenario
// =============================================================================

#[test]
fn test_reference_scenario_amounts() {
    let store = seeded_store();
    seed_reference_scenario(&store);
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.breakdown.gross, dec("5500"));
    assert_eq!(outcome.breakdown.deductions, dec("550"));
    assert_eq!(outcome.breakdown.net, dec("4950"));
    assert_eq!(outcome.record.amount, dec("4950"));
    assert_eq!(outcome.record.employee_id, "emp_001");
    assert_eq!(outcome.record.period, march());
}

#[test]
fn test_reference_scenario_persists_one_of_each_output() {
    let store = seeded_store();
    seed_reference_scenario(&store);
    let engine = PayrollEngine::default();

    engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    let records = store.payroll_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].amount, dec("4950"));

    let postings = store.ledger_postings();
    assert_eq!(postings.len(), 1);
    assert_eq!(postings[0].amount, dec("4950"));
    assert_eq!(postings[0].kind, "payroll");
    assert_eq!(postings[0].debit_account, "6000");
    assert_eq!(postings[0].credit_account, "1000");
    assert_eq!(postings[0].cash_account_id, "acc_cash");
    assert!(postings[0].description.contains("Jane Doe"));
    assert!(postings[0].description.contains("2024-03"));

    let expenses = store.expenses();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].amount, dec("100"));
    assert_eq!(expenses[0].title, "Training: Safety Induction");
    assert_eq!(expenses[0].owner_user_id, "user_001");

    let documents = store.documents();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].path, "payslips/emp_001_2024-03.txt");
    assert_eq!(documents[0].owner_user_id, "user_001");

    let body = store.read_object("payslips/emp_001_2024-03.txt").unwrap();
    assert!(body.contains("Jane Doe"));
    assert!(body.contains("2024-03"));
    assert!(body.contains("4950"));
}

// =============================================================================
// Defaulting behaviour
// =============================================================================

#[test]
fn test_salary_only_net_equals_salary() {
    let store = seeded_store();
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.record.amount, dec("5000"));
    assert_eq!(outcome.breakdown.deductions, Decimal::ZERO);
}

#[test]
fn test_missing_optional_amounts_default_to_zero() {
    let store = seeded_store();
    let mut employee = test_employee();
    employee.salary = None;
    employee.overtime_rate = None;
    employee.daily_rate = None;
    // Facts that would pay or deduct if the rates were set.
    store.add_attendance(attendance(4, AttendanceStatus::Present, "10"));
    store.add_attendance(attendance(5, AttendanceStatus::Absent, "0"));
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap();

    assert_eq!(outcome.record.amount, Decimal::ZERO);
    assert_eq!(store.payroll_records().len(), 1);
}

#[test]
fn test_unfinished_or_mismatched_reviews_pay_no_bonus() {
    let store = seeded_store();
    store.add_review(PerformanceReview {
        employee_id: "emp_001".to_string(),
        review_period: "2024-02".parse().unwrap(),
        status: ReviewStatus::Completed,
        bonus: Some(dec("300")),
    });
    store.add_review(PerformanceReview {
        employee_id: "emp_001".to_string(),
        review_period: march(),
        status: ReviewStatus::InProgress,
        bonus: Some(dec("300")),
    });
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.breakdown.bonus, Decimal::ZERO);
    assert_eq!(outcome.record.amount, dec("5000"));
}

// =============================================================================
// Leave membership and type filtering
// =============================================================================

#[test]
fn test_leave_spilling_into_next_month_counts_toward_this_period() {
    let store = seeded_store();
    store.add_leave(unpaid_leave(date(2024, 3, 28), date(2024, 4, 2), "2"));
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.breakdown.unpaid_leave_deduction, dec("300"));
    assert_eq!(outcome.record.amount, dec("4700"));
}

#[test]
fn test_paid_leave_types_do_not_reduce_pay() {
    let store = seeded_store();
    let mut annual = unpaid_leave(date(2024, 3, 11), date(2024, 3, 15), "5");
    annual.leave_type_id = "annual".to_string();
    store.add_leave(annual);
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.breakdown.unpaid_leave_days, Decimal::ZERO);
    assert_eq!(outcome.record.amount, dec("5000"));
}

#[test]
fn test_pending_unpaid_leave_does_not_reduce_pay() {
    let store = seeded_store();
    let mut pending = unpaid_leave(date(2024, 3, 11), date(2024, 3, 12), "2");
    pending.status = LeaveStatus::Pending;
    store.add_leave(pending);
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.record.amount, dec("5000"));
}

// =============================================================================
// Training costs and expenses
// =============================================================================

#[test]
fn test_each_qualifying_enrollment_creates_its_own_expense() {
    let store = seeded_store();
    store.add_training(training(
        "tr_001",
        "Safety Induction",
        date(2024, 3, 4),
        date(2024, 3, 5),
        "100",
    ));
    store.add_training(training(
        "tr_002",
        "First Aid",
        date(2024, 3, 18),
        date(2024, 3, 19),
        "250",
    ));
    store.enroll("emp_001", "tr_001");
    store.enroll("emp_001", "tr_001");
    store.enroll("emp_001", "tr_002");
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.breakdown.training_cost, dec("450"));
    assert_eq!(outcome.record.amount, dec("4550"));

    let expenses = store.expenses();
    assert_eq!(expenses.len(), 3);
    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    assert_eq!(total, dec("450"));
}

#[test]
fn test_training_outside_period_is_ignored() {
    let store = seeded_store();
    store.add_training(training(
        "tr_001",
        "Q3 Offsite",
        date(2024, 7, 1),
        date(2024, 7, 3),
        "400",
    ));
    store.enroll("emp_001", "tr_001");
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.breakdown.training_cost, Decimal::ZERO);
    assert!(store.expenses().is_empty());
}

#[test]
fn test_training_spanning_period_boundary_counts() {
    let store = seeded_store();
    store.add_training(training(
        "tr_001",
        "Leadership Course",
        date(2024, 2, 26),
        date(2024, 3, 1),
        "180",
    ));
    store.enroll("emp_001", "tr_001");
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.breakdown.training_cost, dec("180"));
    assert_eq!(store.expenses().len(), 1);
}

// =============================================================================
// Uniqueness guard
// =============================================================================

#[test]
fn test_second_invocation_for_same_pair_conflicts() {
    let store = seeded_store();
    let engine = PayrollEngine::default();
    let employee = test_employee();

    engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap();
    let err = engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap_err();

    match err {
        EngineError::DuplicatePayroll {
            employee_id,
            period,
        } => {
            assert_eq!(employee_id, "emp_001");
            assert_eq!(period, "2024-03");
        }
        other => panic!("Expected DuplicatePayroll, got {:?}", other),
    }
    assert_eq!(store.payroll_records().len(), 1);
    assert_eq!(store.ledger_postings().len(), 1);
    assert_eq!(store.documents().len(), 1);
}

#[test]
fn test_conflict_is_not_retryable() {
    let store = seeded_store();
    let engine = PayrollEngine::default();
    let employee = test_employee();

    engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap();
    let err = engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap_err();
    assert!(!err.is_retryable());
}

#[test]
fn test_same_employee_can_be_processed_for_another_period() {
    let store = seeded_store();
    let engine = PayrollEngine::default();
    let employee = test_employee();
    let april: PayPeriod = "2024-04".parse().unwrap();

    engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap();
    engine
        .process_payroll(&store, &store, &employee, &april)
        .unwrap();

    assert_eq!(store.payroll_records().len(), 2);
    assert!(store.read_object("payslips/emp_001_2024-04.txt").is_some());
}

// =============================================================================
// Fatal errors and rollback
// =============================================================================

#[test]
fn test_missing_cash_account_aborts_with_nothing_persisted() {
    let store = InMemoryStore::new();
    seed_reference_scenario(&store);
    let engine = PayrollEngine::default();

    let err = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap_err();

    match err {
        EngineError::CashAccountNotFound { name } => {
            assert_eq!(name, "Cash & Cash Equivalents");
        }
        other => panic!("Expected CashAccountNotFound, got {:?}", other),
    }
    assert_nothing_persisted(&store);
}

#[test]
fn test_persistence_failure_rolls_back_and_allows_retry() {
    let store = seeded_store();
    seed_reference_scenario(&store);
    let engine = PayrollEngine::default();
    store.fail_next_commit();

    let err = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap_err();
    assert!(err.is_retryable());
    assert_nothing_persisted(&store);

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();
    assert_eq!(outcome.record.amount, dec("4950"));
    assert_eq!(store.payroll_records().len(), 1);
    assert_eq!(store.expenses().len(), 1);
}

// =============================================================================
// Negative net policies
// =============================================================================

/// An employee whose deductions exceed gross: salary 100, two absence
/// days at 150/day.
fn seed_negative_net(store: &InMemoryStore) -> Employee {
    store.add_attendance(attendance(4, AttendanceStatus::Absent, "0"));
    store.add_attendance(attendance(5, AttendanceStatus::Absent, "0"));
    let mut employee = test_employee();
    employee.salary = Some(dec("100"));
    employee.overtime_rate = None;
    employee
}

#[test]
fn test_allow_policy_records_negative_net() {
    let store = seeded_store();
    let employee = seed_negative_net(&store);
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap();

    assert_eq!(outcome.breakdown.net, dec("-200"));
    assert_eq!(outcome.record.amount, dec("-200"));
    assert_eq!(store.ledger_postings()[0].amount, dec("-200"));
}

#[test]
fn test_floor_policy_records_zero_for_negative_net() {
    let store = seeded_store();
    let employee = seed_negative_net(&store);
    let engine = PayrollEngine::new(PayrollSettings {
        negative_net_policy: NegativeNetPolicy::FloorToZero,
        ..PayrollSettings::default()
    });

    let outcome = engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap();

    // The sheet keeps the raw arithmetic; the payable amount is floored.
    assert_eq!(outcome.breakdown.net, dec("-200"));
    assert_eq!(outcome.record.amount, Decimal::ZERO);
    assert_eq!(store.ledger_postings()[0].amount, Decimal::ZERO);
}

#[test]
fn test_reject_policy_fails_before_any_write() {
    let store = seeded_store();
    let employee = seed_negative_net(&store);
    let engine = PayrollEngine::new(PayrollSettings {
        negative_net_policy: NegativeNetPolicy::Reject,
        ..PayrollSettings::default()
    });

    let err = engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap_err();

    match err {
        EngineError::NegativeNetPay { amount } => assert_eq!(amount, dec("-200")),
        other => panic!("Expected NegativeNetPay, got {:?}", other),
    }
    assert_nothing_persisted(&store);
}

// =============================================================================
// Reporting context
// =============================================================================

#[test]
fn test_reporting_context_carries_informational_reads() {
    let store = seeded_store();
    store.add_onboarding(OnboardingRecord {
        employee_id: "emp_001".to_string(),
        status: OnboardingStatus::Completed,
    });
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &test_employee(), &march())
        .unwrap();

    assert_eq!(outcome.reporting["onboarding_completed"], true);
    assert_eq!(outcome.reporting["department"], "Engineering");
    assert_eq!(outcome.reporting["team"], "Platform");
}

#[test]
fn test_reporting_context_tolerates_missing_lookups() {
    let store = InMemoryStore::new();
    store.add_cash_account(CashAccount {
        id: "acc_cash".to_string(),
        name: "Cash & Cash Equivalents".to_string(),
    });
    let mut employee = test_employee();
    employee.team_id = None;
    let engine = PayrollEngine::default();

    let outcome = engine
        .process_payroll(&store, &store, &employee, &march())
        .unwrap();

    assert_eq!(outcome.reporting["onboarding_completed"], false);
    assert_eq!(outcome.reporting["department"], serde_json::Value::Null);
    assert_eq!(outcome.reporting["team"], serde_json::Value::Null);
}
