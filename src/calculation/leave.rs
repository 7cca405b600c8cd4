//! Unpaid leave day calculation.

use rust_decimal::Decimal;

use crate::models::{LeaveRequest, LeaveStatus};

/// Sums the unpaid leave days from a period's leave requests.
///
/// Only approved requests whose `leave_type_id` equals the configured
/// unpaid type contribute; every other leave type is paid and does not
/// reduce pay. The rows are expected to already be scoped to the period
/// by the store's overlap query.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::unpaid_leave_days;
/// use payroll_engine::models::{LeaveRequest, LeaveStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let requests = vec![LeaveRequest {
///     employee_id: "emp_001".to_string(),
///     status: LeaveStatus::Approved,
///     leave_type_id: "unpaid".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
///     days_requested: Decimal::from(2),
/// }];
///
/// assert_eq!(unpaid_leave_days(&requests, "unpaid"), Decimal::from(2));
/// assert_eq!(unpaid_leave_days(&requests, "unpaid_leave"), Decimal::ZERO);
/// ```
pub fn unpaid_leave_days(requests: &[LeaveRequest], unpaid_type_id: &str) -> Decimal {
    requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Approved && r.leave_type_id == unpaid_type_id)
        .map(|r| r.days_requested)
        .sum()
}
