//! Attendance summarisation.
//!
//! This module folds a period's attendance rows into the two figures the
//! pay computation needs: total overtime hours and the absence-day count.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceStatus};

/// The attendance figures for a pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSummary {
    /// Sum of overtime hours across all rows.
    pub overtime_hours: Decimal,
    /// Count of rows recorded as absent.
    pub absence_days: u32,
}

/// Summarises a period's attendance rows.
///
/// Overtime hours are summed across every row regardless of status; the
/// absence count only includes rows with [`AttendanceStatus::Absent`].
/// An empty slice yields a zero summary.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::summarize_attendance;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rows = vec![
///     AttendanceRecord {
///         employee_id: "emp_001".to_string(),
///         date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///         status: AttendanceStatus::Present,
///         overtime_hours: Decimal::from(3),
///     },
///     AttendanceRecord {
///         employee_id: "emp_001".to_string(),
///         date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///         status: AttendanceStatus::Absent,
///         overtime_hours: Decimal::ZERO,
///     },
/// ];
///
/// let summary = summarize_attendance(&rows);
/// assert_eq!(summary.overtime_hours, Decimal::from(3));
/// assert_eq!(summary.absence_days, 1);
/// ```
pub fn summarize_attendance(rows: &[AttendanceRecord]) -> AttendanceSummary {
    let overtime_hours = rows.iter().map(|r| r.overtime_hours).sum();
    let absence_days = rows
        .iter()
        .filter(|r| r.status == AttendanceStatus::Absent)
        .count() as u32;

    AttendanceSummary {
        overtime_hours,
        absence_days,
    }
}
