//! Read-only payroll fact records.
//!
//! These types mirror the rows returned by the upstream attendance, leave,
//! performance, training, and onboarding stores. The engine never mutates
//! them; it only folds them into the pay computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// The recorded status of a single attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Present for the full day.
    Present,
    /// Absent without approved leave. Counts toward the absence deduction.
    Absent,
    /// Present but late.
    Late,
    /// Away on approved leave.
    OnLeave,
}

/// A single day's attendance row for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this row belongs to.
    pub employee_id: String,
    /// The calendar date of the row.
    pub date: NaiveDate,
    /// The recorded status for the day.
    pub status: AttendanceStatus,
    /// Overtime hours worked on the day. Non-negative.
    pub overtime_hours: Decimal,
}

/// The approval status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting approval.
    Pending,
    /// Approved; counts toward payroll.
    Approved,
    /// Rejected.
    Rejected,
}

/// A leave request for an employee.
///
/// A request counts toward a pay period if its start or end date falls
/// within the period, or its range spans the period's first and last
/// calendar day (see [`PayPeriod::overlaps`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee this request belongs to.
    pub employee_id: String,
    /// The approval status. Only approved requests count.
    pub status: LeaveStatus,
    /// Identifier of the leave type (e.g. "annual", "unpaid").
    pub leave_type_id: String,
    /// First day of the leave.
    pub start_date: NaiveDate,
    /// Last day of the leave.
    pub end_date: NaiveDate,
    /// The number of leave days requested.
    pub days_requested: Decimal,
}

/// The lifecycle status of a performance review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Not yet started.
    Draft,
    /// Review underway.
    InProgress,
    /// Finalised; its bonus counts toward payroll.
    Completed,
}

/// A performance review carrying an optional bonus.
///
/// At most one review is considered per employee and period; when several
/// exist for the same period the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReview {
    /// The employee this review belongs to.
    pub employee_id: String,
    /// The pay period the review covers. Must equal the target period
    /// exactly for the bonus to count.
    pub review_period: PayPeriod,
    /// The lifecycle status. Only completed reviews count.
    pub status: ReviewStatus,
    /// The awarded bonus, if any.
    pub bonus: Option<Decimal>,
}

impl PerformanceReview {
    /// The awarded bonus, or zero when not set.
    pub fn bonus_or_zero(&self) -> Decimal {
        self.bonus.unwrap_or(Decimal::ZERO)
    }
}

/// A training course with a per-participant cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    /// Unique identifier of the training.
    pub id: String,
    /// Title of the training course.
    pub title: String,
    /// First day of the training.
    pub start_date: NaiveDate,
    /// Last day of the training.
    pub end_date: NaiveDate,
    /// Cost charged per enrolled participant.
    pub cost_per_participant: Option<Decimal>,
}

impl Training {
    /// The per-participant cost, or zero when not set.
    pub fn cost_or_zero(&self) -> Decimal {
        self.cost_per_participant.unwrap_or(Decimal::ZERO)
    }
}

/// An employee's enrollment in a training course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingEnrollment {
    /// The enrolled employee.
    pub employee_id: String,
    /// The training enrolled in.
    pub training_id: String,
}

/// An enrollment joined with its training course.
///
/// Each qualifying enrollment contributes the training's full cost to the
/// deduction total and produces one expense record. Two enrollments in the
/// same training are deliberately not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolledTraining {
    /// The enrollment row.
    pub enrollment: TrainingEnrollment,
    /// The training it references.
    pub training: Training,
}

/// The lifecycle status of an onboarding record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    /// Not yet started.
    Pending,
    /// Underway.
    InProgress,
    /// Finished.
    Completed,
}

/// An employee's onboarding record.
///
/// Read per run for reporting; it never influences the pay arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The onboarding status.
    pub status: OnboardingStatus,
}
