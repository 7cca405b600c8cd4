//! Performance bonus extraction.

use rust_decimal::Decimal;

use crate::models::{PerformanceReview, ReviewStatus};

/// Returns the bonus from the period's performance review, if any.
///
/// A bonus only counts when the review is completed; a missing review, an
/// unfinished review, or a completed review without a bonus field all
/// contribute zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::performance_bonus;
/// use payroll_engine::models::{PerformanceReview, ReviewStatus};
/// use rust_decimal::Decimal;
///
/// let review = PerformanceReview {
///     employee_id: "emp_001".to_string(),
///     review_period: "2024-03".parse().unwrap(),
///     status: ReviewStatus::Completed,
///     bonus: Some(Decimal::from(300)),
/// };
///
/// assert_eq!(performance_bonus(Some(&review)), Decimal::from(300));
/// assert_eq!(performance_bonus(None), Decimal::ZERO);
/// ```
pub fn performance_bonus(review: Option<&PerformanceReview>) -> Decimal {
    review
        .filter(|r| r.status == ReviewStatus::Completed)
        .map(PerformanceReview::bonus_or_zero)
        .unwrap_or(Decimal::ZERO)
}
