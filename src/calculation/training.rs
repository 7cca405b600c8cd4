//! Training cost collection and expense emission.
//!
//! Each qualifying enrollment contributes its training's full
//! per-participant cost to the deduction total and independently produces
//! one expense record, attributed to the employee's user.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{EnrolledTraining, Expense, UserRef};

/// The result of collecting a period's training costs.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingCostResult {
    /// Total cost deducted from pay.
    pub total_cost: Decimal,
    /// One expense record per qualifying enrollment.
    pub expenses: Vec<Expense>,
}

/// Collects training costs from a period's enrollments.
///
/// An enrollment qualifies when its training has a positive
/// per-participant cost; zero, negative, or absent costs contribute
/// nothing and emit no expense. Enrollments are processed one by one, so
/// two enrollments in the same training produce two expenses.
///
/// # Arguments
///
/// * `enrollments` - The enrollments whose trainings overlap the period
/// * `owner` - The employee's user, credited on each expense
/// * `incurred_on` - The date stamped on emitted expenses
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::collect_training_costs;
/// use payroll_engine::models::{EnrolledTraining, Training, TrainingEnrollment, UserRef};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let enrolled = vec![EnrolledTraining {
///     enrollment: TrainingEnrollment {
///         employee_id: "emp_001".to_string(),
///         training_id: "tr_001".to_string(),
///     },
///     training: Training {
///         id: "tr_001".to_string(),
///         title: "Safety Induction".to_string(),
///         start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///         cost_per_participant: Some(Decimal::from(100)),
///     },
/// }];
/// let owner = UserRef {
///     id: "user_001".to_string(),
///     name: "Jane Doe".to_string(),
/// };
///
/// let result = collect_training_costs(
///     &enrolled,
///     &owner,
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// );
/// assert_eq!(result.total_cost, Decimal::from(100));
/// assert_eq!(result.expenses.len(), 1);
/// assert_eq!(result.expenses[0].title, "Training: Safety Induction");
/// ```
pub fn collect_training_costs(
    enrollments: &[EnrolledTraining],
    owner: &UserRef,
    incurred_on: NaiveDate,
) -> TrainingCostResult {
    let mut total_cost = Decimal::ZERO;
    let mut expenses = Vec::new();

    for enrolled in enrollments {
        let cost = enrolled.training.cost_or_zero();
        if cost <= Decimal::ZERO {
            continue;
        }

        total_cost += cost;
        expenses.push(Expense {
            id: Uuid::new_v4(),
            title: format!("Training: {}", enrolled.training.title),
            description: format!("Training cost for {}", owner.name),
            amount: cost,
            incurred_on,
            owner_user_id: owner.id.clone(),
        });
    }

    TrainingCostResult {
        total_cost,
        expenses,
    }
}
