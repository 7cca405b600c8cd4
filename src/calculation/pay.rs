//! Gross/net pay assembly.
//!
//! This module turns the gathered figures into the final component sheet:
//! gross = base salary + overtime pay + bonus, deductions = absence +
//! unpaid leave + training cost, net = gross - deductions.

use rust_decimal::Decimal;

use crate::config::NegativeNetPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::PayBreakdown;

/// The gathered inputs of a pay computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayInputs {
    /// Base monthly salary.
    pub base_salary: Decimal,
    /// Total overtime hours in the period.
    pub overtime_hours: Decimal,
    /// The employee's overtime rate per hour.
    pub overtime_rate: Decimal,
    /// Performance bonus for the period.
    pub bonus: Decimal,
    /// Number of absence days in the period.
    pub absence_days: u32,
    /// Unpaid leave days in the period.
    pub unpaid_leave_days: Decimal,
    /// The employee's daily rate.
    pub daily_rate: Decimal,
    /// Total training cost for the period.
    pub training_cost: Decimal,
}

/// Computes the pay component sheet from gathered inputs.
///
/// The arithmetic is exactly:
///
/// ```text
/// gross      = base_salary + overtime_hours * overtime_rate + bonus
/// deductions = absence_days * daily_rate
///            + unpaid_leave_days * daily_rate
///            + training_cost
/// net        = gross - deductions
/// ```
///
/// No floor is applied here; `net` may be negative. The configured
/// [`NegativeNetPolicy`] is applied separately via [`apply_net_policy`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{PayInputs, compute_pay};
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_pay(&PayInputs {
///     base_salary: Decimal::from(5000),
///     overtime_hours: Decimal::from(10),
///     overtime_rate: Decimal::from(20),
///     bonus: Decimal::from(300),
///     absence_days: 1,
///     unpaid_leave_days: Decimal::from(2),
///     daily_rate: Decimal::from(150),
///     training_cost: Decimal::from(100),
/// });
///
/// assert_eq!(breakdown.gross, Decimal::from(5500));
/// assert_eq!(breakdown.deductions, Decimal::from(550));
/// assert_eq!(breakdown.net, Decimal::from(4950));
/// ```
pub fn compute_pay(inputs: &PayInputs) -> PayBreakdown {
    let overtime_pay = inputs.overtime_hours * inputs.overtime_rate;
    let gross = inputs.base_salary + overtime_pay + inputs.bonus;

    let absence_deduction = Decimal::from(inputs.absence_days) * inputs.daily_rate;
    let unpaid_leave_deduction = inputs.unpaid_leave_days * inputs.daily_rate;
    let deductions = absence_deduction + unpaid_leave_deduction + inputs.training_cost;

    let net = gross - deductions;

    PayBreakdown {
        base_salary: inputs.base_salary,
        overtime_hours: inputs.overtime_hours,
        overtime_rate: inputs.overtime_rate,
        overtime_pay,
        bonus: inputs.bonus,
        absence_days: inputs.absence_days,
        absence_deduction,
        unpaid_leave_days: inputs.unpaid_leave_days,
        unpaid_leave_deduction,
        training_cost: inputs.training_cost,
        gross,
        deductions,
        net,
    }
}

/// Applies the configured negative-net policy to a computed net amount.
///
/// Returns the payable amount, which equals `net` except under
/// [`NegativeNetPolicy::FloorToZero`] when `net` is negative. Under
/// [`NegativeNetPolicy::Reject`] a negative net fails with
/// [`EngineError::NegativeNetPay`] before anything is written.
pub fn apply_net_policy(net: Decimal, policy: NegativeNetPolicy) -> EngineResult<Decimal> {
    if net >= Decimal::ZERO {
        return Ok(net);
    }
    match policy {
        NegativeNetPolicy::Allow => Ok(net),
        NegativeNetPolicy::FloorToZero => Ok(Decimal::ZERO),
        NegativeNetPolicy::Reject => Err(EngineError::NegativeNetPay { amount: net }),
    }
}
