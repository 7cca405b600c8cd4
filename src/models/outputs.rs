//! Output records produced by a payroll run.
//!
//! This module contains the [`PayrollRecord`], [`LedgerPosting`],
//! [`Expense`], and [`Payslip`] types written by a successful run, the
//! [`PayBreakdown`] component sheet, and the [`PayrollRun`] write batch
//! that the unit of work commits atomically.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Employee, PayPeriod};

/// Account code debited by a payroll posting (payroll expense).
pub const PAYROLL_EXPENSE_ACCOUNT: &str = "6000";

/// Account code credited by a payroll posting (bank/cash).
pub const BANK_CASH_ACCOUNT: &str = "1000";

/// Transaction kind recorded on payroll ledger postings.
pub const PAYROLL_TRANSACTION_KIND: &str = "payroll";

/// A cash account row from the account store.
///
/// Ledger postings must be tied to the cash account resolved by its
/// configured name; a missing account aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashAccount {
    /// Unique identifier of the account.
    pub id: String,
    /// Display name of the account (e.g. "Cash & Cash Equivalents").
    pub name: String,
}

/// The payroll record created once per successful run.
///
/// Immutable once created; there is no update or void path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier of the record.
    pub id: Uuid,
    /// The employee the payroll was processed for.
    pub employee_id: String,
    /// The pay period covered.
    pub period: PayPeriod,
    /// The final net amount paid.
    pub amount: Decimal,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// A double-entry ledger posting instruction for a payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerPosting {
    /// Unique identifier of the posting.
    pub id: Uuid,
    /// Transaction kind; always [`PAYROLL_TRANSACTION_KIND`].
    pub kind: String,
    /// The posted amount (net pay).
    pub amount: Decimal,
    /// Human-readable description referencing employee and period.
    pub description: String,
    /// Debited account code; always [`PAYROLL_EXPENSE_ACCOUNT`].
    pub debit_account: String,
    /// Credited account code; always [`BANK_CASH_ACCOUNT`].
    pub credit_account: String,
    /// The cash account the posting is tied to.
    pub cash_account_id: String,
    /// The date the posting applies to.
    pub posted_on: NaiveDate,
}

impl LedgerPosting {
    /// Builds the payroll posting for a run.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{
    ///     CashAccount, LedgerPosting, PayPeriod, BANK_CASH_ACCOUNT, PAYROLL_EXPENSE_ACCOUNT,
    /// };
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let account = CashAccount {
    ///     id: "acc_cash".to_string(),
    ///     name: "Cash & Cash Equivalents".to_string(),
    /// };
    /// let period: PayPeriod = "2024-03".parse().unwrap();
    /// let posting = LedgerPosting::for_payroll(
    ///     "Jane Doe",
    ///     &period,
    ///     Decimal::new(495000, 2),
    ///     &account,
    ///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    /// );
    ///
    /// assert_eq!(posting.debit_account, PAYROLL_EXPENSE_ACCOUNT);
    /// assert_eq!(posting.credit_account, BANK_CASH_ACCOUNT);
    /// assert_eq!(posting.description, "Payroll for Jane Doe - 2024-03");
    /// ```
    pub fn for_payroll(
        employee_name: &str,
        period: &PayPeriod,
        net: Decimal,
        cash_account: &CashAccount,
        posted_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: PAYROLL_TRANSACTION_KIND.to_string(),
            amount: net,
            description: format!("Payroll for {employee_name} - {period}"),
            debit_account: PAYROLL_EXPENSE_ACCOUNT.to_string(),
            credit_account: BANK_CASH_ACCOUNT.to_string(),
            cash_account_id: cash_account.id.clone(),
            posted_on,
        }
    }
}

/// An expense record produced for a qualifying training enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier of the expense.
    pub id: Uuid,
    /// Title of the expense ("Training: {training title}").
    pub title: String,
    /// Description referencing the employee's user name.
    pub description: String,
    /// The expense amount (the training's per-participant cost).
    pub amount: Decimal,
    /// The date the expense was incurred.
    pub incurred_on: NaiveDate,
    /// The user the expense is attributed to.
    pub owner_user_id: String,
}

/// Metadata for a stored payslip document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Unique identifier of the document.
    pub id: Uuid,
    /// Document title.
    pub title: String,
    /// Document description.
    pub description: String,
    /// Storage path of the artifact.
    pub path: String,
    /// The user that owns the document.
    pub owner_user_id: String,
}

/// A rendered payslip: the text artifact plus its document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Deterministic storage path: `payslips/{employee_id}_{period}.txt`.
    pub path: String,
    /// The payslip text body.
    pub body: String,
    /// The document metadata record referencing [`Payslip::path`].
    pub document: DocumentMeta,
}

impl Payslip {
    /// The deterministic artifact path for an employee and period.
    pub fn storage_path(employee_id: &str, period: &PayPeriod) -> String {
        format!("payslips/{employee_id}_{period}.txt")
    }

    /// Renders the payslip for an employee, period, and net amount.
    pub fn render(employee: &Employee, period: &PayPeriod, net: Decimal) -> Self {
        let path = Self::storage_path(&employee.id, period);
        let name = &employee.user.name;
        let body = format!("Payslip for {name}\nPeriod: {period}\nNet Pay: {net}\n");
        let document = DocumentMeta {
            id: Uuid::new_v4(),
            title: format!("Payslip - {name} - {period}"),
            description: format!("Payslip for {name} for period {period}"),
            path: path.clone(),
            owner_user_id: employee.user.id.clone(),
        };
        Self {
            path,
            body,
            document,
        }
    }
}

/// The component sheet of a pay computation.
///
/// `net` here is always the raw `gross - deductions`; when a negative-net
/// policy adjusts the payable amount, the adjustment shows up on the
/// [`PayrollRecord`] and ledger posting, not on this sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Base monthly salary.
    pub base_salary: Decimal,
    /// Total overtime hours in the period.
    pub overtime_hours: Decimal,
    /// The employee's overtime rate.
    pub overtime_rate: Decimal,
    /// Overtime pay (hours x rate).
    pub overtime_pay: Decimal,
    /// Performance bonus for the period.
    pub bonus: Decimal,
    /// Number of absence days in the period.
    pub absence_days: u32,
    /// Absence deduction (days x daily rate).
    pub absence_deduction: Decimal,
    /// Unpaid leave days in the period.
    pub unpaid_leave_days: Decimal,
    /// Unpaid leave deduction (days x daily rate).
    pub unpaid_leave_deduction: Decimal,
    /// Total training cost deducted.
    pub training_cost: Decimal,
    /// Gross pay: base salary + overtime pay + bonus.
    pub gross: Decimal,
    /// Total deductions: absence + unpaid leave + training.
    pub deductions: Decimal,
    /// Net pay: gross - deductions.
    pub net: Decimal,
}

/// The complete write batch of one payroll run.
///
/// The unit of work persists the whole batch or nothing; partial writes
/// are never observable.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRun {
    /// The payroll record.
    pub record: PayrollRecord,
    /// The ledger posting.
    pub posting: LedgerPosting,
    /// One expense per qualifying training enrollment.
    pub expenses: Vec<Expense>,
    /// The rendered payslip artifact and its metadata.
    pub payslip: Payslip,
}
