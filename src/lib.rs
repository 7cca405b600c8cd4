//! Payroll computation and posting engine.
//!
//! This crate computes gross and net pay for an employee over a calendar-month
//! pay period from attendance, leave, performance, and training facts, and
//! commits the resulting payroll record, double-entry ledger posting, training
//! expenses, and payslip document as a single atomic unit of work.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
