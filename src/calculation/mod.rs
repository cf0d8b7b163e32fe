//! Calculation logic for the payroll document engine.
//!
//! This module contains the salary breakup calculation with its audit
//! trail, the payslip deduction policy, and the conversion of amounts into
//! words.

mod payslip;
mod salary;
mod words;

pub use payslip::{PayslipFigures, apply_payslip_deductions};
pub use salary::{MAX_AMOUNT, MONTHS_PER_YEAR, SalaryCalculator};
pub use words::amount_in_words;
