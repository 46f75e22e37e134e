//! Pay calculation logic.
//!
//! This module contains the pure functions that turn stored employee
//! figures into [`PayStatement`](crate::models::PayStatement)s: fixed
//! salary with optional bonus and deduction, and hourly pay with optional
//! extra hours or an overtime bonus.

mod fixed_salary;
mod hourly_pay;

pub use fixed_salary::{fixed_salary, salary_with_bonus, salary_with_bonus_and_deduction};
pub use hourly_pay::{hourly_pay, hourly_pay_with_extra_hours, hourly_pay_with_overtime_bonus};
