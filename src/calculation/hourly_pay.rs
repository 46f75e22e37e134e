//! Hourly pay calculation.
//!
//! Pay for contract employees: an hourly rate applied to hours worked.
//! The variants with extra or overtime hours are projections only; they
//! never change the stored hours. Hours are widened to `i64` before they
//! are summed; a total outside the decimal range is a `CalculationError`.

use rust_decimal::Decimal;

use crate::error::{ModelError, ModelResult};
use crate::models::{PayBreakdown, PayStatement};

fn checked_total(employee_name: &str, rate: Decimal, hours: i64) -> ModelResult<Decimal> {
    rate.checked_mul(Decimal::from(hours))
        .ok_or_else(|| ModelError::pay_overflow(employee_name))
}

/// Returns `hourly_rate * hours_worked`.
///
/// # Examples
///
/// ```
/// use employee_model::calculation::hourly_pay;
/// use rust_decimal::Decimal;
///
/// let statement = hourly_pay("Bob", Decimal::from(20), 40)?;
/// assert_eq!(statement.total, Decimal::from(800));
/// # Ok::<(), employee_model::error::ModelError>(())
/// ```
pub fn hourly_pay(
    employee_name: &str,
    hourly_rate: Decimal,
    hours_worked: u32,
) -> ModelResult<PayStatement> {
    let hours = i64::from(hours_worked);
    Ok(PayStatement {
        employee_name: employee_name.to_string(),
        breakdown: PayBreakdown::Hourly { hourly_rate, hours },
        total: checked_total(employee_name, hourly_rate, hours)?,
    })
}

/// Returns `hourly_rate * (hours_worked + extra_hours)`.
pub fn hourly_pay_with_extra_hours(
    employee_name: &str,
    hourly_rate: Decimal,
    hours_worked: u32,
    extra_hours: i32,
) -> ModelResult<PayStatement> {
    let total_hours = i64::from(hours_worked) + i64::from(extra_hours);
    Ok(PayStatement {
        employee_name: employee_name.to_string(),
        breakdown: PayBreakdown::ExtraHours {
            hourly_rate,
            extra_hours: i64::from(extra_hours),
            total_hours,
        },
        total: checked_total(employee_name, hourly_rate, total_hours)?,
    })
}

/// Returns `(hourly_rate + hourly_bonus) * (hours_worked + overtime_hours)`.
///
/// # Examples
///
/// ```
/// use employee_model::calculation::hourly_pay_with_overtime_bonus;
/// use rust_decimal::Decimal;
///
/// let statement =
///     hourly_pay_with_overtime_bonus("Bob", Decimal::from(20), 40, Decimal::from(5), 10)?;
/// assert_eq!(statement.total, Decimal::from(1250));
/// # Ok::<(), employee_model::error::ModelError>(())
/// ```
pub fn hourly_pay_with_overtime_bonus(
    employee_name: &str,
    hourly_rate: Decimal,
    hours_worked: u32,
    hourly_bonus: Decimal,
    overtime_hours: i32,
) -> ModelResult<PayStatement> {
    let effective_rate = hourly_rate
        .checked_add(hourly_bonus)
        .ok_or_else(|| ModelError::pay_overflow(employee_name))?;
    let total_hours = i64::from(hours_worked) + i64::from(overtime_hours);
    Ok(PayStatement {
        employee_name: employee_name.to_string(),
        breakdown: PayBreakdown::OvertimeWithBonus {
            effective_rate,
            total_hours,
        },
        total: checked_total(employee_name, effective_rate, total_hours)?,
    })
}
