//! Fixed salary pay calculation.
//!
//! Pay for salaried employees: the stored salary, optionally adjusted by a
//! bonus and a deduction. The adjustments are not validated; a negative
//! bonus or a deduction larger than the salary produces the arithmetic
//! result as-is. A total outside the decimal range is a `CalculationError`.

use rust_decimal::Decimal;

use crate::error::{ModelError, ModelResult};
use crate::models::{PayBreakdown, PayStatement};

/// Returns the fixed salary statement. No computation is involved, so
/// this never fails.
///
/// # Examples
///
/// ```
/// use employee_model::calculation::fixed_salary;
/// use rust_decimal::Decimal;
///
/// let statement = fixed_salary("Alice", Decimal::from(50000))?;
/// assert_eq!(statement.total, Decimal::from(50000));
/// assert!(statement.to_string().contains("50000"));
/// # Ok::<(), employee_model::error::ModelError>(())
/// ```
pub fn fixed_salary(employee_name: &str, salary: Decimal) -> ModelResult<PayStatement> {
    Ok(PayStatement {
        employee_name: employee_name.to_string(),
        breakdown: PayBreakdown::FixedSalary { salary },
        total: salary,
    })
}

/// Returns `salary + bonus`.
pub fn salary_with_bonus(
    employee_name: &str,
    salary: Decimal,
    bonus: Decimal,
) -> ModelResult<PayStatement> {
    let total = salary
        .checked_add(bonus)
        .ok_or_else(|| ModelError::pay_overflow(employee_name))?;
    Ok(PayStatement {
        employee_name: employee_name.to_string(),
        breakdown: PayBreakdown::SalaryWithBonus { salary, bonus },
        total,
    })
}

/// Returns `salary + bonus - deduction`.
///
/// # Examples
///
/// ```
/// use employee_model::calculation::salary_with_bonus_and_deduction;
/// use rust_decimal::Decimal;
///
/// let statement = salary_with_bonus_and_deduction(
///     "Alice",
///     Decimal::from(50000),
///     Decimal::from(5000),
///     Decimal::from(2000),
/// )?;
/// assert_eq!(statement.total, Decimal::from(53000));
/// # Ok::<(), employee_model::error::ModelError>(())
/// ```
pub fn salary_with_bonus_and_deduction(
    employee_name: &str,
    salary: Decimal,
    bonus: Decimal,
    deduction: Decimal,
) -> ModelResult<PayStatement> {
    let total = salary
        .checked_add(bonus)
        .and_then(|gross| gross.checked_sub(deduction))
        .ok_or_else(|| ModelError::pay_overflow(employee_name))?;
    Ok(PayStatement {
        employee_name: employee_name.to_string(),
        breakdown: PayBreakdown::SalaryWithBonusAndDeduction {
            salary,
            bonus,
            deduction,
        },
        total,
    })
}
