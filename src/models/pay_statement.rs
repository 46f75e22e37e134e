//! Pay statement model.
//!
//! A [`PayStatement`] is the result of every pay calculation: the numeric
//! total plus the inputs that produced it, rendered through `Display` as
//! the one-line statement printed by the demonstration.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// How a pay total was derived.
///
/// Each variant corresponds to one pay calculation entry point and keeps
/// the figures needed to render its statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum PayBreakdown {
    /// Fixed salary, no adjustments.
    FixedSalary {
        /// The stored salary.
        salary: Decimal,
    },
    /// Fixed salary plus a bonus.
    SalaryWithBonus {
        /// The stored salary.
        salary: Decimal,
        /// The bonus added to the salary.
        bonus: Decimal,
    },
    /// Fixed salary plus a bonus, minus a deduction.
    SalaryWithBonusAndDeduction {
        /// The stored salary.
        salary: Decimal,
        /// The bonus added to the salary.
        bonus: Decimal,
        /// The amount deducted.
        deduction: Decimal,
    },
    /// Hourly rate times hours worked.
    Hourly {
        /// The stored hourly rate.
        hourly_rate: Decimal,
        /// The stored hours worked.
        hours: i64,
    },
    /// Hourly rate over hours worked plus extra hours.
    ExtraHours {
        /// The stored hourly rate.
        hourly_rate: Decimal,
        /// The extra hours requested.
        extra_hours: i64,
        /// Hours worked plus extra hours.
        total_hours: i64,
    },
    /// Boosted hourly rate over hours worked plus overtime.
    OvertimeWithBonus {
        /// The stored hourly rate plus the hourly bonus.
        effective_rate: Decimal,
        /// Hours worked plus overtime hours.
        total_hours: i64,
    },
}

/// A single pay calculation result for one employee.
///
/// # Example
///
/// ```
/// use employee_model::models::{PayBreakdown, PayStatement};
/// use rust_decimal::Decimal;
///
/// let statement = PayStatement {
///     employee_name: "Alice".to_string(),
///     breakdown: PayBreakdown::FixedSalary { salary: Decimal::from(50000) },
///     total: Decimal::from(50000),
/// };
/// assert_eq!(statement.to_string(), "Employee Alice earns a fixed salary of $50000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayStatement {
    /// Name of the employee being paid.
    pub employee_name: String,
    /// The inputs the total was computed from.
    pub breakdown: PayBreakdown,
    /// The resulting pay.
    pub total: Decimal,
}

impl fmt::Display for PayStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.employee_name;
        let total = self.total.normalize();
        match &self.breakdown {
            PayBreakdown::FixedSalary { salary } => {
                write!(
                    f,
                    "Employee {} earns a fixed salary of ${}",
                    name,
                    salary.normalize()
                )
            }
            PayBreakdown::SalaryWithBonus { salary, .. } => write!(
                f,
                "Employee {} earns a salary of ${} with bonus, total: ${}",
                name,
                salary.normalize(),
                total
            ),
            PayBreakdown::SalaryWithBonusAndDeduction {
                salary,
                bonus,
                deduction,
            } => write!(
                f,
                "Employee {} earns a salary of ${}, bonus: ${}, deduction: ${}, total: ${}",
                name,
                salary.normalize(),
                bonus.normalize(),
                deduction.normalize(),
                total
            ),
            PayBreakdown::Hourly { hourly_rate, hours } => write!(
                f,
                "Contract Employee {} earns ${} for {} hours of work at a rate of ${}/hour",
                name,
                total,
                hours,
                hourly_rate.normalize()
            ),
            PayBreakdown::ExtraHours { extra_hours, .. } => write!(
                f,
                "Contract Employee {} with {} extra hours earned ${}",
                name, extra_hours, total
            ),
            PayBreakdown::OvertimeWithBonus { .. } => write!(
                f,
                "Employee {} with overtime and bonus earned ${}",
                name, total
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn statement(breakdown: PayBreakdown, total: &str) -> PayStatement {
        PayStatement {
            employee_name: "Sophia".to_string(),
            breakdown,
            total: dec(total),
        }
    }

    #[test]
    fn test_display_salary_with_bonus() {
        let s = statement(
            PayBreakdown::SalaryWithBonus {
                salary: dec("50000"),
                bonus: dec("5000"),
            },
            "55000",
        );
        assert_eq!(
            s.to_string(),
            "Employee Sophia earns a salary of $50000 with bonus, total: $55000"
        );
    }

    #[test]
    fn test_display_salary_with_bonus_and_deduction() {
        let s = statement(
            PayBreakdown::SalaryWithBonusAndDeduction {
                salary: dec("50000"),
                bonus: dec("5000"),
                deduction: dec("2000"),
            },
            "53000",
        );
        assert_eq!(
            s.to_string(),
            "Employee Sophia earns a salary of $50000, bonus: $5000, deduction: $2000, total: $53000"
        );
    }

    #[test]
    fn test_display_hourly_normalizes_trailing_zeros() {
        let s = statement(
            PayBreakdown::Hourly {
                hourly_rate: dec("20.00"),
                hours: 40,
            },
            "800.00",
        );
        assert_eq!(
            s.to_string(),
            "Contract Employee Sophia earns $800 for 40 hours of work at a rate of $20/hour"
        );
    }

    #[test]
    fn test_display_extra_hours() {
        let s = statement(
            PayBreakdown::ExtraHours {
                hourly_rate: dec("20"),
                extra_hours: 5,
                total_hours: 45,
            },
            "900",
        );
        assert_eq!(
            s.to_string(),
            "Contract Employee Sophia with 5 extra hours earned $900"
        );
    }

    #[test]
    fn test_display_overtime_with_bonus() {
        let s = statement(
            PayBreakdown::OvertimeWithBonus {
                effective_rate: dec("25"),
                total_hours: 50,
            },
            "1250",
        );
        assert_eq!(
            s.to_string(),
            "Employee Sophia with overtime and bonus earned $1250"
        );
    }

    #[test]
    fn test_serialize_tags_breakdown_basis() {
        let s = statement(PayBreakdown::FixedSalary { salary: dec("82000") }, "82000");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["breakdown"]["basis"], "fixed_salary");
        assert_eq!(json["employee_name"], "Sophia");
    }
}
