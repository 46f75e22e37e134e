//! Employee model and the shared employee interface.
//!
//! [`EmployeeRecord`] holds the identity and salary fields common to every
//! employee and enforces their invariants. [`Payable`] is the behaviour
//! every variant shares, and [`Employee`] is the closed set of variants.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::leave::{CasualLeave, LeaveCapabilities, PaidLeave};

use super::{ContractEmployee, PayStatement, PermanentEmployee};

pub(crate) fn validate_id(id: i32) -> ModelResult<i32> {
    if id <= 0 {
        debug!(id, "Rejected employee id");
        return Err(ModelError::invalid_argument(
            "employee_id",
            "Id must be greater than 0",
        ));
    }
    Ok(id)
}

pub(crate) fn validate_name(name: String) -> ModelResult<String> {
    if name.trim().is_empty() {
        debug!("Rejected blank employee name");
        return Err(ModelError::invalid_argument(
            "employee_name",
            "Name cannot be empty",
        ));
    }
    Ok(name)
}

pub(crate) fn validate_amount(field: &str, value: Decimal, message: &str) -> ModelResult<Decimal> {
    if value < Decimal::ZERO {
        debug!(field, value = %value, "Rejected negative amount");
        return Err(ModelError::invalid_argument(field, message));
    }
    Ok(value)
}

pub(crate) fn validate_count(field: &str, value: i32, message: &str) -> ModelResult<u32> {
    u32::try_from(value).map_err(|_| {
        debug!(field, value, "Rejected negative count");
        ModelError::invalid_argument(field, message)
    })
}

/// Identity and salary fields shared by all employees.
///
/// Fields are private; every assignment goes through a validating setter
/// that leaves the previous value in place on failure.
///
/// # Examples
///
/// ```
/// use employee_model::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let mut record = EmployeeRecord::new(1, "Ramprakash", Decimal::ZERO)?;
/// record.set_name("Rakshit")?;
/// assert_eq!(record.to_string(), "Id: 1, Name: Rakshit");
///
/// assert!(record.set_name("   ").is_err());
/// assert_eq!(record.name(), "Rakshit");
/// # Ok::<(), employee_model::error::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    id: i32,
    name: String,
    salary: Decimal,
}

impl EmployeeRecord {
    /// Creates a record, failing with `InvalidArgument` when the id is not
    /// positive, the name is blank, or the salary is negative.
    pub fn new(id: i32, name: impl Into<String>, salary: Decimal) -> ModelResult<Self> {
        Ok(Self {
            id: validate_id(id)?,
            name: validate_name(name.into())?,
            salary: validate_amount("salary", salary, "Salary cannot be negative")?,
        })
    }

    /// Returns the employee id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the salary.
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Sets the id; it must be greater than zero.
    pub fn set_id(&mut self, id: i32) -> ModelResult<()> {
        self.id = validate_id(id)?;
        Ok(())
    }

    /// Sets the name; it must contain a non-whitespace character.
    pub fn set_name(&mut self, name: impl Into<String>) -> ModelResult<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    /// Sets the salary; it must not be negative.
    pub fn set_salary(&mut self, salary: Decimal) -> ModelResult<()> {
        self.salary = validate_amount("salary", salary, "Salary cannot be negative")?;
        Ok(())
    }
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id: {}, Name: {}", self.id, self.name)
    }
}

/// Behaviour shared by every employee variant.
///
/// Only `calculate_pay` has no default: each variant decides how its pay
/// is derived.
pub trait Payable {
    /// Returns the shared identity and salary fields.
    fn record(&self) -> &EmployeeRecord;

    /// Computes the variant's standard pay statement.
    ///
    /// Fails with `CalculationError` when the total exceeds the decimal range.
    fn calculate_pay(&self) -> ModelResult<PayStatement>;

    /// Returns the employee id.
    fn id(&self) -> i32 {
        self.record().id()
    }

    /// Returns the employee name.
    fn name(&self) -> &str {
        self.record().name()
    }

    /// Renders `"Id: {id}, Name: {name}"`.
    fn display(&self) -> String {
        self.record().to_string()
    }
}

/// Any employee, permanent or contract.
///
/// # Example
///
/// ```
/// use employee_model::models::{ContractEmployee, Employee, Payable};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::from(ContractEmployee::new(4, "Bob", Decimal::from(20), 40)?);
/// assert_eq!(employee.display(), "Id: 4, Name: Bob");
/// assert_eq!(employee.calculate_pay()?.total, Decimal::from(800));
/// # Ok::<(), employee_model::error::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Employee {
    /// A salaried employee with leave balances.
    Permanent(PermanentEmployee),
    /// An hourly contractor.
    Contract(ContractEmployee),
}

impl Employee {
    /// Returns the permanent employee, if this is one.
    pub fn as_permanent(&self) -> Option<&PermanentEmployee> {
        match self {
            Employee::Permanent(employee) => Some(employee),
            Employee::Contract(_) => None,
        }
    }

    /// Returns the mutable permanent employee, if this is one.
    pub fn as_permanent_mut(&mut self) -> Option<&mut PermanentEmployee> {
        match self {
            Employee::Permanent(employee) => Some(employee),
            Employee::Contract(_) => None,
        }
    }

    /// Returns the contract employee, if this is one.
    pub fn as_contract(&self) -> Option<&ContractEmployee> {
        match self {
            Employee::Contract(employee) => Some(employee),
            Employee::Permanent(_) => None,
        }
    }
}

impl Payable for Employee {
    fn record(&self) -> &EmployeeRecord {
        match self {
            Employee::Permanent(employee) => employee.record(),
            Employee::Contract(employee) => employee.record(),
        }
    }

    fn calculate_pay(&self) -> ModelResult<PayStatement> {
        match self {
            Employee::Permanent(employee) => employee.calculate_pay(),
            Employee::Contract(employee) => employee.calculate_pay(),
        }
    }
}

impl LeaveCapabilities for Employee {
    fn as_paid_leave_mut(&mut self) -> Option<&mut dyn PaidLeave> {
        match self {
            Employee::Permanent(employee) => Some(employee),
            Employee::Contract(_) => None,
        }
    }

    fn as_casual_leave_mut(&mut self) -> Option<&mut dyn CasualLeave> {
        match self {
            Employee::Permanent(employee) => Some(employee),
            Employee::Contract(_) => None,
        }
    }
}

impl From<PermanentEmployee> for Employee {
    fn from(employee: PermanentEmployee) -> Self {
        Employee::Permanent(employee)
    }
}

impl From<ContractEmployee> for Employee {
    fn from(employee: ContractEmployee) -> Self {
        Employee::Contract(employee)
    }
}
