//! Contract employee model.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{
    hourly_pay, hourly_pay_with_extra_hours, hourly_pay_with_overtime_bonus,
};
use crate::error::ModelResult;
use crate::leave::LeaveCapabilities;

use super::employee::{validate_amount, validate_count};
use super::{EmployeeRecord, PayStatement, Payable};

/// An hourly contractor.
///
/// The shared salary field is seeded with the hourly rate at construction;
/// pay is always computed from `hourly_rate` and `hours_worked`. Contract
/// employees support neither paid nor casual leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractEmployee {
    record: EmployeeRecord,
    hourly_rate: Decimal,
    hours_worked: u32,
}

impl ContractEmployee {
    /// Creates a contract employee, failing with `InvalidArgument` when any
    /// base field is invalid or the rate or hours are negative.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        hourly_rate: Decimal,
        hours_worked: i32,
    ) -> ModelResult<Self> {
        Ok(Self {
            record: EmployeeRecord::new(id, name, hourly_rate)?,
            hourly_rate: validate_amount(
                "hourly_rate",
                hourly_rate,
                "Hourly Rate cannot be negative",
            )?,
            hours_worked: validate_count(
                "hours_worked",
                hours_worked,
                "Hours Worked cannot be negative",
            )?,
        })
    }

    /// Returns the mutable shared fields, for the validated base setters.
    pub fn record_mut(&mut self) -> &mut EmployeeRecord {
        &mut self.record
    }

    /// Returns the hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Returns the hours worked.
    pub fn hours_worked(&self) -> u32 {
        self.hours_worked
    }

    /// Sets the hourly rate; it must not be negative.
    pub fn set_hourly_rate(&mut self, hourly_rate: Decimal) -> ModelResult<()> {
        self.hourly_rate =
            validate_amount("hourly_rate", hourly_rate, "Hourly Rate cannot be negative")?;
        Ok(())
    }

    /// Sets the hours worked; it must not be negative.
    pub fn set_hours_worked(&mut self, hours_worked: i32) -> ModelResult<()> {
        self.hours_worked =
            validate_count("hours_worked", hours_worked, "Hours Worked cannot be negative")?;
        Ok(())
    }

    /// Returns pay over the stored hours plus `extra_hours`.
    pub fn calculate_pay_with_extra_hours(&self, extra_hours: i32) -> ModelResult<PayStatement> {
        hourly_pay_with_extra_hours(
            self.record.name(),
            self.hourly_rate,
            self.hours_worked,
            extra_hours,
        )
    }

    /// Returns pay at `hourly_rate + hourly_bonus` over the stored hours
    /// plus `overtime_hours`.
    pub fn calculate_pay_with_overtime_bonus(
        &self,
        hourly_bonus: Decimal,
        overtime_hours: i32,
    ) -> ModelResult<PayStatement> {
        hourly_pay_with_overtime_bonus(
            self.record.name(),
            self.hourly_rate,
            self.hours_worked,
            hourly_bonus,
            overtime_hours,
        )
    }
}

impl Payable for ContractEmployee {
    fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    fn calculate_pay(&self) -> ModelResult<PayStatement> {
        hourly_pay(self.record.name(), self.hourly_rate, self.hours_worked)
    }
}

impl LeaveCapabilities for ContractEmployee {}
