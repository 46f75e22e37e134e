//! Core data models for the employee domain.
//!
//! This module contains the employee variants, their shared record and
//! interface, and the statement and outcome values their operations return.

mod contract;
mod employee;
mod outcome;
mod pay_statement;
mod permanent;

pub use contract::ContractEmployee;
pub use employee::{Employee, EmployeeRecord, Payable};
pub use outcome::{ApprovalOutcome, LeaveKind, LeaveOutcome};
pub use pay_statement::{PayBreakdown, PayStatement};
pub use permanent::PermanentEmployee;
