//! Permanent employee model.
//!
//! A permanent employee earns a fixed salary, holds independent paid and
//! casual leave balances, and, in the manager role, approves leave for the
//! subordinates it holds.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::calculation::{fixed_salary, salary_with_bonus, salary_with_bonus_and_deduction};
use crate::config::LeavePolicy;
use crate::error::ModelResult;
use crate::leave::{
    CasualLeave, Leave, LeaveCapabilities, MANAGER_ROLE, PaidLeave, draw_down, submit_on_behalf,
};

use super::employee::validate_count;
use super::{
    ApprovalOutcome, Employee, EmployeeRecord, LeaveKind, LeaveOutcome, PayStatement, Payable,
};

/// A salaried employee with leave balances and optional subordinates.
///
/// # Examples
///
/// ```
/// use employee_model::leave::PaidLeave;
/// use employee_model::models::PermanentEmployee;
/// use rust_decimal::Decimal;
///
/// let mut liam = PermanentEmployee::new(202, "Liam", Decimal::from(87000), "Employee")?;
/// let outcome = liam.submit_paid_leave(3);
/// assert_eq!(outcome.to_string(), "Liam has submitted 3 days of paid leave.");
/// assert_eq!(liam.paid_leave_count(), 12);
/// # Ok::<(), employee_model::error::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermanentEmployee {
    record: EmployeeRecord,
    role: String,
    paid_leave_count: u32,
    casual_leave_count: u32,
    subordinates: Vec<Employee>,
}

impl PermanentEmployee {
    /// Creates a permanent employee with the default leave allowances.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        salary: Decimal,
        role: impl Into<String>,
    ) -> ModelResult<Self> {
        Self::with_leave_policy(id, name, salary, role, &LeavePolicy::default())
    }

    /// Creates a permanent employee whose balances start from `policy`.
    pub fn with_leave_policy(
        id: i32,
        name: impl Into<String>,
        salary: Decimal,
        role: impl Into<String>,
        policy: &LeavePolicy,
    ) -> ModelResult<Self> {
        Ok(Self {
            record: EmployeeRecord::new(id, name, salary)?,
            role: role.into(),
            paid_leave_count: policy.paid_leave_days,
            casual_leave_count: policy.casual_leave_days,
            subordinates: Vec::new(),
        })
    }

    /// Returns the mutable shared fields, for the validated base setters.
    pub fn record_mut(&mut self) -> &mut EmployeeRecord {
        &mut self.record
    }

    /// Returns the role, e.g. "Manager" or "Employee".
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Sets the role. Any string is accepted.
    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    /// Returns true if this employee may approve leave.
    pub fn is_manager(&self) -> bool {
        self.role == MANAGER_ROLE
    }

    /// Sets the paid-leave balance; it must not be negative.
    pub fn set_paid_leave_count(&mut self, count: i32) -> ModelResult<()> {
        self.paid_leave_count =
            validate_count("paid_leave_count", count, "Paid Leave cannot be negative")?;
        Ok(())
    }

    /// Sets the casual-leave balance; it must not be negative.
    pub fn set_casual_leave_count(&mut self, count: i32) -> ModelResult<()> {
        self.casual_leave_count =
            validate_count("casual_leave_count", count, "Casual Leave cannot be negative")?;
        Ok(())
    }

    /// Returns `salary + bonus`.
    pub fn calculate_pay_with_bonus(&self, bonus: Decimal) -> ModelResult<PayStatement> {
        salary_with_bonus(self.record.name(), self.record.salary(), bonus)
    }

    /// Returns `salary + bonus - deduction`.
    pub fn calculate_pay_with_bonus_and_deduction(
        &self,
        bonus: Decimal,
        deduction: Decimal,
    ) -> ModelResult<PayStatement> {
        salary_with_bonus_and_deduction(self.record.name(), self.record.salary(), bonus, deduction)
    }

    /// Appends a subordinate. Order of addition is preserved.
    pub fn add_subordinate(&mut self, employee: impl Into<Employee>) {
        self.subordinates.push(employee.into());
    }

    /// Returns the subordinates in the order they were added.
    pub fn subordinates(&self) -> &[Employee] {
        &self.subordinates
    }

    /// Returns the first subordinate with the given id.
    pub fn subordinate(&self, employee_id: i32) -> Option<&Employee> {
        self.subordinates.iter().find(|e| e.id() == employee_id)
    }

    /// Approves `days` of leave for the subordinate with `employee_id`.
    ///
    /// Only managers may approve. The first subordinate with a matching id
    /// receives the request; paid leave is tried if supported, otherwise
    /// casual leave. Refusals are reported in the outcome and change
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_model::models::{LeaveKind, PermanentEmployee};
    /// use rust_decimal::Decimal;
    ///
    /// let mut james = PermanentEmployee::new(206, "James", Decimal::from(102000), "Manager")?;
    /// let ava = PermanentEmployee::new(207, "Ava", Decimal::from(76000), "Employee")?;
    /// james.add_subordinate(ava);
    ///
    /// let outcome = james.approve_leave(207, 3);
    /// assert_eq!(outcome.to_string(), "James approved 3 days of paid leave for Ava.");
    ///
    /// let outcome = james.approve_leave(999, 3);
    /// assert_eq!(outcome.to_string(), "James does not manage an employee with ID 999.");
    /// # Ok::<(), employee_model::error::ModelError>(())
    /// ```
    pub fn approve_leave(&mut self, employee_id: i32, days: u32) -> ApprovalOutcome {
        let manager_name = self.record.name().to_string();

        if !self.is_manager() {
            info!(
                manager = %manager_name,
                role = %self.role,
                "Leave approval refused: not a manager"
            );
            return ApprovalOutcome::Unauthorized { manager_name };
        }

        let Some(subordinate) = self.subordinates.iter_mut().find(|e| e.id() == employee_id) else {
            info!(
                manager = %manager_name,
                employee_id,
                "Leave approval refused: not a subordinate"
            );
            return ApprovalOutcome::NotManaged {
                manager_name,
                employee_id,
            };
        };

        submit_on_behalf(&manager_name, subordinate, days)
    }
}

impl Payable for PermanentEmployee {
    fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    fn calculate_pay(&self) -> ModelResult<PayStatement> {
        fixed_salary(self.record.name(), self.record.salary())
    }
}

impl Leave for PermanentEmployee {
    fn leave_holder(&self) -> &str {
        self.record.name()
    }
}

impl PaidLeave for PermanentEmployee {
    fn paid_leave_count(&self) -> u32 {
        self.paid_leave_count
    }

    fn submit_paid_leave(&mut self, days: u32) -> LeaveOutcome {
        draw_down(
            &mut self.paid_leave_count,
            days,
            LeaveKind::Paid,
            self.record.name(),
        )
    }
}

impl CasualLeave for PermanentEmployee {
    fn casual_leave_count(&self) -> u32 {
        self.casual_leave_count
    }

    fn submit_casual_leave(&mut self, days: u32) -> LeaveOutcome {
        draw_down(
            &mut self.casual_leave_count,
            days,
            LeaveKind::Casual,
            self.record.name(),
        )
    }
}

impl LeaveCapabilities for PermanentEmployee {
    fn as_paid_leave_mut(&mut self) -> Option<&mut dyn PaidLeave> {
        Some(self)
    }

    fn as_casual_leave_mut(&mut self) -> Option<&mut dyn CasualLeave> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::models::ContractEmployee;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(id: i32, name: &str, role: &str) -> PermanentEmployee {
        PermanentEmployee::new(id, name, dec("50000"), role).unwrap()
    }

    fn create_test_manager() -> PermanentEmployee {
        let mut manager = create_test_employee(206, "James", "Manager");
        manager.add_subordinate(create_test_employee(207, "Ava", "Employee"));
        manager.add_subordinate(create_test_employee(208, "Lucas", "Employee"));
        manager
    }

    fn paid_balance(manager: &PermanentEmployee, id: i32) -> u32 {
        manager
            .subordinate(id)
            .and_then(Employee::as_permanent)
            .map(|e| e.paid_leave_count())
            .unwrap()
    }

    fn casual_balance(manager: &PermanentEmployee, id: i32) -> u32 {
        manager
            .subordinate(id)
            .and_then(Employee::as_permanent)
            .map(|e| e.casual_leave_count())
            .unwrap()
    }

    #[test]
    fn test_new_employee_has_default_balances() {
        let employee = create_test_employee(1, "Sophia", "Employee");
        assert_eq!(employee.paid_leave_count(), 15);
        assert_eq!(employee.casual_leave_count(), 15);
        assert!(employee.subordinates().is_empty());
        assert_eq!(employee.role(), "Employee");
    }

    #[test]
    fn test_leave_policy_sets_starting_balances() {
        let policy = LeavePolicy {
            paid_leave_days: 20,
            casual_leave_days: 7,
        };
        let employee =
            PermanentEmployee::with_leave_policy(1, "Sophia", dec("1"), "Employee", &policy)
                .unwrap();
        assert_eq!(employee.paid_leave_count(), 20);
        assert_eq!(employee.casual_leave_count(), 7);
    }

    #[test]
    fn test_construction_validates_base_fields() {
        assert!(PermanentEmployee::new(0, "Sophia", dec("1"), "Employee").is_err());
        assert!(PermanentEmployee::new(1, " ", dec("1"), "Employee").is_err());
        assert!(PermanentEmployee::new(1, "Sophia", dec("-1"), "Employee").is_err());
    }

    #[test]
    fn test_calculate_pay_fixed_salary() {
        let employee = create_test_employee(3, "Alice", "Employee");
        let statement = employee.calculate_pay().unwrap();
        assert_eq!(statement.total, dec("50000"));
        assert!(statement.to_string().contains("50000"));
    }

    #[test]
    fn test_calculate_pay_with_bonus() {
        let employee = create_test_employee(3, "Alice", "Employee");
        let statement = employee.calculate_pay_with_bonus(dec("5000")).unwrap();
        assert_eq!(statement.total, dec("55000"));
    }

    #[test]
    fn test_pay_at_maximum_salary() {
        let employee = PermanentEmployee::new(1, "Alice", Decimal::MAX, "Employee").unwrap();
        assert_eq!(employee.calculate_pay().unwrap().total, Decimal::MAX);

        let err = employee.calculate_pay_with_bonus(Decimal::ONE).unwrap_err();
        assert!(matches!(err, ModelError::CalculationError { .. }));
        assert!(
            employee
                .calculate_pay_with_bonus_and_deduction(Decimal::ONE, Decimal::ZERO)
                .is_err()
        );
    }

    #[test]
    fn test_calculate_pay_with_bonus_and_deduction() {
        let employee = create_test_employee(3, "Alice", "Employee");
        let statement = employee
            .calculate_pay_with_bonus_and_deduction(dec("5000"), dec("2000"))
            .unwrap();
        assert_eq!(statement.total, dec("53000"));
    }

    #[test]
    fn test_paid_leave_until_exhausted() {
        let mut employee = create_test_employee(1, "Sophia", "Employee");

        assert!(employee.submit_paid_leave(5).is_submitted());
        assert_eq!(employee.paid_leave_count(), 10);
        assert!(employee.submit_paid_leave(5).is_submitted());
        assert!(employee.submit_paid_leave(5).is_submitted());
        assert_eq!(employee.paid_leave_count(), 0);

        let outcome = employee.submit_paid_leave(5);
        assert_eq!(outcome.to_string(), "Not enough paid leaves for Sophia.");
        assert_eq!(employee.paid_leave_count(), 0);
        assert_eq!(employee.casual_leave_count(), 15);
    }

    #[test]
    fn test_casual_leave_is_independent_of_paid() {
        let mut employee = create_test_employee(1, "Liam", "Employee");
        let outcome = employee.submit_casual_leave(2);
        assert_eq!(outcome.to_string(), "Liam has submitted 2 days of casual leave.");
        assert_eq!(employee.casual_leave_count(), 13);
        assert_eq!(employee.paid_leave_count(), 15);
    }

    /// Cancellation is reported but never restores a balance.
    #[test]
    fn test_cancel_leave_does_not_restore_balance() {
        let mut employee = create_test_employee(1, "Liam", "Employee");
        employee.submit_paid_leave(3);
        employee.submit_casual_leave(2);

        let outcome = employee.cancel_leave(2);
        assert_eq!(outcome.to_string(), "Liam has canceled 2 days of leave.");
        assert_eq!(employee.paid_leave_count(), 12);
        assert_eq!(employee.casual_leave_count(), 13);
    }

    #[test]
    fn test_leave_count_setters_validate() {
        let mut employee = create_test_employee(1, "Liam", "Employee");
        let err = employee.set_paid_leave_count(-1).unwrap_err();
        assert!(err.to_string().contains("Paid Leave cannot be negative"));
        let err = employee.set_casual_leave_count(-1).unwrap_err();
        assert!(err.to_string().contains("Casual Leave cannot be negative"));
        assert_eq!(employee.paid_leave_count(), 15);

        employee.set_paid_leave_count(2).unwrap();
        employee.set_casual_leave_count(0).unwrap();
        assert_eq!(employee.paid_leave_count(), 2);
        assert_eq!(employee.casual_leave_count(), 0);
    }

    #[test]
    fn test_record_mut_setters_validate() {
        let mut employee = create_test_employee(1, "Liam", "Employee");
        assert!(employee.record_mut().set_name("").is_err());
        employee.record_mut().set_salary(dec("60000")).unwrap();
        assert_eq!(employee.name(), "Liam");
        assert_eq!(employee.calculate_pay().unwrap().total, dec("60000"));
    }

    #[test]
    fn test_manager_approves_paid_leave() {
        let mut manager = create_test_manager();
        let outcome = manager.approve_leave(207, 3);

        assert_eq!(
            outcome.to_string(),
            "James approved 3 days of paid leave for Ava."
        );
        assert_eq!(
            outcome.submission().unwrap().to_string(),
            "Ava has submitted 3 days of paid leave."
        );
        assert_eq!(paid_balance(&manager, 207), 12);
        assert_eq!(paid_balance(&manager, 208), 15);
    }

    #[test]
    fn test_non_manager_cannot_approve() {
        let mut employee = create_test_employee(202, "Liam", "Employee");
        employee.add_subordinate(create_test_employee(207, "Ava", "Employee"));

        let outcome = employee.approve_leave(207, 3);
        assert_eq!(
            outcome,
            ApprovalOutcome::Unauthorized {
                manager_name: "Liam".to_string()
            }
        );
        assert_eq!(paid_balance(&employee, 207), 15);
        assert_eq!(casual_balance(&employee, 207), 15);
    }

    #[test]
    fn test_role_comparison_is_exact() {
        let mut employee = create_test_employee(202, "Liam", "manager");
        employee.add_subordinate(create_test_employee(207, "Ava", "Employee"));
        assert!(!employee.is_manager());
        assert!(!employee.approve_leave(207, 1).is_approved());

        employee.set_role("Manager");
        assert!(employee.approve_leave(207, 1).is_approved());
    }

    #[test]
    fn test_unknown_subordinate_not_managed() {
        let mut manager = create_test_manager();
        let outcome = manager.approve_leave(999, 3);

        assert_eq!(
            outcome.to_string(),
            "James does not manage an employee with ID 999."
        );
        assert_eq!(paid_balance(&manager, 207), 15);
        assert_eq!(paid_balance(&manager, 208), 15);
    }

    #[test]
    fn test_paid_leave_preferred_even_when_insufficient() {
        let mut manager = create_test_manager();
        let outcome = manager.approve_leave(208, 20);

        match &outcome {
            ApprovalOutcome::Approved { kind, submission, .. } => {
                assert_eq!(*kind, LeaveKind::Paid);
                assert!(!submission.is_submitted());
            }
            other => panic!("expected Approved, got {:?}", other),
        }
        assert_eq!(paid_balance(&manager, 208), 15);
        assert_eq!(casual_balance(&manager, 208), 15);
    }

    #[test]
    fn test_first_matching_subordinate_wins() {
        let mut manager = create_test_employee(206, "James", "Manager");
        manager.add_subordinate(create_test_employee(207, "Ava", "Employee"));
        manager.add_subordinate(create_test_employee(207, "Ava Clone", "Employee"));

        manager.approve_leave(207, 4);
        let balances: Vec<u32> = manager
            .subordinates()
            .iter()
            .filter_map(Employee::as_permanent)
            .map(|e| e.paid_leave_count())
            .collect();
        assert_eq!(balances, vec![11, 15]);
    }

    #[test]
    fn test_contract_subordinate_cannot_submit_leave() {
        let mut manager = create_test_manager();
        manager.add_subordinate(ContractEmployee::new(209, "Emma", dec("75"), 7).unwrap());

        let outcome = manager.approve_leave(209, 1);
        assert_eq!(
            outcome.to_string(),
            "Emma cannot submit leave through the available interfaces."
        );
    }
}
