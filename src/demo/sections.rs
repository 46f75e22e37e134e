//! The scripted demonstration sections.
//!
//! Each section builds its own employees from literal values and prints
//! what their operations return. The literals are fixed, so no section can
//! hit a validation or calculation error in practice; any that did would
//! propagate.

use std::io::Write;

use rust_decimal::Decimal;

use crate::config::LeavePolicy;
use crate::error::ModelResult;
use crate::leave::{CasualLeave, Leave, PaidLeave};
use crate::models::{
    ApprovalOutcome, ContractEmployee, Employee, EmployeeRecord, Payable, PermanentEmployee,
};

use super::Reporter;

/// A section body: prints its own title, then its walkthrough.
pub(crate) type Section<W> = fn(&mut Reporter<W>, &LeavePolicy) -> ModelResult<()>;

fn permanent(
    policy: &LeavePolicy,
    id: i32,
    name: &str,
    salary: i64,
    role: &str,
) -> ModelResult<PermanentEmployee> {
    PermanentEmployee::with_leave_policy(id, name, Decimal::from(salary), role, policy)
}

fn contract(
    id: i32,
    name: &str,
    hourly_rate: i64,
    hours_worked: i32,
) -> ModelResult<ContractEmployee> {
    ContractEmployee::new(id, name, Decimal::from(hourly_rate), hours_worked)
}

fn show<W: Write>(r: &mut Reporter<W>, employee: &impl Payable) -> ModelResult<()> {
    r.line(employee.display())?;
    r.line(employee.calculate_pay()?)
}

fn report_approval<W: Write>(r: &mut Reporter<W>, outcome: &ApprovalOutcome) -> ModelResult<()> {
    if let Some(submission) = outcome.submission() {
        r.line(submission)?;
    }
    r.line(outcome)
}

pub(crate) fn basic_object_creation<W: Write>(
    r: &mut Reporter<W>,
    _policy: &LeavePolicy,
) -> ModelResult<()> {
    r.line("Basic Object Creation")?;
    let mut employee = EmployeeRecord::new(1, "Ramprakash", Decimal::ZERO)?;
    r.line(format!("Employee ID: {}", employee.id()))?;
    r.line(format!("Employee Name: {}", employee.name()))?;

    employee.set_name("Rakshit")?;
    r.line(format!("Updated Employee: {}", employee))
}

pub(crate) fn encapsulation<W: Write>(
    r: &mut Reporter<W>,
    _policy: &LeavePolicy,
) -> ModelResult<()> {
    r.line("Encapsulation")?;
    let mut employee = EmployeeRecord::new(2, "Rakshit", Decimal::ZERO)?;
    r.line(&employee)?;

    // Invalid assignments are refused and the previous values survive.
    if let Err(err) = employee.set_name("   ") {
        r.line(format!("Rejected: {}", err))?;
    }
    if let Err(err) = employee.set_id(-2) {
        r.line(format!("Rejected: {}", err))?;
    }
    r.line(&employee)
}

pub(crate) fn abstraction<W: Write>(r: &mut Reporter<W>, policy: &LeavePolicy) -> ModelResult<()> {
    r.line("Abstraction")?;
    let staff: [Employee; 2] = [
        permanent(policy, 3, "Alice", 50000, "Employee")?.into(),
        contract(4, "Bob", 20, 40)?.into(),
    ];
    for employee in &staff {
        show(r, employee)?;
    }
    Ok(())
}

pub(crate) fn encapsulation_and_abstraction<W: Write>(
    r: &mut Reporter<W>,
    policy: &LeavePolicy,
) -> ModelResult<()> {
    r.line("Encapsulation and Abstraction")?;
    let staff: [Employee; 2] = [
        permanent(policy, 5, "Charlie", 60000, "Employee")?.into(),
        contract(6, "Diana", 25, 30)?.into(),
    ];
    for employee in &staff {
        show(r, employee)?;
    }
    Ok(())
}

fn polymorphism_walkthrough<W: Write>(
    r: &mut Reporter<W>,
    policy: &LeavePolicy,
) -> ModelResult<()> {
    // Through the shared interface only the standard calculation is reachable.
    let staff: [Employee; 2] = [
        permanent(policy, 7, "Eve", 70000, "Employee")?.into(),
        contract(8, "Frank", 30, 20)?.into(),
    ];
    for employee in &staff {
        show(r, employee)?;
    }

    let bob = permanent(policy, 9, "Bob", 25, "Employee")?;
    show(r, &bob)?;
    r.line(bob.calculate_pay_with_bonus(Decimal::from(2))?)?;
    let (bonus, deduction) = (Decimal::new(50, 1), Decimal::from(3));
    r.line(bob.calculate_pay_with_bonus_and_deduction(bonus, deduction)?)?;

    let alice = contract(10, "Alice", 20, 15)?;
    show(r, &alice)?;
    r.line(alice.calculate_pay_with_extra_hours(5)?)?;
    r.line(alice.calculate_pay_with_overtime_bonus(Decimal::new(100, 1), 2)?)
}

pub(crate) fn polymorphism<W: Write>(r: &mut Reporter<W>, policy: &LeavePolicy) -> ModelResult<()> {
    r.line("Polymorphism")?;
    polymorphism_walkthrough(r, policy)
}

pub(crate) fn encapsulation_abstraction_polymorphism<W: Write>(
    r: &mut Reporter<W>,
    policy: &LeavePolicy,
) -> ModelResult<()> {
    r.line("Encapsulation, Abstraction and Polymorphism")?;
    polymorphism_walkthrough(r, policy)
}

/// Literal values for one run of the inheritance walkthrough.
struct InheritanceCast {
    first_id: i32,
    names: [&'static str; 8],
    salaries: [i64; 7],
    contract_rate: i64,
    contract_hours: i32,
    employee_leave: [u32; 3],
    manager_leave: [u32; 3],
    approved_days: u32,
}

fn inheritance_walkthrough<W: Write>(
    r: &mut Reporter<W>,
    policy: &LeavePolicy,
    cast: &InheritanceCast,
) -> ModelResult<()> {
    let id = |offset: i32| cast.first_id + offset;
    let [first, second, manager_one, third, contractor, manager_two, fifth, sixth] = cast.names;
    let [s1, s2, s3, s4, s6, s7, s8] = cast.salaries;

    // Single level
    let emp1 = permanent(policy, id(0), first, s1, "Employee")?;
    show(r, &emp1)?;

    // Both leave capabilities on one employee, plus the shared cancellation.
    let [paid, casual, cancelled] = cast.employee_leave;
    let mut emp2 = permanent(policy, id(1), second, s2, "Employee")?;
    r.line(emp2.display())?;
    r.line(emp2.submit_paid_leave(paid))?;
    r.line(emp2.submit_casual_leave(casual))?;
    r.line(emp2.cancel_leave(cancelled))?;

    let [paid, casual, cancelled] = cast.manager_leave;
    let mut manager1 = permanent(policy, id(2), manager_one, s3, "Manager")?;
    r.line(manager1.display())?;
    r.line(manager1.submit_paid_leave(paid))?;
    r.line(manager1.submit_casual_leave(casual))?;
    r.line(manager1.cancel_leave(cancelled))?;

    // Hierarchical: two variants behind the shared type.
    let emp3: Employee = permanent(policy, id(3), third, s4, "Employee")?.into();
    let emp4: Employee =
        contract(id(4), contractor, cast.contract_rate, cast.contract_hours)?.into();
    show(r, &emp3)?;
    show(r, &emp4)?;

    let mut manager2 = permanent(policy, id(5), manager_two, s6, "Manager")?;
    r.line(manager2.display())?;
    let emp5 = permanent(policy, id(6), fifth, s7, "Employee")?;
    r.line(emp5.display())?;
    let emp6 = permanent(policy, id(7), sixth, s8, "Employee")?;
    r.line(emp6.display())?;

    manager2.add_subordinate(emp5);
    manager2.add_subordinate(emp6);

    let outcome = manager2.approve_leave(id(6), cast.approved_days);
    report_approval(r, &outcome)
}

pub(crate) fn inheritance<W: Write>(r: &mut Reporter<W>, policy: &LeavePolicy) -> ModelResult<()> {
    r.line("Inheritance")?;
    let cast = InheritanceCast {
        first_id: 101,
        names: ["Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Henry"],
        salaries: [70000, 75000, 90000, 68000, 95000, 72000, 71000],
        contract_rate: 60,
        contract_hours: 8,
        employee_leave: [2, 1, 1],
        manager_leave: [3, 1, 1],
        approved_days: 2,
    };
    inheritance_walkthrough(r, policy, &cast)
}

pub(crate) fn encapsulation_abstraction_polymorphism_inheritance<W: Write>(
    r: &mut Reporter<W>,
    policy: &LeavePolicy,
) -> ModelResult<()> {
    r.line("Encapsulation, Abstraction, Polymorphism and Inheritance")?;
    let cast = InheritanceCast {
        first_id: 201,
        names: ["Sophia", "Liam", "Olivia", "Noah", "Emma", "James", "Ava", "Lucas"],
        salaries: [82000, 87000, 98000, 79000, 102000, 76000, 74000],
        contract_rate: 75,
        contract_hours: 7,
        employee_leave: [3, 2, 2],
        manager_leave: [4, 2, 2],
        approved_days: 3,
    };
    inheritance_walkthrough(r, policy, &cast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;

    fn run_section(section: Section<Vec<u8>>, policy: &LeavePolicy) -> Vec<String> {
        let config = ReportConfig {
            width: 80,
            color: false,
        };
        let mut reporter = Reporter::new(Vec::new(), &config);
        section(&mut reporter, policy).unwrap();
        let bytes = reporter.into_inner().unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_basic_object_creation_output() {
        let lines = run_section(basic_object_creation, &LeavePolicy::default());
        assert_eq!(
            lines,
            vec![
                "Basic Object Creation",
                "Employee ID: 1",
                "Employee Name: Ramprakash",
                "Updated Employee: Id: 1, Name: Rakshit",
            ]
        );
    }

    #[test]
    fn test_encapsulation_reports_rejections() {
        let lines = run_section(encapsulation, &LeavePolicy::default());
        assert_eq!(lines[1], "Id: 2, Name: Rakshit");
        assert_eq!(
            lines[2],
            "Rejected: Invalid argument 'employee_name': Name cannot be empty"
        );
        assert_eq!(
            lines[3],
            "Rejected: Invalid argument 'employee_id': Id must be greater than 0"
        );
        assert_eq!(lines[4], "Id: 2, Name: Rakshit");
    }

    #[test]
    fn test_abstraction_output() {
        let lines = run_section(abstraction, &LeavePolicy::default());
        assert_eq!(
            lines,
            vec![
                "Abstraction",
                "Id: 3, Name: Alice",
                "Employee Alice earns a fixed salary of $50000",
                "Id: 4, Name: Bob",
                "Contract Employee Bob earns $800 for 40 hours of work at a rate of $20/hour",
            ]
        );
    }

    #[test]
    fn test_polymorphism_overloads() {
        let lines = run_section(polymorphism, &LeavePolicy::default());
        let expected = [
            "Employee Bob earns a salary of $25 with bonus, total: $27",
            "Employee Bob earns a salary of $25, bonus: $5, deduction: $3, total: $27",
            "Contract Employee Alice with 5 extra hours earned $400",
            "Employee Alice with overtime and bonus earned $510",
        ];
        for line in expected {
            assert!(lines.iter().any(|l| l == line), "missing line '{}'", line);
        }
    }

    #[test]
    fn test_inheritance_combined_output() {
        let lines = run_section(
            encapsulation_abstraction_polymorphism_inheritance,
            &LeavePolicy::default(),
        );
        let expected = vec![
            "Encapsulation, Abstraction, Polymorphism and Inheritance",
            "Id: 201, Name: Sophia",
            "Employee Sophia earns a fixed salary of $82000",
            "Id: 202, Name: Liam",
            "Liam has submitted 3 days of paid leave.",
            "Liam has submitted 2 days of casual leave.",
            "Liam has canceled 2 days of leave.",
            "Id: 203, Name: Olivia",
            "Olivia has submitted 4 days of paid leave.",
            "Olivia has submitted 2 days of casual leave.",
            "Olivia has canceled 2 days of leave.",
            "Id: 204, Name: Noah",
            "Employee Noah earns a fixed salary of $79000",
            "Id: 205, Name: Emma",
            "Contract Employee Emma earns $525 for 7 hours of work at a rate of $75/hour",
            "Id: 206, Name: James",
            "Id: 207, Name: Ava",
            "Id: 208, Name: Lucas",
            "Ava has submitted 3 days of paid leave.",
            "James approved 3 days of paid leave for Ava.",
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_small_policy_changes_leave_outcomes() {
        let policy = LeavePolicy {
            paid_leave_days: 1,
            casual_leave_days: 1,
        };
        let lines = run_section(inheritance, &policy);
        assert!(lines.contains(&"Not enough paid leaves for Bob.".to_string()));
        assert!(lines.contains(&"Bob has submitted 1 days of casual leave.".to_string()));
        assert!(lines.contains(&"Not enough paid leaves for Grace.".to_string()));
        assert!(lines.contains(&"Frank approved 2 days of paid leave for Grace.".to_string()));
    }
}
