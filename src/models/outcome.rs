//! Outcomes of leave operations.
//!
//! Business-rule results are values, not errors: a refused approval or an
//! exhausted balance is reported to the caller through these types and
//! leaves all balances untouched.

use std::fmt;

use serde::Serialize;

/// The kind of leave being drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Paid leave.
    Paid,
    /// Casual leave.
    Casual,
}

impl fmt::Display for LeaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveKind::Paid => f.write_str("paid"),
            LeaveKind::Casual => f.write_str("casual"),
        }
    }
}

/// The result of submitting or cancelling leave for one employee.
///
/// # Example
///
/// ```
/// use employee_model::models::{LeaveKind, LeaveOutcome};
///
/// let outcome = LeaveOutcome::Submitted {
///     employee_name: "Liam".to_string(),
///     kind: LeaveKind::Paid,
///     days: 3,
///     remaining: 12,
/// };
/// assert!(outcome.is_submitted());
/// assert_eq!(outcome.to_string(), "Liam has submitted 3 days of paid leave.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LeaveOutcome {
    /// The balance covered the request and was reduced.
    Submitted {
        /// The employee who took leave.
        employee_name: String,
        /// The balance that was drawn from.
        kind: LeaveKind,
        /// Days taken.
        days: u32,
        /// Balance left after the submission.
        remaining: u32,
    },
    /// The balance was smaller than the request; nothing changed.
    InsufficientBalance {
        /// The employee who asked for leave.
        employee_name: String,
        /// The balance that was checked.
        kind: LeaveKind,
        /// Days asked for.
        requested: u32,
        /// Balance at the time of the request.
        available: u32,
    },
    /// A cancellation was recorded. Balances are not restored.
    Cancelled {
        /// The employee cancelling leave.
        employee_name: String,
        /// Days cancelled.
        days: u32,
    },
}

impl LeaveOutcome {
    /// Returns true if leave was actually deducted.
    pub fn is_submitted(&self) -> bool {
        matches!(self, LeaveOutcome::Submitted { .. })
    }
}

impl fmt::Display for LeaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveOutcome::Submitted {
                employee_name,
                kind,
                days,
                ..
            } => write!(
                f,
                "{} has submitted {} days of {} leave.",
                employee_name, days, kind
            ),
            LeaveOutcome::InsufficientBalance {
                employee_name,
                kind,
                ..
            } => write!(f, "Not enough {} leaves for {}.", kind, employee_name),
            LeaveOutcome::Cancelled {
                employee_name,
                days,
            } => write!(f, "{} has canceled {} days of leave.", employee_name, days),
        }
    }
}

/// The result of a manager approving leave for a subordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApprovalOutcome {
    /// The request was forwarded to the subordinate's leave balance.
    ///
    /// `submission` records whether the balance actually covered it; an
    /// approval with an insufficient balance is still an approval.
    Approved {
        /// The approving manager.
        manager_name: String,
        /// The subordinate whose leave was submitted.
        subordinate_name: String,
        /// The balance that was drawn from.
        kind: LeaveKind,
        /// Days approved.
        days: u32,
        /// The subordinate's submission result.
        submission: LeaveOutcome,
    },
    /// The acting employee does not hold the manager role.
    Unauthorized {
        /// The employee who attempted the approval.
        manager_name: String,
    },
    /// No subordinate with the requested id exists.
    NotManaged {
        /// The approving manager.
        manager_name: String,
        /// The id that was looked up.
        employee_id: i32,
    },
    /// The subordinate supports neither paid nor casual leave.
    Unsupported {
        /// The subordinate that was found.
        subordinate_name: String,
    },
}

impl ApprovalOutcome {
    /// Returns true if the request reached a leave balance.
    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalOutcome::Approved { .. })
    }

    /// Returns the subordinate's submission result, if one was attempted.
    pub fn submission(&self) -> Option<&LeaveOutcome> {
        match self {
            ApprovalOutcome::Approved { submission, .. } => Some(submission),
            _ => None,
        }
    }
}

impl fmt::Display for ApprovalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalOutcome::Approved {
                manager_name,
                subordinate_name,
                kind,
                days,
                ..
            } => write!(
                f,
                "{} approved {} days of {} leave for {}.",
                manager_name, days, kind, subordinate_name
            ),
            ApprovalOutcome::Unauthorized { manager_name } => {
                write!(f, "{} is not authorized to approve leave.", manager_name)
            }
            ApprovalOutcome::NotManaged {
                manager_name,
                employee_id,
            } => write!(
                f,
                "{} does not manage an employee with ID {}.",
                manager_name, employee_id
            ),
            ApprovalOutcome::Unsupported { subordinate_name } => write!(
                f,
                "{} cannot submit leave through the available interfaces.",
                subordinate_name
            ),
        }
    }
}
