//! Leave balance bookkeeping.

use tracing::debug;

use crate::models::{LeaveKind, LeaveOutcome};

/// Deducts `days` from `balance` when it is large enough.
///
/// An insufficient balance is left exactly as it was.
pub(crate) fn draw_down(
    balance: &mut u32,
    days: u32,
    kind: LeaveKind,
    employee_name: &str,
) -> LeaveOutcome {
    if *balance >= days {
        *balance -= days;
        debug!(employee = employee_name, %kind, days, remaining = *balance, "Leave submitted");
        LeaveOutcome::Submitted {
            employee_name: employee_name.to_string(),
            kind,
            days,
            remaining: *balance,
        }
    } else {
        debug!(
            employee = employee_name,
            %kind,
            days,
            available = *balance,
            "Insufficient leave balance"
        );
        LeaveOutcome::InsufficientBalance {
            employee_name: employee_name.to_string(),
            kind,
            requested: days,
            available: *balance,
        }
    }
}
