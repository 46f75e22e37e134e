//! Leave capabilities.
//!
//! Paid and casual leave are independent, optional capabilities. A variant
//! opts in by implementing [`PaidLeave`] and/or [`CasualLeave`], and
//! advertises what it supports through [`LeaveCapabilities`] so callers can
//! dispatch without knowing the concrete type.

mod approval;
mod balance;

pub use approval::{MANAGER_ROLE, submit_on_behalf};
pub(crate) use balance::draw_down;

use crate::models::{LeaveOutcome, Payable};

/// Behaviour common to every kind of leave.
pub trait Leave {
    /// Name used in leave messages.
    fn leave_holder(&self) -> &str;

    /// Records a cancellation of `days` days of leave.
    ///
    /// No balance is restored: the cancellation is reported only.
    fn cancel_leave(&self, days: u32) -> LeaveOutcome {
        LeaveOutcome::Cancelled {
            employee_name: self.leave_holder().to_string(),
            days,
        }
    }
}

/// The paid-leave capability.
pub trait PaidLeave: Leave {
    /// Remaining paid-leave days.
    fn paid_leave_count(&self) -> u32;

    /// Draws `days` from the paid-leave balance if it covers them.
    fn submit_paid_leave(&mut self, days: u32) -> LeaveOutcome;
}

/// The casual-leave capability.
pub trait CasualLeave: Leave {
    /// Remaining casual-leave days.
    fn casual_leave_count(&self) -> u32;

    /// Draws `days` from the casual-leave balance if it covers them.
    fn submit_casual_leave(&mut self, days: u32) -> LeaveOutcome;
}

/// Runtime discovery of the leave capabilities an employee supports.
///
/// Both methods default to `None`, so a type only overrides the ones it
/// actually implements.
pub trait LeaveCapabilities: Payable {
    /// Returns the paid-leave capability, if supported.
    fn as_paid_leave_mut(&mut self) -> Option<&mut dyn PaidLeave> {
        None
    }

    /// Returns the casual-leave capability, if supported.
    fn as_casual_leave_mut(&mut self) -> Option<&mut dyn CasualLeave> {
        None
    }
}
