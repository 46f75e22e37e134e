//! Leave approval on behalf of a subordinate.

use tracing::debug;

use crate::models::{ApprovalOutcome, LeaveKind};

use super::LeaveCapabilities;

/// The role that may approve leave for subordinates.
pub const MANAGER_ROLE: &str = "Manager";

/// Submits `days` of leave for `subordinate`, approved by `manager_name`.
///
/// Exactly one capability is tried. Paid leave wins whenever the
/// subordinate supports it, even if its balance turns out to be too small;
/// casual leave is only used when paid leave is not supported at all.
///
/// The caller is responsible for checking that the approver is a manager
/// and that the subordinate belongs to them.
pub fn submit_on_behalf<T>(manager_name: &str, subordinate: &mut T, days: u32) -> ApprovalOutcome
where
    T: LeaveCapabilities + ?Sized,
{
    let subordinate_name = subordinate.name().to_string();

    if let Some(paid) = subordinate.as_paid_leave_mut() {
        let submission = paid.submit_paid_leave(days);
        debug!(
            manager = manager_name,
            subordinate = %subordinate_name,
            days,
            "Approved paid leave"
        );
        return ApprovalOutcome::Approved {
            manager_name: manager_name.to_string(),
            subordinate_name,
            kind: LeaveKind::Paid,
            days,
            submission,
        };
    }

    if let Some(casual) = subordinate.as_casual_leave_mut() {
        let submission = casual.submit_casual_leave(days);
        debug!(
            manager = manager_name,
            subordinate = %subordinate_name,
            days,
            "Approved casual leave"
        );
        return ApprovalOutcome::Approved {
            manager_name: manager_name.to_string(),
            subordinate_name,
            kind: LeaveKind::Casual,
            days,
            submission,
        };
    }

    debug!(subordinate = %subordinate_name, "Subordinate has no leave capability");
    ApprovalOutcome::Unsupported { subordinate_name }
}
