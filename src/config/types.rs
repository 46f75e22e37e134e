//! Configuration types for the employee demonstration.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML. Every field has a default, so an empty
//! document (or no file at all) yields the standard configuration.

use serde::Deserialize;

/// Starting paid-leave balance for a new permanent employee.
pub const DEFAULT_PAID_LEAVE_DAYS: u32 = 15;

/// Starting casual-leave balance for a new permanent employee.
pub const DEFAULT_CASUAL_LEAVE_DAYS: u32 = 15;

/// Default banner width in columns.
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Leave allowances granted to permanent employees at construction.
///
/// # Example
///
/// ```
/// use employee_model::config::LeavePolicy;
///
/// let policy = LeavePolicy::default();
/// assert_eq!(policy.paid_leave_days, 15);
/// assert_eq!(policy.casual_leave_days, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeavePolicy {
    /// Starting paid-leave balance in days.
    pub paid_leave_days: u32,
    /// Starting casual-leave balance in days.
    pub casual_leave_days: u32,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            paid_leave_days: DEFAULT_PAID_LEAVE_DAYS,
            casual_leave_days: DEFAULT_CASUAL_LEAVE_DAYS,
        }
    }
}

/// Presentation settings for the console reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Width of banners and rules, in columns.
    pub width: usize,
    /// Whether banners are printed with ANSI colour.
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_REPORT_WIDTH,
            color: true,
        }
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Leave allowances for permanent employees.
    pub leave_policy: LeavePolicy,
    /// Console reporter settings.
    pub report: ReportConfig,
}
