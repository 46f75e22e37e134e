//! Configuration loading for the employee demonstration.
//!
//! This module provides typed settings for leave allowances and console
//! presentation, loaded from an optional YAML file.
//!
//! # Example
//!
//! ```no_run
//! use employee_model::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Paid leave: {} days", loader.leave_policy().paid_leave_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, DEFAULT_CASUAL_LEAVE_DAYS, DEFAULT_PAID_LEAVE_DAYS, DEFAULT_REPORT_WIDTH,
    LeavePolicy, ReportConfig,
};
