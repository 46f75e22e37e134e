//! The demonstration driver.
//!
//! Runs the fixed sequence of sections between a header and a footer,
//! separated by dashed rules, writing everything to the given sink.
//!
//! # Example
//!
//! ```
//! use employee_model::config::AppConfig;
//! use employee_model::demo;
//!
//! let mut config = AppConfig::default();
//! config.report.color = false;
//!
//! let output = demo::run(Vec::new(), &config)?;
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("OBJECT ORIENTED PROGRAMMING"));
//! assert!(text.contains("James approved 3 days of paid leave for Ava."));
//! # Ok::<(), employee_model::error::ModelError>(())
//! ```

mod report;
mod sections;

use std::io::Write;

use tracing::debug;

use crate::config::AppConfig;
use crate::error::ModelResult;

pub use report::{Reporter, center_text};

use sections::Section;

/// Title printed in the opening banner.
pub const DEMO_TITLE: &str = "Object Oriented Programming";

/// Message printed in the closing banner.
pub const DEMO_FOOTER: &str = "End of OOP Demo";

/// Runs every section in order and returns the writer.
pub fn run<W: Write>(out: W, config: &AppConfig) -> ModelResult<W> {
    let script: [(&str, Section<W>); 8] = [
        ("basic_object_creation", sections::basic_object_creation),
        ("encapsulation", sections::encapsulation),
        ("abstraction", sections::abstraction),
        (
            "encapsulation_and_abstraction",
            sections::encapsulation_and_abstraction,
        ),
        ("polymorphism", sections::polymorphism),
        (
            "encapsulation_abstraction_polymorphism",
            sections::encapsulation_abstraction_polymorphism,
        ),
        ("inheritance", sections::inheritance),
        (
            "encapsulation_abstraction_polymorphism_inheritance",
            sections::encapsulation_abstraction_polymorphism_inheritance,
        ),
    ];

    let mut reporter = Reporter::new(out, &config.report);
    reporter.header(DEMO_TITLE)?;

    for (index, (name, section)) in script.iter().enumerate() {
        if index > 0 {
            reporter.dashed_line()?;
        }
        debug!(section = *name, "Running section");
        section(&mut reporter, &config.leave_policy)?;
    }

    reporter.footer(DEMO_FOOTER)?;
    reporter.into_inner()
}
