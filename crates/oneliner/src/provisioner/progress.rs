//! Progress reporting for the provisioning pipeline
//!
//! User-facing lines go through a [`ProgressReporter`]; diagnostics go
//! through `tracing`.

use super::steps::Step;
use tracing::debug;

/// Receives pipeline progress and the final connection details
pub trait ProgressReporter {
    /// A step is about to start
    fn step_started(&self, step: Step);

    /// The instance is up; `line` is the full app URL banner
    fn app_url(&self, line: &str);

    /// The command that tears the environment down
    fn cleanup_hint(&self, line: &str);
}

/// Prints progress to stdout
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn step_started(&self, step: Step) {
        debug!(step = %step, "Starting step");
        println!("{}", step.description());
    }

    fn app_url(&self, line: &str) {
        println!("{line}");
    }

    fn cleanup_hint(&self, line: &str) {
        println!("{line}");
    }
}
