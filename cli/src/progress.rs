use crate::ui;
use std::time::{Duration, Instant};

/// A simple progress tracker for CLI operations
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<String>,
    current_step: usize,
    enabled: bool,
}

impl ProgressTracker {
    /// Create a new progress tracker; a disabled tracker prints nothing
    pub fn new(operation_name: &str, enabled: bool) -> Self {
        if enabled {
            ui::section_header(operation_name);
        }
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
            enabled,
        }
    }

    /// Add steps to the tracker
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// Start the next step
    pub fn start_step(&self) {
        if self.enabled && self.current_step < self.steps.len() {
            ui::status_message(&self.steps[self.current_step]);
        }
    }

    /// Complete the current step
    pub fn complete_step(&mut self) {
        if self.current_step < self.steps.len() {
            if self.enabled {
                ui::success_message(&self.steps[self.current_step]);
            }
            self.current_step += 1;
        }
    }

    /// Complete the operation
    pub fn complete(&self) {
        if !self.enabled {
            return;
        }
        let elapsed = self.start_time.elapsed();
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            Self::format_duration(elapsed)
        ));
    }

    /// Format a duration in a human-readable way
    fn format_duration(duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else {
            format!("{:.1} seconds", duration.as_secs_f64())
        }
    }
}
