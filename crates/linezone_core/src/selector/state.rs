//! Per-source boundary state.

use super::spec::{Boundary, SelectorSpec};

/// Run-time selection state; reset at the start of every source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorState {
    pub in_boundary: bool,
    /// Selected lines since the current run started.
    pub count: u64,
    /// Lines seen in the current source.
    pub total_count: u64,
    /// Lines still to skip before the run starts selecting.
    pub shift: usize,
}

impl SelectorState {
    /// Feed one line (or end of source as `None`) and return the raw
    /// selection flag, before inversion.
    pub fn advance(&mut self, line: Option<&str>, spec: &SelectorSpec) -> bool {
        if line.is_some() {
            self.total_count += 1;
        }

        if self.stops(line, spec) {
            self.in_boundary = false;
            self.count = 0;
        }

        self.shift = self.shift.saturating_sub(1);

        if let Some(line) = line {
            let starts = match &spec.start {
                Boundary::None => true,
                Boundary::Count(n) => u64::try_from(*n).is_ok_and(|n| n == self.total_count),
                Boundary::Pattern(pattern) => pattern.is_match(line),
            };
            if starts {
                self.in_boundary = true;
                self.shift = spec.shift.unwrap_or(0);
                self.count = 0;
            }
        }

        let selected = self.in_boundary && self.shift == 0;
        if selected {
            self.count += 1;
        }
        selected
    }

    fn stops(&self, line: Option<&str>, spec: &SelectorSpec) -> bool {
        let Some(line) = line else {
            return true;
        };
        match &spec.stop {
            Boundary::None => spec.auto_stops() && self.shift == 0,
            // A non-positive count is reached immediately.
            Boundary::Count(n) => u64::try_from(*n).map_or(true, |n| self.count >= n),
            Boundary::Pattern(pattern) => pattern.is_match(line),
        }
    }
}
