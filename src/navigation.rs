//! Step cursor
//!
//! Linear state machine over `0..total_steps`. Out-of-range requests are
//! dropped, which makes `previous`/`next` no-ops at the ends.

use crate::config::WizardConfig;

/// What the presentation layer needs after a step change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    /// Active 0-based step index
    pub active: usize,
    /// e.g. "Step 3 of 15"
    pub label: String,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    current: usize,
    config: WizardConfig,
}

impl NavigationController {
    pub fn new(config: &WizardConfig) -> Self {
        Self {
            current: 0,
            config: config.clone(),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn total_steps(&self) -> usize {
        self.config.total_steps
    }

    /// Jump to `index`; returns `None` (and changes nothing) when out of range
    pub fn go_to(&mut self, index: isize) -> Option<StepView> {
        let index = usize::try_from(index).ok().filter(|&i| i < self.total_steps())?;
        self.current = index;
        Some(self.view())
    }

    pub fn previous(&mut self) -> Option<StepView> {
        self.go_to(self.current as isize - 1)
    }

    pub fn next(&mut self) -> Option<StepView> {
        self.go_to(self.current as isize + 1)
    }

    /// View of the current step
    pub fn view(&self) -> StepView {
        StepView {
            active: self.current,
            label: self.config.step_label(self.current),
            can_go_previous: self.current > 0,
            can_go_next: self.current + 1 < self.total_steps(),
        }
    }
}
