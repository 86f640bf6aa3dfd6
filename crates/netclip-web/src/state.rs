//! Per-button copy state machine.
//!
//! `Idle → Copying → Copied | Failed → Idle`, cycling forever. Every click opens
//! a new generation; a clipboard result or reset timer from an older
//! generation is stale and leaves the state untouched, so at most one reset
//! ever applies per click.

use crate::config::Labels;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copying,
    Copied,
    Failed,
}

impl CopyState {
    pub fn label(self, labels: &Labels) -> &str {
        match self {
            CopyState::Idle => &labels.idle,
            CopyState::Copying => &labels.copying,
            CopyState::Copied => &labels.copied,
            CopyState::Failed => &labels.failed,
        }
    }
}

/// Identifies the click a clipboard result or reset belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

#[derive(Debug)]
pub struct CopyMachine {
    state: CopyState,
    generation: u64,
}

impl Default for CopyMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyMachine {
    pub fn new() -> Self {
        Self {
            state: CopyState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    /// Start a copy. Always succeeds, whatever the current state.
    pub fn click(&mut self) -> Generation {
        self.generation += 1;
        self.state = CopyState::Copying;
        Generation(self.generation)
    }

    /// Record the clipboard outcome. Returns the new state, or `None` if stale.
    pub fn write_finished(&mut self, generation: Generation, succeeded: bool) -> Option<CopyState> {
        if !self.is_current(generation) || self.state != CopyState::Copying {
            return None;
        }
        self.state = if succeeded {
            CopyState::Copied
        } else {
            CopyState::Failed
        };
        Some(self.state)
    }

    /// Return to idle once the reset delay has elapsed. `None` if stale.
    pub fn reset(&mut self, generation: Generation) -> Option<CopyState> {
        if !self.is_current(generation) || !matches!(self.state, CopyState::Copied | CopyState::Failed) {
            return None;
        }
        self.state = CopyState::Idle;
        Some(self.state)
    }

    fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_click_cycles_back_to_idle() {
        let mut m = CopyMachine::new();
        assert_eq!(m.state(), CopyState::Idle);

        let g = m.click();
        assert_eq!(m.state(), CopyState::Copying);
        assert_eq!(m.write_finished(g, true), Some(CopyState::Copied));
        assert_eq!(m.reset(g), Some(CopyState::Idle));
    }

    #[test]
    fn rejected_write_reports_failure() {
        let mut m = CopyMachine::new();
        let g = m.click();
        assert_eq!(m.write_finished(g, false), Some(CopyState::Failed));
        assert_eq!(m.reset(g), Some(CopyState::Idle));
    }

    #[test]
    fn reclick_while_copied_drops_old_reset() {
        let mut m = CopyMachine::new();
        let first = m.click();
        m.write_finished(first, true);

        let second = m.click();
        // First timer fires while the second copy is in flight
        assert_eq!(m.reset(first), None);
        assert_eq!(m.state(), CopyState::Copying);

        assert_eq!(m.write_finished(second, true), Some(CopyState::Copied));
        assert_eq!(m.reset(second), Some(CopyState::Idle));
    }

    #[test]
    fn stale_write_result_is_ignored() {
        let mut m = CopyMachine::new();
        let first = m.click();
        let second = m.click();

        // Older write resolves after the newer click
        assert_eq!(m.write_finished(first, false), None);
        assert_eq!(m.state(), CopyState::Copying);
        assert_eq!(m.write_finished(second, true), Some(CopyState::Copied));
    }

    #[test]
    fn two_rapid_clicks_end_idle() {
        let mut m = CopyMachine::new();
        let a = m.click();
        let b = m.click();
        m.write_finished(a, true);
        m.write_finished(b, true);
        m.reset(a);
        m.reset(b);
        assert_eq!(m.state(), CopyState::Idle);
    }

    #[test]
    fn reset_before_outcome_is_ignored() {
        let mut m = CopyMachine::new();
        let g = m.click();
        assert_eq!(m.reset(g), None);
        assert_eq!(m.state(), CopyState::Copying);
    }

    #[test]
    fn labels_follow_config() {
        let labels = Labels::default();
        assert_eq!(CopyState::Idle.label(&labels), "Copy");
        assert_eq!(CopyState::Copying.label(&labels), "Copying..");
        assert_eq!(CopyState::Copied.label(&labels), "Copied!");
        assert_eq!(CopyState::Failed.label(&labels), "Copy failed");
    }
}
