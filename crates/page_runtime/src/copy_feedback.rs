//! Per-control bookkeeping for the copy confirmation label.

/// Label state of one copy control.
///
/// Every click that shows the confirmation starts a new generation. A revert timer only restores
/// the label when no newer click happened after it was scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedbackState {
    original_label: Option<String>,
    generation: u64,
}

impl CopyFeedbackState {
    /// Label from before the confirmation appeared, while a confirmation is showing.
    pub fn pending_original(&self) -> Option<String> {
        self.original_label.clone()
    }

    /// Generation of the most recent confirmation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Records a confirmation over `current_label` and returns its generation.
    pub fn begin(&mut self, current_label: &str) -> u64 {
        if self.original_label.is_none() {
            self.original_label = Some(current_label.to_string());
        }
        self.generation += 1;
        self.generation
    }

    /// Ends the confirmation of `generation` if it is still the latest one.
    ///
    /// Returns `false` for a stale revert, leaving the newer confirmation in place.
    pub fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.original_label = None;
        true
    }
}
