use crate::clock::Clock;
use crate::navigator::{Navigator, ScrollHost};

/// Observed visible fraction of one section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub index: usize,
    /// Visible fraction in `0.0..=1.0`
    pub ratio: f64,
}

/// Reconciles the navigator with the section that is actually on screen
///
/// Reacts only when a section crosses the threshold upwards, the way an
/// intersection observer reports. Crossings seen while a transition settles
/// are consumed and never replayed.
#[derive(Debug, Clone)]
pub struct VisibilityCorrector {
    threshold: f64,
    visible: Vec<bool>,
}

impl VisibilityCorrector {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            threshold,
            visible: vec![false; count],
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed a batch of observations; returns the index the navigator was
    /// corrected to, if any
    pub fn observe<S: ScrollHost, C: Clock>(
        &mut self,
        entries: &[VisibilityEntry],
        navigator: &mut Navigator<S, C>,
    ) -> Option<usize> {
        let mut corrected = None;
        for entry in entries {
            let Some(was_visible) = self.visible.get_mut(entry.index) else {
                continue;
            };
            let now_visible = entry.ratio >= self.threshold;
            let crossed = now_visible && !*was_visible;
            *was_visible = now_visible;

            if crossed && !navigator.is_busy() {
                navigator.correct_to(entry.index);
                corrected = Some(entry.index);
            }
        }
        corrected
    }
}
