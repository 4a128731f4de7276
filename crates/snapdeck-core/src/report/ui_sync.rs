use crate::navigator::{progress_percent, PositionChange};

/// One active flag per section; exactly one is set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSet {
    active: Vec<bool>,
}

impl IndicatorSet {
    /// Indicators for `count` sections with the first one active
    pub fn new(count: usize) -> Self {
        let mut set = Self {
            active: vec![false; count],
        };
        set.set_active(0);
        set
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Activate `index` and clear every other indicator
    pub fn set_active(&mut self, index: usize) {
        for (i, flag) in self.active.iter_mut().enumerate() {
            *flag = i == index;
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|&flag| flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.active.iter().copied()
    }
}

/// Render model for the indicator dots and the progress bar
#[derive(Debug, Clone)]
pub struct UiSync {
    indicators: IndicatorSet,
    progress: f64,
}

impl UiSync {
    pub fn new(count: usize) -> Self {
        Self {
            indicators: IndicatorSet::new(count),
            progress: progress_percent(0, count),
        }
    }

    /// Re-derive indicators and progress from a position change
    pub fn apply(&mut self, change: &PositionChange) {
        self.indicators.set_active(change.index);
        self.progress = change.progress();
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    /// Progress bar width in percent
    pub fn progress(&self) -> f64 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::navigator::Direction;
    use crate::testing::navigator;

    fn check_invariants(ui: &UiSync, index: usize, count: usize) {
        assert_eq!(ui.indicators().iter().filter(|&a| a).count(), 1);
        assert_eq!(ui.indicators().active_index(), Some(index));
        assert!((ui.progress() - (index + 1) as f64 / count as f64 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_indicator_set_single_active() {
        let mut set = IndicatorSet::new(4);
        assert_eq!(set.active_index(), Some(0));
        set.set_active(2);
        assert!(set.is_active(2));
        assert!(!set.is_active(0));
        assert!(!set.is_active(10));
        assert_eq!(set.iter().filter(|&a| a).count(), 1);
    }

    #[test]
    fn test_tracks_navigator_through_listener() {
        let (mut nav, _, clock) = navigator(5);
        let ui = Rc::new(RefCell::new(UiSync::new(5)));
        let sink = ui.clone();
        nav.subscribe(move |change: &PositionChange| sink.borrow_mut().apply(change));
        nav.announce();
        check_invariants(&ui.borrow(), 0, 5);

        nav.advance(Direction::Forward);
        check_invariants(&ui.borrow(), 1, 5);

        nav.go_to(4); // dropped while busy
        check_invariants(&ui.borrow(), 1, 5);

        clock.advance(Duration::from_millis(800));
        nav.go_to(4);
        check_invariants(&ui.borrow(), 4, 5);

        nav.correct_to(2);
        check_invariants(&ui.borrow(), 2, 5);
    }
}
