use crate::clock::Clock;
use crate::navigator::{Direction, Navigator, ScrollHost};

use super::Disposition;

/// Touch-drag channel
///
/// A drag fires at most one step: once the finger has travelled further than
/// the threshold the gesture is consumed until the next touch start.
#[derive(Debug, Clone)]
pub struct TouchAdapter {
    threshold: f64,
    origin_y: f64,
    armed: bool,
}

impl Default for TouchAdapter {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl TouchAdapter {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            origin_y: 0.0,
            armed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the current drag can still fire
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn start(&mut self, y: f64) {
        self.origin_y = y;
        self.armed = true;
    }

    /// Finger moved to `y`. Dragging upwards (towards smaller `y`) moves
    /// forward through the deck.
    pub fn move_to<S: ScrollHost, C: Clock>(
        &mut self,
        y: f64,
        navigator: &mut Navigator<S, C>,
    ) -> Disposition {
        if !self.armed {
            return Disposition::PassThrough;
        }

        let delta = self.origin_y - y;
        if delta.abs() > self.threshold {
            let direction = if delta > 0.0 {
                Direction::Forward
            } else {
                Direction::Backward
            };
            navigator.advance(direction);
            self.armed = false;
        }

        Disposition::Suppress
    }

    pub fn end(&mut self) {
        self.armed = false;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::navigator;

    #[test]
    fn test_short_drag_does_nothing() {
        let (mut nav, host, _) = navigator(5);
        let mut touch = TouchAdapter::default();

        touch.start(400.0);
        for y in [390.0, 380.0, 370.0] {
            assert!(touch.move_to(y, &mut nav).is_suppressed());
        }
        assert!(host.scrolled().is_empty());
        assert!(touch.is_armed());
    }

    #[test]
    fn test_long_drag_fires_exactly_once() {
        let (mut nav, host, _) = navigator(5);
        let mut touch = TouchAdapter::default();

        touch.start(400.0);
        touch.move_to(370.0, &mut nav);
        touch.move_to(340.0, &mut nav);
        touch.move_to(250.0, &mut nav);
        touch.move_to(100.0, &mut nav);

        assert_eq!(host.scrolled(), vec![1]);
        assert!(!touch.is_armed());
        assert_eq!(touch.move_to(50.0, &mut nav), Disposition::PassThrough);
    }

    #[test]
    fn test_threshold_is_strict() {
        let (mut nav, host, _) = navigator(5);
        let mut touch = TouchAdapter::new(50.0);
        touch.start(100.0);
        touch.move_to(50.0, &mut nav);
        assert!(host.scrolled().is_empty());
    }

    #[test]
    fn test_drag_down_goes_back() {
        let (mut nav, host, clock) = navigator(5);
        nav.go_to(3);
        clock.advance(Duration::from_millis(800));

        let mut touch = TouchAdapter::default();
        touch.start(100.0);
        touch.move_to(200.0, &mut nav);
        assert_eq!(nav.current_index(), 2);
        assert_eq!(host.scrolled(), vec![3, 2]);
    }

    #[test]
    fn test_gesture_consumed_even_when_navigator_busy() {
        let (mut nav, host, clock) = navigator(5);
        nav.go_to(1);

        let mut touch = TouchAdapter::default();
        touch.start(300.0);
        touch.move_to(200.0, &mut nav);
        clock.advance(Duration::from_millis(800));
        touch.move_to(100.0, &mut nav);

        assert_eq!(host.scrolled(), vec![1]);
    }

    #[test]
    fn test_end_disarms() {
        let (mut nav, host, _) = navigator(5);
        let mut touch = TouchAdapter::default();
        touch.start(300.0);
        touch.end();
        touch.move_to(0.0, &mut nav);
        assert!(host.scrolled().is_empty());
    }
}
