use crate::clock::Clock;
use crate::navigator::{Direction, Navigator, ScrollHost};

use super::Disposition;

/// Wheel channel: one section per wheel event, direction from the sign only
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelAdapter;

impl WheelAdapter {
    /// Positive `delta_y` moves forward, anything else moves backward.
    /// Native wheel scrolling is always suppressed.
    pub fn handle<S: ScrollHost, C: Clock>(
        &self,
        delta_y: f64,
        navigator: &mut Navigator<S, C>,
    ) -> Disposition {
        let direction = if delta_y > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        navigator.advance(direction);
        Disposition::Suppress
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::navigator;

    #[test]
    fn test_sign_selects_direction() {
        let (mut nav, host, clock) = navigator(5);
        let wheel = WheelAdapter;

        assert!(wheel.handle(3.0, &mut nav).is_suppressed());
        clock.advance(Duration::from_millis(800));
        wheel.handle(120.0, &mut nav);
        clock.advance(Duration::from_millis(800));
        wheel.handle(-0.5, &mut nav);

        assert_eq!(nav.current_index(), 1);
        assert_eq!(host.scrolled(), vec![1, 2, 1]);
    }

    #[test]
    fn test_busy_wheel_is_still_suppressed() {
        let (mut nav, host, _) = navigator(5);
        let wheel = WheelAdapter;
        wheel.handle(1.0, &mut nav);
        assert_eq!(wheel.handle(1.0, &mut nav), Disposition::Suppress);
        assert_eq!(host.scrolled(), vec![1]);
    }

    #[test]
    fn test_wheel_up_at_top_is_noop() {
        let (mut nav, host, _) = navigator(5);
        WheelAdapter.handle(-10.0, &mut nav);
        assert_eq!(nav.current_index(), 0);
        assert!(host.scrolled().is_empty());
    }
}
