//! Eased scroll animation for the section viewport
//!
//! The animator only knows row offsets. Start an animation with
//! [`ScrollAnimator::scroll_to`], then call [`ScrollAnimator::update`] every
//! frame to move the visible offset along the easing curve.

use std::time::{Duration, Instant};

use snapdeck_core::{EasingType, ScrollConfig};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u32,
    to: u32,
    duration: Duration,
    easing: EasingType,
}

/// Result of advancing the animation by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTick {
    Idle,
    Moving,
    /// The animation reached its target on this frame
    Finished,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    offset: u32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            offset: 0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current visible offset in rows
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Final offset once the running animation (if any) completes
    pub fn target(&self) -> u32 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.offset)
    }

    /// Frame interval while animating
    pub fn frame_interval(&self) -> Duration {
        if self.config.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / self.config.animation_fps as u64)
        }
    }

    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    /// Jump without animating
    pub fn set_offset(&mut self, offset: u32) {
        self.animation = None;
        self.offset = offset;
    }

    /// Animate from the current visible offset to `target`
    ///
    /// Retargets a running animation from wherever it currently is.
    /// Returns false when the move happened instantly (smooth scrolling
    /// disabled, or already there).
    pub fn scroll_to(&mut self, target: u32) -> bool {
        if !self.is_smooth() || target == self.offset {
            self.set_offset(target);
            return false;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.offset,
            to: target,
            duration: Duration::from_millis(self.config.animation_duration_ms),
            easing: self.config.easing,
        });
        true
    }

    /// Advance the animation to the present moment
    pub fn update(&mut self) -> ScrollTick {
        let Some(anim) = &self.animation else {
            return ScrollTick::Idle;
        };

        let elapsed = anim.start.elapsed();
        if elapsed >= anim.duration {
            self.offset = anim.to;
            self.animation = None;
            return ScrollTick::Finished;
        }

        let t = elapsed.as_secs_f64() / anim.duration.as_secs_f64();
        let eased = ease(anim.easing, t);
        let from = anim.from as f64;
        let to = anim.to as f64;
        self.offset = (from + (to - from) * eased).round() as u32;
        ScrollTick::Moving
    }
}

/// Map linear progress `t` in `[0, 1]` onto the easing curve
pub fn ease(easing: EasingType, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    match easing {
        EasingType::None => {
            if t < 1.0 {
                0.0
            } else {
                1.0
            }
        }
        EasingType::Linear => t,
        EasingType::Cubic => 1.0 - inv.powi(3),
        EasingType::Quintic => 1.0 - inv.powi(5),
        EasingType::EaseOut => {
            if t >= 1.0 {
                1.0
            } else {
                1.0 - 2.0_f64.powf(-10.0 * t)
            }
        }
    }
}
