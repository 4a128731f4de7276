//! Gesture adapters
//!
//! Each adapter turns one raw input channel into navigator calls and tells
//! the host whether the channel's default behavior (native scrolling, link
//! navigation) should be suppressed.

mod keyboard;
mod link;
mod touch;
mod wheel;

pub use keyboard::{Key, KeyboardAdapter};
pub use link::{ClickOrigin, LinkAdapter};
pub use touch::TouchAdapter;
pub use wheel::WheelAdapter;

/// What the host should do with the event's default behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The adapter consumed the event; suppress the default
    Suppress,
    /// Let the host handle the event as it normally would
    PassThrough,
}

impl Disposition {
    #[inline]
    pub fn is_suppressed(self) -> bool {
        self == Disposition::Suppress
    }
}

/// Host primitive that opens or closes the mobile menu
pub trait MenuHost {
    fn toggle_menu(&mut self);
}
