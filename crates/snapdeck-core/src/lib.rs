pub mod clock;
pub mod config;
pub mod deck;
pub mod error;
pub mod gesture;
pub mod navigator;
pub mod report;

#[cfg(test)]
mod testing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, EasingType, ScrollConfig, SettleMode};
pub use deck::{Deck, NavLink, Section};
pub use error::{Error, Result};
pub use navigator::{
    ChangeCause, Direction, NavigationListener, NavigationState, Navigator, PositionChange,
    ScrollHost, SettlePolicy,
};
