//! Shared fixtures for unit tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clock::ManualClock;
use crate::gesture::MenuHost;
use crate::navigator::{Navigator, ScrollHost};

/// Scroll host that records every requested index
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Rc<RefCell<Vec<usize>>>,
}

impl RecordingHost {
    pub fn scrolled(&self) -> Vec<usize> {
        self.calls.borrow().clone()
    }
}

impl ScrollHost for RecordingHost {
    fn scroll_into_view(&mut self, index: usize) {
        self.calls.borrow_mut().push(index);
    }
}

/// Menu host that counts toggles
#[derive(Debug, Clone, Default)]
pub struct CountingMenu {
    toggles: Rc<Cell<usize>>,
}

impl CountingMenu {
    pub fn toggles(&self) -> usize {
        self.toggles.get()
    }
}

impl MenuHost for CountingMenu {
    fn toggle_menu(&mut self) {
        self.toggles.set(self.toggles.get() + 1);
    }
}

/// Navigator over `count` sections with a manual clock and recording host
pub fn navigator(count: usize) -> (Navigator<RecordingHost, ManualClock>, RecordingHost, ManualClock) {
    let host = RecordingHost::default();
    let clock = ManualClock::new();
    let nav = Navigator::new(count, host.clone())
        .expect("non-empty deck")
        .with_clock(clock.clone());
    (nav, host, clock)
}
