//! Section navigation state machine
//!
//! The [`Navigator`] owns the current section index and the busy flag. Every
//! accepted transition asks the host to scroll the target section into view,
//! notifies listeners, and then refuses further transitions until the settle
//! window has passed. Requests that arrive in the meantime are dropped, not
//! queued.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::clock::{Clock, SystemClock};

/// Host primitive that brings a section into view, usually with an animation
///
/// Fire-and-forget: the navigator never learns when (or whether) the
/// scroll finished unless the host calls [`Navigator::finish_transition`].
pub trait ScrollHost {
    fn scroll_into_view(&mut self, index: usize);
}

impl<F: FnMut(usize)> ScrollHost for F {
    fn scroll_into_view(&mut self, index: usize) {
        self(index)
    }
}

/// Receives every change of the current section
pub trait NavigationListener {
    fn position_changed(&mut self, change: &PositionChange);
}

impl<F: FnMut(&PositionChange)> NavigationListener for F {
    fn position_changed(&mut self, change: &PositionChange) {
        self(change)
    }
}

/// Step direction for [`Navigator::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    #[inline]
    pub fn offset(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// What produced a position change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// Initial announcement after construction
    Startup,
    /// Accepted `go_to`/`advance` request
    Transition,
    /// Visibility correction; no scroll was requested
    Correction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionChange {
    pub index: usize,
    pub count: usize,
    pub cause: ChangeCause,
}

impl PositionChange {
    /// Progress through the deck in percent
    pub fn progress(&self) -> f64 {
        progress_percent(self.index, self.count)
    }
}

/// `(index + 1) / count * 100`, or 0 for an empty deck
pub fn progress_percent(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (index + 1) as f64 / count as f64 * 100.0
}

/// How long a transition keeps the navigator busy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlePolicy {
    /// Busy for exactly `settle` after each transition
    Timer { settle: Duration },
    /// Busy until the host calls [`Navigator::finish_transition`], or until
    /// `fallback` has passed
    Completion { fallback: Duration },
}

impl Default for SettlePolicy {
    fn default() -> Self {
        SettlePolicy::Timer {
            settle: Duration::from_millis(800),
        }
    }
}

impl SettlePolicy {
    /// Longest possible busy window
    pub fn window(&self) -> Duration {
        match *self {
            SettlePolicy::Timer { settle } => settle,
            SettlePolicy::Completion { fallback } => fallback,
        }
    }
}

/// Point-in-time copy of the navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    pub busy: bool,
}

pub struct Navigator<S, C = SystemClock> {
    count: usize,
    current: usize,
    busy_until: Option<Instant>,
    policy: SettlePolicy,
    host: S,
    clock: C,
    listeners: Vec<Box<dyn NavigationListener>>,
}

impl<S: ScrollHost> Navigator<S, SystemClock> {
    /// Create a navigator over `count` sections, starting at the first one
    ///
    /// A deck without sections cannot be presented.
    pub fn new(count: usize, host: S) -> crate::Result<Self> {
        if count == 0 {
            return Err(crate::Error::Deck("a deck needs at least one section".into()));
        }
        Ok(Self {
            count,
            current: 0,
            busy_until: None,
            policy: SettlePolicy::default(),
            host,
            clock: SystemClock,
            listeners: Vec::new(),
        })
    }
}

impl<S: ScrollHost, C: Clock> Navigator<S, C> {
    /// Replace the time source
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Navigator<S, C2> {
        Navigator {
            count: self.count,
            current: self.current,
            busy_until: self.busy_until,
            policy: self.policy,
            host: self.host,
            clock,
            listeners: self.listeners,
        }
    }

    pub fn with_policy(mut self, policy: SettlePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register a listener for position changes
    pub fn subscribe(&mut self, listener: impl NavigationListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Notify listeners of the initial position
    pub fn announce(&mut self) {
        self.notify(ChangeCause::Startup);
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.count
    }

    pub fn policy(&self) -> SettlePolicy {
        self.policy
    }

    /// Whether a transition is still inside its settle window
    pub fn is_busy(&self) -> bool {
        self.busy_until
            .is_some_and(|deadline| self.clock.now() < deadline)
    }

    pub fn snapshot(&self) -> NavigationState {
        NavigationState {
            current_index: self.current,
            busy: self.is_busy(),
        }
    }

    pub fn progress(&self) -> f64 {
        progress_percent(self.current, self.count)
    }

    pub fn host(&self) -> &S {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut S {
        &mut self.host
    }

    /// Transition to `target`
    ///
    /// Ignored when `target` is out of range or a transition is still
    /// settling. Callers cannot tell whether the request was accepted.
    pub fn go_to(&mut self, target: usize) {
        if target >= self.count || self.is_busy() {
            return;
        }

        self.current = target;
        self.busy_until = Some(self.clock.now() + self.policy.window());
        debug!(index = target, count = self.count, "section transition");

        self.host.scroll_into_view(target);
        self.notify(ChangeCause::Transition);
    }

    /// Step one section; no-op at either end of the deck
    pub fn advance(&mut self, direction: Direction) {
        if let Some(target) = self.current.checked_add_signed(direction.offset()) {
            self.go_to(target);
        }
    }

    /// Adopt `index` as the current section without scrolling
    ///
    /// Used to reconcile with what is actually on screen. Leaves the busy
    /// window alone.
    pub fn correct_to(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        if index != self.current {
            debug!(from = self.current, to = index, "position corrected");
        }
        self.current = index;
        self.notify(ChangeCause::Correction);
    }

    /// Host signal that the scroll animation has finished
    ///
    /// Only honored under [`SettlePolicy::Completion`]; the timer policy
    /// always runs its full window.
    pub fn finish_transition(&mut self) {
        if matches!(self.policy, SettlePolicy::Completion { .. }) && self.busy_until.take().is_some() {
            debug!(index = self.current, "transition completed");
        }
    }

    /// Drop an expired settle deadline; returns true when it just expired
    pub fn poll_settle(&mut self) -> bool {
        match self.busy_until {
            Some(deadline) if self.clock.now() >= deadline => {
                self.busy_until = None;
                debug!(index = self.current, "transition settled");
                true
            }
            _ => false,
        }
    }

    fn notify(&mut self, cause: ChangeCause) {
        let change = PositionChange {
            index: self.current,
            count: self.count,
            cause,
        };
        for listener in &mut self.listeners {
            listener.position_changed(&change);
        }
    }
}
