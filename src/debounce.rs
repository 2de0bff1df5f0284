//! Debounce Timer
//!
//! Trailing-edge debounce: scheduling replaces any pending timeout, so only
//! the last call within the delay window runs, with that call's captured
//! state. Dropping the superseded `Timeout` clears it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `callback` to run after the delay, superseding any pending
    /// callback. There is no cancellation API beyond scheduling again.
    pub fn schedule<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let pending = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            callback();
        });
        *self.pending.borrow_mut() = Some(timeout);
    }
}
