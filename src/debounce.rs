use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

struct Pending {
    // Dropping the Timeout clears it.
    _timeout: Timeout,
    fired: Rc<Cell<bool>>,
}

/// Coalesces rapid triggers: only the last scheduled callback runs, `wait_ms` after it was scheduled.
pub struct Debounce {
    wait_ms: u32,
    pending: Option<Pending>,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let timeout = Timeout::new(self.wait_ms, move || {
            flag.set(true);
            callback();
        });
        self.pending = Some(Pending {
            _timeout: timeout,
            fired,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, |pending| !pending.fired.get())
    }
}
