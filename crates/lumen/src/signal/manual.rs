//! A system signal driven by the host.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::{Listener, Listeners, SubscriptionId, SystemSignal};
use crate::theme::ResolvedMode;

/// An in-memory signal whose value is set explicitly.
///
/// Clones share state, so a host can keep one handle to drive changes
/// while the resolver owns another.
///
/// # Example
///
/// ```rust
/// use lumen::{ManualSignal, ResolvedMode, SystemSignal};
/// use std::rc::Rc;
///
/// let signal = ManualSignal::new(ResolvedMode::Light);
/// let id = signal.subscribe(Rc::new(|mode: ResolvedMode| println!("system is now {mode}")));
/// signal.set(ResolvedMode::Dark);
/// signal.unsubscribe(id);
/// ```
#[derive(Clone, Default)]
pub struct ManualSignal {
    mode: Rc<Cell<ResolvedMode>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl ManualSignal {
    pub fn new(mode: ResolvedMode) -> Self {
        Self {
            mode: Rc::new(Cell::new(mode)),
            listeners: Rc::default(),
        }
    }

    /// Updates the reported mode, notifying listeners if it changed.
    pub fn set(&self, mode: ResolvedMode) {
        if self.mode.replace(mode) != mode {
            Listeners::notify(&self.listeners, mode);
        }
    }

    /// Convenience for `set(ResolvedMode::from_is_dark(is_dark))`.
    pub fn set_dark(&self, is_dark: bool) {
        self.set(ResolvedMode::from_is_dark(is_dark));
    }

    /// Number of active subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl SystemSignal for ManualSignal {
    fn current(&self) -> ResolvedMode {
        self.mode.get()
    }

    fn subscribe(&self, listener: Listener) -> SubscriptionId {
        self.listeners.borrow_mut().add(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().remove(id);
    }
}

impl fmt::Debug for ManualSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualSignal")
            .field("mode", &self.mode.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
