//! Sources of the system color scheme.
//!
//! A [`SystemSignal`] reports whether the environment prefers a dark display
//! and notifies subscribers when that changes. Two implementations ship:
//!
//! - [`ManualSignal`]: driven by the host (tests, embedding, custom sources)
//! - [`OsSignal`]: backed by the operating system's setting, refreshed by polling

mod listeners;
mod manual;
mod os;

use std::rc::Rc;

use crate::theme::ResolvedMode;

pub(crate) use listeners::Listeners;
pub use manual::ManualSignal;
pub use os::{set_default_detector, Detector, OsSignal};

/// Callback invoked with the new system mode.
pub type Listener = Rc<dyn Fn(ResolvedMode)>;

/// Handle returned by [`SystemSignal::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A notification source for the system's display preference.
pub trait SystemSignal {
    /// The mode the system currently reports.
    fn current(&self) -> ResolvedMode;

    /// Registers `listener` to be called on every change.
    fn subscribe(&self, listener: Listener) -> SubscriptionId;

    /// Removes a listener. Unknown or already removed ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

impl<T: SystemSignal + ?Sized> SystemSignal for Rc<T> {
    fn current(&self) -> ResolvedMode {
        (**self).current()
    }

    fn subscribe(&self, listener: Listener) -> SubscriptionId {
        (**self).subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        (**self).unsubscribe(id)
    }
}
