//! Listener registry shared by the signal implementations and the resolver.

use std::cell::RefCell;

use super::{Listener, SubscriptionId};
use crate::theme::ResolvedMode;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, id: SubscriptionId) -> Option<Listener> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, listener)| listener.clone())
    }

    /// Calls every listener registered at the start of the dispatch.
    ///
    /// No borrow is held while a listener runs, so listeners may subscribe or
    /// unsubscribe. A listener removed mid-dispatch is not called.
    pub(crate) fn notify(cell: &RefCell<Self>, mode: ResolvedMode) {
        let ids: Vec<SubscriptionId> = cell.borrow().entries.iter().map(|(id, _)| *id).collect();
        for id in ids {
            let listener = cell.borrow().get(id);
            if let Some(listener) = listener {
                listener(mode);
            }
        }
    }
}
