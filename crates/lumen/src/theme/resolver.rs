//! The theme resolver service.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::binding::PresentationBinding;
use super::mode::{resolve, ResolvedMode};
use super::palette::Palettes;
use super::preference::Preference;
use crate::config::ResolverConfig;
use crate::signal::{Listener, Listeners, SubscriptionId, SystemSignal};
use crate::store::PreferenceStore;
use crate::surface::PresentationSurface;

/// An immutable view of the resolver's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSnapshot {
    pub preference: Preference,
    pub resolved: ResolvedMode,
    pub binding: PresentationBinding,
}

/// State reachable from the system-signal listener.
struct State {
    preference: Preference,
    resolved: ResolvedMode,
    applied: Option<PresentationBinding>,
    palettes: Palettes,
    surface: Box<dyn PresentationSurface>,
}

impl State {
    /// Recomputes the resolved mode and pushes the binding to the surface.
    ///
    /// Returns the new mode if it differs from the previous one.
    fn resolve(&mut self, system: ResolvedMode) -> Option<ResolvedMode> {
        let previous = self.resolved;
        self.resolved = resolve(self.preference, system);

        let binding = PresentationBinding::for_mode(self.resolved, &self.palettes);
        if self.applied.as_ref() == Some(&binding) {
            trace!(mode = %self.resolved, "binding unchanged; skipping apply");
        } else {
            debug!(preference = %self.preference, mode = %self.resolved, "applying theme");
            self.surface.apply(&binding);
            self.applied = Some(binding);
        }

        (previous != self.resolved).then_some(self.resolved)
    }

    fn binding(&self) -> PresentationBinding {
        self.applied
            .clone()
            .unwrap_or_else(|| PresentationBinding::for_mode(self.resolved, &self.palettes))
    }
}

struct Shared {
    state: RefCell<State>,
    observers: RefCell<Listeners>,
}

impl Shared {
    fn resolve(&self, system: ResolvedMode) {
        let changed = self.state.borrow_mut().resolve(system);
        if let Some(mode) = changed {
            Listeners::notify(&self.observers, mode);
        }
    }
}

/// Owns the user's theme preference and keeps a surface in sync with it.
///
/// The resolver is a single-threaded service object. Its store, system
/// signal and surface are injected at construction; readers get immutable
/// values through [`snapshot`](Self::snapshot) and friends.
///
/// While the preference is [`Preference::System`] exactly one listener is
/// registered on the signal. Leaving `System` removes it before the call
/// returns, and dropping the resolver removes it too.
///
/// # Example
///
/// ```rust
/// use lumen::{
///     ManualSignal, MemoryStore, Preference, ResolvedMode, ResolverConfig, RootStyle,
///     SharedSurface, ThemeResolver,
/// };
///
/// let store = MemoryStore::with_value("theme", "dark");
/// let signal = ManualSignal::new(ResolvedMode::Light);
/// let root = SharedSurface::new(RootStyle::new());
///
/// let mut resolver =
///     ThemeResolver::initialize(store.clone(), signal.clone(), root.clone(), ResolverConfig::default());
/// assert_eq!(resolver.resolved(), ResolvedMode::Dark);
///
/// resolver.set_preference(Preference::System);
/// assert_eq!(resolver.resolved(), ResolvedMode::Light);
/// assert_eq!(store.get("theme").as_deref(), Some("system"));
/// ```
pub struct ThemeResolver {
    shared: Rc<Shared>,
    signal: Box<dyn SystemSignal>,
    store: Box<dyn PreferenceStore>,
    storage_key: String,
    subscription: Option<SubscriptionId>,
}

impl ThemeResolver {
    /// Loads the persisted preference and brings the surface up to date.
    ///
    /// A missing, unreadable or unrecognized stored value yields
    /// [`Preference::System`]; nothing is written back.
    pub fn initialize<St, Sg, Su>(store: St, signal: Sg, surface: Su, config: ResolverConfig) -> Self
    where
        St: PreferenceStore + 'static,
        Sg: SystemSignal + 'static,
        Su: PresentationSurface + 'static,
    {
        let ResolverConfig {
            storage_key,
            palettes,
        } = config;

        let stored = store.load(&storage_key).unwrap_or_else(|err| {
            warn!(%err, key = %storage_key, "could not read theme preference");
            None
        });
        let preference = Preference::from_stored(stored.as_deref());
        debug!(%preference, key = %storage_key, "loaded theme preference");

        let shared = Rc::new(Shared {
            state: RefCell::new(State {
                preference,
                resolved: ResolvedMode::default(),
                applied: None,
                palettes,
                surface: Box::new(surface),
            }),
            observers: RefCell::default(),
        });

        let mut resolver = Self {
            shared,
            signal: Box::new(signal),
            store: Box::new(store),
            storage_key,
            subscription: None,
        };
        resolver.sync_subscription();
        resolver.resolve();
        resolver
    }

    /// Convenience for [`initialize`](Self::initialize) with the default config.
    pub fn with_defaults<St, Sg, Su>(store: St, signal: Sg, surface: Su) -> Self
    where
        St: PreferenceStore + 'static,
        Sg: SystemSignal + 'static,
        Su: PresentationSurface + 'static,
    {
        Self::initialize(store, signal, surface, ResolverConfig::default())
    }

    /// Changes the preference, persists it and re-resolves.
    ///
    /// Persistence is best-effort: a failed write is logged and the in-memory
    /// change still takes effect.
    pub fn set_preference(&mut self, preference: Preference) {
        self.shared.state.borrow_mut().preference = preference;

        if let Err(err) = self.store.save(&self.storage_key, preference.as_str()) {
            warn!(%err, %preference, "could not persist theme preference");
        }

        self.sync_subscription();
        self.resolve();
    }

    /// Moves to the next preference (light, dark, system, light, ...).
    pub fn cycle(&mut self) -> Preference {
        let next = self.preference().next();
        self.set_preference(next);
        next
    }

    /// Re-resolves against the signal's current value.
    ///
    /// Calling this again with nothing changed has no observable effect.
    pub fn resolve(&self) {
        self.shared.resolve(self.signal.current());
    }

    /// Registers a callback fired whenever the resolved mode changes.
    pub fn on_change<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ResolvedMode) + 'static,
    {
        self.shared.observers.borrow_mut().add(Rc::new(callback))
    }

    /// Removes a callback registered with [`on_change`](Self::on_change).
    pub fn remove_observer(&self, id: SubscriptionId) {
        self.shared.observers.borrow_mut().remove(id);
    }

    pub fn preference(&self) -> Preference {
        self.shared.state.borrow().preference
    }

    pub fn resolved(&self) -> ResolvedMode {
        self.shared.state.borrow().resolved
    }

    /// The binding currently shown on the surface.
    pub fn binding(&self) -> PresentationBinding {
        self.shared.state.borrow().binding()
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        let state = self.shared.state.borrow();
        ThemeSnapshot {
            preference: state.preference,
            resolved: state.resolved,
            binding: state.binding(),
        }
    }

    /// Whether a system-signal listener is currently attached.
    pub fn is_following_system(&self) -> bool {
        self.subscription.is_some()
    }

    /// Releases the system-signal listener. The resolver keeps its last
    /// state but no longer reacts to system changes.
    pub fn shutdown(&mut self) {
        self.detach();
    }

    fn sync_subscription(&mut self) {
        let wants_listener = self.preference().follows_system();
        match (wants_listener, self.subscription) {
            (true, None) => self.attach(),
            (false, Some(_)) => self.detach(),
            _ => {}
        }
    }

    fn attach(&mut self) {
        let shared: Weak<Shared> = Rc::downgrade(&self.shared);
        let listener: Listener = Rc::new(move |system| {
            if let Some(shared) = shared.upgrade() {
                shared.resolve(system);
            }
        });
        self.subscription = Some(self.signal.subscribe(listener));
        trace!("attached system color scheme listener");
    }

    fn detach(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.signal.unsubscribe(id);
            trace!("detached system color scheme listener");
        }
    }
}

impl Drop for ThemeResolver {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("ThemeResolver")
            .field("preference", &state.preference)
            .field("resolved", &state.resolved)
            .field("storage_key", &self.storage_key)
            .field("following_system", &self.subscription.is_some())
            .finish()
    }
}
