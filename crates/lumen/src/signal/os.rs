//! System signal backed by the operating system's color-scheme setting.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use tracing::debug;

use super::{Listener, Listeners, SubscriptionId, SystemSignal};
use crate::theme::ResolvedMode;

/// Function that reports the system's current mode.
pub type Detector = fn() -> ResolvedMode;

static DEFAULT_DETECTOR: Lazy<Mutex<Detector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used by signals created with [`OsSignal::new`].
///
/// This is useful for testing or when you want to force a specific mode.
pub fn set_default_detector(detector: Detector) {
    let mut guard = DEFAULT_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

fn default_detector() -> Detector {
    *DEFAULT_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn os_theme_detector() -> ResolvedMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ResolvedMode::Dark,
        OsThemeMode::Light => ResolvedMode::Light,
    }
}

/// Signal that reads the OS setting.
///
/// The OS offers no portable change notification, so the host drives
/// updates by calling [`poll`](OsSignal::poll) from its event loop.
/// [`current`](SystemSignal::current) reports the value seen by the last
/// poll (or by construction).
pub struct OsSignal {
    detector: Detector,
    last: Cell<ResolvedMode>,
    listeners: RefCell<Listeners>,
}

impl OsSignal {
    /// Creates a signal using the default detector.
    pub fn new() -> Self {
        Self::with_detector(default_detector())
    }

    /// Creates a signal using a specific detector.
    pub fn with_detector(detector: Detector) -> Self {
        Self {
            detector,
            last: Cell::new(detector()),
            listeners: RefCell::default(),
        }
    }

    /// Re-detects the system mode. Returns `true` and notifies listeners if
    /// it changed since the last poll.
    pub fn poll(&self) -> bool {
        let mode = (self.detector)();
        if self.last.replace(mode) == mode {
            return false;
        }
        debug!(%mode, "system color scheme changed");
        Listeners::notify(&self.listeners, mode);
        true
    }

    /// Number of active subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for OsSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemSignal for OsSignal {
    fn current(&self) -> ResolvedMode {
        self.last.get()
    }

    fn subscribe(&self, listener: Listener) -> SubscriptionId {
        self.listeners.borrow_mut().add(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().remove(id);
    }
}

impl fmt::Debug for OsSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OsSignal")
            .field("last", &self.last.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};

    static SYSTEM_DARK: AtomicBool = AtomicBool::new(false);

    fn fake_detector() -> ResolvedMode {
        ResolvedMode::from_is_dark(SYSTEM_DARK.load(Ordering::SeqCst))
    }

    #[test]
    #[serial]
    fn test_poll_notifies_only_on_change() {
        SYSTEM_DARK.store(false, Ordering::SeqCst);
        let signal = OsSignal::with_detector(fake_detector);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        signal.subscribe(Rc::new(move |mode| sink.borrow_mut().push(mode)));

        assert!(!signal.poll());
        SYSTEM_DARK.store(true, Ordering::SeqCst);
        assert!(signal.poll());
        assert!(!signal.poll());

        assert_eq!(signal.current(), ResolvedMode::Dark);
        assert_eq!(*seen.borrow(), vec![ResolvedMode::Dark]);
    }

    #[test]
    #[serial]
    fn test_current_is_cached_until_poll() {
        SYSTEM_DARK.store(false, Ordering::SeqCst);
        let signal = OsSignal::with_detector(fake_detector);
        SYSTEM_DARK.store(true, Ordering::SeqCst);
        assert_eq!(signal.current(), ResolvedMode::Light);
        signal.poll();
        assert_eq!(signal.current(), ResolvedMode::Dark);
    }

    #[test]
    #[serial]
    fn test_default_detector_override() {
        set_default_detector(|| ResolvedMode::Dark);
        assert_eq!(OsSignal::new().current(), ResolvedMode::Dark);

        set_default_detector(|| ResolvedMode::Light);
        assert_eq!(OsSignal::new().current(), ResolvedMode::Light);

        // Reset to default for other tests
        set_default_detector(os_theme_detector);
    }
}
