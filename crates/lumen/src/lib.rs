//! # Lumen - light/dark theme resolution
//!
//! Lumen keeps track of a user's color-scheme preference (`light`, `dark` or
//! `system`), resolves it to a concrete display mode, and keeps a presentation
//! surface in sync with that mode. While the preference is `system`, the
//! resolver follows live changes of the operating system's color scheme.
//!
//! ## Pieces
//!
//! - [`ThemeResolver`]: the service object owning the preference
//! - [`PreferenceStore`]: durable slot for the preference ([`MemoryStore`], [`FileStore`])
//! - [`SystemSignal`]: source of the OS color scheme ([`ManualSignal`], [`OsSignal`])
//! - [`PresentationSurface`]: where the resolved binding is written ([`RootStyle`])
//!
//! ## Example
//!
//! ```rust
//! use lumen::{
//!     ManualSignal, MemoryStore, Preference, ResolvedMode, ResolverConfig, RootStyle,
//!     SharedSurface, ThemeResolver,
//! };
//!
//! let signal = ManualSignal::new(ResolvedMode::Light);
//! let root = SharedSurface::new(RootStyle::new());
//! let mut resolver = ThemeResolver::initialize(
//!     MemoryStore::new(),
//!     signal.clone(),
//!     root.clone(),
//!     ResolverConfig::default(),
//! );
//!
//! assert_eq!(resolver.preference(), Preference::System);
//! signal.set(ResolvedMode::Dark);
//! assert!(root.borrow().has_class("dark"));
//!
//! resolver.set_preference(Preference::Light);
//! assert_eq!(root.borrow().property("--toast-bg"), Some("#ffffff"));
//! ```

pub mod config;
pub mod error;
pub mod signal;
pub mod store;
pub mod surface;
pub mod theme;
mod util;

pub use config::{ResolverConfig, DEFAULT_STORAGE_KEY};
pub use error::{ConfigError, PreferenceParseError, StoreError};
pub use signal::{
    set_default_detector, Listener, ManualSignal, OsSignal, SubscriptionId, SystemSignal,
};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use surface::{PresentationSurface, RootStyle, SharedSurface};
pub use theme::{
    resolve, Palettes, Preference, PresentationBinding, ResolvedMode, ThemeResolver,
    ThemeSnapshot, ToastPalette, TOAST_BACKGROUND, TOAST_BORDER, TOAST_FOREGROUND,
};
pub use util::{parse_hex_color, rgb_to_ansi256};
