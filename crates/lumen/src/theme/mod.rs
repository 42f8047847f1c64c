//! Theme preference, resolution and the presentation binding.
//!
//! This module provides:
//!
//! - [`Preference`]: what the user picked (`light`, `dark` or `system`)
//! - [`ResolvedMode`]: the concrete mode actually displayed
//! - [`resolve`]: the pure mapping from preference and system mode to a display mode
//! - [`Palettes`] / [`ToastPalette`]: the toast color tokens per mode
//! - [`PresentationBinding`]: everything a surface needs for one resolved mode
//! - [`ThemeResolver`]: the stateful service tying it all together

mod binding;
mod mode;
mod palette;
mod preference;
mod resolver;

pub use binding::PresentationBinding;
pub use mode::{resolve, ResolvedMode};
pub use palette::{Palettes, ToastPalette, TOAST_BACKGROUND, TOAST_BORDER, TOAST_FOREGROUND};
pub use preference::Preference;
pub use resolver::{ThemeResolver, ThemeSnapshot};
