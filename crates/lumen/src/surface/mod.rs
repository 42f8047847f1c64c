//! Presentation surfaces that reflect the resolved binding.
//!
//! The resolver is the only writer; everything else reads.

mod root;
mod shared;

pub use root::RootStyle;
pub use shared::SharedSurface;

use crate::theme::PresentationBinding;

/// Something that displays a [`PresentationBinding`].
pub trait PresentationSurface {
    /// Makes the surface reflect `binding`.
    fn apply(&mut self, binding: &PresentationBinding);
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for Box<S> {
    fn apply(&mut self, binding: &PresentationBinding) {
        (**self).apply(binding)
    }
}
