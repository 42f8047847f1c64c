//! A surface handle that can be read while the resolver writes to it.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::PresentationSurface;
use crate::theme::PresentationBinding;

/// Shared, single-threaded wrapper around a surface.
///
/// Hand one clone to the resolver and keep another to read from.
#[derive(Debug, Default)]
pub struct SharedSurface<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> SharedSurface<S> {
    pub fn new(surface: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(surface)),
        }
    }

    /// Borrows the surface for reading.
    ///
    /// # Panics
    ///
    /// Panics if called from inside the surface's own `apply`.
    pub fn borrow(&self) -> Ref<'_, S> {
        self.inner.borrow()
    }
}

impl<S> Clone for SharedSurface<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: PresentationSurface> PresentationSurface for SharedSurface<S> {
    fn apply(&mut self, binding: &PresentationBinding) {
        self.inner.borrow_mut().apply(binding)
    }
}
