//! Durable key-value slots for the theme preference.
//!
//! - [`MemoryStore`]: in-process map, shared between clones
//! - [`FileStore`]: a JSON object of string keys to string values on disk

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// A key-value store scoped to the client device.
///
/// Values are plain text. The resolver only ever touches one key.
pub trait PreferenceStore {
    /// Reads `key`, returning `None` if it was never written.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any prior value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}
