//! Persistence of the session's two storage keys.
//!
//! ERROR HANDLING
//! ==============
//! Browser storage can be missing (SSR, privacy modes) or reject writes
//! (quota). Failures surface as [`StorageError`]; callers decide whether
//! to log and continue.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{Session, SessionExpiry, encode_flag, parse_flag};
use crate::config::StorageKeys;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}")]
    Read { key: String },
    #[error("failed to write {key}")]
    Write { key: String },
}

/// Key-value backing for the session.
pub trait SessionStore {
    /// Read the stored session. Missing keys yield a signed-out session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Session, StorageError>;

    /// Write both keys.
    ///
    /// # Errors
    ///
    /// Returns an error if either key cannot be written.
    fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Remove both keys.
    ///
    /// # Errors
    ///
    /// Returns an error if either key cannot be removed.
    fn clear(&self) -> Result<(), StorageError>;
}

fn session_from_raw(flag: Option<&str>, expiry: Option<&str>) -> Session {
    Session { is_authenticated: parse_flag(flag), expiry: expiry.and_then(SessionExpiry::parse) }
}

/// `window.localStorage` store.
///
/// Without the `hydrate` feature there is no browser, so reads return a
/// signed-out session and writes fail with [`StorageError::Unavailable`].
#[derive(Clone, Debug, Default)]
pub struct BrowserStore {
    keys: StorageKeys,
}

impl BrowserStore {
    #[must_use]
    pub fn new(keys: StorageKeys) -> Self {
        Self { keys }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for BrowserStore {
    fn load(&self) -> Result<Session, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::storage()?;
            let read = |key: &str| {
                storage
                    .get_item(key)
                    .map_err(|_| StorageError::Read { key: key.to_owned() })
            };
            let flag = read(&self.keys.authenticated)?;
            let expiry = read(&self.keys.expiry)?;
            Ok(session_from_raw(flag.as_deref(), expiry.as_deref()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.keys;
            Ok(session_from_raw(None, None))
        }
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::storage()?;
            storage
                .set_item(&self.keys.authenticated, encode_flag(session.is_authenticated))
                .map_err(|_| StorageError::Write { key: self.keys.authenticated.clone() })?;
            match &session.expiry {
                Some(expiry) => storage.set_item(&self.keys.expiry, &expiry.encode()),
                None => storage.remove_item(&self.keys.expiry),
            }
            .map_err(|_| StorageError::Write { key: self.keys.expiry.clone() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::storage()?;
            // Both removals are attempted even if the first fails.
            let flag = storage.remove_item(&self.keys.authenticated);
            let expiry = storage.remove_item(&self.keys.expiry);
            flag.map_err(|_| StorageError::Write { key: self.keys.authenticated.clone() })?;
            expiry.map_err(|_| StorageError::Write { key: self.keys.expiry.clone() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store that counts mutations. Removing an absent key is not a
/// mutation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    keys: StorageKeys,
    entries: RefCell<HashMap<String, String>>,
    mutations: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(keys: StorageKeys) -> Self {
        Self { keys, ..Self::default() }
    }

    /// A store already holding `session`. Seeding does not count as a mutation.
    #[must_use]
    pub fn seeded(keys: StorageKeys, session: &Session) -> Self {
        let store = Self::new(keys);
        store.write_entries(session);
        store
    }

    /// Store raw values, bypassing encoding. Useful for malformed input.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    #[must_use]
    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }

    fn write_entries(&self, session: &Session) {
        let mut entries = self.entries.borrow_mut();
        entries.insert(
            self.keys.authenticated.clone(),
            encode_flag(session.is_authenticated).to_owned(),
        );
        match &session.expiry {
            Some(expiry) => {
                entries.insert(self.keys.expiry.clone(), expiry.encode());
            }
            None => {
                entries.remove(&self.keys.expiry);
            }
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Session, StorageError> {
        let entries = self.entries.borrow();
        Ok(session_from_raw(
            entries.get(&self.keys.authenticated).map(String::as_str),
            entries.get(&self.keys.expiry).map(String::as_str),
        ))
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.write_entries(session);
        self.mutations.set(self.mutations.get() + 1);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.borrow_mut();
        let removed_flag = entries.remove(&self.keys.authenticated).is_some();
        let removed_expiry = entries.remove(&self.keys.expiry).is_some();
        if removed_flag || removed_expiry {
            self.mutations.set(self.mutations.get() + 1);
        }
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
    fn load(&self) -> Result<Session, StorageError> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        (**self).save(session)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}
