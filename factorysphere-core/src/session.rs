//! Pseudo-session over an injectable key-value storage port.
//!
//! The browser adapter lives in the web crate; tests and server-side
//! rendering use [`MemoryStore`]. Presence of both a role and an email
//! denotes "authenticated" - there is no real credential check.

use crate::access::{Role, Subject};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;

/// Storage key holding the role identifier.
pub const ROLE_KEY: &str = "role";
/// Storage key holding the user email.
pub const EMAIL_KEY: &str = "userEmail";

/// Key-value storage port backing the pseudo-session.
pub trait SessionStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Snapshot of the stored session fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: String,
    pub email: String,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.role.is_empty() && !self.email.is_empty()
    }

    /// Access-resolver view of this session. Unknown role spellings resolve
    /// to the least-privileged default, never to full access.
    #[must_use]
    pub fn subject(&self) -> Subject {
        if self.is_authenticated() {
            Subject::authenticated(Role::resolve(&self.role))
        } else {
            Subject::anonymous()
        }
    }
}

/// Read the current session from storage; missing fields read as empty.
///
/// # Errors
///
/// Returns an error if the storage port fails.
pub fn read_session<S: SessionStore>(store: &S) -> Result<Session, S::Error> {
    Ok(Session {
        role: store.get(ROLE_KEY)?.unwrap_or_default(),
        email: store.get(EMAIL_KEY)?.unwrap_or_default(),
    })
}

/// Persist a session and return the stored snapshot.
///
/// # Errors
///
/// Returns an error if the storage port fails.
pub fn login<S: SessionStore>(store: &S, role: &str, email: &str) -> Result<Session, S::Error> {
    store.set(ROLE_KEY, role)?;
    store.set(EMAIL_KEY, email)?;
    Ok(Session {
        role: role.to_string(),
        email: email.to_string(),
    })
}

/// Clear the stored session.
///
/// # Errors
///
/// Returns an error if the storage port fails.
pub fn logout<S: SessionStore>(store: &S) -> Result<(), S::Error> {
    store.remove(ROLE_KEY)?;
    store.remove(EMAIL_KEY)?;
    Ok(())
}

/// In-memory store for tests and non-browser rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl SessionStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Page;

    #[test]
    fn login_then_read_roundtrips() {
        let store = MemoryStore::default();
        let written = login(&store, "Supervisor", "sup@plant.example").unwrap();
        let read = read_session(&store).unwrap();
        assert_eq!(written, read);
        assert!(read.is_authenticated());
    }

    #[test]
    fn logout_clears_both_fields() {
        let store = MemoryStore::default();
        login(&store, "Supervisor", "sup@plant.example").unwrap();
        logout(&store).unwrap();
        let session = read_session(&store).unwrap();
        assert_eq!(session, Session::default());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn either_field_missing_means_unauthenticated() {
        let store = MemoryStore::default();
        store.set(ROLE_KEY, "Supervisor").unwrap();
        let session = read_session(&store).unwrap();
        assert!(!session.is_authenticated());
        assert!(!session.subject().can_access(Page::Dashboard));
    }

    #[test]
    fn subject_resolves_role_spelling() {
        let session = Session {
            role: "plant_manager".into(),
            email: "pm@plant.example".into(),
        };
        let subject = session.subject();
        assert!(subject.authenticated);
        assert_eq!(subject.role, Role::PlantManager);
    }

    #[test]
    fn unknown_role_becomes_least_privileged() {
        let session = Session {
            role: "superuser".into(),
            email: "x@plant.example".into(),
        };
        assert_eq!(session.subject().role, Role::Operator);
        assert!(!session.subject().can_access(Page::Devices));
    }
}
