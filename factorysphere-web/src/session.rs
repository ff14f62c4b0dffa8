//! Browser adapter for the session storage port, plus auth change
//! notifications: a same-tab DOM event and the cross-tab `storage` event.
//! Last write wins; there is no stronger ordering.

use factorysphere_core::session::{self, EMAIL_KEY, ROLE_KEY, Session, SessionStore};
use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use yew::prelude::*;

/// Same-tab auth change event name.
pub const AUTH_EVENT: &str = "factorysphere:auth";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage unavailable")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// `localStorage`-backed implementation of [`SessionStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|err| StorageError::Backend(js_message(&err)))?
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserStore {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(js_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(js_message(&err)))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        local_storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Backend(js_message(&err)))
    }
}

// No browser storage outside wasm; reads are empty and writes are dropped so
// server-side rendering sees an unauthenticated session.
#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for BrowserStore {
    type Error = StorageError;

    fn get(&self, _key: &str) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Read the stored session; storage failures read as logged-out.
#[must_use]
pub fn current_session() -> Session {
    session::read_session(&BrowserStore).unwrap_or_else(|err| {
        log::warn!("failed to read session: {err}");
        Session::default()
    })
}

/// Persist the session and notify same-tab listeners.
pub fn login(role: &str, email: &str) -> Session {
    let stored = session::login(&BrowserStore, role, email).unwrap_or_else(|err| {
        log::warn!("failed to persist session: {err}");
        Session {
            role: role.to_string(),
            email: email.to_string(),
        }
    });
    emit_auth_changed();
    stored
}

/// Clear the session and notify same-tab listeners.
pub fn logout() {
    if let Err(err) = session::logout(&BrowserStore) {
        log::warn!("failed to clear session: {err}");
    }
    emit_auth_changed();
}

#[cfg(target_arch = "wasm32")]
pub fn emit_auth_changed() {
    if let Some(window) = web_sys::window()
        && let Ok(event) = web_sys::Event::new(AUTH_EVENT)
    {
        let _ = window.dispatch_event(&event);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit_auth_changed() {}

/// Session state that refreshes on same-tab auth events and cross-tab
/// storage changes to the session keys.
#[hook]
pub fn use_session() -> UseStateHandle<Session> {
    let session = use_state(current_session);

    #[cfg(target_arch = "wasm32")]
    {
        let session = session.clone();
        use_effect_with((), move |()| {
            let on_auth = Closure::<dyn FnMut(web_sys::Event)>::new({
                let session = session.clone();
                move |_event: web_sys::Event| session.set(current_session())
            });
            let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new({
                let session = session.clone();
                move |event: web_sys::StorageEvent| {
                    // key() is None when the whole store is cleared
                    let key = event.key();
                    if key.is_none()
                        || key.as_deref() == Some(ROLE_KEY)
                        || key.as_deref() == Some(EMAIL_KEY)
                    {
                        session.set(current_session());
                    }
                }
            });

            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    AUTH_EVENT,
                    on_auth.as_ref().unchecked_ref(),
                );
                let _ = window.add_event_listener_with_callback(
                    "storage",
                    on_storage.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        AUTH_EVENT,
                        on_auth.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "storage",
                        on_storage.as_ref().unchecked_ref(),
                    );
                }
                drop(on_auth);
                drop(on_storage);
            }
        });
    }

    session
}
