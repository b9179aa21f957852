use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::window;

const LOGGED_IN_KEY: &str = "loggedIn";
const AUTH_TOKEN_KEY: &str = "authToken";
const DARK_MODE_KEY: &str = "darkMode";

/// Tab-scoped key/value persistence
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.sessionStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        get_session_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_session_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Token of a previous login in this tab, if the tab is still marked logged in
pub fn load_token(store: &dyn SessionStore) -> Option<String> {
    if store.get(LOGGED_IN_KEY).as_deref() != Some("true") {
        return None;
    }
    store.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn save_token(store: &dyn SessionStore, token: &str) {
    store.set(LOGGED_IN_KEY, "true");
    store.set(AUTH_TOKEN_KEY, token);
}

pub fn load_dark_mode(store: &dyn SessionStore) -> bool {
    store.get(DARK_MODE_KEY).as_deref() == Some("true")
}

pub fn save_dark_mode(store: &dyn SessionStore, enabled: bool) {
    store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" });
}

/// Forget everything this dashboard keeps in the tab
pub fn clear_session(store: &dyn SessionStore) {
    store.remove(LOGGED_IN_KEY);
    store.remove(AUTH_TOKEN_KEY);
    store.remove(DARK_MODE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_requires_logged_in_flag() {
        let store = MemorySessionStore::default();
        store.set(AUTH_TOKEN_KEY, "t-1");
        assert_eq!(load_token(&store), None);

        save_token(&store, "t-2");
        assert_eq!(load_token(&store).as_deref(), Some("t-2"));
    }

    #[test]
    fn test_clear_session_removes_all_keys() {
        let store = MemorySessionStore::default();
        save_token(&store, "t-1");
        save_dark_mode(&store, true);
        clear_session(&store);
        assert_eq!(load_token(&store), None);
        assert!(!load_dark_mode(&store));
        assert_eq!(store.get(LOGGED_IN_KEY), None);
    }

    #[test]
    fn test_dark_mode_flag() {
        let store = MemorySessionStore::default();
        assert!(!load_dark_mode(&store));
        save_dark_mode(&store, true);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));
        save_dark_mode(&store, false);
        assert!(!load_dark_mode(&store));
    }
}
