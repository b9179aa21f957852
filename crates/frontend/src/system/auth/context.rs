use super::storage::{self, SessionStore};

/// Authentication half of the operator session.
///
/// The dark-mode half lives in `ThemeContext`; both persist through the same
/// [`SessionStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Restore a session cached earlier in this tab
    pub fn restore(store: &dyn SessionStore) -> Self {
        Self {
            token: storage::load_token(store),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, store: &dyn SessionStore, token: String) {
        storage::save_token(store, &token);
        self.token = Some(token);
    }

    pub fn sign_out(&mut self, store: &dyn SessionStore) {
        storage::clear_session(store);
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemorySessionStore;

    #[test]
    fn test_sign_in_persists_and_restores() {
        let store = MemorySessionStore::default();
        let mut session = Session::restore(&store);
        assert!(!session.is_authenticated());

        session.sign_in(&store, "t-9".to_string());
        assert_eq!(session.token(), Some("t-9"));
        assert_eq!(Session::restore(&store), session);
    }

    #[test]
    fn test_sign_out_forgets_token() {
        let store = MemorySessionStore::default();
        let mut session = Session::default();
        session.sign_in(&store, "t-9".to_string());
        session.sign_out(&store);
        assert!(!session.is_authenticated());
        assert!(!Session::restore(&store).is_authenticated());
    }
}
