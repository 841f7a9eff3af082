use std::sync::Arc;

use fuel_core::{KeyValueStore, Session};
use tracing::warn;

/// Reads and writes the session keys. Storage failures are logged and
/// otherwise ignored: losing a persisted token only means signing in again.
#[derive(Clone)]
pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// A missing or blank persisted base URL falls back to `default_base_url`.
    pub fn load(&self, default_base_url: &str) -> Session {
        let base_url = self
            .read(Session::BASE_URL_KEY)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| default_base_url.to_string());

        let mut session = Session::new(base_url);
        session.sign_in(
            self.read(Session::TOKEN_KEY).unwrap_or_default(),
            self.read(Session::EMAIL_KEY).unwrap_or_default(),
        );
        session
    }

    pub fn save_auth(&self, session: &Session) {
        self.write(Session::TOKEN_KEY, &session.auth_token);
        self.write(Session::EMAIL_KEY, &session.user_email);
    }

    pub fn save_base_url(&self, base_url: &str) {
        self.write(Session::BASE_URL_KEY, base_url);
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(error) => {
                warn!(key, %error, "could not read persisted session value");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        let result = if value.is_empty() {
            self.store.remove(key)
        } else {
            self.store.set(key, value)
        };
        if let Err(error) = result {
            warn!(key, %error, "could not persist session value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuel_adapters::MemoryKeyValueStore;

    #[test]
    fn empty_store_yields_signed_out_session_on_default_url() {
        let storage = SessionStorage::new(Arc::new(MemoryKeyValueStore::new()));

        let session = storage.load("https://carbs-api.onrender.com");

        assert_eq!(session.base_url, "https://carbs-api.onrender.com");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn persisted_values_win_over_default() {
        let store = Arc::new(MemoryKeyValueStore::with_entries(&[
            ("api_base_url", "https://staging.example.com"),
            ("access_token", "abc"),
            ("user_email", "rider@example.com"),
        ]));
        let storage = SessionStorage::new(store);

        let session = storage.load("https://carbs-api.onrender.com");

        assert_eq!(session.base_url, "https://staging.example.com");
        assert_eq!(session.auth_token, "abc");
        assert_eq!(session.user_email, "rider@example.com");
    }

    #[test]
    fn saving_a_signed_out_session_removes_credentials() {
        let store = Arc::new(MemoryKeyValueStore::with_entries(&[
            ("access_token", "abc"),
            ("user_email", "rider@example.com"),
        ]));
        let storage = SessionStorage::new(store.clone());

        storage.save_auth(&Session::new("https://api.example.com"));

        assert_eq!(store.value("access_token"), None);
        assert_eq!(store.value("user_email"), None);
    }
}
