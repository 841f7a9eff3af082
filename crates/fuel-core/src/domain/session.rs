use super::Connectivity;

/// Authentication and backend selection of the running client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub auth_token: String,
    pub user_email: String,
    pub base_url: String,
    pub connectivity: Connectivity,
}

impl Session {
    pub const BASE_URL_KEY: &'static str = "api_base_url";
    pub const TOKEN_KEY: &'static str = "access_token";
    pub const EMAIL_KEY: &'static str = "user_email";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.auth_token.is_empty()
    }

    pub fn is_server_reachable(&self) -> bool {
        self.connectivity.is_reachable()
    }

    pub fn sign_in(&mut self, token: impl Into<String>, email: impl Into<String>) {
        self.auth_token = token.into();
        self.user_email = email.into();
    }

    pub fn sign_out(&mut self) {
        self.auth_token.clear();
        self.user_email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_unauthenticated_and_reachable() {
        let session = Session::new("https://example.com");

        assert!(!session.is_authenticated());
        assert!(session.is_server_reachable());
        assert_eq!(session.base_url, "https://example.com");
    }

    #[test]
    fn sign_in_and_out_toggle_authentication() {
        let mut session = Session::new("https://example.com");

        session.sign_in("token-123", "rider@example.com");
        assert!(session.is_authenticated());
        assert_eq!(session.user_email, "rider@example.com");

        session.sign_out();
        assert!(!session.is_authenticated());
        assert!(session.user_email.is_empty());
        assert_eq!(session.base_url, "https://example.com");
    }
}
