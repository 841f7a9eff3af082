mod account;
mod foods;
mod integrations;
mod planning;
mod workouts;

#[cfg(test)]
mod test_support;

use std::future::Future;
use std::sync::Arc;

use fuel_core::{
    is_local_dev_url, ApiClient, ApiError, Config, Connectivity, HttpTransport, KeyValueStore,
    Session, SimpleOk,
};
use fuel_protocol::{paths, HealthEnvelope};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::messages;
use crate::persistence::SessionStorage;
use crate::state::StoreState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerSettings {
    /// Backend switched to when the active one stops answering.
    pub fallback_url: String,
    pub oauth_client: String,
    pub workout_limit: u32,
    pub analytics_days: u32,
    pub sync_limit: u32,
    pub heal_local_on_start: bool,
}

impl ManagerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            fallback_url: config.api.fallback_url.clone(),
            oauth_client: config.api.oauth_client.clone(),
            workout_limit: config.fetch.workout_limit,
            analytics_days: config.fetch.analytics_days,
            sync_limit: config.fetch.sync_limit,
            heal_local_on_start: config.api.heal_local_on_start,
        }
    }
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Single owner of the client state.
///
/// Every method takes `&self`, so several actions may be in flight at once.
/// They are not serialized: each one applies its result when its own call
/// resolves, and the last response to arrive wins. An in-flight request cannot
/// be cancelled.
pub struct SessionManager {
    client: ApiClient,
    storage: SessionStorage,
    settings: ManagerSettings,
    state: watch::Sender<StoreState>,
}

impl SessionManager {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn KeyValueStore>,
        config: &Config,
    ) -> Self {
        Self::with_settings(
            transport,
            store,
            &config.default_base_url(),
            ManagerSettings::from_config(config),
        )
    }

    pub fn with_settings(
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn KeyValueStore>,
        default_base_url: &str,
        settings: ManagerSettings,
    ) -> Self {
        let storage = SessionStorage::new(store);
        let mut session = storage.load(default_base_url);

        if settings.heal_local_on_start && is_local_dev_url(&session.base_url) {
            info!(
                from = %session.base_url,
                to = %settings.fallback_url,
                "replacing local development backend on start"
            );
            session.base_url = settings.fallback_url.clone();
            storage.save_base_url(&session.base_url);
        }

        let (state, _) = watch::channel(StoreState::new(session));

        Self {
            client: ApiClient::new(transport),
            storage,
            settings,
            state,
        }
    }

    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receivers are notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn session(&self) -> Session {
        self.state.borrow().session.clone()
    }

    pub fn base_url(&self) -> String {
        self.state.borrow().session.base_url.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub(crate) fn update(&self, mutate: impl FnOnce(&mut StoreState)) {
        self.state.send_modify(mutate);
    }

    fn endpoint(&self) -> (String, String) {
        let state = self.state.borrow();
        (
            state.session.base_url.clone(),
            state.session.auth_token.clone(),
        )
    }

    /// Probes the active backend, then the fallback. Switching to the
    /// fallback is persisted so the next start uses it directly.
    pub async fn ensure_reachable(&self) -> bool {
        let base_url = self.base_url();
        if self.probe(&base_url).await {
            self.update(|state| {
                state.session.connectivity = state.session.connectivity.after_probe(true);
            });
            return true;
        }

        let fallback_url = self.settings.fallback_url.clone();
        if base_url != fallback_url && self.probe(&fallback_url).await {
            info!(from = %base_url, to = %fallback_url, "switched to fallback backend");
            self.storage.save_base_url(&fallback_url);
            self.update(|state| {
                state.session.base_url = fallback_url;
                state.session.connectivity = Connectivity::Reachable;
                state.status_message = messages::SWITCHED_TO_CLOUD.to_string();
            });
            return true;
        }

        warn!(%base_url, "backend unreachable");
        self.update(|state| {
            state.session.connectivity = state.session.connectivity.after_probe(false);
        });
        false
    }

    async fn probe(&self, base_url: &str) -> bool {
        match self
            .client
            .get::<HealthEnvelope>(paths::HEALTH, base_url, None)
            .await
        {
            Ok(_) => true,
            Err(error) => {
                debug!(%base_url, %error, "health probe failed");
                false
            }
        }
    }

    pub async fn test_connection(&self) -> bool {
        self.update(|state| {
            state.is_loading = true;
            state.error_message.clear();
        });

        let reachable = self.ensure_reachable().await;
        let base_url = self.base_url();

        self.update(|state| {
            if reachable {
                state.status_message = messages::server_reachable(&base_url);
            } else {
                state.status_message.clear();
                state.error_message = messages::CONNECT_FAILED_RETRY_LATER.to_string();
            }
            state.is_loading = false;
        });
        reachable
    }

    /// Points the client at another backend. The new URL is assumed reachable
    /// until a call says otherwise.
    pub fn set_base_url(&self, base_url: &str) {
        let base_url = base_url.trim().to_string();
        self.storage.save_base_url(&base_url);
        self.update(|state| {
            state.session.base_url = base_url;
            state.session.connectivity = Connectivity::Reachable;
            state.status_message.clear();
        });
    }

    /// Local only: the backend is not told.
    pub fn logout(&self) {
        self.update(StoreState::clear_account);
        self.storage.save_auth(&self.session());
        info!("signed out");
    }

    /// Runs one backend action behind the reachability policy.
    ///
    /// `action` must read the base URL and token when polled, not before:
    /// a failover performed here changes them.
    pub(crate) async fn run_request<F>(&self, action: F) -> bool
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        self.update(|state| {
            state.is_loading = true;
            state.error_message.clear();
        });

        let reachable = self.state.borrow().session.is_server_reachable();
        if !reachable && !self.ensure_reachable().await {
            self.update(|state| {
                state.error_message = messages::BACKEND_UNAVAILABLE.to_string();
                state.is_loading = false;
            });
            return false;
        }

        if is_local_dev_url(&self.base_url()) {
            self.ensure_reachable().await;
        }

        match action.await {
            Ok(()) => {
                self.update(|state| {
                    state.session.connectivity = Connectivity::Reachable;
                    state.is_loading = false;
                });
                true
            }
            Err(error) => {
                if error.is_connectivity() && self.ensure_reachable().await {
                    self.update(|state| {
                        state.error_message = messages::RETRY_AFTER_FAILOVER.to_string();
                        state.is_loading = false;
                    });
                    return false;
                }

                let message = self.normalize(&error);
                let connectivity = if error.is_connectivity() {
                    Connectivity::Unreachable
                } else {
                    Connectivity::Reachable
                };
                self.update(|state| {
                    state.error_message = message;
                    state.session.connectivity = connectivity;
                    state.is_loading = false;
                });
                false
            }
        }
    }

    pub(crate) fn normalize(&self, error: &ApiError) -> String {
        if error.status() == Some(401) && self.is_authenticated() {
            warn!("backend rejected the session token");
            self.logout();
            return messages::SESSION_EXPIRED.to_string();
        }
        debug!(%error, "backend action failed");
        messages::describe(error, &self.base_url())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (base_url, token) = self.endpoint();
        self.client.get(path, &base_url, Some(&token)).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let (base_url, token) = self.endpoint();
        self.client.post(path, body, &base_url, Some(&token)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (base_url, token) = self.endpoint();
        self.client.post_empty(path, &base_url, Some(&token)).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let (base_url, token) = self.endpoint();
        self.client.put(path, body, &base_url, Some(&token)).await
    }

    async fn delete(&self, path: &str) -> Result<SimpleOk, ApiError> {
        let (base_url, token) = self.endpoint();
        self.client.delete(path, &base_url, Some(&token)).await
    }
}
