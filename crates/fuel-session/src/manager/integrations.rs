use fuel_core::is_local_dev_url;
use fuel_protocol::{paths, IntegrationsEnvelope, OAuthStartEnvelope, SyncEnvelope, SyncKind};
use tracing::{info, warn};
use url::Url;

use crate::messages;

use super::SessionManager;

impl SessionManager {
    pub async fn load_integrations(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.run_request(async {
            let envelope: IntegrationsEnvelope = self.get(paths::INTEGRATIONS).await?;
            self.update(|state| state.integrations = envelope.items);
            Ok(())
        })
        .await
    }

    /// Asks the backend where to send the user to connect `provider`. A local
    /// development backend that cannot be reached stops the flow before any
    /// call is made.
    pub async fn oauth_start_url(&self, provider: &str) -> Option<Url> {
        if !self.is_authenticated() {
            return None;
        }
        if is_local_dev_url(&self.base_url()) && !self.ensure_reachable().await {
            self.update(|state| state.error_message = messages::CONNECT_FAILED.to_string());
            return None;
        }

        let mut authorize_url = None;
        let path = paths::oauth_start(provider, &self.settings.oauth_client);
        let ok = self
            .run_request(async {
                let envelope: OAuthStartEnvelope = self.post_empty(&path).await?;
                authorize_url = Some(envelope.authorize_url);
                Ok(())
            })
            .await;
        if !ok {
            return None;
        }

        let authorize_url = authorize_url?;
        match Url::parse(&authorize_url) {
            Ok(url) => Some(url),
            Err(error) => {
                warn!(%provider, %error, "backend returned an invalid authorize URL");
                self.update(|state| {
                    state.error_message = format!("Invalid authorize URL: {}", authorize_url);
                });
                None
            }
        }
    }

    /// Imports activities from a connected provider. Returns how many were
    /// synced; workouts and integration status are reloaded afterwards.
    pub async fn sync_provider(&self, provider: &str, kind: SyncKind) -> Option<i64> {
        if !self.is_authenticated() {
            return None;
        }

        let mut synced = None;
        let path = paths::sync(provider, kind.as_str(), self.settings.sync_limit);
        let ok = self
            .run_request(async {
                let envelope: SyncEnvelope = self.post_empty(&path).await?;
                synced = Some(envelope.synced);
                Ok(())
            })
            .await;

        if !ok {
            return None;
        }
        info!(%provider, kind = kind.as_str(), synced = ?synced, "provider synced");
        self.load_workouts().await;
        self.load_integrations().await;
        synced
    }
}
