use fuel_core::AthleteProfile;
use fuel_protocol::{
    paths, AuthEnvelope, LoginRequest, MeEnvelope, ProfileEnvelope, ProfileUpdate,
    RegisterRequest,
};
use tracing::info;

use super::SessionManager;

impl SessionManager {
    pub async fn register(&self, email: &str, password: &str) -> bool {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            profile: ProfileUpdate::from_profile(&self.snapshot().profile),
        };

        let signed_in = self
            .run_request(async {
                let envelope: AuthEnvelope = self
                    .client
                    .post(paths::REGISTER, &request, &self.base_url(), None)
                    .await?;
                self.sign_in(envelope);
                Ok(())
            })
            .await;

        if signed_in {
            self.load_all().await;
        }
        signed_in
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let signed_in = self
            .run_request(async {
                let envelope: AuthEnvelope = self
                    .client
                    .post(paths::LOGIN, &request, &self.base_url(), None)
                    .await?;
                self.sign_in(envelope);
                Ok(())
            })
            .await;

        if signed_in {
            self.load_all().await;
        }
        signed_in
    }

    fn sign_in(&self, envelope: AuthEnvelope) {
        let profile = envelope.profile.into_profile();
        self.update(|state| {
            state
                .session
                .sign_in(envelope.access_token, envelope.user.email);
            state.profile = profile;
        });
        self.storage.save_auth(&self.session());
        info!(user_id = envelope.user.id, "signed in");
    }

    pub async fn refresh_me(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.run_request(async {
            let envelope: MeEnvelope = self.get(paths::ME).await?;
            let profile = envelope.profile.into_profile();
            self.update(|state| {
                state.session.user_email = envelope.user.email;
                state.profile = profile;
            });
            self.storage.save_auth(&self.session());
            Ok(())
        })
        .await
    }

    /// Local edit; nothing is sent until `save_profile`.
    pub fn set_profile(&self, profile: AthleteProfile) {
        self.update(|state| state.profile = profile);
    }

    pub async fn save_profile(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.run_request(async {
            let update = ProfileUpdate::from_profile(&self.snapshot().profile);
            let envelope: ProfileEnvelope = self.put(paths::PROFILE, &update).await?;
            let profile = envelope.profile.into_profile();
            self.update(|state| state.profile = profile);
            Ok(())
        })
        .await
    }

    /// Every collection in a fixed order. Each load is its own action, so
    /// one failing does not stop the others.
    pub async fn load_all(&self) {
        self.load_foods().await;
        self.load_workouts().await;
        self.load_integrations().await;
        self.load_analytics().await;
    }

    pub async fn bootstrap(&self) {
        self.ensure_reachable().await;
        if self.is_authenticated() && self.refresh_me().await {
            self.load_all().await;
        }
    }
}
