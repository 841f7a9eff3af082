use serde::{Deserialize, Serialize};

use crate::profile::{ProfileDto, ProfileUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration carries the athlete's current profile so the new account
/// starts from the values already entered locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: ProfileUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
}

/// Response of both login and register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthEnvelope {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
    pub user: UserDto,
    pub profile: ProfileDto,
}

fn bearer() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeEnvelope {
    pub user: UserDto,
    pub profile: ProfileDto,
}
