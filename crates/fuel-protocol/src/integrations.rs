use std::str::FromStr;

use fuel_core::UnknownOptionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationStatus {
    pub provider: String,
    pub connected: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationsEnvelope {
    pub items: Vec<IntegrationStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthStartEnvelope {
    pub authorize_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEnvelope {
    pub synced: i64,
}

/// Which activities a provider sync imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncKind {
    #[default]
    Completed,
    Planned,
}

impl SyncKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncKind::Completed => "completed",
            SyncKind::Planned => "planned",
        }
    }
}

impl FromStr for SyncKind {
    type Err = UnknownOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "completed" => Ok(SyncKind::Completed),
            "planned" => Ok(SyncKind::Planned),
            _ => Err(UnknownOptionError {
                kind: "sync kind",
                value: value.to_string(),
            }),
        }
    }
}
