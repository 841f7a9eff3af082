/// Whether the client currently believes the active backend answers.
///
/// Starts optimistic. Only a failed health probe moves it to `Unreachable`,
/// and only a successful probe (on the active or the fallback URL) moves it
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Reachable,
    Unreachable,
}

impl Connectivity {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Connectivity::Reachable)
    }

    pub fn after_probe(self, succeeded: bool) -> Self {
        if succeeded {
            Connectivity::Reachable
        } else {
            Connectivity::Unreachable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Connectivity::Reachable => "reachable",
            Connectivity::Unreachable => "unreachable",
        }
    }
}

/// Loopback hosts a developer may have stopped since the last check.
pub fn is_local_dev_url(url: &str) -> bool {
    let lowercase = url.to_lowercase();
    lowercase.contains("127.0.0.1") || lowercase.contains("localhost")
}
