use thiserror::Error;

use crate::ports::TransportError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Invalid API URL")]
    InvalidUrl { url: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("unexpected response from server: {message}")]
    Decode { message: String },

    #[error("could not encode request: {message}")]
    Encode { message: String },
}

impl ApiError {
    /// Failures that say nothing about the server itself, only about reaching it.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::TransportErrorKind;

    #[test]
    fn only_transport_errors_are_connectivity() {
        let transport = ApiError::from(TransportError::new(
            TransportErrorKind::ConnectionRefused,
            "refused",
        ));
        let http = ApiError::Http {
            status: 503,
            message: "down".to_string(),
        };
        let decode = ApiError::Decode {
            message: "missing field".to_string(),
        };

        assert!(transport.is_connectivity());
        assert!(!http.is_connectivity());
        assert!(!decode.is_connectivity());
    }

    #[test]
    fn http_errors_display_their_message_as_is() {
        let error = ApiError::Http {
            status: 400,
            message: "strava is not connected".to_string(),
        };

        assert_eq!(error.to_string(), "strava is not connected");
        assert_eq!(error.status(), Some(400));
    }
}
