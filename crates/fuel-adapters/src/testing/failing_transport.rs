use async_trait::async_trait;
use fuel_core::{HttpRequest, HttpResponse, HttpTransport, TransportError, TransportErrorKind};

/// Transport where every request fails before reaching a server.
pub struct FailingTransport {
    error: TransportError,
}

impl FailingTransport {
    pub fn connection_refused() -> Self {
        Self::with_error(TransportError::new(
            TransportErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }

    pub fn timeout() -> Self {
        Self::with_error(TransportError::new(
            TransportErrorKind::Timeout,
            "timed out",
        ))
    }

    pub fn offline() -> Self {
        Self::with_error(TransportError::new(
            TransportErrorKind::Offline,
            "network is unreachable",
        ))
    }

    pub fn with_error(error: TransportError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl HttpTransport for FailingTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuel_core::HttpMethod;

    #[tokio::test]
    async fn every_request_fails_with_configured_kind() {
        let transport = FailingTransport::timeout();
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "https://api.example.com/api/v1/health".to_string(),
            headers: Vec::new(),
            body: None,
        };

        let error = transport.execute(request).await.unwrap_err();

        assert_eq!(error.kind, TransportErrorKind::Timeout);
    }
}
