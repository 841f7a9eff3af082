use std::io;

use async_trait::async_trait;
use fuel_core::{HttpRequest, HttpResponse, HttpTransport, TransportError, TransportErrorKind};

/// Blocking `ureq` agent driven from a tokio blocking thread.
///
/// Non-2xx statuses come back as `Ok`: only failures to get any HTTP
/// response at all are transport errors.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    fn send(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut call = agent.request(request.method.as_str(), &request.url);
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        let outcome = match &request.body {
            Some(body) => call.send_string(body),
            None => call.call(),
        };

        match outcome {
            Ok(response) => read_response(response),
            Err(ureq::Error::Status(_, response)) => read_response(response),
            Err(ureq::Error::Transport(transport)) => Err(classify(&transport)),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn read_response(response: ureq::Response) -> Result<HttpResponse, TransportError> {
    let status = response.status();
    let body = response.into_string().map_err(|error| {
        TransportError::new(TransportErrorKind::ConnectionLost, error.to_string())
    })?;
    Ok(HttpResponse::new(status, body))
}

fn classify(transport: &ureq::Transport) -> TransportError {
    let message = transport.to_string();
    let io_kind = std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .map(io::Error::kind);

    let kind = match (transport.kind(), io_kind) {
        (_, Some(io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)) => TransportErrorKind::Timeout,
        (ureq::ErrorKind::Dns, _) => TransportErrorKind::Dns,
        _ if message.to_lowercase().contains("network is unreachable") => TransportErrorKind::Offline,
        (ureq::ErrorKind::ConnectionFailed, _) => TransportErrorKind::ConnectionRefused,
        (_, Some(io::ErrorKind::ConnectionRefused)) => TransportErrorKind::ConnectionRefused,
        (ureq::ErrorKind::Io, _) => TransportErrorKind::ConnectionLost,
        _ => TransportErrorKind::Other,
    };

    TransportError::new(kind, message)
}

#[async_trait]
impl HttpTransport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        let method = request.method;
        let url = request.url.clone();

        let response = tokio::task::spawn_blocking(move || Self::send(&agent, request))
            .await
            .map_err(|error| {
                TransportError::new(TransportErrorKind::Other, format!("task join error: {}", error))
            })??;

        tracing::trace!(%method, %url, status = response.status, "http exchange finished");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuel_core::HttpMethod;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves exactly one canned response and hands back the raw request text.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let raw = read_request(&mut stream);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            raw
        });

        (address, handle)
    }

    fn read_request(stream: &mut impl Read) -> String {
        let mut received = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = stream.read(&mut chunk).unwrap();
            if read == 0 {
                break;
            }
            received.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&received).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if received.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&received).to_string()
    }

    fn get(url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![("Authorization".to_string(), "Bearer abc".to_string())],
            body: None,
        }
    }

    #[tokio::test]
    async fn returns_body_of_successful_response() {
        let (address, server) = serve_once("200 OK", r#"{"ok":true}"#);
        let transport = UreqTransport::new();

        let response = transport
            .execute(get(format!("{}/api/v1/health", address)))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"ok":true}"#);

        let raw = server.join().unwrap();
        assert!(raw.starts_with("GET /api/v1/health"));
        assert!(raw.to_lowercase().contains("authorization: bearer abc"));
    }

    #[tokio::test]
    async fn error_statuses_are_responses_not_transport_failures() {
        let (address, server) = serve_once("401 Unauthorized", r#"{"detail":"Invalid token"}"#);
        let transport = UreqTransport::new();

        let response = transport
            .execute(get(format!("{}/api/v1/auth/me", address)))
            .await
            .unwrap();

        assert_eq!(response.status, 401);
        assert_eq!(response.body, r#"{"detail":"Invalid token"}"#);
        server.join().unwrap();
    }

    #[tokio::test]
    async fn sends_request_body() {
        let (address, server) = serve_once("200 OK", "{}");
        let transport = UreqTransport::new();

        let request = HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/api/v1/foods", address),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(r#"{"name":"Gel"}"#.to_string()),
        };
        transport.execute(request).await.unwrap();

        let raw = server.join().unwrap();
        assert!(raw.starts_with("POST /api/v1/foods"));
        assert!(raw.ends_with(r#"{"name":"Gel"}"#));
    }

    #[tokio::test]
    async fn closed_port_is_a_connectivity_failure() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let transport = UreqTransport::new();

        let result = transport
            .execute(get(format!("http://127.0.0.1:{}/api/v1/health", port)))
            .await;

        let error = result.unwrap_err();
        assert_eq!(error.kind, TransportErrorKind::ConnectionRefused);
    }
}
