use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use fuel_core::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError, TransportErrorKind,
};

type Outcome = Result<HttpResponse, TransportError>;

/// Scripted transport keyed by method and full URL.
///
/// Each route replays its queued outcomes in order and then keeps repeating
/// the last one served. Outcomes given later are served next. Unknown routes answer 404 so a missing stub shows up as an
/// HTTP error rather than a panic. Every request is recorded.
#[derive(Default)]
struct Route {
    pending: VecDeque<Outcome>,
    last: Option<Outcome>,
}

impl Route {
    fn next(&mut self) -> Outcome {
        if let Some(outcome) = self.pending.pop_front() {
            self.last = Some(outcome.clone());
            return outcome;
        }
        self.last
            .clone()
            .unwrap_or_else(|| Ok(HttpResponse::new(500, "")))
    }
}

pub struct StubTransport {
    routes: Mutex<HashMap<(HttpMethod, String), Route>>,
    calls: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn given(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
        self.push(method, url, Ok(HttpResponse::new(status, body)));
    }

    pub fn given_json(&self, method: HttpMethod, url: &str, body: &str) {
        self.given(method, url, 200, body);
    }

    pub fn given_empty(&self, method: HttpMethod, url: &str, status: u16) {
        self.given(method, url, status, "");
    }

    pub fn given_transport_error(&self, method: HttpMethod, url: &str, kind: TransportErrorKind) {
        self.push(method, url, Err(TransportError::new(kind, "stubbed failure")));
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|request| request.url).collect()
    }

    pub fn call_count(&self, method: HttpMethod, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.method == method && request.url == url)
            .count()
    }

    fn push(&self, method: HttpMethod, url: &str, outcome: Outcome) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, url.to_string()))
            .or_default()
            .pending
            .push_back(outcome);
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method, request.url.clone());
        self.calls.lock().unwrap().push(request);

        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(&key) {
            Some(route) => route.next(),
            None => Ok(HttpResponse::new(
                404,
                format!(r#"{{"detail":"no stub for {} {}"}}"#, key.0, key.1),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn replays_queue_then_repeats_last_outcome() {
        let transport = StubTransport::new();
        transport.given_transport_error(
            HttpMethod::Get,
            "http://a/health",
            TransportErrorKind::ConnectionRefused,
        );
        transport.given_json(HttpMethod::Get, "http://a/health", r#"{"ok":true}"#);

        assert!(transport.execute(get("http://a/health")).await.is_err());
        assert_eq!(transport.execute(get("http://a/health")).await.unwrap().status, 200);
        assert_eq!(transport.execute(get("http://a/health")).await.unwrap().status, 200);
        assert_eq!(transport.call_count(HttpMethod::Get, "http://a/health"), 3);
    }

    #[tokio::test]
    async fn outcome_given_after_a_call_replaces_the_served_one() {
        let transport = StubTransport::new();
        transport.given_json(HttpMethod::Get, "http://a/foods", r#"{"items":[]}"#);
        assert_eq!(transport.execute(get("http://a/foods")).await.unwrap().status, 200);

        transport.given(HttpMethod::Get, "http://a/foods", 503, "");

        assert_eq!(transport.execute(get("http://a/foods")).await.unwrap().status, 503);
        assert_eq!(transport.execute(get("http://a/foods")).await.unwrap().status, 503);
    }

    #[tokio::test]
    async fn unknown_route_answers_not_found() {
        let transport = StubTransport::new();

        let response = transport.execute(get("http://a/missing")).await.unwrap();

        assert_eq!(response.status, 404);
        assert!(response.body.contains("no stub for GET http://a/missing"));
    }
}
