//! In-process stub of the Onboard API for backend integration tests.
//!
//! Responses are scripted per `"METHOD /path"`. A route scripted with several
//! responses serves them in order and then keeps repeating the last one.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// A request the stub received.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
    pub body: String,
}

#[derive(Default)]
pub struct StubApi {
    routes: Mutex<HashMap<String, VecDeque<(u16, String)>>>,
    seen: Mutex<Vec<SeenRequest>>,
}

impl StubApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Script responses for a route such as `"GET /buildings"`.
    pub fn route(self: &Arc<Self>, route: &str, responses: &[(u16, &str)]) -> Arc<Self> {
        self.routes.lock().unwrap().insert(
            route.to_string(),
            responses
                .iter()
                .map(|(status, body)| (*status, (*body).to_string()))
                .collect(),
        );
        Arc::clone(self)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    /// Requests whose path ends with `suffix`.
    pub fn requests_to(&self, suffix: &str) -> Vec<SeenRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.ends_with(suffix))
            .collect()
    }

    fn next_response(&self, route: &str) -> (u16, String) {
        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(route) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => (404, format!("\"no route for {route}\"")),
        }
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn handle(
    State(stub): State<Arc<StubApi>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    stub.seen.lock().unwrap().push(SeenRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header_value(&headers, header::AUTHORIZATION),
        user_agent: header_value(&headers, header::USER_AGENT),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let (status, body) = stub.next_response(&format!("{method} {}", uri.path()));
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Serve the stub on an ephemeral port; returns its base URL.
pub async fn serve(stub: Arc<StubApi>) -> String {
    let app = Router::new().fallback(handle).with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
