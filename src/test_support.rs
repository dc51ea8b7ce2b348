use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, Method, StatusCode, Uri,
    },
    response::IntoResponse,
    Router,
};

/// One request as seen by the fake backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
}

pub type Requests = Arc<Mutex<Vec<RecordedRequest>>>;

#[derive(Clone)]
struct BackendState {
    requests: Requests,
    status: StatusCode,
    body: String,
}

async fn record(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let header = |name| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().trim_start_matches('/').to_string(),
        body,
        content_type: header(CONTENT_TYPE),
        authorization: header(AUTHORIZATION),
    });

    (
        state.status,
        [(CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Spawn a request-capturing backend on an ephemeral port. Every route
/// answers with the given status and body; the captured requests come back
/// for assertions.
pub async fn spawn_backend(status: StatusCode, body: &str) -> (String, Requests) {
    let requests: Requests = Arc::new(Mutex::new(Vec::new()));
    let state = BackendState {
        requests: requests.clone(),
        status,
        body: body.to_string(),
    };
    let app = Router::new().fallback(record).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test backend");
    let addr = listener.local_addr().expect("test backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test backend");
    });

    (format!("http://{addr}"), requests)
}
