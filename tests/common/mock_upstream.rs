//! Stand-in for the upstream assets API.
//!
//! Serves `GET /v2/assets` from a queue of scripted replies and records every
//! request it sees. Any other path answers 404.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

pub const ASSETS_PATH: &str = "/v2/assets";

/// What the mock saw for one request.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

impl SeenRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// One scripted reply.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Duration,
}

impl Default for Reply {
    /// An empty listing.
    fn default() -> Self {
        Self::listing(r#"{"data": []}"#)
    }
}

impl Reply {
    pub fn listing(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// CoinCap-style error envelope with the given status.
    pub fn failure(status: u16, message: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: serde_json::json!({ "error": message }).to_string(),
            ..Self::default()
        }
    }

    /// A 200 that is not JSON, like a captive portal or CDN error page.
    pub fn html(body: &str) -> Self {
        Self {
            content_type: "text/html",
            body: body.to_string(),
            ..Self::default()
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Default)]
struct Shared {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    shared: Shared,
    stop: watch::Sender<bool>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new()
            .route(ASSETS_PATH, get(serve_assets))
            .fallback(not_found)
            .with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream addr");

        let (stop, mut stopped) = watch::channel(false);
        tokio::spawn(async move {
            let shutdown = async move {
                let _ = stopped.changed().await;
            };
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await;
        });

        Self { addr, shared, stop }
    }

    pub async fn push(&self, reply: Reply) {
        self.shared.replies.lock().await.push_back(reply);
    }

    pub async fn seen(&self) -> Vec<SeenRequest> {
        self.shared.seen.lock().await.clone()
    }

    pub fn assets_url(&self) -> String {
        format!("http://{}{}", self.addr, ASSETS_PATH)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}

async fn serve_assets(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    shared.seen.lock().await.push(SeenRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
    });

    let reply = shared.replies.lock().await.pop_front().unwrap_or_default();
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (
        reply.status,
        [(header::CONTENT_TYPE, reply.content_type)],
        reply.body,
    )
        .into_response()
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, format!("no route for {}", uri.path()))
}
