//! HTTP server setup and routing.

pub mod proxy;
pub mod routes;

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Router,
};
use reqwest::Client;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::core::fetch::UrlFetcher;
use crate::utils::error::Result;

/// Identity string stamped on every response and served by `/login/`.
pub const SYSTEM_LOGIN: &str = "d5e5c122-0957-4501-971a-e81248c8522c";

pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";
pub const TEXT_HTML_UTF8: &str = "text/html; charset=utf-8";

const ALLOWED_METHODS: &str = "GET,POST,PUT,PATCH,OPTIONS,DELETE";
const ALLOWED_HEADERS: &str =
    "Content-Type, Authorization, ngrok-skip-browser-warning,Access-Control-Allow-Headers, x-test";

pub const X_AUTHOR: &str = "x-author";

/// Request-independent process state: one shared HTTP client (the fetcher
/// and the proxy reuse its connection pool) and the immutable configuration.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<UrlFetcher>,
    pub client: Client,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let client = Client::new();
        Self {
            fetcher: Arc::new(UrlFetcher::new(client.clone())),
            client,
            config: Arc::new(config),
        }
    }
}

/// Permissive CORS plus the fixed identity header on every response.
/// `OPTIONS` requests short-circuit with 204 and no body before routing.
///
/// Headers already set further in (the proxy rewrites its own CORS set) are
/// left untouched.
async fn identity_headers(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers
        .entry(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .or_insert(HeaderValue::from_static("*"));
    headers
        .entry(header::ACCESS_CONTROL_ALLOW_METHODS)
        .or_insert(HeaderValue::from_static(ALLOWED_METHODS));
    headers
        .entry(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .or_insert(HeaderValue::from_static(ALLOWED_HEADERS));
    headers
        .entry(X_AUTHOR)
        .or_insert(HeaderValue::from_static(SYSTEM_LOGIN));

    response
}

/// Build the axum router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/req/", get(routes::relay_query).post(routes::relay_body))
        .route("/render/", post(routes::render_remote))
        .route("/login/", get(routes::login))
        .route("/code/", get(routes::code))
        .route("/sha1/{input}/", get(routes::sha1_digest))
        .route("/insert/", post(routes::insert_user))
        .route("/wordpress", any(proxy::forward))
        .route("/wordpress/{*rest}", any(proxy::forward))
        .fallback(routes::fallback)
        .method_not_allowed_fallback(routes::fallback)
        .layer(middleware::from_fn(identity_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the edge server.
///
/// This function blocks until the server is shut down.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let router = build_router(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "edge server listening");

    axum::serve(listener, router).await?;
    Ok(())
}
