use crate::core::{stats, validator};
use crate::domain::model::{AppInfo, ErrorKind, FieldError, Summary};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const ROOT_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/health";
pub const SUMMARIZE_PATH: &str = "/calc/summarize";

#[derive(Clone)]
pub struct AppState {
    info: Arc<AppInfo>,
}

impl AppState {
    pub fn new(info: AppInfo) -> Self {
        Self {
            info: Arc::new(info),
        }
    }
}

#[derive(Debug, Serialize)]
struct RootInfo<'a> {
    message: &'a str,
    version: &'a str,
    endpoints: [&'static str; 2],
}

#[derive(Debug, Serialize)]
struct HealthStatus<'a> {
    status: &'static str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct ErrorBody<T: Serialize> {
    detail: T,
}

pub fn build_router<C: ConfigProvider>(config: &C) -> Router {
    let state = AppState::new(config.app_info());

    Router::new()
        .route(
            ROOT_PATH,
            get(root).fallback(|| async { method_not_allowed("GET, HEAD") }),
        )
        .route(
            HEALTH_PATH,
            get(health).fallback(|| async { method_not_allowed("GET, HEAD") }),
        )
        .route(
            SUMMARIZE_PATH,
            post(summarize_values).fallback(|| async { method_not_allowed("POST") }),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, build_router(config), shutdown_signal()).await
}

pub async fn serve_on<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Calculation service listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Calculation service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C, running until killed: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn root(State(state): State<AppState>) -> Response {
    Json(RootInfo {
        message: &state.info.name,
        version: &state.info.version,
        endpoints: [HEALTH_PATH, SUMMARIZE_PATH],
    })
    .into_response()
}

async fn health(State(state): State<AppState>) -> Response {
    Json(HealthStatus {
        status: "ok",
        version: &state.info.version,
    })
    .into_response()
}

async fn summarize_values(headers: HeaderMap, body: Bytes) -> Result<Json<Summary>> {
    let payload = decode_json_body(&headers, &body)?;
    let values = validator::validate_summarize_request(&payload)?;
    let summary = stats::summarize(values.as_slice())?;

    tracing::debug!(
        count = summary.count,
        mean = summary.mean,
        "Summarized values"
    );
    Ok(Json(summary))
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            detail: "Not Found",
        }),
    )
        .into_response()
}

fn method_not_allowed(allow: &'static str) -> Response {
    let mut response = (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            detail: "Method Not Allowed",
        }),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static(allow));
    response
}

/// Decode a request body as JSON.
///
/// A missing `Content-Type` is read as JSON; any other non-JSON media type is a
/// validation error rather than a 415 so that every body defect is a 422.
fn decode_json_body(headers: &HeaderMap, body: &[u8]) -> Result<Value> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        if !is_json_content_type(content_type) {
            return Err(CalcError::ValidationError(vec![FieldError::new(
                FieldError::body_path([]),
                ErrorKind::ContentType,
                format!(
                    "Expected a JSON request body, got Content-Type '{}'",
                    content_type.to_str().unwrap_or("<non-ascii>")
                ),
            )]));
        }
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CalcError::ValidationError(vec![FieldError::new(
            FieldError::body_path([]),
            ErrorKind::Missing,
            "field required",
        )]));
    }

    serde_json::from_slice(body).map_err(|e| {
        CalcError::ValidationError(vec![FieldError::new(
            FieldError::body_path([]),
            ErrorKind::JsonInvalid,
            format!("JSON decode error: {}", e),
        )])
    })
}

fn is_json_content_type(value: &HeaderValue) -> bool {
    let Ok(value) = value.to_str() else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        match self {
            CalcError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody { detail: errors }),
            )
                .into_response(),
            err if err.is_client_error() => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    detail: err.to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("❌ Request failed on the server side: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        detail: "Internal Server Error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
