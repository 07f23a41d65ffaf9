//! HTTP transport implementation.
//!
//! REST endpoints under the fixed `/v0.1` prefix:
//!
//! - `GET  /v0.1/health` - static health report
//! - `GET  /v0.1/tools` - tool listing
//! - `POST /v0.1/tools/<name>/invoke` - tool invocation with `{"args": {...}}`
//!
//! Every other path or method answers `404 {"error": "not found"}`.
//! Request bodies and tool arguments are never logged.

use std::future::Future;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::{API_PREFIX, API_VERSION, Gateway};
use crate::domains::tools::{ToolArgs, ToolError, ToolOutput, ToolSummary};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

// ============================================================================
// Wire types
// ============================================================================

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Tool listing response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsResponse {
    pub tools: Vec<ToolSummary>,
}

/// Successful invocation response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub tool: String,
    pub result: ToolOutput,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures reported to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request.
    NotFound,

    /// The request body is not valid JSON.
    InvalidJson,

    /// The request body is JSON but not usable.
    BadRequest(String),

    /// The registry or a tool rejected the invocation.
    Tool(ToolError),
}

impl ApiError {
    /// Status code for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::Tool(ToolError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::InvalidJson | Self::BadRequest(_) | Self::Tool(ToolError::InvalidArgument(_)) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Message placed in the `error` field.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound => "not found".to_string(),
            Self::InvalidJson => "invalid json body".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Tool(err) => err.to_string(),
        }
    }
}

impl From<ToolError> for ApiError {
    fn from(err: ToolError) -> Self {
        Self::Tool(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

// ============================================================================
// Transport
// ============================================================================

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the router for this transport's configuration.
    pub fn router(&self, gateway: Gateway) -> Router {
        build_router(gateway, self.config.enable_cors)
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, gateway: Gateway) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "{} v{} listening on http://{} (CORS {})",
            gateway.name(),
            API_VERSION,
            addr,
            cors_status
        );
        info!("  → Health: GET  {}/health", API_PREFIX);
        info!("  → Tools:  GET  {}/tools", API_PREFIX);
        info!("  → Invoke: POST {}/tools/<name>/invoke", API_PREFIX);

        let app = self.router(gateway);
        serve(listener, app, shutdown_signal()).await
    }
}

/// Serve `app` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> TransportResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| TransportError::http(e.to_string()))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Build the gateway router.
pub fn build_router(gateway: Gateway, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route(
            &format!("{API_PREFIX}/health"),
            get(health_check).fallback(not_found),
        )
        .route(
            &format!("{API_PREFIX}/tools"),
            get(list_tools).fallback(not_found),
        )
        .route(
            &format!("{API_PREFIX}/tools/{{*rest}}"),
            post(invoke_tool).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(gateway);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
}

// ============================================================================
// Handlers
// ============================================================================

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: API_VERSION.to_string(),
    })
}

/// Tool listing endpoint.
async fn list_tools(State(gateway): State<Gateway>) -> Json<ToolsResponse> {
    debug!("Listing tools");
    Json(ToolsResponse {
        tools: gateway.list_tools(),
    })
}

/// Tool invocation endpoint.
async fn invoke_tool(
    State(gateway): State<Gateway>,
    uri: Uri,
    body: Bytes,
) -> Result<Json<InvokeResponse>, ApiError> {
    let name = tool_name_from_path(uri.path()).ok_or(ApiError::NotFound)?;
    let args = parse_args(&body)?;

    match gateway.call_tool(name, &args) {
        Ok(result) => {
            info!(tool = %name, "Tool invoked");
            Ok(Json(InvokeResponse {
                tool: name.to_string(),
                result,
            }))
        }
        Err(err) => {
            info!(tool = %name, error = %err, "Tool invocation rejected");
            Err(err.into())
        }
    }
}

/// Extract `<name>` from `/v0.1/tools/<name>/invoke`.
fn tool_name_from_path(path: &str) -> Option<&str> {
    path.strip_prefix(API_PREFIX)?
        .strip_prefix("/tools/")?
        .strip_suffix("/invoke")
}

/// Extract the argument map from an invocation body.
///
/// An empty body counts as `{}`. A JSON body that is not an object, or an
/// object whose `args` is missing or empty-ish (`null`, `false`, `0`, `""`,
/// `[]`), yields no arguments.
fn parse_args(body: &[u8]) -> Result<ToolArgs, ApiError> {
    if body.is_empty() {
        return Ok(ToolArgs::new());
    }

    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;

    let Value::Object(mut object) = value else {
        return Ok(ToolArgs::new());
    };

    match object.remove("args") {
        None => Ok(ToolArgs::new()),
        Some(Value::Object(args)) => Ok(args),
        Some(value) if is_empty_value(&value) => Ok(ToolArgs::new()),
        Some(_) => Err(ApiError::BadRequest(
            "'args' must be a JSON object".to_string(),
        )),
    }
}

/// Whether a non-object `args` value stands for "no arguments".
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

// ============================================================================
// Tests
// ============================================================================
