mod places;
mod scrape;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use scout_core::ServiceMode;
use scout_places::PlacesClient;
use scout_scraper::PageClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id;

/// The collaborator a process serves. Scraping and places search are
/// separate deployments; only one route group is mounted.
#[derive(Clone)]
pub enum Backend {
    Scrape(Arc<PageClient>),
    Places(Arc<PlacesClient>),
}

impl Backend {
    fn mode(&self) -> ServiceMode {
        match self {
            Backend::Scrape(_) => ServiceMode::Scrape,
            Backend::Places(_) => ServiceMode::Places,
        }
    }
}

/// `{"error": "..."}`, the only error shape callers ever see.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub error: String,
}

/// A collaborator's answer: its record on success, or an error payload.
///
/// Both variants are sent with `200 OK`; upstream failures are not HTTP
/// failures of this service.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome<T: Serialize> {
    Ok(T),
    Err(ErrorPayload),
}

impl<T: Serialize, E: std::fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(e) => Outcome::Err(ErrorPayload {
                error: e.to_string(),
            }),
        }
    }
}

/// Request-level rejection, answered with `400 Bad Request`.
#[derive(Debug)]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn missing_field(label: &str) -> Self {
        Self::bad_request(format!("No {label} provided"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorPayload {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    mode: String,
}

/// Parses a JSON request body. Anything that is not a JSON object of the
/// expected shape is a bad request.
pub(super) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value @ serde_json::Value::Object(_)) => value,
        Ok(_) => {
            tracing::debug!("rejecting non-object request body");
            return Err(ApiError::bad_request("Invalid JSON body"));
        }
        Err(e) => {
            tracing::debug!(error = %e, "rejecting unparsable request body");
            return Err(ApiError::bad_request("Invalid JSON body"));
        }
    };
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "rejecting request body of unexpected shape");
        ApiError::bad_request("Invalid JSON body")
    })
}

/// Returns the trimmed value if present and non-blank.
pub(super) fn required_field(value: Option<String>, label: &str) -> Result<String, ApiError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::missing_field(label))
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(backend: Backend) -> Router {
    let mode = backend.mode();

    let routes: Router = match backend {
        Backend::Scrape(client) => Router::new()
            .route("/scrape", post(scrape::scrape))
            .with_state(client),
        Backend::Places(client) => Router::new()
            .route("/search", post(places::search))
            .route("/details", post(places::details))
            .with_state(client),
    };

    Router::new()
        .route("/health", get(health))
        .with_state(mode)
        .merge(routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
}

async fn health(State(mode): State<ServiceMode>) -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        mode: mode.to_string(),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
