use std::sync::Arc;

use axum::{body::Bytes, extract::State, Extension, Json};
use scout_scraper::{PageClient, ScrapedRecord};
use serde::Deserialize;

use super::{parse_body, required_field, ApiError, Outcome};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct ScrapeRequest {
    #[serde(default)]
    url: Option<String>,
}

/// `POST /scrape` with `{"url": "..."}`.
pub(super) async fn scrape(
    State(client): State<Arc<PageClient>>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<Outcome<ScrapedRecord>>, ApiError> {
    let request: ScrapeRequest = parse_body(&body)?;
    let url = required_field(request.url, "URL")?;

    tracing::info!(request_id = %req_id.0, url = %url, "scrape requested");

    let result = client.scrape(&url).await;
    if let Err(e) = &result {
        tracing::warn!(request_id = %req_id.0, url = %url, error = %e, "scrape failed");
    }
    Ok(Json(result.into()))
}
