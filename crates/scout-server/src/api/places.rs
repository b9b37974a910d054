use std::sync::Arc;

use axum::{body::Bytes, extract::State, Extension, Json};
use scout_places::{CharitySummary, PlaceDetail, PlacesClient, DEFAULT_LOCATION};
use serde::Deserialize;

use super::{parse_body, required_field, ApiError, Outcome};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct SearchRequest {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailsRequest {
    #[serde(default)]
    place_id: Option<String>,
}

/// `POST /search` with `{"query": "...", "location": "..."}`.
///
/// `location` defaults to the UK when absent or blank.
pub(super) async fn search(
    State(client): State<Arc<PlacesClient>>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<Outcome<Vec<CharitySummary>>>, ApiError> {
    let request: SearchRequest = parse_body(&body)?;
    let query = required_field(request.query, "query")?;
    let location = request
        .location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    tracing::info!(request_id = %req_id.0, query = %query, location = %location, "charity search requested");

    let result = client.search_places(&query, &location).await;
    match &result {
        Ok(results) => tracing::debug!(request_id = %req_id.0, count = results.len(), "charity search complete"),
        Err(e) => tracing::warn!(request_id = %req_id.0, error = %e, "charity search failed"),
    }
    Ok(Json(result.into()))
}

/// `POST /details` with `{"place_id": "..."}`.
pub(super) async fn details(
    State(client): State<Arc<PlacesClient>>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<Outcome<PlaceDetail>>, ApiError> {
    let request: DetailsRequest = parse_body(&body)?;
    let place_id = required_field(request.place_id, "place_id")?;

    tracing::info!(request_id = %req_id.0, place_id = %place_id, "place details requested");

    let result = client.get_place_details(&place_id).await;
    if let Err(e) = &result {
        tracing::warn!(request_id = %req_id.0, place_id = %place_id, error = %e, "place details failed");
    }
    Ok(Json(result.into()))
}
