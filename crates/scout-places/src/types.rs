//! Places web-service response types.
//!
//! Both endpoints wrap their payload in a `{"status": "OK", ...}` envelope.
//! Every payload field is optional on the wire; absent fields deserialize to
//! `None` or an empty list so one sparse result never fails a whole response.
//! An explicit `null` is treated the same as an absent key.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as `T::default()`. Pair with `#[serde(default)]` so a
/// missing key is covered too.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<Coordinates>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

// ---------------------------------------------------------------------------
// textsearch
// ---------------------------------------------------------------------------

/// Response from `GET {base}/textsearch/json`.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, `INVALID_REQUEST`, ...
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<PlaceResult>,
}

/// A single text-search hit.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<String>,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Response from `GET {base}/details/json`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetailsResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceDetailsResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Canonical maps URL for the place.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OpeningHours {
    #[serde(default, deserialize_with = "null_as_default")]
    pub periods: Vec<Period>,
    /// Pre-formatted lines such as `"Monday: 9:00 AM – 5:00 PM"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub weekday_text: Vec<String>,
}

/// One open/close pair. `close` is absent for places open 24 hours.
#[derive(Debug, Default, Deserialize)]
pub struct Period {
    #[serde(default)]
    pub open: Option<PeriodPoint>,
    #[serde(default)]
    pub close: Option<PeriodPoint>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PeriodPoint {
    /// 0 = Sunday through 6 = Saturday.
    #[serde(default)]
    pub day: Option<u8>,
    /// 24-hour `HHMM`, e.g. `"0930"`.
    #[serde(default)]
    pub time: Option<String>,
}
