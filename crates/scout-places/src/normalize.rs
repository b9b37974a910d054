//! Reshaping of places API payloads into the simplified records served to
//! callers.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::types::{Geometry, PlaceDetailsResult, PlaceResult, Period};

/// Opening time assumed when a period has no `open.time`.
const DEFAULT_OPEN_TIME: &str = "0900";
/// Closing time assumed when a period has no `close` (24-hour places).
const DEFAULT_CLOSE_TIME: &str = "1700";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl LatLng {
    fn from_geometry(geometry: Option<&Geometry>) -> Self {
        let location = geometry.and_then(|g| g.location.as_ref());
        Self {
            lat: location.and_then(|l| l.lat),
            lng: location.and_then(|l| l.lng),
        }
    }
}

/// One text-search hit, reduced to what the charity finder displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharitySummary {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: LatLng,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Ordered by the upstream day index (0 = Sunday).
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHours {
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    pub start: String,
    pub end: String,
}

impl Default for DayHours {
    /// "No data" entry. The 09:00/17:00 times are kept even though the day is
    /// not open; front ends rely on them as form defaults.
    fn default() -> Self {
        Self {
            is_open: false,
            start: "09:00".to_string(),
            end: "17:00".to_string(),
        }
    }
}

/// A full week of opening hours, always holding exactly one entry per day.
///
/// Serializes as a JSON object keyed by weekday name, Sunday first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyHours {
    days: [DayHours; 7],
}

impl WeeklyHours {
    #[must_use]
    pub fn get(&self, day: Weekday) -> &DayHours {
        &self.days[day.index()]
    }

    /// Builds the week from upstream periods. For each day the first period
    /// whose `open.day` matches wins; days without a period keep the default
    /// closed entry.
    #[must_use]
    pub fn from_periods(periods: &[Period]) -> Self {
        let mut week = Self::default();
        for day in Weekday::ALL {
            let matching = periods.iter().find(|period| {
                period
                    .open
                    .as_ref()
                    .and_then(|open| open.day)
                    .is_some_and(|d| usize::from(d) == day.index())
            });
            let Some(period) = matching else {
                continue;
            };

            let open_time = period
                .open
                .as_ref()
                .and_then(|p| p.time.as_deref())
                .unwrap_or(DEFAULT_OPEN_TIME);
            let close_time = period
                .close
                .as_ref()
                .and_then(|p| p.time.as_deref())
                .unwrap_or(DEFAULT_CLOSE_TIME);

            week.days[day.index()] = DayHours {
                is_open: true,
                start: format_hhmm(open_time),
                end: format_hhmm(close_time),
            };
        }
        week
    }
}

impl Serialize for WeeklyHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Weekday::ALL.len()))?;
        for day in Weekday::ALL {
            map.serialize_entry(day.name(), self.get(day))?;
        }
        map.end()
    }
}

/// Full details for one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetail {
    pub place_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: String,
    pub website_link: String,
    pub location: LatLng,
    pub opening_hours: WeeklyHours,
    pub rating: Option<f64>,
    pub google_maps_url: Option<String>,
    pub types: Vec<String>,
    /// Upstream `weekday_text`, passed through unchanged.
    pub hours_text: Vec<String>,
}

/// Converts `"0930"` to `"09:30"`. Inputs shorter than two characters are
/// returned with a trailing colon rather than rejected.
#[must_use]
pub fn format_hhmm(time: &str) -> String {
    match (time.get(..2), time.get(2..)) {
        (Some(hours), Some(minutes)) => format!("{hours}:{minutes}"),
        _ => format!("{time}:"),
    }
}

#[must_use]
pub fn summarize_result(result: PlaceResult) -> CharitySummary {
    CharitySummary {
        location: LatLng::from_geometry(result.geometry.as_ref()),
        place_id: result.place_id,
        name: result.name,
        address: result.formatted_address,
        rating: result.rating,
        user_ratings_total: result.user_ratings_total,
        types: result.types,
    }
}

#[must_use]
pub fn build_place_detail(place_id: &str, result: PlaceDetailsResult) -> PlaceDetail {
    let (periods, hours_text) = match result.opening_hours {
        Some(hours) => (hours.periods, hours.weekday_text),
        None => (Vec::new(), Vec::new()),
    };

    PlaceDetail {
        place_id: place_id.to_owned(),
        location: LatLng::from_geometry(result.geometry.as_ref()),
        name: result.name,
        address: result.formatted_address,
        phone_number: result.formatted_phone_number.unwrap_or_default(),
        website_link: result.website.unwrap_or_default(),
        opening_hours: WeeklyHours::from_periods(&periods),
        rating: result.rating,
        google_maps_url: result.url,
        types: result.types,
        hours_text,
    }
}
