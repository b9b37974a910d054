use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", base_url)
        .expect("client construction should not fail")
}

#[test]
fn compose_search_query_appends_location_when_absent() {
    assert_eq!(
        compose_search_query("food bank", "London, UK"),
        "food bank charity London, UK"
    );
}

#[test]
fn compose_search_query_skips_location_already_in_query() {
    assert_eq!(
        compose_search_query("food bank UK", "UK"),
        "food bank UK charity"
    );
}

#[test]
fn compose_search_query_location_match_is_case_insensitive() {
    assert_eq!(
        compose_search_query("Homeless shelter in leeds", "Leeds"),
        "Homeless shelter in leeds charity"
    );
}

#[test]
fn compose_search_query_uses_default_location() {
    assert_eq!(
        compose_search_query("animal rescue", DEFAULT_LOCATION),
        "animal rescue charity UK"
    );
}

#[test]
fn build_url_constructs_correct_query_string() {
    let client = test_client("https://maps.example.com/maps/api/place");
    let url = client
        .build_url("details/json", &[("place_id", "abc123")])
        .expect("url");
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/maps/api/place/details/json?key=test-key&place_id=abc123"
    );
}

#[test]
fn build_url_strips_trailing_slash() {
    let client = test_client("https://maps.example.com/place/");
    let url = client.build_url("textsearch/json", &[]).expect("url");
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/place/textsearch/json?key=test-key"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://maps.example.com/place");
    let url = client
        .build_url("textsearch/json", &[("query", "food bank charity London, UK")])
        .expect("url");
    assert!(
        url.as_str().contains("food+bank+charity+London%2C+UK"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn with_base_url_rejects_relative_url() {
    let result = PlacesClient::with_base_url("test-key", "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}

#[test]
fn check_status_accepts_listed_statuses_only() {
    assert!(PlacesClient::check_status("ZERO_RESULTS", None, &["OK", "ZERO_RESULTS"]).is_ok());
    let err = PlacesClient::check_status("ZERO_RESULTS", None, &["OK"]).unwrap_err();
    assert_eq!(err.to_string(), "Google Maps API Error: ZERO_RESULTS");
}
