//! Integration tests for `PageClient::scrape`.
//!
//! Uses `wiremock` to serve fixture pages so no real network traffic is made.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scout_scraper::{PageClient, ScraperError};

fn test_client() -> PageClient {
    PageClient::new(5, "scout-test/0.1").expect("failed to build test PageClient")
}

const CHARITY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Home - Riverside Food Bank</title>
  <meta property="og:site_name" content="Riverside Food Bank">
  <meta name="description" content="Emergency food parcels for local families.">
  <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "NGO",
     "openingHoursSpecification": [
       {"dayOfWeek": "Monday", "opens": "09:00", "closes": "17:00"},
       {"dayOfWeek": "Thursday", "opens": "12:00", "closes": "15:00"}
     ]}
  </script>
</head>
<body>
  <header><a href="tel:+441234567890">01234 567890</a></header>
  <footer>Email <a href="mailto:hello@riverside.example">hello@riverside.example</a></footer>
</body>
</html>"#;

#[tokio::test]
async fn scrape_extracts_every_field_from_served_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "scout-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CHARITY_PAGE, "text/html"))
        .mount(&server)
        .await;

    let record = test_client()
        .scrape(&format!("{}/", server.uri()))
        .await
        .expect("scrape should succeed");

    assert_eq!(record.title, "Riverside Food Bank");
    assert_eq!(
        record.description,
        "Emergency food parcels for local families."
    );
    assert_eq!(record.phone, "01234 567890");
    assert_eq!(record.email, "hello@riverside.example");
    assert_eq!(
        record.opening_hours,
        "Monday: 09:00 - 17:00\nThursday: 12:00 - 15:00"
    );
}

#[tokio::test]
async fn scrape_returns_unexpected_status_on_404() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = test_client()
        .scrape(&format!("{}/missing", server.uri()))
        .await;

    assert!(
        matches!(
            result,
            Err(ScraperError::UnexpectedStatus { status: 404, .. })
        ),
        "expected UnexpectedStatus(404), got: {result:?}"
    );
}

#[tokio::test]
async fn scrape_times_out_on_slow_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<title>late</title>", "text/html")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = PageClient::new(1, "scout-test/0.1").expect("client");
    let result = client.scrape(&format!("{}/slow", server.uri())).await;

    match result {
        Err(ScraperError::Http(e)) => assert!(e.is_timeout(), "expected timeout, got: {e}"),
        other => panic!("expected Http timeout error, got: {other:?}"),
    }
}

#[tokio::test]
async fn scrape_rejects_invalid_url_without_network_call() {
    let result = test_client().scrape("not a url").await;
    assert!(
        matches!(result, Err(ScraperError::InvalidUrl { .. })),
        "expected InvalidUrl, got: {result:?}"
    );
}
