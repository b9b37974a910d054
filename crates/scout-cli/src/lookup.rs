use std::fmt::Display;

use scout_core::ServiceMode;
use scout_places::PlacesClient;
use scout_scraper::PageClient;
use serde::Serialize;

/// Scrape one website and print the extracted record as JSON.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the scrape fails. The
/// failure is printed as `{"error": ...}` before returning.
pub(crate) async fn run_scrape(url: &str) -> anyhow::Result<()> {
    let url = required_arg(url, "URL")?;
    let config = scout_core::load_app_config_for_mode(ServiceMode::Scrape)?;
    let client = PageClient::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
    )?;

    tracing::info!(url, "scraping");
    emit(client.scrape(url).await, "scrape")
}

/// Search for charities and print the summaries as a JSON array.
///
/// # Errors
///
/// Returns an error if `GOOGLE_PLACES_API_KEY` is unset or the search fails.
pub(crate) async fn run_search(query: &str, location: &str) -> anyhow::Result<()> {
    let query = required_arg(query, "query")?;
    let location = match location.trim() {
        "" => scout_places::DEFAULT_LOCATION,
        other => other,
    };
    let client = places_client()?;

    tracing::info!(query, location, "searching");
    emit(client.search_places(query, location).await, "search")
}

/// Fetch one place's details and print them as JSON.
///
/// # Errors
///
/// Returns an error if `GOOGLE_PLACES_API_KEY` is unset or the lookup fails.
pub(crate) async fn run_details(place_id: &str) -> anyhow::Result<()> {
    let place_id = required_arg(place_id, "place_id")?;
    let client = places_client()?;

    tracing::info!(place_id, "fetching place details");
    emit(client.get_place_details(place_id).await, "details")
}

fn places_client() -> anyhow::Result<PlacesClient> {
    let config = scout_core::load_app_config_for_mode(ServiceMode::Places)?;
    let client =
        PlacesClient::with_base_url(config.require_places_api_key()?, &config.places_base_url)?;
    Ok(client)
}

fn required_arg<'a>(value: &'a str, label: &str) -> anyhow::Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        anyhow::bail!("No {label} provided");
    }
    Ok(value)
}

fn emit<T: Serialize, E: Display>(result: Result<T, E>, command: &str) -> anyhow::Result<()> {
    let (json, failed) = render(result)?;
    println!("{json}");
    if failed {
        anyhow::bail!("{command} failed");
    }
    Ok(())
}

/// Renders a collaborator result the way the HTTP facade does: the value
/// itself, or `{"error": "<message>"}`. The flag is `true` for failures.
pub(crate) fn render<T: Serialize, E: Display>(
    result: Result<T, E>,
) -> Result<(String, bool), serde_json::Error> {
    match result {
        Ok(value) => Ok((serde_json::to_string_pretty(&value)?, false)),
        Err(e) => {
            let payload = serde_json::json!({ "error": e.to_string() });
            Ok((serde_json::to_string_pretty(&payload)?, true))
        }
    }
}
