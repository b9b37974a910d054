//! Field extraction cascade for arbitrary web pages.
//!
//! Each field tries its strategies in order and stops at the first one that
//! yields a non-empty value. Structured sources (meta tags, explicit `tel:` /
//! `mailto:` links, JSON-LD) always run before free-text regexes.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::page::{element_text, Page};
use crate::types::ScrapedRecord;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d{1,4}[\s\-]?\(?\d{2,4}\)?[\s\-]?\d{2,4}[\s\-]?\d{2,9}|\d{4}\s?\d{6}")
        .expect("valid phone regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+\-]+@[a-zA-Z0-9\-]+\.[a-zA-Z0-9.\-]+").expect("valid email regex")
});

static HOURS_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)Monday.*?Sunday.*?\d{1,2}:\d{2}\s?(AM|PM)?.*?\d{1,2}:\d{2}\s?(AM|PM)?",
        r"(?is)Mon.*?Fri.*?\d{1,2}:\d{2}\s?(AM|PM)?.*?\d{1,2}:\d{2}\s?(AM|PM)?",
        r"(?is)\b(Mon|Tue|Wed|Thu|Fri|Sat|Sun)[a-z]*\s*[:-]?\s*\d{1,2}:\d{2}\s*(AM|PM)?\s*-\s*\d{1,2}:\d{2}\s*(AM|PM)?",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid opening hours regex"))
    .collect()
});

/// Class names that commonly wrap a business's opening hours, in priority order.
const HOURS_CLASSES: [&str; 4] = ["hours", "opening-hours", "business-hours", "operating-hours"];

/// Extract title, description, phone, email and opening hours from raw HTML.
///
/// Never fails: any field the page does not expose is returned empty.
#[must_use]
pub fn extract(html: &str) -> ScrapedRecord {
    let page = Page::parse(html);
    // Phone numbers are only matched in rendered text; script bodies are
    // full of digit runs. Email and hours patterns search everything.
    let visible = page.visible_text();
    let all = page.all_text();

    ScrapedRecord {
        title: extract_title(&page),
        description: extract_description(&page),
        phone: extract_phone(&page, &visible),
        email: extract_email(&page, &all),
        opening_hours: extract_opening_hours(&page, &all),
    }
}

fn extract_title(page: &Page) -> String {
    page.meta_content(r#"meta[property="og:site_name"]"#)
        .or_else(|| page.meta_content(r#"meta[property="og:title"]"#))
        .or_else(|| page.first_raw_text("title"))
        .unwrap_or_default()
}

fn extract_description(page: &Page) -> String {
    page.meta_content(r#"meta[name="description"]"#)
        .unwrap_or_default()
}

fn extract_phone(page: &Page, text: &str) -> String {
    if let Some(linked) = page.first_text(r#"a[href^="tel:"]"#) {
        return linked;
    }
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().chars().filter(|c| !c.is_whitespace()).collect())
        .unwrap_or_default()
}

fn extract_email(page: &Page, text: &str) -> String {
    if let Some(linked) = page.first_text(r#"a[href^="mailto:"]"#) {
        return linked;
    }
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn extract_opening_hours(page: &Page, text: &str) -> String {
    hours_from_json_ld(page)
        .or_else(|| hours_from_class(page))
        .or_else(|| hours_from_text(text))
        .unwrap_or_default()
}

fn hours_from_json_ld(page: &Page) -> Option<String> {
    for block in page.json_ld_blocks() {
        // Malformed structured data is common and never fatal.
        let Ok(value) = block else {
            continue;
        };

        for node in json_ld_candidates(&value) {
            if let Some(hours) = node.get("openingHours").and_then(render_opening_hours) {
                return Some(hours);
            }
            if let Some(hours) = node
                .get("openingHoursSpecification")
                .and_then(render_hours_specification)
            {
                return Some(hours);
            }
        }
    }
    None
}

/// Nodes worth inspecting in one JSON-LD block: the top-level object, the
/// members of a top-level array, and the members of any `@graph` container.
fn json_ld_candidates(value: &Value) -> Vec<&Value> {
    let top: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut candidates = top.clone();
    for item in top {
        if let Some(graph) = item.get("@graph").and_then(Value::as_array) {
            candidates.extend(graph.iter());
        }
    }
    candidates
}

/// `openingHours` is either a single string (`"Mo-Fr 09:00-17:00"`) or a list
/// of such strings.
fn render_opening_hours(value: &Value) -> Option<String> {
    let rendered = match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => return None,
    };
    if rendered.trim().is_empty() {
        return None;
    }
    Some(rendered)
}

fn render_hours_specification(value: &Value) -> Option<String> {
    let entries: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![value],
        _ => return None,
    };

    let lines: Vec<String> = entries
        .into_iter()
        .filter(|entry| entry.is_object())
        .map(|entry| {
            let day = render_day_of_week(entry.get("dayOfWeek"));
            let opens = entry.get("opens").and_then(Value::as_str).unwrap_or("");
            let closes = entry.get("closes").and_then(Value::as_str).unwrap_or("");
            format!("{day}: {opens} - {closes}")
        })
        .collect();

    if lines.is_empty() {
        return None;
    }
    Some(lines.join("\n"))
}

fn render_day_of_week(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(day)) => day.clone(),
        Some(Value::Array(days)) => {
            let joined = days
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() {
                "Unknown".to_string()
            } else {
                joined
            }
        }
        _ => "Unknown".to_string(),
    }
}

fn hours_from_class(page: &Page) -> Option<String> {
    HOURS_CLASSES.iter().find_map(|class| {
        page.select_first(&format!(".{class}"))
            .map(element_text)
            .filter(|text| !text.is_empty())
    })
}

fn hours_from_text(text: &str) -> Option<String> {
    HOURS_RES.iter().find_map(|re| {
        re.find(text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|hours| !hours.is_empty())
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
