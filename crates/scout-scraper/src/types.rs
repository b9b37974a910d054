use serde::Serialize;

/// Best-effort contact details pulled from a single web page.
///
/// Every field is a plain string; a field the page does not expose is left
/// empty rather than treated as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrapedRecord {
    pub title: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    /// Free text, or a newline-joined `"<day>: <opens> - <closes>"` listing
    /// when the page publishes structured hours.
    pub opening_hours: String,
}
