//! Parsed-document wrapper used by the field extractor.
//!
//! Keeps the `scraper` crate behind a handful of lookups: first element for a
//! CSS selector, meta-tag content, visible text, and the page's JSON-LD blocks.

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

/// Elements whose text never renders.
const HIDDEN_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

pub struct Page {
    document: Html,
}

impl Page {
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// First element matching `selector`, in document order.
    ///
    /// An unparsable selector matches nothing.
    #[must_use]
    pub fn select_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(selector).ok()?;
        self.document.select(&selector).next()
    }

    /// Trimmed `content` attribute of the first element matching `selector`.
    ///
    /// Returns `None` when the element is missing or its content is blank.
    #[must_use]
    pub fn meta_content(&self, selector: &str) -> Option<String> {
        self.select_first(selector)
            .and_then(|el| el.value().attr("content"))
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(str::to_string)
    }

    /// Rendered text of the first element matching `selector`, if non-empty.
    #[must_use]
    pub fn first_text(&self, selector: &str) -> Option<String> {
        self.select_first(selector)
            .map(element_text)
            .filter(|text| !text.is_empty())
    }

    /// Text of the first element matching `selector` with only the ends
    /// trimmed; inner whitespace is kept as written. `None` if blank.
    #[must_use]
    pub fn first_raw_text(&self, selector: &str) -> Option<String> {
        self.select_first(selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    }

    /// Concatenated text of every node in the document, script and style
    /// bodies included, in document order.
    #[must_use]
    pub fn all_text(&self) -> String {
        self.document.root_element().text().collect()
    }

    /// Concatenated text of every node outside `script`, `style`, `noscript`
    /// and `template` elements, in document order.
    #[must_use]
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        for node in self.document.root_element().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| HIDDEN_TAGS.contains(&el.name()))
            });
            if !hidden {
                out.push_str(text);
            }
        }
        out
    }

    /// Every `<script type="application/ld+json">` body, parsed independently.
    ///
    /// A block that is not valid JSON yields its own `Err`; other blocks are
    /// unaffected.
    #[must_use]
    pub fn json_ld_blocks(&self) -> Vec<Result<Value, serde_json::Error>> {
        let Ok(selector) = Selector::parse(JSON_LD_SELECTOR) else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .map(|script| {
                let raw: String = script.text().collect();
                serde_json::from_str::<Value>(raw.trim())
            })
            .collect()
    }
}

/// Element text as a browser would render it on one line: text nodes joined,
/// whitespace runs collapsed to a single space, ends trimmed.
#[must_use]
pub fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
