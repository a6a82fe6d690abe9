use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::parser::style;

/// Swatch anchors on the Lee Filters colour list.
pub const DEFAULT_SELECTOR: &str = ".colours-list__tooltip-wrapper > a";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// What a matched element exposes to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchElement {
    /// Rendered text of the element.
    pub label: String,
    /// Inline `background-color`, if the element declares one.
    pub background_color: Option<String>,
}

/// Anything that can hand back matched elements in document order.
pub trait SwatchSource {
    fn swatch_elements(&self, selector: &str) -> Result<Vec<SwatchElement>, DocumentError>;
}

pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }
}

impl SwatchSource for HtmlDocument {
    fn swatch_elements(&self, selector: &str) -> Result<Vec<SwatchElement>, DocumentError> {
        let sel = Selector::parse(selector).map_err(|e| DocumentError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        Ok(self
            .html
            .select(&sel)
            .map(|el| SwatchElement {
                label: rendered_text(&el),
                background_color: el.value().attr("style").and_then(style::background_color),
            })
            .collect())
    }
}

impl SwatchSource for [SwatchElement] {
    /// Pre-extracted elements; the selector has already been applied.
    fn swatch_elements(&self, _selector: &str) -> Result<Vec<SwatchElement>, DocumentError> {
        Ok(self.to_vec())
    }
}

/// Descendant text with whitespace runs collapsed, like `innerText` on an inline element.
fn rendered_text(el: &ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
