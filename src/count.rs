//! Favorite Count Display
//!
//! The aggregate count shown in the navbar. The number itself lives in the
//! span's text; this module owns the arithmetic and the visibility rule.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::FavoriteConfig;
use crate::models::FavoriteStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FavoriteCount(pub u32);

impl FavoriteCount {
    /// Lenient parse: leading digits only, anything else counts as zero.
    pub fn parse(text: &str) -> Self {
        let digits: String = text.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
        Self(digits.parse().unwrap_or(0))
    }

    /// Never goes below zero
    pub fn apply(self, status: FavoriteStatus) -> Self {
        match status {
            FavoriteStatus::Added => Self(self.0.saturating_add(1)),
            FavoriteStatus::Removed => Self(self.0.saturating_sub(1)),
        }
    }

    pub fn is_visible(self) -> bool {
        self.0 > 0
    }
}

/// The count span and its optional container, if the page has them
pub struct CountDisplay {
    span: Element,
    container: Option<HtmlElement>,
}

impl CountDisplay {
    pub fn locate(doc: &Document, config: &FavoriteConfig) -> Option<Self> {
        let span = doc.get_element_by_id(&config.count_id)?;
        let container = doc
            .get_element_by_id(&config.count_container_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Some(Self { span, container })
    }

    pub fn current(&self) -> FavoriteCount {
        FavoriteCount::parse(&self.span.text_content().unwrap_or_default())
    }

    pub fn apply(&self, status: FavoriteStatus) -> FavoriteCount {
        let next = self.current().apply(status);
        self.set(next);
        next
    }

    pub fn set(&self, count: FavoriteCount) {
        self.span.set_text_content(Some(&count.0.to_string()));
        if let Some(container) = &self.container {
            let display = if count.is_visible() { "block" } else { "none" };
            let _ = container.style().set_property("display", display);
        }
    }
}
