//! Favorite Listings App
//!
//! Mounted only when the page embeds listing data; server-rendered pages
//! rely on the delegated controller alone.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::components::ListingGrid;
use crate::config::FavoriteConfig;
use crate::context::AppContext;
use crate::models::Listing;

/// `<script type="application/json">` holding the listings
pub const LISTINGS_SCRIPT_ID: &str = "favorite-listings";
/// Element the grid is mounted into
pub const LISTINGS_ROOT_ID: &str = "favorite-listings-root";

#[component]
pub fn App(listings: Vec<Listing>, config: FavoriteConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    view! {
        <section class="favorite-listings-app">
            <ListingGrid listings=listings />
        </section>
    }
}

pub fn parse_listings(json: &str) -> Result<Vec<Listing>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Mount the grid if the page provides both the data and a root element.
pub fn mount_listings(doc: &Document, config: FavoriteConfig) -> Result<(), JsValue> {
    let (Some(script), Some(root)) = (
        doc.get_element_by_id(LISTINGS_SCRIPT_ID),
        doc.get_element_by_id(LISTINGS_ROOT_ID),
    ) else {
        return Ok(());
    };

    let json = script.text_content().unwrap_or_default();
    let listings = parse_listings(&json).map_err(|e| JsValue::from_str(&format!("invalid listings: {e}")))?;
    let root = root.dyn_into::<HtmlElement>()?;

    log::info!("mounting {} listings", listings.len());
    leptos::mount::mount_to(root, move || view! { <App listings=listings config=config /> }).forget();
    Ok(())
}
