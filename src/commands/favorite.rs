//! Favorite Commands
//!
//! Toggle a favorite and read the aggregate count over HTTP.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use web_sys::{Document, HtmlInputElement};
use wasm_bindgen::JsCast;

use crate::config::FavoriteConfig;
use crate::error::FavoriteError;
use crate::models::{FavoriteCountResponse, FavoriteStatus, ToggleResponse};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Unreserved characters stay literal
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// `field=value` with the value percent-encoded
pub fn form_body(field: &str, value: &str) -> String {
    format!("{}={}", field, utf8_percent_encode(value, FORM_VALUE))
}

/// Value of the hidden CSRF input, read at request time
pub fn read_csrf_token(doc: &Document, selector: &str) -> Result<String, FavoriteError> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .filter(|token| !token.is_empty())
        .ok_or(FavoriteError::MissingCsrfToken)
}

/// Flip the favorite flag of `resource_id` on the server.
pub async fn toggle_favorite(
    config: &FavoriteConfig,
    csrf_token: &str,
    resource_id: &str,
) -> Result<FavoriteStatus, FavoriteError> {
    let response = Request::post(&config.toggle_endpoint)
        .header(&config.csrf_header, csrf_token)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(form_body(&config.id_field, resource_id))?
        .send()
        .await?;

    if !response.ok() {
        return Err(FavoriteError::Http(response.status()));
    }

    response.json::<ToggleResponse>().await?.into_status()
}

/// Current number of favorites of the signed-in user.
pub async fn fetch_favorite_count(config: &FavoriteConfig) -> Result<u32, FavoriteError> {
    let response = Request::get(&config.count_endpoint).send().await?;

    if !response.ok() {
        return Err(FavoriteError::Http(response.status()));
    }

    Ok(response.json::<FavoriteCountResponse>().await?.count)
}
