//! Listing Grid Component
//!
//! Renders the listings a page embeds as JSON, each with a favorite button.

use leptos::prelude::*;

use crate::components::FavoriteButton;
use crate::models::Listing;

#[component]
pub fn ListingGrid(listings: Vec<Listing>) -> impl IntoView {
    view! {
        <ul class="favorite-listings">
            {listings
                .into_iter()
                .map(|listing| {
                    view! {
                        <li class="favorite-listing">
                            <span class="listing-title">{listing.title}</span>
                            <FavoriteButton listing_id=listing.id favorited=listing.favorited />
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
