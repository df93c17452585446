//! UI Components
//!
//! Leptos components for pages that render listings client-side.

mod favorite_button;
mod listing_grid;

pub use favorite_button::FavoriteButton;
pub use listing_grid::ListingGrid;
