//! Favorite Button Component
//!
//! Client-rendered favorite control. Emits the same markup the server
//! renders, so the delegated controller handles it; no click handler here.

use leptos::prelude::*;

use crate::config::FavoriteConfig;
use crate::context::AppContext;
use crate::state::{Appearance, FavoriteState};

#[component]
pub fn FavoriteButton(
    #[prop(into)] listing_id: String,
    favorited: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = ctx.config.clone();

    let look = Appearance::of(FavoriteState::from(favorited), &config);
    let icon_class = look.icon_class();
    let aria_pressed = look.aria_pressed;
    let title = look.title.to_string();
    let tooltip = look.tooltip.to_string();

    // `data-id` is part of the markup; a renamed attribute can only be set
    // once the node exists
    let button_ref = NodeRef::<leptos::html::Button>::new();
    if let Some(id_attribute) = extra_id_attribute(&config) {
        let listing_id = listing_id.clone();
        Effect::new(move |_| {
            if let Some(button) = button_ref.get() {
                let _ = button.set_attribute(&id_attribute, &listing_id);
            }
        });
    }

    view! {
        <button
            node_ref=button_ref
            type="button"
            class=config.classes.control.clone()
            data-id=listing_id
            aria-pressed=aria_pressed
            title=title
        >
            <i class=icon_class></i>
            <span class=config.classes.tooltip.clone()>{tooltip}</span>
        </button>
    }
}

/// Configured id attribute when it is not the `data-id` always rendered
fn extra_id_attribute(config: &FavoriteConfig) -> Option<String> {
    let name = config.id_attribute_name();
    (name != DEFAULT_ID_ATTRIBUTE).then_some(name)
}

const DEFAULT_ID_ATTRIBUTE: &str = "data-id";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_id_attribute_is_in_markup() {
        assert_eq!(extra_id_attribute(&FavoriteConfig::default()), None);
    }

    #[test]
    fn test_renamed_id_attribute_is_set_after_mount() {
        let config = FavoriteConfig {
            id_attribute: "listing".to_string(),
            ..FavoriteConfig::default()
        };
        assert_eq!(extra_id_attribute(&config), Some("data-listing".to_string()));
    }
}
