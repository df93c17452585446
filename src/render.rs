//! Control Rendering
//!
//! Writes a control's view-model onto its DOM subtree.

use dom_delegate::set_classes;
use web_sys::Element;

use crate::config::FavoriteConfig;
use crate::state::{Appearance, FavoriteState};

/// Nested icon of a control; optional so a malformed control still gets
/// its ARIA and tooltip updates.
pub fn icon_of(control: &Element, config: &FavoriteConfig) -> Option<Element> {
    control.query_selector(&config.icon_selector).ok().flatten()
}

fn tooltip_of(control: &Element, config: &FavoriteConfig) -> Option<Element> {
    control.query_selector(&config.tooltip_selector).ok().flatten()
}

/// Initial state of a server-rendered control.
pub fn read_initial_state(control: &Element, config: &FavoriteConfig) -> FavoriteState {
    if let Some(pressed) = control.get_attribute("aria-pressed") {
        return FavoriteState::from(pressed == "true");
    }
    let filled = icon_of(control, config)
        .map(|icon| icon.class_list().contains(&config.classes.icon_on))
        .unwrap_or(false);
    FavoriteState::from(filled)
}

pub fn render_state(control: &Element, state: FavoriteState, config: &FavoriteConfig) {
    let look = Appearance::of(state, config);

    if let Some(icon) = icon_of(control, config) {
        set_classes(&icon, &look.icon_on, &look.icon_off);
    }
    let _ = control.set_attribute("aria-pressed", look.aria_pressed);
    let _ = control.set_attribute("title", look.title);
    if let Some(tooltip) = tooltip_of(control, config) {
        tooltip.set_text_content(Some(look.tooltip));
    }
}

pub fn is_disabled(control: &Element) -> bool {
    control.has_attribute("disabled")
}

/// Disable the control and dim its icon while a request is in flight.
pub fn set_pending(control: &Element, pending: bool, config: &FavoriteConfig) {
    let loading = config.classes.loading.as_str();
    let icon = icon_of(control, config);
    if pending {
        let _ = control.set_attribute("disabled", "");
        if let Some(icon) = icon {
            set_classes(&icon, &[loading], &[]);
        }
    } else {
        let _ = control.remove_attribute("disabled");
        if let Some(icon) = icon {
            set_classes(&icon, &[], &[loading]);
        }
    }
}
