//! Favorite Toggle Configuration
//!
//! Defaults match the host site's markup and routes. A page can override any
//! subset by embedding `<script type="application/json" id="favorite-toggle-config">`.

use serde::Deserialize;
use web_sys::Document;

use crate::error::FavoriteError;

/// Id of the optional JSON block holding config overrides
pub const CONFIG_SCRIPT_ID: &str = "favorite-toggle-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FavoriteConfig {
    /// POST target; the resource id travels in the form body
    pub toggle_endpoint: String,
    /// Form field carrying the resource id
    pub id_field: String,
    /// GET target returning `{ "count": n }`
    pub count_endpoint: String,
    /// Refresh the count display from the server once at install
    pub sync_count_on_load: bool,

    pub control_selector: String,
    /// Data attribute (without `data-`) holding the resource id
    pub id_attribute: String,
    pub icon_selector: String,
    pub tooltip_selector: String,
    pub csrf_selector: String,
    pub csrf_header: String,
    pub count_id: String,
    pub count_container_id: String,

    pub classes: ClassNames,
    pub labels: Labels,

    pub pop_duration_ms: u32,
    pub shake_duration_ms: u32,
}

impl Default for FavoriteConfig {
    fn default() -> Self {
        Self {
            toggle_endpoint: "/property/favorite/".to_string(),
            id_field: "property_id".to_string(),
            count_endpoint: "/api/user/favorites/count/".to_string(),
            sync_count_on_load: false,
            control_selector: ".favorite-toggle".to_string(),
            id_attribute: "id".to_string(),
            icon_selector: "i".to_string(),
            tooltip_selector: ".tooltip".to_string(),
            csrf_selector: "[name=csrfmiddlewaretoken]".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            count_id: "favorites-count".to_string(),
            count_container_id: "favorites-button-container".to_string(),
            classes: ClassNames::default(),
            labels: Labels::default(),
            pop_duration_ms: 300,
            shake_duration_ms: 500,
        }
    }
}

/// CSS classes written onto the control and its icon
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Class carried by controls rendered client-side
    pub control: String,
    /// Class carried by tooltips rendered client-side
    pub tooltip: String,
    pub icon_off: String,
    pub icon_on: String,
    pub color_off: String,
    pub color_on: String,
    pub loading: String,
    pub pop: String,
    pub shake: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            control: "favorite-toggle".to_string(),
            tooltip: "tooltip".to_string(),
            icon_off: "icon-save".to_string(),
            icon_on: "icon-save-filled".to_string(),
            color_off: "text-gray-400".to_string(),
            color_on: "text-red-500".to_string(),
            loading: "opacity-75".to_string(),
            pop: "animate-pop".to_string(),
            shake: "animate-shake".to_string(),
        }
    }
}

/// Tooltip and title text per state
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub tooltip_on: String,
    pub tooltip_off: String,
    pub title_on: String,
    pub title_off: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            tooltip_on: "Remove Favorite".to_string(),
            tooltip_off: "Add Favorite".to_string(),
            title_on: "Remove from Favorites (click to undo)".to_string(),
            title_off: "Add to Favorites".to_string(),
        }
    }
}

impl FavoriteConfig {
    /// Parse an override block; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, FavoriteError> {
        serde_json::from_str(json).map_err(|e| FavoriteError::Config(e.to_string()))
    }

    /// Read overrides from the page, falling back to defaults.
    pub fn from_document(doc: &Document) -> Self {
        let Some(script) = doc.get_element_by_id(CONFIG_SCRIPT_ID) else {
            return Self::default();
        };
        let json = script.text_content().unwrap_or_default();
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    /// Full attribute name of the resource id, e.g. `data-id`
    pub fn id_attribute_name(&self) -> String {
        format!("data-{}", self.id_attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site() {
        let config = FavoriteConfig::default();
        assert_eq!(config.toggle_endpoint, "/property/favorite/");
        assert_eq!(config.id_attribute_name(), "data-id");
        assert_eq!(config.pop_duration_ms, 300);
        assert_eq!(config.shake_duration_ms, 500);
        assert_eq!(config.labels.tooltip_on, "Remove Favorite");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = FavoriteConfig::from_json(
            r#"{"toggle_endpoint":"/listing/favorite/","classes":{"shake":"wobble"},"sync_count_on_load":true}"#,
        )
        .unwrap();

        assert_eq!(config.toggle_endpoint, "/listing/favorite/");
        assert!(config.sync_count_on_load);
        assert_eq!(config.classes.shake, "wobble");
        assert_eq!(config.classes.pop, "animate-pop");
        assert_eq!(config.control_selector, ".favorite-toggle");
    }

    #[test]
    fn test_invalid_override_is_config_error() {
        let err = FavoriteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, FavoriteError::Config(_)));
    }
}
