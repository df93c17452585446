//! Favorite Control View-Model
//!
//! Each control's favorite state lives here as an explicit enum; the DOM is
//! rendered from it. Classes and ARIA are read only once, to seed a model
//! the first time a control is clicked.

use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::Element;

use crate::config::FavoriteConfig;
use crate::models::FavoriteStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteState {
    #[default]
    NotFavorited,
    Favorited,
}

impl From<FavoriteStatus> for FavoriteState {
    fn from(status: FavoriteStatus) -> Self {
        match status {
            FavoriteStatus::Added => FavoriteState::Favorited,
            FavoriteStatus::Removed => FavoriteState::NotFavorited,
        }
    }
}

impl From<bool> for FavoriteState {
    fn from(favorited: bool) -> Self {
        if favorited { FavoriteState::Favorited } else { FavoriteState::NotFavorited }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlPhase {
    #[default]
    Idle,
    Pending,
}

/// View-model of one favorite control
#[derive(Debug, Clone, PartialEq)]
pub struct ControlModel {
    pub resource_id: String,
    pub state: FavoriteState,
    pub phase: ControlPhase,
}

impl ControlModel {
    pub fn new(resource_id: impl Into<String>, state: FavoriteState) -> Self {
        Self {
            resource_id: resource_id.into(),
            state,
            phase: ControlPhase::Idle,
        }
    }

    /// Enter `Pending`. Returns false if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.phase == ControlPhase::Pending {
            return false;
        }
        self.phase = ControlPhase::Pending;
        true
    }

    /// Leave `Pending`; a status replaces the state, `None` keeps it.
    pub fn finish(&mut self, status: Option<FavoriteStatus>) {
        if let Some(status) = status {
            self.state = status.into();
        }
        self.phase = ControlPhase::Idle;
    }
}

/// Everything the DOM shows for one state
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance<'a> {
    pub icon_on: [&'a str; 2],
    pub icon_off: [&'a str; 2],
    pub aria_pressed: &'static str,
    pub title: &'a str,
    pub tooltip: &'a str,
}

impl<'a> Appearance<'a> {
    pub fn of(state: FavoriteState, config: &'a FavoriteConfig) -> Self {
        let c = &config.classes;
        let l = &config.labels;
        let filled = [c.icon_on.as_str(), c.color_on.as_str()];
        let empty = [c.icon_off.as_str(), c.color_off.as_str()];
        match state {
            FavoriteState::Favorited => Self {
                icon_on: filled,
                icon_off: empty,
                aria_pressed: "true",
                title: &l.title_on,
                tooltip: &l.tooltip_on,
            },
            FavoriteState::NotFavorited => Self {
                icon_on: empty,
                icon_off: filled,
                aria_pressed: "false",
                title: &l.title_off,
                tooltip: &l.tooltip_off,
            },
        }
    }

    /// Space-separated icon classes, for markup rendered from scratch
    pub fn icon_class(&self) -> String {
        self.icon_on.join(" ")
    }
}

// ========================
// Per-page registry
// ========================

thread_local! {
    static CONTROLS: RefCell<Registry<Element>> = RefCell::new(Registry::default());
}

/// Control view-models keyed by the number stamped on each element.
///
/// Each entry remembers the element that owns it, so a cloned control that
/// carries a copied key never shares its original's model.
#[derive(Debug)]
pub struct Registry<H> {
    next_key: u32,
    entries: HashMap<u32, Entry<H>>,
}

#[derive(Debug)]
struct Entry<H> {
    owner: H,
    model: ControlModel,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self {
            next_key: 0,
            entries: HashMap::new(),
        }
    }
}

impl<H: PartialEq> Registry<H> {
    pub fn insert(&mut self, owner: H, model: ControlModel) -> u32 {
        self.next_key += 1;
        self.entries.insert(self.next_key, Entry { owner, model });
        self.next_key
    }

    pub fn get_mut(&mut self, key: u32) -> Option<&mut ControlModel> {
        self.entries.get_mut(&key).map(|entry| &mut entry.model)
    }

    /// Model under `key` if `owner` created it and it still targets
    /// `resource_id`.
    pub fn owned_mut(&mut self, key: u32, owner: &H, resource_id: &str) -> Option<&mut ControlModel> {
        self.entries
            .get_mut(&key)
            .filter(|entry| entry.owner == *owner && entry.model.resource_id == resource_id)
            .map(|entry| &mut entry.model)
    }

    /// Drop idle models whose owner is gone. Pending ones stay until their
    /// request settles.
    pub fn prune(&mut self, mut is_live: impl FnMut(&H) -> bool) {
        self.entries
            .retain(|_, entry| entry.model.phase == ControlPhase::Pending || is_live(&entry.owner));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub fn with_registry<R>(f: impl FnOnce(&mut Registry<Element>) -> R) -> R {
    CONTROLS.with(|registry| f(&mut registry.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_rejected_until_finish() {
        let mut model = ControlModel::new("42", FavoriteState::NotFavorited);
        assert!(model.begin());
        assert!(!model.begin());
        model.finish(None);
        assert_eq!(model.phase, ControlPhase::Idle);
        assert!(model.begin());
    }

    #[test]
    fn test_state_follows_server_not_local_flip() {
        let mut model = ControlModel::new("42", FavoriteState::Favorited);
        // Server says "added" although the control already looked favorited
        model.begin();
        model.finish(Some(FavoriteStatus::Added));
        assert_eq!(model.state, FavoriteState::Favorited);

        model.begin();
        model.finish(Some(FavoriteStatus::Removed));
        assert_eq!(model.state, FavoriteState::NotFavorited);

        model.begin();
        model.finish(Some(FavoriteStatus::Removed));
        assert_eq!(model.state, FavoriteState::NotFavorited);
    }

    #[test]
    fn test_failure_keeps_state() {
        let mut model = ControlModel::new("42", FavoriteState::Favorited);
        model.begin();
        model.finish(None);
        assert_eq!(model.state, FavoriteState::Favorited);
        assert_eq!(model.phase, ControlPhase::Idle);
    }

    #[test]
    fn test_appearance_favorited() {
        let config = FavoriteConfig::default();
        let look = Appearance::of(FavoriteState::Favorited, &config);
        assert_eq!(look.icon_on, ["icon-save-filled", "text-red-500"]);
        assert_eq!(look.icon_off, ["icon-save", "text-gray-400"]);
        assert_eq!(look.aria_pressed, "true");
        assert_eq!(look.tooltip, "Remove Favorite");
        assert_eq!(look.title, "Remove from Favorites (click to undo)");
    }

    #[test]
    fn test_appearance_classes_are_exclusive() {
        let config = FavoriteConfig::default();
        for state in [FavoriteState::Favorited, FavoriteState::NotFavorited] {
            let look = Appearance::of(state, &config);
            assert!(look.icon_on.iter().all(|c| !look.icon_off.contains(c)));
        }
        let look = Appearance::of(FavoriteState::NotFavorited, &config);
        assert_eq!(look.aria_pressed, "false");
        assert_eq!(look.tooltip, "Add Favorite");
        assert_eq!(look.icon_class(), "icon-save text-gray-400");
    }

    #[test]
    fn test_registry_keys_are_unique() {
        let mut registry = Registry::default();
        let a = registry.insert("a", ControlModel::new("1", FavoriteState::NotFavorited));
        let b = registry.insert("b", ControlModel::new("1", FavoriteState::NotFavorited));
        assert_ne!(a, b);
        registry.get_mut(a).unwrap().begin();
        assert_eq!(registry.get_mut(b).unwrap().phase, ControlPhase::Idle);
    }

    #[test]
    fn test_copied_key_does_not_share_model() {
        let mut registry = Registry::default();
        let key = registry.insert("original", ControlModel::new("42", FavoriteState::NotFavorited));
        registry.get_mut(key).unwrap().begin();

        // A clone carries the same key but is a different element
        assert!(registry.owned_mut(key, &"clone", "42").is_none());
        assert!(registry.owned_mut(key, &"original", "42").is_some());
    }

    #[test]
    fn test_changed_resource_id_does_not_reuse_model() {
        let mut registry = Registry::default();
        let key = registry.insert("button", ControlModel::new("42", FavoriteState::Favorited));
        assert!(registry.owned_mut(key, &"button", "43").is_none());
    }

    #[test]
    fn test_prune_drops_detached_idle_models_only() {
        let mut registry = Registry::default();
        let live = registry.insert(("live", true), ControlModel::new("1", FavoriteState::NotFavorited));
        let gone = registry.insert(("gone", false), ControlModel::new("2", FavoriteState::NotFavorited));
        let busy = registry.insert(("busy", false), ControlModel::new("3", FavoriteState::NotFavorited));
        registry.get_mut(busy).unwrap().begin();

        registry.prune(|(_, connected)| *connected);

        assert_eq!(registry.len(), 2);
        assert!(registry.get_mut(live).is_some());
        assert!(registry.get_mut(gone).is_none());
        assert!(registry.get_mut(busy).is_some());
    }
}
