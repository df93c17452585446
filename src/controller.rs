//! Favorite Toggle Controller
//!
//! One delegated click listener on `<body>` drives every favorite control on
//! the page, including controls inserted after load.
//!
//! Per control: `Idle -> Pending -> Idle`. While `Pending` the control is
//! disabled and further clicks on it are dropped. The displayed state only
//! ever changes to what the server answered.

use std::cell::Cell;
use std::rc::Rc;

use dom_delegate::{delegate, flash_class};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

use crate::commands;
use crate::config::FavoriteConfig;
use crate::count::{CountDisplay, FavoriteCount};
use crate::error::FavoriteError;
use crate::models::FavoriteStatus;
use crate::render;
use crate::state::{with_registry, ControlModel, FavoriteState};

/// Attribute linking a control element to its view-model
const KEY_ATTRIBUTE: &str = "data-favorite-key";

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Bind the delegated listener. Safe to call more than once.
pub fn install(config: FavoriteConfig) -> Result<(), JsValue> {
    if INSTALLED.with(|flag| flag.replace(true)) {
        log::debug!("favorite controller already installed");
        return Ok(());
    }

    let doc = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| missing("document"))?;
    let body = doc.body().ok_or_else(|| missing("document body"))?;
    let config = Rc::new(config);

    if config.sync_count_on_load {
        sync_count(doc.clone(), Rc::clone(&config));
    }

    let selector = config.control_selector.clone();
    delegate(&body, "click", &selector, move |ev, control| {
        on_click(ev, control, doc.clone(), Rc::clone(&config));
    })?;

    log::info!("favorite controller bound to {selector}");
    Ok(())
}

fn missing(what: &'static str) -> JsValue {
    JsValue::from_str(&FavoriteError::MissingElement(what).to_string())
}

fn on_click(ev: Event, control: Element, doc: Document, config: Rc<FavoriteConfig>) {
    ev.prevent_default();

    let (key, resource_id) = match claim(&control, &config) {
        Ok(Some(claimed)) => claimed,
        Ok(None) => {
            log::debug!("favorite control busy, click ignored");
            return;
        }
        Err(err) => {
            log::error!("favorite toggle failed: {err}");
            apply(&Plan::failed(&config), &control, &doc, &config);
            return;
        }
    };

    render::set_pending(&control, true, &config);

    spawn_local(async move {
        let outcome = request(&doc, &config, &resource_id).await;
        if let Err(err) = &outcome {
            log::error!("favorite toggle failed for {resource_id}: {err}");
        }

        let plan = with_registry(|registry| registry.get_mut(key).map(|model| settle(model, &outcome, &config)))
            .unwrap_or_else(|| Plan::failed(&config));
        apply(&plan, &control, &doc, &config);

        render::set_pending(&control, false, &config);
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlashTarget {
    Control,
    Icon,
}

/// A class shown for a fixed time
#[derive(Debug, Clone, PartialEq)]
struct Flash<'a> {
    target: FlashTarget,
    class: &'a str,
    duration_ms: u32,
}

/// DOM changes that follow a settled request
#[derive(Debug, Clone, PartialEq)]
struct Plan<'a> {
    /// New state to render; `None` leaves the control as it was
    render: Option<FavoriteState>,
    flash: Option<Flash<'a>>,
    /// Status to fold into the count display
    count: Option<FavoriteStatus>,
}

impl<'a> Plan<'a> {
    fn failed(config: &'a FavoriteConfig) -> Self {
        Self {
            render: None,
            flash: Some(Flash {
                target: FlashTarget::Control,
                class: &config.classes.shake,
                duration_ms: config.shake_duration_ms,
            }),
            count: None,
        }
    }
}

/// Close the model's request and decide what the page shows.
fn settle<'a>(
    model: &mut ControlModel,
    outcome: &Result<FavoriteStatus, FavoriteError>,
    config: &'a FavoriteConfig,
) -> Plan<'a> {
    let status = outcome.as_ref().ok().copied();
    model.finish(status);

    let Some(status) = status else {
        return Plan::failed(config);
    };
    let pop = (status == FavoriteStatus::Added).then(|| Flash {
        target: FlashTarget::Icon,
        class: &config.classes.pop,
        duration_ms: config.pop_duration_ms,
    });
    Plan {
        render: Some(model.state),
        flash: pop,
        count: Some(status),
    }
}

fn apply(plan: &Plan<'_>, control: &Element, doc: &Document, config: &FavoriteConfig) {
    if let Some(state) = plan.render {
        render::render_state(control, state, config);
    }
    if let Some(flash) = &plan.flash {
        let target = match flash.target {
            FlashTarget::Control => Some(control.clone()),
            FlashTarget::Icon => render::icon_of(control, config),
        };
        if let Some(target) = target {
            flash_class(&target, flash.class, flash.duration_ms);
        }
    }
    if let Some(status) = plan.count {
        if let Some(display) = CountDisplay::locate(doc, config) {
            let count = display.apply(status);
            log::debug!("favorite count now {}", count.0);
        }
    }
}

/// Move the control's view-model into `Pending`.
///
/// `Ok(None)` means a request is already in flight for this control. A key
/// copied onto another element, or left behind after the id changed, gets
/// a fresh model.
fn claim(control: &Element, config: &FavoriteConfig) -> Result<Option<(u32, String)>, FavoriteError> {
    if render::is_disabled(control) {
        return Ok(None);
    }

    let existing = control
        .get_attribute(KEY_ATTRIBUTE)
        .and_then(|key| key.parse::<u32>().ok());

    let resource_id = control
        .get_attribute(&config.id_attribute_name())
        .filter(|id| !id.trim().is_empty())
        .ok_or(FavoriteError::MissingResourceId)?;

    with_registry(|registry| {
        if let Some(key) = existing {
            if let Some(model) = registry.owned_mut(key, control, &resource_id) {
                return Ok(model.begin().then_some((key, resource_id)));
            }
        }

        registry.prune(|owner| owner.is_connected());

        let mut model = ControlModel::new(resource_id.clone(), render::read_initial_state(control, config));
        model.begin();
        let key = registry.insert(control.clone(), model);
        let _ = control.set_attribute(KEY_ATTRIBUTE, &key.to_string());
        Ok(Some((key, resource_id)))
    })
}

async fn request(doc: &Document, config: &FavoriteConfig, resource_id: &str) -> Result<FavoriteStatus, FavoriteError> {
    let token = commands::read_csrf_token(doc, &config.csrf_selector)?;
    commands::toggle_favorite(config, &token, resource_id).await
}

/// Replace the server-rendered count with a fresh one.
fn sync_count(doc: Document, config: Rc<FavoriteConfig>) {
    let Some(display) = CountDisplay::locate(&doc, &config) else {
        return;
    };
    spawn_local(async move {
        match commands::fetch_favorite_count(&config).await {
            Ok(count) => display.set(FavoriteCount(count)),
            Err(err) => log::warn!("favorite count sync failed: {err}"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Appearance, ControlPhase};

    fn pending(id: &str, state: FavoriteState) -> ControlModel {
        let mut model = ControlModel::new(id, state);
        model.begin();
        model
    }

    #[test]
    fn test_added_renders_favorited_pops_and_counts() {
        let config = FavoriteConfig::default();
        let mut model = pending("42", FavoriteState::NotFavorited);

        let plan = settle(&mut model, &Ok(FavoriteStatus::Added), &config);

        assert_eq!(model.phase, ControlPhase::Idle);
        assert_eq!(plan.render, Some(FavoriteState::Favorited));
        let look = Appearance::of(FavoriteState::Favorited, &config);
        assert_eq!(look.icon_on, ["icon-save-filled", "text-red-500"]);
        assert_eq!(look.aria_pressed, "true");
        assert_eq!(look.tooltip, "Remove Favorite");
        assert_eq!(
            plan.flash,
            Some(Flash { target: FlashTarget::Icon, class: "animate-pop", duration_ms: 300 })
        );
        assert_eq!(plan.count, Some(FavoriteStatus::Added));
        assert_eq!(FavoriteCount(3).apply(FavoriteStatus::Added), FavoriteCount(4));
    }

    #[test]
    fn test_http_error_shakes_and_keeps_state() {
        let config = FavoriteConfig::default();
        let mut model = pending("42", FavoriteState::Favorited);

        let plan = settle(&mut model, &Err(FavoriteError::Http(500)), &config);

        assert_eq!(model.state, FavoriteState::Favorited);
        assert_eq!(model.phase, ControlPhase::Idle);
        assert_eq!(plan.render, None);
        assert_eq!(plan.count, None);
        assert_eq!(
            plan.flash,
            Some(Flash { target: FlashTarget::Control, class: "animate-shake", duration_ms: 500 })
        );
    }

    #[test]
    fn test_unknown_status_is_a_failed_toggle() {
        let config = FavoriteConfig::default();
        let mut model = pending("42", FavoriteState::NotFavorited);

        let outcome = Err(FavoriteError::UnexpectedStatus("toggled".to_string()));
        let plan = settle(&mut model, &outcome, &config);

        assert_eq!(model.state, FavoriteState::NotFavorited);
        assert_eq!(plan, Plan::failed(&config));
    }

    #[test]
    fn test_removed_at_zero_keeps_count_hidden() {
        let config = FavoriteConfig::default();
        let mut model = pending("42", FavoriteState::Favorited);

        let plan = settle(&mut model, &Ok(FavoriteStatus::Removed), &config);

        assert_eq!(plan.render, Some(FavoriteState::NotFavorited));
        assert_eq!(plan.flash, None);
        let count = FavoriteCount(0).apply(plan.count.unwrap());
        assert_eq!(count, FavoriteCount(0));
        assert!(!count.is_visible());
    }

    #[test]
    fn test_request_can_start_again_after_failure() {
        let config = FavoriteConfig::default();
        let mut model = pending("42", FavoriteState::NotFavorited);
        settle(&mut model, &Err(FavoriteError::Network("offline".to_string())), &config);
        assert!(model.begin());
    }
}
