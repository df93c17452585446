//! DOM Delegation Utilities
//!
//! One listener on a stable ancestor, matched against a selector at event
//! time, so elements inserted after page load are covered without rebinding.
//! Also small helpers for transient CSS classes.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, Node};

/// Register a single `event_type` listener on `root` that fires `handler`
/// only when the event target (or one of its ancestors) matches `selector`.
///
/// The closure lives for the rest of the page, so call this once per
/// root/selector pair.
pub fn delegate<F>(root: &EventTarget, event_type: &str, selector: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event, Element) + 'static,
{
    let selector = selector.to_string();
    let listener = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        if let Some(matched) = closest_match(&ev, &selector) {
            handler(ev, matched);
        }
    });

    root.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}

/// Closest element matching `selector`, starting at the event target.
///
/// Text nodes resolve through their parent element. An invalid selector is
/// logged and treated as no match.
pub fn closest_match(ev: &Event, selector: &str) -> Option<Element> {
    let start = target_element(ev.target()?)?;
    match start.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid delegate selector {selector:?}: {err:?}");
            None
        }
    }
}

fn target_element(target: EventTarget) -> Option<Element> {
    match target.dyn_into::<Element>() {
        Ok(el) => Some(el),
        Err(other) => other.dyn_ref::<Node>().and_then(|node| node.parent_element()),
    }
}

/// Add `on` classes and remove `off` classes in one pass.
pub fn set_classes(el: &Element, on: &[&str], off: &[&str]) {
    let list = el.class_list();
    for class in off {
        let _ = list.remove_1(class);
    }
    for class in on {
        let _ = list.add_1(class);
    }
}

/// Add `class` now and remove it after `duration_ms`.
pub fn flash_class(el: &Element, class: &str, duration_ms: u32) {
    let _ = el.class_list().add_1(class);
    let el = el.clone();
    let class = class.to_string();
    Timeout::new(duration_ms, move || {
        let _ = el.class_list().remove_1(&class);
    })
    .forget();
}
