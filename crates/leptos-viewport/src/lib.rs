//! Leptos Viewport Utilities
//!
//! Thin browser bindings for page-level effects: global scroll, key and
//! click listeners, fire-and-forget timers, debouncing, one-shot
//! intersection observation and runtime style injection.
//!
//! Listeners registered here live for the rest of the page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Current vertical scroll position of the window
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Run `f` once after `ms` milliseconds. Not cancellable.
pub fn set_timeout<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(ms, f).forget();
}

/// Trailing-edge debounce: only the last call within `wait_ms` runs.
///
/// Each call replaces the pending timeout; dropping a `Timeout` clears it.
pub fn debounce<T, F>(wait_ms: u32, f: F) -> impl FnMut(T)
where
    T: 'static,
    F: FnMut(T) + 'static,
{
    let f = Rc::new(RefCell::new(f));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move |arg: T| {
        let f = f.clone();
        let timeout = Timeout::new(wait_ms, move || (&mut *f.borrow_mut())(arg));
        pending.borrow_mut().replace(timeout);
    }
}

/// Bind a window scroll listener that receives the new scroll position
pub fn bind_window_scroll<F>(mut on_scroll: F)
where
    F: FnMut(f64) + 'static,
{
    let cb = Closure::<dyn FnMut()>::new(move || on_scroll(scroll_y()));

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

/// Scroll position signal that only updates once scrolling settles for `wait_ms`
pub fn debounced_scroll_signal(wait_ms: u32) -> ReadSignal<f64> {
    let (read, write) = signal(scroll_y());
    bind_window_scroll(debounce(wait_ms, move |y: f64| write.set(y)));
    read
}

/// Bind a document keydown listener that receives `KeyboardEvent.key`
pub fn bind_document_keydown<F>(mut on_key: F)
where
    F: FnMut(String) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        on_key(ev.key());
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

/// Bind a document click listener (fires for every click that bubbles up)
pub fn bind_document_click<F>(on_click: F)
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(on_click);

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

/// Run `f` on window load, or immediately if the page already finished loading
pub fn on_window_load<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(win) = web_sys::window() else { return };

    let loaded = win
        .document()
        .map(|doc| is_load_complete(&doc.ready_state()))
        .unwrap_or(false);
    if loaded {
        f();
        return;
    }

    let cb = Closure::once(f);
    let _ = win.add_event_listener_with_callback("load", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// `document.readyState` value once the `load` event has fired
pub fn is_load_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Whether an event target lies inside `container`
pub fn contains_target(container: &web_sys::Node, target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

/// Whether the event target is, or sits inside, an element matching `selector`
pub fn target_closest(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Document-relative `(offsetTop, offsetHeight)` of the element with this id
pub fn element_offset(id: &str) -> Option<(f64, f64)> {
    let el = web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some((f64::from(el.offset_top()), f64::from(el.offset_height())))
}

/// Smooth-scroll the window to a vertical position
pub fn smooth_scroll_to(top: f64) {
    let Some(win) = web_sys::window() else { return };

    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

/// Value of a CSS custom property on the root element
pub fn root_css_property(name: &str) -> Option<String> {
    let win = web_sys::window()?;
    let root = win.document()?.document_element()?;
    let style = win.get_computed_style(&root).ok()??;
    style.get_property_value(name).ok()
}

/// Append a `<style>` element to `<head>` unless one with this id exists
pub fn inject_style(id: &str, css: &str) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else { return };
    if doc.get_element_by_id(id).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else { return };

    style.set_id(id);
    style.set_text_content(Some(css));
    let _ = head.append_child(&style);
}

/// Call `on_visible` the first time `el` intersects the viewport, then stop
/// observing it.
pub fn observe_first_intersection<F>(el: &web_sys::Element, threshold: f64, root_margin: &str, on_visible: F)
where
    F: FnOnce() + 'static,
{
    let mut on_visible = Some(on_visible);
    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let hit = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !hit {
                return;
            }
            if let Some(f) = on_visible.take() {
                f();
            }
            observer.disconnect();
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);

    if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
        observer.observe(el);
    }
    cb.forget();
}

/// Append a transient `<span>` with the given inline style to `parent`,
/// removing it after `ms` milliseconds.
pub fn spawn_transient_span(parent: &web_sys::Element, style: &str, ms: u32) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else { return };
    let Ok(span) = doc.create_element("span") else { return };

    let _ = span.set_attribute("style", style);
    if parent.append_child(&span).is_ok() {
        set_timeout(ms, move || span.remove());
    }
}
