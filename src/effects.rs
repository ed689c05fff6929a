use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};

use crate::core::{INFO_PANEL_ID, RIPPLE_MS};
use crate::dom::{select_all, set_style};

/// Page-wide cosmetic touches: hover lift on operation cards, a ripple
/// on button clicks, scroll-in reveal, and the global info-panel toggle
/// the page templates call inline.
pub(crate) struct PageEffects {
    _listeners: Vec<EventListener>,
    _observer: Option<IntersectionObserver>,
    _observer_callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

pub(crate) fn mount(document: &Document) -> PageEffects {
    inject_styles(document);
    let mut listeners = Vec::new();
    hover_lift(document, &mut listeners);
    ripples(document, &mut listeners);
    let observer = reveal_observer(document);
    let (observer, observer_callback) = match observer {
        Some((observer, callback)) => (Some(observer), Some(callback)),
        None => (None, None),
    };
    install_info_toggle(document);
    PageEffects {
        _listeners: listeners,
        _observer: observer,
        _observer_callback: observer_callback,
    }
}

const EFFECT_STYLES: &str = include_str!("effects.css");

fn inject_styles(document: &Document) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(EFFECT_STYLES));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

fn hover_lift(document: &Document, listeners: &mut Vec<EventListener>) {
    for card in select_all(document, ".operation-card") {
        let lifted = card.clone();
        listeners.push(EventListener::new(&card, "mouseenter", move |_| {
            set_style(&lifted, "transform", "translateY(-5px) scale(1.02)");
            set_style(&lifted, "box-shadow", "0 8px 25px rgba(0,0,0,0.15)");
        }));
        let rested = card.clone();
        listeners.push(EventListener::new(&card, "mouseleave", move |_| {
            set_style(&rested, "transform", "translateY(0) scale(1)");
            set_style(&rested, "box-shadow", "0 4px 15px rgba(0,0,0,0.1)");
        }));
    }
}

fn ripples(document: &Document, listeners: &mut Vec<EventListener>) {
    for button in select_all(document, "input[type='submit'], button") {
        let document = document.clone();
        let target = button.clone();
        listeners.push(EventListener::new(&button, "click", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            spawn_ripple(&document, &target, event);
        }));
    }
}

fn spawn_ripple(document: &Document, target: &Element, event: &MouseEvent) {
    let rect = target.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = event.client_x() as f64 - rect.left() - size / 2.0;
    let y = event.client_y() as f64 - rect.top() - size / 2.0;
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    ripple.set_class_name("ripple");
    set_style(&ripple, "width", &format!("{size}px"));
    set_style(&ripple, "height", &format!("{size}px"));
    set_style(&ripple, "left", &format!("{x}px"));
    set_style(&ripple, "top", &format!("{y}px"));
    let _ = target.append_child(&ripple);
    Timeout::new(RIPPLE_MS, move || {
        ripple.remove();
    })
    .forget();
}

fn reveal_observer(
    document: &Document,
) -> Option<(
    IntersectionObserver,
    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
)> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("50px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for element in select_all(document, ".operation-card, .card") {
        observer.observe(&element);
    }
    Some((observer, callback))
}

/// The templates invoke `showInfo()` from inline handlers; publish it on
/// the window the way a boot shim would.
fn install_info_toggle(document: &Document) {
    let document = document.clone();
    let closure = Closure::<dyn Fn()>::new(move || {
        let Some(panel) = document.get_element_by_id(INFO_PANEL_ID) else {
            return;
        };
        let Some(panel) = panel.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        let current = panel
            .style()
            .get_property_value("display")
            .unwrap_or_default();
        let next = if current == "block" { "none" } else { "block" };
        let _ = panel.style().set_property("display", next);
    });
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(&window, &JsValue::from_str("showInfo"), closure.as_ref());
    }
    closure.forget();
}
