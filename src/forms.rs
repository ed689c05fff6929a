use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::core::FORM_RESET_MS;
use crate::dom::select_all;

/// Submit feedback: disables the submit control, swaps its label and
/// shows a spinner. A watchdog restores the control if the page has not
/// navigated away after ten seconds.
pub(crate) struct FormProgress {
    _listeners: Vec<EventListener>,
}

pub(crate) fn mount(document: &Document) -> FormProgress {
    let mut listeners = Vec::new();
    for form in select_all(document, "form") {
        let document = document.clone();
        let target = form.clone();
        listeners.push(EventListener::new(&form, "submit", move |_| {
            show_loading(&document, &target);
        }));
    }
    FormProgress {
        _listeners: listeners,
    }
}

fn show_loading(document: &Document, form: &Element) {
    let Ok(Some(submit)) = form.query_selector("input[type='submit'], button[type='submit']")
    else {
        return;
    };
    if is_disabled(&submit) {
        return;
    }
    let original = label_of(&submit);
    set_disabled(&submit, true);
    set_label(&submit, "Procesando...");

    let Ok(spinner) = document.create_element("div") else {
        return;
    };
    spinner.set_class_name("loading-spinner");
    spinner.set_inner_html("<div class=\"spinner-circle\"></div><span>Procesando datos...</span>");
    let _ = form.append_child(&spinner);

    Timeout::new(FORM_RESET_MS, move || {
        if !is_disabled(&submit) {
            return;
        }
        set_disabled(&submit, false);
        set_label(&submit, &original);
        spinner.remove();
    })
    .forget();
}

fn is_disabled(control: &Element) -> bool {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        return input.disabled();
    }
    if let Some(button) = control.dyn_ref::<HtmlButtonElement>() {
        return button.disabled();
    }
    false
}

fn set_disabled(control: &Element, disabled: bool) {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.set_disabled(disabled);
    } else if let Some(button) = control.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
}

fn label_of(control: &Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    control.text_content().unwrap_or_default()
}

fn set_label(control: &Element, label: &str) {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.set_value(label);
    } else {
        control.set_text_content(Some(label));
    }
}
