use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(crate) fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements_of)
        .unwrap_or_default()
}

pub(crate) fn select_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements_of)
        .unwrap_or_default()
}

fn elements_of(nodes: NodeList) -> Vec<Element> {
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            elements.push(element);
        }
    }
    elements
}

/// Property-level style write so independent decorators never clobber
/// each other's inline styles.
pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = element.style().set_property(property, value);
}
