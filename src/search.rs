use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, HtmlSelectElement, UrlSearchParams};

use crate::core::SEARCH_ACTION_FRAGMENT;
use crate::dom::{select_all, select_all_in};

/// Intercepts the search form and replays it asynchronously against the
/// same endpoint, preserving the current page number. On success the
/// whole document content is swapped for the response; on failure the
/// page is left as it was.
pub(crate) struct SearchRelay {
    _listeners: Vec<EventListener>,
}

pub(crate) fn mount(document: &Document) -> SearchRelay {
    let mut listeners = Vec::new();
    for form in select_all(document, "form") {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        if !form.action().contains(SEARCH_ACTION_FRAGMENT) {
            continue;
        }
        let target = form.clone();
        listeners.push(EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event| {
                event.prevent_default();
                relay(target.clone());
            },
        ));
    }
    SearchRelay {
        _listeners: listeners,
    }
}

fn relay(form: HtmlFormElement) {
    let url = format!("{}?page={}", form.action(), current_page());
    let body = encode_form_fields(&form);
    spawn_local(async move {
        if let Err(err) = post_and_replace(&url, body).await {
            console::error!("search relay failed:", err);
        }
    });
}

fn current_page() -> u32 {
    let Some(window) = web_sys::window() else {
        return 1;
    };
    let Ok(search) = window.location().search() else {
        return 1;
    };
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return 1;
    };
    params
        .get("page")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1)
}

fn encode_form_fields(form: &HtmlFormElement) -> String {
    let mut body = String::new();
    for field in select_all_in(form, "input[name], select[name]") {
        let (name, value) = if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            (input.name(), input.value())
        } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
            (select.name(), select.value())
        } else {
            continue;
        };
        if !body.is_empty() {
            body.push('&');
        }
        body.push_str(&encode(&name));
        body.push('=');
        body.push_str(&encode(&value));
    }
    body
}

fn encode(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

async fn post_and_replace(url: &str, body: String) -> Result<(), String> {
    let response = Request::post(url)
        .header(
            "Content-Type",
            "application/x-www-form-urlencoded;charset=UTF-8",
        )
        .body(body)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("status {}", response.status()));
    }
    let text = response.text().await.map_err(|err| err.to_string())?;
    let document = crate::dom::document().ok_or_else(|| "document unavailable".to_string())?;
    let root = document
        .document_element()
        .ok_or_else(|| "document root unavailable".to_string())?;
    root.set_inner_html(&text);
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn form_fields_encode_as_urlencoded_pairs() {
        let document = crate::dom::document().expect("document available");
        let form = document
            .create_element("form")
            .expect("create form")
            .dyn_into::<HtmlFormElement>()
            .expect("form element");
        form.set_inner_html(
            "<input type=\"text\" name=\"valor\" value=\"a b&c\">\
             <input type=\"submit\" value=\"Buscar\">",
        );
        let body = document.body().expect("body available");
        let _ = body.append_child(&form);

        assert_eq!(encode_form_fields(&form), "valor=a%20b%26c");
        form.remove();
    }

    #[wasm_bindgen_test]
    fn page_defaults_to_one_without_a_query() {
        assert_eq!(current_page(), 1);
    }
}
