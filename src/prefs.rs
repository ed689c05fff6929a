use std::cell::Cell;
use std::rc::Rc;

use gloo::console;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

use crate::core::{THEME_COOKIE, THEME_COOKIE_DAYS, THEME_STORAGE_KEY};
use enlace_core::Theme;

/// Process-lifetime application state. Holds the in-memory preference
/// tier that survives only from load to unload.
pub(crate) struct AppContext {
    memory_theme: Cell<Option<Theme>>,
}

impl AppContext {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            memory_theme: Cell::new(None),
        })
    }

    fn memory_theme(&self) -> Option<Theme> {
        self.memory_theme.get()
    }

    fn set_memory_theme(&self, theme: Theme) {
        self.memory_theme.set(Some(theme));
    }
}

/// Tiered theme persistence: localStorage, then a cookie, then the
/// injected in-memory fallback. Reads never fail; writes degrade one
/// tier at a time without surfacing errors to the caller.
#[derive(Clone)]
pub(crate) struct PrefStore {
    ctx: Rc<AppContext>,
}

impl PrefStore {
    pub(crate) fn new(ctx: Rc<AppContext>) -> Self {
        Self { ctx }
    }

    pub(crate) fn read(&self) -> Theme {
        Theme::resolve_saved(
            read_local_storage(),
            read_cookie(),
            self.ctx.memory_theme(),
        )
    }

    pub(crate) fn write(&self, theme: Theme) {
        if !write_local_storage(theme) {
            console::warn!("theme storage unavailable, falling back to cookie");
            write_cookie(theme);
        }
        self.ctx.set_memory_theme(theme);
    }
}

fn read_local_storage() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(THEME_STORAGE_KEY).ok()??;
    Theme::parse(&raw)
}

fn write_local_storage(theme: Theme) -> bool {
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        return false;
    };
    storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_ok()
}

fn read_cookie() -> Option<Theme> {
    let cookies = html_document()?.cookie().ok()?;
    for chunk in cookies.split(';') {
        let mut parts = chunk.trim().splitn(2, '=');
        let name = parts.next().unwrap_or("");
        let value = parts.next().unwrap_or("");
        if name == THEME_COOKIE {
            return Theme::parse(value);
        }
    }
    None
}

fn write_cookie(theme: Theme) {
    let Some(document) = html_document() else {
        return;
    };
    let expires_ms = js_sys::Date::now() + THEME_COOKIE_DAYS * 24.0 * 60.0 * 60.0 * 1000.0;
    let expires = js_sys::Date::new(&JsValue::from_f64(expires_ms));
    let cookie = format!(
        "{}={};expires={};path=/",
        THEME_COOKIE,
        theme.as_str(),
        String::from(expires.to_utc_string())
    );
    let _ = document.set_cookie(&cookie);
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn write_then_read_returns_latest_value() {
        let store = PrefStore::new(AppContext::new());
        store.write(Theme::Dark);
        assert_eq!(store.read(), Theme::Dark);
        store.write(Theme::Light);
        assert_eq!(store.read(), Theme::Light);
    }

    #[wasm_bindgen_test]
    fn memory_tier_answers_when_no_store_has_the_key() {
        if let Some(storage) =
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        {
            let _ = storage.remove_item(THEME_STORAGE_KEY);
        }
        let ctx = AppContext::new();
        ctx.set_memory_theme(Theme::Dark);
        // The cookie from another test may still hold a value; it ranks
        // above memory, so clear it the cookie way.
        if let Some(document) = html_document() {
            let _ = document.set_cookie("theme=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/");
        }
        let store = PrefStore::new(ctx);
        assert_eq!(store.read(), Theme::Dark);
    }

    #[wasm_bindgen_test]
    fn cookie_round_trips_the_token() {
        write_cookie(Theme::Dark);
        assert_eq!(read_cookie(), Some(Theme::Dark));
        write_cookie(Theme::Light);
        assert_eq!(read_cookie(), Some(Theme::Light));
    }
}
