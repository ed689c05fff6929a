use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, Element, HtmlElement};

use crate::core::{THEME_ATTR, THEME_TOGGLE_ID};
use crate::prefs::PrefStore;
use enlace_core::Theme;

/// Owns the `data-theme` attribute on `<body>`. Other components do not
/// watch the attribute; they subscribe here and get called after every
/// application.
pub(crate) struct ThemeController {
    body: HtmlElement,
    toggle: Option<Element>,
    prefs: PrefStore,
    hooks: RefCell<Vec<(u64, Rc<dyn Fn(Theme)>)>>,
    next_hook_id: Cell<u64>,
    click: RefCell<Option<EventListener>>,
}

impl ThemeController {
    pub(crate) fn mount(document: &Document, prefs: PrefStore) -> Option<Rc<Self>> {
        let body = document.body()?;
        let toggle = document.get_element_by_id(THEME_TOGGLE_ID);
        let controller = Rc::new(Self {
            body,
            toggle,
            prefs,
            hooks: RefCell::new(Vec::new()),
            next_hook_id: Cell::new(1),
            click: RefCell::new(None),
        });
        let saved = controller.prefs.read();
        controller.set_theme(saved);
        if let Some(toggle) = controller.toggle.clone() {
            let handler = Rc::clone(&controller);
            let listener = EventListener::new(&toggle, "click", move |_| {
                handler.toggle_theme();
            });
            *controller.click.borrow_mut() = Some(listener);
        }
        Some(controller)
    }

    pub(crate) fn active_theme(&self) -> Theme {
        self.body
            .get_attribute(THEME_ATTR)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    /// Idempotent: re-applies the attribute and persists even when the
    /// theme is unchanged.
    pub(crate) fn set_theme(&self, theme: Theme) {
        let _ = self.body.set_attribute(THEME_ATTR, theme.as_str());
        if let Some(toggle) = self.toggle.as_ref() {
            toggle.set_class_name(&format!("theme-toggle {}", theme.as_str()));
        }
        self.prefs.write(theme);
        self.notify(theme);
    }

    pub(crate) fn toggle_theme(&self) {
        self.set_theme(self.active_theme().toggled());
    }

    pub(crate) fn subscribe(&self, hook: Rc<dyn Fn(Theme)>) -> u64 {
        let id = self.next_hook_id.get();
        self.next_hook_id.set(id.saturating_add(1));
        self.hooks.borrow_mut().push((id, hook));
        id
    }

    #[allow(dead_code)]
    pub(crate) fn unsubscribe(&self, id: u64) {
        self.hooks.borrow_mut().retain(|(hook_id, _)| *hook_id != id);
    }

    fn notify(&self, theme: Theme) {
        let hooks: Vec<_> = self
            .hooks
            .borrow()
            .iter()
            .map(|(_, hook)| hook.clone())
            .collect();
        for hook in hooks {
            hook(theme);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::prefs::AppContext;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn controller() -> Rc<ThemeController> {
        let document = crate::dom::document().expect("document available");
        ThemeController::mount(&document, PrefStore::new(AppContext::new()))
            .expect("body available")
    }

    #[wasm_bindgen_test]
    fn set_theme_wins_over_any_prior_sequence() {
        let controller = controller();
        controller.set_theme(Theme::Dark);
        controller.set_theme(Theme::Light);
        controller.set_theme(Theme::Dark);
        assert_eq!(controller.active_theme(), Theme::Dark);
        controller.toggle_theme();
        assert_eq!(controller.active_theme(), Theme::Light);
    }

    #[wasm_bindgen_test]
    fn subscribers_hear_every_application_even_unchanged() {
        let controller = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.subscribe(Rc::new(move |theme| sink.borrow_mut().push(theme)));
        controller.set_theme(Theme::Dark);
        controller.set_theme(Theme::Dark);
        assert_eq!(&*seen.borrow(), &[Theme::Dark, Theme::Dark]);
    }
}
