use std::cell::RefCell;
use std::rc::Rc;

mod batch;
mod carousel;
mod core;
mod dom;
mod effects;
mod forms;
mod particles;
mod prefs;
mod rows;
mod search;
mod selection;
mod theme;

/// Mounted components. Each owns its listeners and timers for the page
/// lifetime; dropping this would detach them, so it lives until unload.
struct App {
    _theme: Option<Rc<theme::ThemeController>>,
    _particles: Option<Rc<particles::ParticleField>>,
    _carousel: Option<Rc<carousel::CarouselController>>,
    _selection: Option<Rc<selection::SelectionPanel>>,
    _search: search::SearchRelay,
    _forms: forms::FormProgress,
    _effects: effects::PageEffects,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Each component self-initializes independently; a missing DOM anchor
/// disables that feature and nothing else.
fn mount() {
    let Some(document) = dom::document() else {
        return;
    };
    let context = prefs::AppContext::new();
    let store = prefs::PrefStore::new(context);
    let theme_controller = theme::ThemeController::mount(&document, store);
    let particle_field = theme_controller
        .as_ref()
        .and_then(|themes| particles::ParticleField::mount(&document, themes));
    let carousel_controller = carousel::CarouselController::mount(&document);
    let selection_panel = selection::SelectionPanel::mount(&document, carousel_controller.clone());
    batch::mount(&document);
    rows::mount(&document);
    let search_relay = search::mount(&document);
    let form_progress = forms::mount(&document);
    let page_effects = effects::mount(&document);

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            _theme: theme_controller,
            _particles: particle_field,
            _carousel: carousel_controller,
            _selection: selection_panel,
            _search: search_relay,
            _forms: form_progress,
            _effects: page_effects,
        });
    });
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    mount();
    #[cfg(not(target_arch = "wasm32"))]
    let _ = mount;
}
