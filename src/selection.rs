use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventInit, HtmlSelectElement};

use crate::carousel::CarouselController;
use crate::core::{
    CONTENT_SECTION_SELECTOR, EDL_SELECT_ID, HEADER_DESCRIPTION_ID, INFO_PANEL_CONTENT_ID,
    INFO_PANEL_TITLE_ID, VISUAL_ITEM_SELECTOR,
};
use crate::dom::select_all;
use enlace_core::Category;

/// Maps the category selector to its content section, description and
/// info panel, and re-seeds the carousel for the newly visible cards.
/// The visual pill row mirrors into the real select and synthesizes a
/// `change` event so both input methods share one code path.
pub(crate) struct SelectionPanel {
    document: Document,
    select: HtmlSelectElement,
    carousel: Option<Rc<CarouselController>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl SelectionPanel {
    pub(crate) fn mount(
        document: &Document,
        carousel: Option<Rc<CarouselController>>,
    ) -> Option<Rc<Self>> {
        let select = document
            .get_element_by_id(EDL_SELECT_ID)?
            .dyn_into::<HtmlSelectElement>()
            .ok()?;
        let panel = Rc::new(Self {
            document: document.clone(),
            select,
            carousel,
            listeners: RefCell::new(Vec::new()),
        });
        panel.install_listeners();
        panel.apply(Category::Lists);
        Some(panel)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        let panel = Rc::clone(self);
        listeners.push(EventListener::new(&self.select, "change", move |_| {
            let value = panel.select.value();
            if let Some(category) = Category::from_id(&value) {
                panel.apply(category);
            }
        }));
        for item in select_all(&self.document, VISUAL_ITEM_SELECTOR) {
            let panel = Rc::clone(self);
            let pill = item.clone();
            listeners.push(EventListener::new(&item, "click", move |_| {
                panel.activate_pill(&pill);
            }));
        }
        *self.listeners.borrow_mut() = listeners;
    }

    fn activate_pill(&self, pill: &Element) {
        let Some(value) = pill.get_attribute("data-value") else {
            return;
        };
        self.select.set_value(&value);
        let init = EventInit::new();
        init.set_bubbles(true);
        if let Ok(event) = Event::new_with_event_init_dict("change", &init) {
            let _ = self.select.dispatch_event(&event);
        }
        for other in select_all(&self.document, VISUAL_ITEM_SELECTOR) {
            let _ = other.class_list().remove_1("active");
        }
        let _ = pill.class_list().add_1("active");
    }

    pub(crate) fn apply(&self, category: Category) {
        for section in select_all(&self.document, CONTENT_SECTION_SELECTOR) {
            let _ = section.class_list().add_1("hidden");
        }
        if let Some(section) = self
            .document
            .get_element_by_id(&format!("{}-content", category.id()))
        {
            let _ = section.class_list().remove_1("hidden");
        }
        if let Some(carousel) = self.carousel.as_ref() {
            carousel.rescan();
            carousel.render();
        }
        let config = category.config();
        if let Some(description) = self.document.get_element_by_id(HEADER_DESCRIPTION_ID) {
            description.set_text_content(Some(config.description));
        }
        if let Some(title) = self.document.get_element_by_id(INFO_PANEL_TITLE_ID) {
            title.set_text_content(Some(config.info_title));
        }
        if let Some(content) = self.document.get_element_by_id(INFO_PANEL_CONTENT_ID) {
            content.set_inner_html(config.info_body);
        }
    }
}
