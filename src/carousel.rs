use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use web_sys::{Document, Element};

use crate::core::{
    ACTIVE_CARDS_SELECTOR, ACTIVE_SECTION_SELECTOR, AUTO_SLIDE_MS, CAROUSEL_TRACK_ID,
    INDICATORS_ID, NEXT_BTN_ID, PREV_BTN_ID, SELECT_BTN_ID,
};
use crate::dom::{select_all, select_all_in, set_style};
use enlace_core::CarouselState;

/// Cycles the visible window over the active section's cards. The card
/// set is not owned; `rescan` re-reads it whenever the visible category
/// changes and regenerates one indicator per card.
pub(crate) struct CarouselController {
    document: Document,
    track: Element,
    indicators: Option<Element>,
    state: RefCell<CarouselState>,
    cards: RefCell<Vec<Element>>,
    indicator_listeners: RefCell<Vec<EventListener>>,
    nav_listeners: RefCell<Vec<EventListener>>,
    auto_timer: RefCell<Option<Interval>>,
}

impl CarouselController {
    pub(crate) fn mount(document: &Document) -> Option<Rc<Self>> {
        let track = document.get_element_by_id(CAROUSEL_TRACK_ID)?;
        let indicators = document.get_element_by_id(INDICATORS_ID);
        let controller = Rc::new(Self {
            document: document.clone(),
            track,
            indicators,
            state: RefCell::new(CarouselState::default()),
            cards: RefCell::new(Vec::new()),
            indicator_listeners: RefCell::new(Vec::new()),
            nav_listeners: RefCell::new(Vec::new()),
            auto_timer: RefCell::new(None),
        });
        controller.rescan();
        controller.render();
        controller.install_nav_listeners();
        controller.start_auto_slide();
        Some(controller)
    }

    /// Re-read the currently visible card set and reset to the first
    /// card. Indicators are rebuilt 1:1 with the cards, so `go_to`
    /// targets are always in range.
    pub(crate) fn rescan(self: &Rc<Self>) {
        let cards = select_all(&self.document, ACTIVE_CARDS_SELECTOR);
        self.state.borrow_mut().reset(cards.len());
        *self.cards.borrow_mut() = cards;
        self.regenerate_indicators();
    }

    fn regenerate_indicators(self: &Rc<Self>) {
        let Some(container) = self.indicators.clone() else {
            return;
        };
        container.set_inner_html("");
        let mut listeners = Vec::new();
        let count = self.cards.borrow().len();
        for index in 0..count {
            let Ok(indicator) = self.document.create_element("div") else {
                continue;
            };
            indicator.set_class_name(if index == 0 {
                "indicator active"
            } else {
                "indicator"
            });
            let controller = Rc::clone(self);
            listeners.push(EventListener::new(&indicator, "click", move |_| {
                controller.go_to(index);
            }));
            let _ = container.append_child(&indicator);
        }
        *self.indicator_listeners.borrow_mut() = listeners;
    }

    pub(crate) fn render(&self) {
        let state = *self.state.borrow();
        let cards = self.cards.borrow();
        for (index, card) in cards.iter().enumerate() {
            let _ = card
                .class_list()
                .toggle_with_force("active", index == state.index());
            set_style(card, "min-width", &format!("{}%", state.card_width_pct()));
        }
        if let Some(container) = self.indicators.as_ref() {
            for (index, indicator) in select_all_in(container, ".indicator").iter().enumerate() {
                let _ = indicator
                    .class_list()
                    .toggle_with_force("active", index == state.index());
            }
        }
        if let Ok(Some(section)) = self.document.query_selector(ACTIVE_SECTION_SELECTOR) {
            set_style(
                &section,
                "transform",
                &format!("translateX({}%)", state.track_offset_pct()),
            );
        }
    }

    pub(crate) fn next(&self) {
        self.state.borrow_mut().next();
        self.render();
    }

    pub(crate) fn prev(&self) {
        self.state.borrow_mut().prev();
        self.render();
    }

    pub(crate) fn go_to(&self, index: usize) {
        self.state.borrow_mut().go_to(index);
        self.render();
    }

    #[allow(dead_code)]
    pub(crate) fn current_index(&self) -> usize {
        self.state.borrow().index()
    }

    /// Navigate to the active card's target unless it is still a
    /// placeholder.
    fn select_active(&self) {
        let index = self.state.borrow().index();
        let cards = self.cards.borrow();
        let Some(card) = cards.get(index) else {
            return;
        };
        if card.class_list().contains("coming-soon") {
            return;
        }
        let Some(url) = card.get_attribute("data-url") else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&url);
        }
    }

    fn install_nav_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        if let Some(prev) = self.document.get_element_by_id(PREV_BTN_ID) {
            let controller = Rc::clone(self);
            listeners.push(EventListener::new(&prev, "click", move |_| {
                controller.prev();
            }));
        }
        if let Some(next) = self.document.get_element_by_id(NEXT_BTN_ID) {
            let controller = Rc::clone(self);
            listeners.push(EventListener::new(&next, "click", move |_| {
                controller.next();
            }));
        }
        if let Some(select) = self.document.get_element_by_id(SELECT_BTN_ID) {
            let controller = Rc::clone(self);
            listeners.push(EventListener::new(&select, "click", move |_| {
                controller.select_active();
            }));
        }
        let controller = Rc::clone(self);
        listeners.push(EventListener::new(&self.track, "mouseenter", move |_| {
            controller.stop_auto_slide();
        }));
        let controller = Rc::clone(self);
        listeners.push(EventListener::new(&self.track, "mouseleave", move |_| {
            controller.start_auto_slide();
        }));
        *self.nav_listeners.borrow_mut() = listeners;
    }

    fn start_auto_slide(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        *self.auto_timer.borrow_mut() = Some(Interval::new(AUTO_SLIDE_MS, move || {
            controller.next();
        }));
    }

    fn stop_auto_slide(&self) {
        self.auto_timer.borrow_mut().take();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn build_carousel(document: &Document, cards: usize) -> Element {
        let root = document.create_element("div").expect("create root");
        let mut section = String::from("<div class=\"edl-content\" id=\"test-content\">");
        for index in 0..cards {
            section.push_str(&format!(
                "<div class=\"card\" data-url=\"/estructura/{index}\"></div>"
            ));
        }
        section.push_str("</div>");
        section.push_str("<div id=\"carouselTrack\"></div><div id=\"indicators\"></div>");
        root.set_inner_html(&section);
        let body = document.body().expect("body available");
        let _ = body.append_child(&root);
        root
    }

    #[wasm_bindgen_test]
    fn go_to_marks_exactly_one_card_and_indicator_active() {
        let document = crate::dom::document().expect("document available");
        let root = build_carousel(&document, 3);
        let controller = CarouselController::mount(&document).expect("track present");

        controller.go_to(2);
        assert_eq!(controller.current_index(), 2);

        let active_cards = select_all(&document, ".card.active");
        assert_eq!(active_cards.len(), 1);
        let active_indicators = select_all(&document, ".indicator.active");
        assert_eq!(active_indicators.len(), 1);

        root.remove();
    }

    #[wasm_bindgen_test]
    fn empty_card_set_never_throws_and_stays_at_zero() {
        let document = crate::dom::document().expect("document available");
        let root = build_carousel(&document, 0);
        let controller = CarouselController::mount(&document).expect("track present");

        controller.next();
        controller.prev();
        controller.render();
        assert_eq!(controller.current_index(), 0);
        assert!(select_all(&document, ".indicator").is_empty());

        root.remove();
    }

    #[wasm_bindgen_test]
    fn wrapping_navigation_cycles_the_window() {
        let document = crate::dom::document().expect("document available");
        let root = build_carousel(&document, 3);
        let controller = CarouselController::mount(&document).expect("track present");

        controller.next();
        controller.next();
        controller.next();
        assert_eq!(controller.current_index(), 0);
        controller.prev();
        assert_eq!(controller.current_index(), 2);

        root.remove();
    }
}
