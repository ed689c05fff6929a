use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use js_sys::Math;
use web_sys::{Document, Element};

use crate::core::{ENTRANCE_KICK_MS, PARTICLES_SELECTOR};
use crate::dom::set_style;
use crate::theme::ThemeController;
use enlace_core::particles::{
    initial_population, morph_target, replenish_kind, target_count, ParticleKind, SpawnStyle,
    TransitionEvent, TransitionSequencer, TransitionTimeline,
};
use enlace_core::Theme;

/// Decorative background field. Owns every particle element in the
/// container; rebuilt from scratch on load and morphed/replenished on
/// theme flips. The flip schedule comes precomputed from the core
/// timeline; this layer only pumps elapsed time into it once per frame.
pub(crate) struct ParticleField {
    document: Document,
    container: Element,
    particles: RefCell<Vec<Element>>,
    theme: Cell<Theme>,
    run: RefCell<Option<TransitionRun>>,
}

struct TransitionRun {
    sequencer: TransitionSequencer,
    started_at: f64,
    theme: Theme,
    morphables: Vec<Element>,
    fading: Vec<Element>,
    overlays: Vec<Option<(Element, ParticleKind)>>,
    frame: Option<AnimationFrame>,
}

impl ParticleField {
    pub(crate) fn mount(document: &Document, themes: &Rc<ThemeController>) -> Option<Rc<Self>> {
        let container = document.query_selector(PARTICLES_SELECTOR).ok()??;
        let field = Rc::new(Self {
            document: document.clone(),
            container,
            particles: RefCell::new(Vec::new()),
            theme: Cell::new(themes.active_theme()),
            run: RefCell::new(None),
        });
        field.populate(field.theme.get());
        let subscriber = Rc::clone(&field);
        themes.subscribe(Rc::new(move |theme| subscriber.on_theme_changed(theme)));
        Some(field)
    }

    #[allow(dead_code)]
    pub(crate) fn particle_count(&self) -> usize {
        self.particles.borrow().len()
    }

    fn populate(&self, theme: Theme) {
        self.clear();
        for batch in initial_population(theme) {
            for _ in 0..batch.count {
                let Some(particle) = self.create_particle(batch.kind) else {
                    continue;
                };
                let _ = self.container.append_child(&particle);
                self.particles.borrow_mut().push(particle);
            }
        }
    }

    fn clear(&self) {
        for particle in self.particles.borrow_mut().drain(..) {
            particle.remove();
        }
    }

    fn create_particle(&self, kind: ParticleKind) -> Option<Element> {
        let particle = self.document.create_element("div").ok()?;
        particle.set_class_name(&format!("particle {}", kind.css_class()));
        particle.set_inner_html(kind.glyph());
        apply_spawn_style(&particle, kind.spawn_style());
        Some(particle)
    }

    fn on_theme_changed(self: &Rc<Self>, theme: Theme) {
        if theme == self.theme.get() {
            return;
        }
        self.theme.set(theme);
        self.begin_transition(theme);
    }

    /// Split the current set into morphables and faders per the timeline
    /// partition, then drain the schedule frame by frame. Starting a new
    /// transition replaces a still-running one; already-fired style
    /// timeouts finish on their own.
    fn begin_transition(self: &Rc<Self>, theme: Theme) {
        let particles = self.particles.borrow().clone();
        let timeline =
            TransitionTimeline::new(particles.len(), target_count(theme), |_| Math::random());
        let split = timeline.morph_count();
        let (morphables, fading) = particles.split_at(split);
        let run = TransitionRun {
            sequencer: timeline.into_sequencer(),
            started_at: js_sys::Date::now(),
            theme,
            morphables: morphables.to_vec(),
            fading: fading.to_vec(),
            overlays: vec![None; split],
            frame: None,
        };
        *self.run.borrow_mut() = Some(run);
        self.pump();
    }

    fn pump(self: &Rc<Self>) {
        let field = Rc::clone(self);
        let handle = request_animation_frame(move |_| field.on_frame());
        if let Some(run) = self.run.borrow_mut().as_mut() {
            run.frame = Some(handle);
        }
    }

    fn on_frame(self: &Rc<Self>) {
        let due: Vec<TransitionEvent> = {
            let mut slot = self.run.borrow_mut();
            let Some(run) = slot.as_mut() else {
                return;
            };
            run.frame = None;
            let elapsed = js_sys::Date::now() - run.started_at;
            run.sequencer
                .advance(elapsed)
                .iter()
                .map(|(_, event)| *event)
                .collect()
        };
        for event in due {
            self.apply_event(event);
        }
        let done = self
            .run
            .borrow()
            .as_ref()
            .map(|run| run.sequencer.is_done())
            .unwrap_or(true);
        if done {
            self.run.borrow_mut().take();
        } else {
            self.pump();
        }
    }

    fn apply_event(&self, event: TransitionEvent) {
        match event {
            TransitionEvent::MorphBegin(i) => self.morph_begin(i),
            TransitionEvent::MorphFade(i) => self.with_morphable(i, |particle| {
                set_style(particle, "transition", "all 0.6s ease-out");
                set_style(particle, "filter", "blur(3px) brightness(0.3)");
            }),
            TransitionEvent::MorphReveal(i) => self.morph_reveal(i),
            TransitionEvent::MorphCommit(i) => self.morph_commit(i),
            TransitionEvent::FadeOut(j) => self.fade_out(j),
            TransitionEvent::Settle => self.settle(),
            TransitionEvent::Spawn(_) => self.spawn_replenished(),
        }
    }

    fn with_morphable(&self, index: usize, apply: impl FnOnce(&Element)) {
        let particle = self
            .run
            .borrow()
            .as_ref()
            .and_then(|run| run.morphables.get(index).cloned());
        if let Some(particle) = particle {
            apply(&particle);
        }
    }

    fn morph_begin(&self, index: usize) {
        let target = {
            let slot = self.run.borrow();
            let Some(run) = slot.as_ref() else {
                return;
            };
            run.morphables.get(index).cloned().map(|p| (p, run.theme))
        };
        let Some((particle, theme)) = target else {
            return;
        };
        let kind = morph_target(theme, Math::random());
        let Ok(overlay) = self.document.create_element("div") else {
            return;
        };
        overlay.set_class_name(&format!("particle {}", kind.css_class()));
        overlay.set_inner_html(kind.glyph());
        set_style(&overlay, "position", "absolute");
        set_style(&overlay, "top", "0");
        set_style(&overlay, "left", "0");
        set_style(&overlay, "width", "100%");
        set_style(&overlay, "height", "100%");
        set_style(&overlay, "opacity", "0");
        set_style(&overlay, "transform", "scale(0)");
        set_style(
            &overlay,
            "transition",
            "all 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94)",
        );
        set_style(&overlay, "pointer-events", "none");
        let _ = particle.append_child(&overlay);
        if let Some(run) = self.run.borrow_mut().as_mut() {
            if let Some(slot) = run.overlays.get_mut(index) {
                *slot = Some((overlay, kind));
            }
        }
    }

    fn morph_reveal(&self, index: usize) {
        let overlay = self
            .run
            .borrow()
            .as_ref()
            .and_then(|run| run.overlays.get(index).cloned())
            .flatten();
        let Some((overlay, _)) = overlay else {
            return;
        };
        set_style(&overlay, "opacity", "1");
        set_style(&overlay, "transform", "scale(1.2)");
    }

    /// Replace glyph and class wholesale; rewriting the inner HTML also
    /// discards the overlay element.
    fn morph_commit(&self, index: usize) {
        let target = {
            let slot = self.run.borrow();
            let Some(run) = slot.as_ref() else {
                return;
            };
            let particle = run.morphables.get(index).cloned();
            let overlay = run.overlays.get(index).cloned().flatten();
            particle.zip(overlay)
        };
        let Some((particle, (_overlay, kind))) = target else {
            return;
        };
        particle.set_inner_html(kind.glyph());
        particle.set_class_name(&format!("particle {}", kind.css_class()));
        set_style(&particle, "filter", "blur(0px) brightness(1)");
        set_style(&particle, "transition", "all 0.4s ease-out");
        apply_loop_timing(&particle, kind.spawn_style());
    }

    fn fade_out(&self, index: usize) {
        let particle = self
            .run
            .borrow()
            .as_ref()
            .and_then(|run| run.fading.get(index).cloned());
        let Some(particle) = particle else {
            return;
        };
        set_style(&particle, "transition", "all 0.8s cubic-bezier(0.4, 0, 0.2, 1)");
        set_style(&particle, "opacity", "0");
        set_style(&particle, "transform", "scale(0) rotate(180deg)");
        set_style(&particle, "filter", "blur(5px)");
    }

    fn settle(&self) {
        let sets = {
            let slot = self.run.borrow();
            slot.as_ref()
                .map(|run| (run.fading.clone(), run.morphables.clone()))
        };
        let Some((fading, morphables)) = sets else {
            return;
        };
        for particle in fading {
            particle.remove();
        }
        *self.particles.borrow_mut() = morphables;
    }

    fn spawn_replenished(&self) {
        let theme = self.theme.get();
        let kind = replenish_kind(theme, Math::random());
        let Some(particle) = self.create_particle(kind) else {
            return;
        };
        set_style(&particle, "opacity", "0");
        set_style(&particle, "transform", "scale(0)");
        set_style(&particle, "filter", "blur(3px)");
        let _ = self.container.append_child(&particle);
        self.particles.borrow_mut().push(particle.clone());
        Timeout::new(ENTRANCE_KICK_MS, move || {
            set_style(
                &particle,
                "transition",
                "all 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            );
            set_style(&particle, "opacity", "1");
            set_style(&particle, "transform", "scale(1)");
            set_style(&particle, "filter", "blur(0px)");
        })
        .forget();
    }
}

fn apply_spawn_style(particle: &Element, style: SpawnStyle) {
    set_style(
        particle,
        "left",
        &format!("{:.3}%", style.left.sample(Math::random())),
    );
    if let Some(top) = style.top {
        set_style(
            particle,
            "top",
            &format!("{:.3}%", top.sample(Math::random())),
        );
    }
    if style.spin {
        set_style(
            particle,
            "transform",
            &format!("rotate({:.0}deg)", Math::random() * 360.0),
        );
    }
    apply_loop_timing(particle, style);
}

fn apply_loop_timing(particle: &Element, style: SpawnStyle) {
    set_style(
        particle,
        "animation-delay",
        &format!("{:.2}s", style.delay_s.sample(Math::random())),
    );
    if let Some(duration) = style.duration_s {
        set_style(
            particle,
            "animation-duration",
            &format!("{:.2}s", duration.sample(Math::random())),
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::prefs::{AppContext, PrefStore};
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn build_field(document: &Document) -> Element {
        let container = document.create_element("div").expect("create container");
        container.set_class_name("background-particles");
        let body = document.body().expect("body available");
        let _ = body.append_child(&container);
        container
    }

    #[wasm_bindgen_test]
    fn initial_population_matches_theme_target() {
        let document = crate::dom::document().expect("document available");
        let container = build_field(&document);
        let themes = ThemeController::mount(&document, PrefStore::new(AppContext::new()))
            .expect("body available");
        themes.set_theme(Theme::Light);
        let field = ParticleField::mount(&document, &themes).expect("container present");
        assert_eq!(field.particle_count(), target_count(Theme::Light));
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn theme_flip_replenishes_to_the_new_target() {
        set_panic_hook();
        let document = crate::dom::document().expect("document available");
        let container = build_field(&document);
        let themes = ThemeController::mount(&document, PrefStore::new(AppContext::new()))
            .expect("body available");
        themes.set_theme(Theme::Light);
        let field = ParticleField::mount(&document, &themes).expect("container present");

        themes.set_theme(Theme::Dark);

        // Settle window plus the staggered replenishment with jitter.
        let deadline = js_sys::Date::now() + 12_000.0;
        loop {
            if field.particle_count() == target_count(Theme::Dark)
                && field.run.borrow().is_none()
            {
                break;
            }
            if js_sys::Date::now() > deadline {
                panic!(
                    "particle set did not converge: {} particles",
                    field.particle_count()
                );
            }
            TimeoutFuture::new(100).await;
        }
        assert_eq!(field.particle_count(), target_count(Theme::Dark));
        container.remove();
    }
}
