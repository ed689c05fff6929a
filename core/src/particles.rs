use crate::theme::Theme;

pub const DARK_TARGET_COUNT: usize = 25;
pub const LIGHT_TARGET_COUNT: usize = 23;

/// At most this many particles morph in place on a theme flip; the rest
/// fade out. Bounds the number of concurrent overlay animations.
pub const MAX_MORPHABLE: usize = 8;
pub const MORPHABLE_SHARE: f64 = 0.6;

pub const MORPH_STAGGER_MS: f64 = 150.0;
pub const FADE_STAGGER_MS: f64 = 100.0;
/// Fixed window after which faded particles are removed and the set is
/// replenished up to the theme target.
pub const SETTLE_MS: f64 = 1200.0;
pub const REPLENISH_STAGGER_MS: f64 = 200.0;
pub const REPLENISH_JITTER_MS: f64 = 300.0;

/// Morph sub-steps, relative to the particle's morph start.
pub const MORPH_FADE_OFFSET_MS: f64 = 100.0;
pub const MORPH_REVEAL_OFFSET_MS: f64 = 300.0;
pub const MORPH_COMMIT_OFFSET_MS: f64 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Star,
    TwinkleStar,
    Meteor,
    Sunbeam,
    Cloud,
    LightSparkle,
}

impl ParticleKind {
    pub const fn glyph(self) -> &'static str {
        match self {
            ParticleKind::Star => "✦",
            ParticleKind::TwinkleStar => "⭐",
            ParticleKind::Meteor => "🌒",
            ParticleKind::Sunbeam => "☀️",
            ParticleKind::Cloud => "☁️",
            ParticleKind::LightSparkle => "✨",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            ParticleKind::Star => "star",
            ParticleKind::TwinkleStar => "twinkle-star",
            ParticleKind::Meteor => "meteor",
            ParticleKind::Sunbeam => "sunbeam",
            ParticleKind::Cloud => "cloud",
            ParticleKind::LightSparkle => "light-sparkle",
        }
    }

    /// Randomized styling ranges for a fresh particle of this kind. The
    /// caller supplies the rolls; the ranges live here so they can be
    /// checked off-browser.
    pub const fn spawn_style(self) -> SpawnStyle {
        match self {
            ParticleKind::Star => SpawnStyle {
                left: Span::new(0.0, 100.0),
                top: Some(Span::new(0.0, 100.0)),
                delay_s: Span::new(0.0, -3.0),
                duration_s: None,
                spin: false,
            },
            ParticleKind::TwinkleStar => SpawnStyle {
                left: Span::new(0.0, 100.0),
                top: Some(Span::new(0.0, 100.0)),
                delay_s: Span::new(0.0, -4.0),
                duration_s: None,
                spin: false,
            },
            ParticleKind::Meteor => SpawnStyle {
                left: Span::new(-20.0, 120.0),
                top: None,
                delay_s: Span::new(0.0, -8.0),
                duration_s: Some(Span::new(3.0, 2.0)),
                spin: true,
            },
            ParticleKind::Sunbeam => SpawnStyle {
                left: Span::new(0.0, 100.0),
                top: Some(Span::new(0.0, 100.0)),
                delay_s: Span::new(0.0, -6.0),
                duration_s: Some(Span::new(5.0, 3.0)),
                spin: false,
            },
            ParticleKind::Cloud => SpawnStyle {
                left: Span::new(-20.0, 120.0),
                top: Some(Span::new(10.0, 30.0)),
                delay_s: Span::new(0.0, -10.0),
                duration_s: Some(Span::new(8.0, 4.0)),
                spin: false,
            },
            ParticleKind::LightSparkle => SpawnStyle {
                left: Span::new(0.0, 100.0),
                top: Some(Span::new(0.0, 100.0)),
                delay_s: Span::new(0.0, -4.0),
                duration_s: Some(Span::new(3.0, 2.0)),
                spin: false,
            },
        }
    }
}

/// Linear range sampled with a uniform roll in [0, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub base: f64,
    pub spread: f64,
}

impl Span {
    pub const fn new(base: f64, spread: f64) -> Self {
        Self { base, spread }
    }

    pub fn sample(self, roll: f64) -> f64 {
        self.base + roll * self.spread
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnStyle {
    /// Horizontal position in percent. Meteors and clouds overshoot the
    /// viewport so they drift in from outside.
    pub left: Span,
    /// Vertical position in percent; `None` leaves the CSS default
    /// (meteors fall across the whole height).
    pub top: Option<Span>,
    /// Negative delays desynchronize the looping keyframe animations.
    pub delay_s: Span,
    pub duration_s: Option<Span>,
    /// Random initial rotation (meteors only).
    pub spin: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnBatch {
    pub kind: ParticleKind,
    pub count: usize,
}

/// The fixed themed set created on load and after a full reset.
pub fn initial_population(theme: Theme) -> [SpawnBatch; 3] {
    match theme {
        Theme::Dark => [
            SpawnBatch { kind: ParticleKind::Star, count: 15 },
            SpawnBatch { kind: ParticleKind::Meteor, count: 4 },
            SpawnBatch { kind: ParticleKind::TwinkleStar, count: 6 },
        ],
        Theme::Light => [
            SpawnBatch { kind: ParticleKind::Sunbeam, count: 8 },
            SpawnBatch { kind: ParticleKind::Cloud, count: 5 },
            SpawnBatch { kind: ParticleKind::LightSparkle, count: 10 },
        ],
    }
}

pub fn target_count(theme: Theme) -> usize {
    match theme {
        Theme::Dark => DARK_TARGET_COUNT,
        Theme::Light => LIGHT_TARGET_COUNT,
    }
}

/// Glyph a morphing particle commits to, split evenly between the two
/// static kinds of the destination theme.
pub fn morph_target(theme: Theme, roll: f64) -> ParticleKind {
    match theme {
        Theme::Dark => {
            if roll > 0.5 {
                ParticleKind::Star
            } else {
                ParticleKind::TwinkleStar
            }
        }
        Theme::Light => {
            if roll > 0.5 {
                ParticleKind::Sunbeam
            } else {
                ParticleKind::LightSparkle
            }
        }
    }
}

/// Kind for a replenished particle; weighted toward the static kinds with
/// an occasional drifting one.
pub fn replenish_kind(theme: Theme, roll: f64) -> ParticleKind {
    match theme {
        Theme::Dark => {
            if roll > 0.7 {
                ParticleKind::Meteor
            } else {
                ParticleKind::Star
            }
        }
        Theme::Light => {
            if roll > 0.6 {
                ParticleKind::Cloud
            } else {
                ParticleKind::LightSparkle
            }
        }
    }
}

/// Number of particles (by insertion order) that morph instead of fading.
pub fn morphable_count(total: usize) -> usize {
    let share = (total as f64 * MORPHABLE_SHARE).ceil() as usize;
    share.min(MAX_MORPHABLE).min(total)
}

/// One step of the theme-flip sequence. Indices address the partitioned
/// collections: morphables by position among morphing particles, fading
/// by position among fading ones, spawns by replenishment order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionEvent {
    /// Attach the morph overlay with the destination glyph.
    MorphBegin(usize),
    /// Blur and dim the original glyph.
    MorphFade(usize),
    /// Scale the overlay in over the dimmed original.
    MorphReveal(usize),
    /// Replace glyph and class, clear filters, restart the loop animation.
    MorphCommit(usize),
    /// Shrink, blur and rotate a fading particle out.
    FadeOut(usize),
    /// Remove faded particles from the document.
    Settle,
    /// Add one replenished particle with an entrance animation.
    Spawn(usize),
}

/// Precomputed schedule for one theme flip: every event with its absolute
/// offset from the start of the transition, in milliseconds.
#[derive(Clone, Debug)]
pub struct TransitionTimeline {
    events: Vec<(f64, TransitionEvent)>,
    morph_count: usize,
    fade_count: usize,
    spawn_count: usize,
}

impl TransitionTimeline {
    /// `jitter(k)` supplies the k-th spawn's jitter in [0, 1); it is rolled
    /// at plan time so the schedule itself stays immutable.
    pub fn new<F>(current: usize, target: usize, mut jitter: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        let morph_count = morphable_count(current);
        let fade_count = current - morph_count;
        let spawn_count = target.saturating_sub(morph_count);

        let mut events = Vec::with_capacity(morph_count * 4 + fade_count + spawn_count + 1);
        for i in 0..morph_count {
            let base = i as f64 * MORPH_STAGGER_MS;
            events.push((base, TransitionEvent::MorphBegin(i)));
            events.push((base + MORPH_FADE_OFFSET_MS, TransitionEvent::MorphFade(i)));
            events.push((base + MORPH_REVEAL_OFFSET_MS, TransitionEvent::MorphReveal(i)));
            events.push((base + MORPH_COMMIT_OFFSET_MS, TransitionEvent::MorphCommit(i)));
        }
        for j in 0..fade_count {
            events.push((j as f64 * FADE_STAGGER_MS, TransitionEvent::FadeOut(j)));
        }
        events.push((SETTLE_MS, TransitionEvent::Settle));
        for k in 0..spawn_count {
            let offset =
                SETTLE_MS + k as f64 * REPLENISH_STAGGER_MS + jitter(k) * REPLENISH_JITTER_MS;
            events.push((offset, TransitionEvent::Spawn(k)));
        }
        events.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            events,
            morph_count,
            fade_count,
            spawn_count,
        }
    }

    pub fn morph_count(&self) -> usize {
        self.morph_count
    }

    pub fn fade_count(&self) -> usize {
        self.fade_count
    }

    pub fn spawn_count(&self) -> usize {
        self.spawn_count
    }

    /// Particle count once the transition has fully drained.
    pub fn final_count(&self) -> usize {
        self.morph_count + self.spawn_count
    }

    /// Offset of the last scheduled event; the transition is over once the
    /// sequencer has been advanced past this point.
    pub fn duration_ms(&self) -> f64 {
        self.events.last().map(|(at, _)| *at).unwrap_or(0.0)
    }

    pub fn into_sequencer(self) -> TransitionSequencer {
        TransitionSequencer {
            events: self.events,
            cursor: 0,
        }
    }
}

/// Steps a [`TransitionTimeline`] by elapsed wall time. Deterministic:
/// tests drive it with synthetic clocks instead of real timers.
#[derive(Clone, Debug)]
pub struct TransitionSequencer {
    events: Vec<(f64, TransitionEvent)>,
    cursor: usize,
}

impl TransitionSequencer {
    /// Returns the events that became due at or before `elapsed_ms`, in
    /// schedule order. Each event is returned exactly once.
    pub fn advance(&mut self, elapsed_ms: f64) -> &[(f64, TransitionEvent)] {
        let start = self.cursor;
        while self.cursor < self.events.len() && self.events[self.cursor].0 <= elapsed_ms {
            self.cursor += 1;
        }
        &self.events[start..self.cursor]
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.events.len()
    }
}
