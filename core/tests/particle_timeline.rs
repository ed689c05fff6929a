use enlace_core::particles::{
    initial_population, morph_target, morphable_count, replenish_kind, target_count,
    ParticleKind, TransitionEvent, TransitionTimeline, SETTLE_MS,
};
use enlace_core::Theme;

fn no_jitter(_k: usize) -> f64 {
    0.0
}

#[test]
fn initial_population_matches_theme_targets() {
    for theme in [Theme::Dark, Theme::Light] {
        let total: usize = initial_population(theme)
            .iter()
            .map(|batch| batch.count)
            .sum();
        assert_eq!(total, target_count(theme), "{theme:?}");
    }
}

#[test]
fn morphable_count_caps_at_eight() {
    assert_eq!(morphable_count(0), 0);
    assert_eq!(morphable_count(4), 3);
    assert_eq!(morphable_count(5), 3);
    assert_eq!(morphable_count(10), 6);
    assert_eq!(morphable_count(13), 8);
    assert_eq!(morphable_count(25), 8);
}

#[test]
fn transition_converges_on_theme_target() {
    // Dark set of 25 flipping to light must end on exactly 23 particles.
    let timeline = TransitionTimeline::new(25, target_count(Theme::Light), no_jitter);
    assert_eq!(timeline.morph_count(), 8);
    assert_eq!(timeline.fade_count(), 17);
    assert_eq!(timeline.spawn_count(), 15);
    assert_eq!(timeline.final_count(), 23);

    // And the other direction ends on 25.
    let timeline = TransitionTimeline::new(23, target_count(Theme::Dark), no_jitter);
    assert_eq!(timeline.morph_count(), 8);
    assert_eq!(timeline.fade_count(), 15);
    assert_eq!(timeline.spawn_count(), 17);
    assert_eq!(timeline.final_count(), 25);
}

#[test]
fn spawns_never_precede_the_settle_window() {
    let timeline = TransitionTimeline::new(25, 23, |_| 0.999);
    let mut sequencer = timeline.into_sequencer();
    let early: Vec<_> = sequencer.advance(SETTLE_MS - 1.0).to_vec();
    assert!(early
        .iter()
        .all(|(_, event)| !matches!(event, TransitionEvent::Spawn(_) | TransitionEvent::Settle)));

    let settled: Vec<_> = sequencer.advance(SETTLE_MS).to_vec();
    assert!(settled
        .iter()
        .any(|(_, event)| matches!(event, TransitionEvent::Settle)));
}

#[test]
fn sequencer_emits_every_event_exactly_once() {
    let timeline = TransitionTimeline::new(25, 23, no_jitter);
    let total_events = timeline.morph_count() * 4 + timeline.fade_count() + timeline.spawn_count() + 1;
    let duration = timeline.duration_ms();
    let mut sequencer = timeline.into_sequencer();

    let mut seen = 0;
    let mut clock = 0.0;
    while clock <= duration {
        seen += sequencer.advance(clock).len();
        clock += 16.0;
    }
    seen += sequencer.advance(duration).len();
    assert_eq!(seen, total_events);
    assert!(sequencer.is_done());
    // Once drained, further advances stay empty.
    assert!(sequencer.advance(duration + 10_000.0).is_empty());
}

#[test]
fn morph_steps_follow_the_staggered_schedule() {
    let timeline = TransitionTimeline::new(3, 3, no_jitter);
    assert_eq!(timeline.morph_count(), 2);
    let mut sequencer = timeline.into_sequencer();

    let due: Vec<_> = sequencer.advance(0.0).to_vec();
    assert!(due.contains(&(0.0, TransitionEvent::MorphBegin(0))));
    assert!(due.contains(&(0.0, TransitionEvent::FadeOut(0))));

    let due: Vec<_> = sequencer.advance(150.0).to_vec();
    assert!(due.contains(&(100.0, TransitionEvent::MorphFade(0))));
    assert!(due.contains(&(150.0, TransitionEvent::MorphBegin(1))));

    let due: Vec<_> = sequencer.advance(800.0).to_vec();
    assert!(due.contains(&(600.0, TransitionEvent::MorphCommit(0))));
    assert!(due.contains(&(750.0, TransitionEvent::MorphCommit(1))));
}

#[test]
fn replenish_kinds_stay_inside_the_theme() {
    for roll in [0.0, 0.3, 0.65, 0.75, 0.99] {
        assert!(matches!(
            replenish_kind(Theme::Dark, roll),
            ParticleKind::Star | ParticleKind::Meteor
        ));
        assert!(matches!(
            replenish_kind(Theme::Light, roll),
            ParticleKind::LightSparkle | ParticleKind::Cloud
        ));
        assert!(matches!(
            morph_target(Theme::Dark, roll),
            ParticleKind::Star | ParticleKind::TwinkleStar
        ));
        assert!(matches!(
            morph_target(Theme::Light, roll),
            ParticleKind::Sunbeam | ParticleKind::LightSparkle
        ));
    }
}
