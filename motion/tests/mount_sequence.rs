//! Full mount schedule behavior: five groups enter exactly once, the
//! navigation entries reveal in list order, and everything ends settled.

use std::time::Duration;

use motion::{Easing, EnterTween, MountSequence, VisualState};

const NAV_ENTRIES: usize = 4;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// A schedule shaped like the page's: header, staggered nav entries, hero
/// content, hero footer and contact info.
fn page_like_schedule() -> MountSequence {
    let ease = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);
    MountSequence::new()
        .group(
            "header",
            EnterTween::new(VisualState::hidden(0.0, -16.0), ms(600)).easing(ease),
        )
        .staggered_group(
            "nav-entries",
            EnterTween::new(VisualState::hidden(0.0, -10.0), ms(450))
                .delay(ms(150))
                .easing(ease),
            ms(90),
            NAV_ENTRIES,
        )
        .group(
            "hero",
            EnterTween::new(VisualState::hidden(0.0, 28.0), ms(700))
                .delay(ms(250))
                .easing(ease),
        )
        .group(
            "hero-footer",
            EnterTween::new(VisualState::hidden(0.0, 20.0), ms(600))
                .delay(ms(450))
                .easing(ease),
        )
        .group(
            "contact-info",
            EnterTween::new(VisualState::hidden(0.0, 12.0), ms(500))
                .delay(ms(600))
                .easing(ease),
        )
}

#[test]
fn all_groups_start_hidden() {
    let sequence = page_like_schedule();
    for name in ["header", "hero", "hero-footer", "contact-info"] {
        assert_eq!(sequence.tween(name).sample(Duration::ZERO).opacity, 0.0);
    }
    for index in 0..NAV_ENTRIES {
        let state = sequence.child_tween("nav-entries", index).sample(Duration::ZERO);
        assert_eq!(state.opacity, 0.0);
    }
}

#[test]
fn every_group_settles_without_interaction() {
    let sequence = page_like_schedule();
    let settle = sequence.settle_duration();
    assert!(sequence.is_settled_at(settle));

    for name in ["header", "hero", "hero-footer", "contact-info"] {
        assert_eq!(sequence.tween(name).sample(settle), VisualState::settled());
    }
    for index in 0..NAV_ENTRIES {
        let state = sequence.child_tween("nav-entries", index).sample(settle);
        assert_eq!(state, VisualState::settled());
    }
}

#[test]
fn transitions_run_exactly_once() {
    let sequence = page_like_schedule();
    let settle = sequence.settle_duration();
    // No later sample ever leaves the settled state again.
    for extra in [ms(1), ms(500), ms(60_000)] {
        assert!(sequence.is_settled_at(settle + extra));
        assert_eq!(
            sequence.tween("hero").sample(settle + extra),
            VisualState::settled(),
        );
    }
}

#[test]
fn nav_entries_reveal_in_list_order() {
    let sequence = page_like_schedule();
    let settle = sequence.settle_duration();

    let first_visible_at = |index: usize| {
        let tween = sequence.child_tween("nav-entries", index);
        let mut elapsed = Duration::ZERO;
        while tween.sample(elapsed).opacity <= 0.0 {
            elapsed += ms(1);
            assert!(elapsed <= settle, "entry {index} never became visible");
        }
        elapsed
    };

    let mut previous = first_visible_at(0);
    for index in 1..NAV_ENTRIES {
        let visible_at = first_visible_at(index);
        assert!(
            visible_at > previous,
            "entry {index} revealed at {visible_at:?}, not after {previous:?}",
        );
        previous = visible_at;
    }
}

#[test]
fn settled_schedule_needs_no_time() {
    // The non-animated rendering of the page: same schedule shape, every
    // tween already at rest.
    let sequence = MountSequence::new()
        .group("header", EnterTween::settled())
        .staggered_group("nav-entries", EnterTween::settled(), Duration::ZERO, NAV_ENTRIES)
        .group("hero", EnterTween::settled())
        .group("hero-footer", EnterTween::settled())
        .group("contact-info", EnterTween::settled());

    assert_eq!(sequence.settle_duration(), Duration::ZERO);
    assert!(sequence.is_settled_at(Duration::ZERO));
    for index in 0..NAV_ENTRIES {
        let state = sequence.child_tween("nav-entries", index).sample(Duration::ZERO);
        assert_eq!(state, VisualState::settled());
    }
}
