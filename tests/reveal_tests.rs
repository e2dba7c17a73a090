// Host-side tests for the scroll reveal model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod constants {
        include!("../src/motion/constants.rs");
    }
    pub mod error {
        include!("../src/motion/error.rs");
    }
    pub mod reveal {
        include!("../src/motion/reveal.rs");
    }
}

use motion::error::MotionError;
use motion::reveal::*;

fn reveal(direction: RevealDirection) -> Reveal {
    Reveal::new(RevealOptions {
        direction,
        ..RevealOptions::default()
    })
}

#[test]
fn presets_have_literal_hidden_styles() {
    let hidden = |d: RevealDirection| d.variants().hidden;
    assert_eq!(
        hidden(RevealDirection::Up),
        Keyframe { opacity: 0.0, x: 0.0, y: 40.0, scale: 1.0 }
    );
    assert_eq!(
        hidden(RevealDirection::Left),
        Keyframe { opacity: 0.0, x: -40.0, y: 0.0, scale: 1.0 }
    );
    assert_eq!(
        hidden(RevealDirection::Right),
        Keyframe { opacity: 0.0, x: 40.0, y: 0.0, scale: 1.0 }
    );
    assert_eq!(
        hidden(RevealDirection::InPlace),
        Keyframe { opacity: 0.0, x: 0.0, y: 0.0, scale: 0.95 }
    );
}

#[test]
fn presets_are_distinct_and_share_the_visible_style() {
    let all = RevealDirection::ALL;
    for (i, a) in all.iter().enumerate() {
        assert_eq!(a.variants().visible, Keyframe::VISIBLE);
        for b in &all[i + 1..] {
            assert_ne!(a.variants().hidden, b.variants().hidden, "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn direction_names_round_trip_through_markup_values() {
    for d in RevealDirection::ALL {
        assert_eq!(d.as_str().parse::<RevealDirection>(), Ok(d));
    }
}

#[test]
fn starts_pending_and_hidden() {
    let r = reveal(RevealDirection::Up);
    assert_eq!(r.phase(), RevealPhase::Pending);
    assert_eq!(r.style(), RevealDirection::Up.variants().hidden);
}

#[test]
fn reveals_exactly_once() {
    let mut r = reveal(RevealDirection::Left);
    assert!(!r.observe(false));
    assert_eq!(r.phase(), RevealPhase::Pending);

    assert!(r.observe(true));
    assert_eq!(r.phase(), RevealPhase::Revealed);
    assert_eq!(r.style(), Keyframe::VISIBLE);

    // leaving and re-entering the viewport never re-triggers
    assert!(!r.observe(false));
    assert!(r.is_revealed());
    assert_eq!(r.style(), Keyframe::VISIBLE);
    assert!(!r.observe(true));
    assert!(r.is_revealed());
}

#[test]
fn options_default_when_attributes_missing() {
    let opts = RevealOptions::from_attrs(None, None, None).unwrap();
    assert_eq!(opts, RevealOptions::default());
    assert_eq!(opts.direction, RevealDirection::Up);
    assert_eq!(opts.delay_sec, 0.0);
    assert_eq!(opts.width, RevealWidth::FitContent);
}

#[test]
fn options_parse_from_attributes() {
    let opts = RevealOptions::from_attrs(Some("none"), Some("0.4"), Some("100%")).unwrap();
    assert_eq!(opts.direction, RevealDirection::InPlace);
    assert_eq!(opts.delay_sec, 0.4);
    assert_eq!(opts.width, RevealWidth::Full);
    assert_eq!(opts.width.css(), "100%");
    assert_eq!(RevealWidth::FitContent.css(), "fit-content");
}

#[test]
fn bad_attributes_are_typed_errors() {
    assert_eq!(
        RevealOptions::from_attrs(Some("down"), None, None),
        Err(MotionError::UnknownDirection("down".to_string()))
    );
    assert_eq!(
        RevealOptions::from_attrs(None, Some("-1"), None),
        Err(MotionError::InvalidDelay("-1".to_string()))
    );
    assert_eq!(
        RevealOptions::from_attrs(None, Some("soon"), None),
        Err(MotionError::InvalidDelay("soon".to_string()))
    );
    assert_eq!(
        RevealOptions::from_attrs(None, None, Some("50%")),
        Err(MotionError::UnknownWidth("50%".to_string()))
    );
    assert_eq!(
        RevealOptions::from_attrs(None, None, Some("full")),
        Err(MotionError::UnknownWidth("full".to_string()))
    );
}

#[test]
fn transition_uses_fixed_duration_and_easing_with_delay() {
    let opts = RevealOptions::from_attrs(None, Some("0.2"), None).unwrap();
    assert_eq!(
        opts.css_transition(),
        "opacity 0.8s cubic-bezier(0.25, 0.4, 0.25, 1) 0.2s, transform 0.8s cubic-bezier(0.25, 0.4, 0.25, 1) 0.2s"
    );
}

#[test]
fn keyframe_css() {
    let hidden = RevealDirection::Up.variants().hidden;
    assert_eq!(hidden.css_transform(), "translate3d(0px, 40px, 0) scale(1)");
    assert_eq!(hidden.css_opacity(), "0");
    assert_eq!(Keyframe::VISIBLE.css_opacity(), "1");
}

#[test]
fn margin_matches_root_margin_string() {
    assert_eq!(ViewportMargin::default().root_margin(), "-10% 0px -10% 0px");
}

#[test]
fn margin_insets_the_viewport() {
    let m = ViewportMargin::default();
    let vh = 1000.0;
    // fully inside the band
    assert!(m.intersects(300.0, 500.0, vh));
    // only within the top 10%
    assert!(!m.intersects(0.0, 80.0, vh));
    // only within the bottom 10%
    assert!(!m.intersects(920.0, 1200.0, vh));
    // below the fold
    assert!(!m.intersects(1500.0, 1700.0, vh));
    // straddles the lower band edge
    assert!(m.intersects(850.0, 1100.0, vh));
    // taller than the viewport
    assert!(m.intersects(-500.0, 1500.0, vh));
}

#[test]
fn teardown_restores_pending_elements_only() {
    for direction in RevealDirection::ALL {
        let mut r = reveal(direction);
        assert_eq!(r.teardown_style(), Some(Keyframe::VISIBLE));
        r.observe(true);
        assert_eq!(r.teardown_style(), None);
    }
}

#[test]
fn taller_viewport_brings_element_into_band() {
    let m = ViewportMargin::default();
    // element sits at the same rect; only the viewport height changes
    assert!(!m.intersects(700.0, 800.0, 600.0));
    assert!(m.intersects(700.0, 800.0, 1000.0));

    let mut r = reveal(RevealDirection::Up);
    assert!(!r.observe(m.intersects(700.0, 800.0, 600.0)));
    assert!(r.observe(m.intersects(700.0, 800.0, 1000.0)));
    assert!(r.is_revealed());
}
