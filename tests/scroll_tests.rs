// Host-side tests for scroll-linked chrome.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod constants {
        include!("../src/motion/constants.rs");
    }
    pub mod error {
        include!("../src/motion/error.rs");
    }
    pub mod spring {
        include!("../src/motion/spring.rs");
    }
    pub mod scroll {
        include!("../src/motion/scroll.rs");
    }
}

use motion::error::MotionError;
use motion::scroll::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn px(offset: ParallaxOffset) -> f32 {
    match offset {
        ParallaxOffset::Px(v) => v,
        ParallaxOffset::Percent(v) => panic!("expected px, got {v}%"),
    }
}

#[test]
fn nav_flag_changes_only_across_threshold() {
    let mut nav = NavScrollState::default();
    assert!(!nav.is_scrolled());
    assert_eq!(nav.update(0.0), None);
    assert_eq!(nav.update(30.0), None);
    assert_eq!(nav.update(50.0), None);
    assert_eq!(nav.update(51.0), Some(true));
    assert_eq!(nav.update(400.0), None);
    assert!(nav.is_scrolled());
    assert_eq!(nav.update(50.0), Some(false));
    assert_eq!(nav.update(5.0), None);
}

#[test]
fn nav_threshold_is_configurable() {
    let mut nav = NavScrollState::new(20.0);
    assert_eq!(nav.update(20.0), None);
    assert_eq!(nav.update(21.0), Some(true));
}

#[test]
fn hero_at_top_is_untouched() {
    let f = ParallaxLayer::Hero.frame_at(0.0);
    assert_eq!(px(f.offset_y), 0.0);
    assert_eq!(f.opacity, 1.0);
    assert_eq!(f.scale, 1.0);
}

#[test]
fn hero_drifts_fades_and_shrinks() {
    let f = ParallaxLayer::Hero.frame_at(300.0);
    assert!(close(px(f.offset_y), 120.0));
    assert!(close(f.opacity, 0.5));
    assert!(close(f.scale, 0.95));
}

#[test]
fn parallax_clamps_past_its_range() {
    let f = ParallaxLayer::Hero.frame_at(5000.0);
    assert_eq!(px(f.offset_y), 400.0);
    assert_eq!(f.opacity, 0.0);
    assert!(close(f.scale, 0.9));

    let text = ParallaxLayer::HeroText.frame_at(5000.0);
    assert_eq!(px(text.offset_y), 200.0);

    // overscroll above the page top on touch devices
    let f = ParallaxLayer::Hero.frame_at(-80.0);
    assert_eq!(px(f.offset_y), 0.0);
    assert_eq!(f.opacity, 1.0);
}

#[test]
fn light_moves_in_percent() {
    assert_eq!(
        ParallaxLayer::Light.frame_at(0.0).offset_y,
        ParallaxOffset::Percent(-20.0)
    );
    assert_eq!(
        ParallaxLayer::Light.frame_at(500.0).offset_y,
        ParallaxOffset::Percent(0.0)
    );
    let css = ParallaxLayer::Light.frame_at(1000.0).css_transform();
    assert_eq!(css, "translate3d(0, 20.00%, 0) scale(1.0000)");
}

#[test]
fn layer_names_parse() {
    assert_eq!("hero".parse::<ParallaxLayer>(), Ok(ParallaxLayer::Hero));
    assert_eq!("hero-text".parse::<ParallaxLayer>(), Ok(ParallaxLayer::HeroText));
    assert_eq!(" light ".parse::<ParallaxLayer>(), Ok(ParallaxLayer::Light));
    assert_eq!(
        "stars".parse::<ParallaxLayer>(),
        Err(MotionError::UnknownParallaxLayer("stars".to_string()))
    );
}
