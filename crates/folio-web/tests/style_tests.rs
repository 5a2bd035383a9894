// Host-side tests for the CSS value builders.
// The main crate is wasm-only, so we include the pure-Rust module directly.
#![allow(dead_code)]

mod style {
    include!("../src/style.rs");
}

use folio_core::{InputEvent, InteractionState, ScrollMetrics};
use style::*;

fn scrolled(scroll_y: f64, document_height: f64, viewport_height: f64) -> InteractionState {
    let mut s = InteractionState::default();
    s.apply(&InputEvent::Scroll(ScrollMetrics {
        scroll_y,
        document_height,
        viewport_height,
    }));
    s
}

#[test]
fn cursor_follows_pointer_and_grows_on_hover() {
    let mut s = InteractionState::default();
    s.apply(&InputEvent::PointerMove { x: 100.0, y: 50.0 });
    assert_eq!(cursor_transform(&s), "translate(90px, 40px) scale(1)");
    s.apply(&InputEvent::PointerEnter);
    assert_eq!(cursor_transform(&s), "translate(90px, 40px) scale(1.5)");
    s.apply(&InputEvent::PointerLeave);
    assert_eq!(cursor_transform(&s), "translate(90px, 40px) scale(1)");
}

#[test]
fn progress_bar_tracks_scroll_fraction() {
    assert_eq!(progress_width(&scrolled(300.0, 1300.0, 800.0)), "60%");
    assert_eq!(progress_width(&scrolled(0.0, 1300.0, 800.0)), "0%");
}

#[test]
fn short_page_progress_renders_nan() {
    // Page no taller than the viewport: 0 / 0.
    assert_eq!(progress_width(&scrolled(0.0, 800.0, 800.0)), "NaN%");
}

#[test]
fn hero_moves_at_a_fifth_of_scroll() {
    assert_eq!(hero_parallax(&scrolled(100.0, 3000.0, 800.0)), "translateY(20px)");
    assert_eq!(hero_parallax(&scrolled(250.0, 3000.0, 800.0)), "translateY(50px)");
}

#[test]
fn tint_appends_alpha_to_hex_colours_only() {
    assert_eq!(tinted("#00ffff", "20"), "#00ffff20");
    assert_eq!(tinted("#0ff", "20"), "#0ff");
    assert_eq!(tinted("cyan", "20"), "cyan");
}

#[test]
fn floating_icon_position() {
    assert_eq!(
        floating_icon_style(30.0, 40.0, "#61DAFB"),
        "left: 30%; top: 40%; color: #61DAFB"
    );
}

#[test]
fn backing_size_clamps_pixel_ratio() {
    assert_eq!(backing_size(400.0, 300.0, 1.0, 2.0), (400, 300));
    assert_eq!(backing_size(400.0, 300.0, 3.0, 2.0), (800, 600));
    assert_eq!(backing_size(400.0, 300.0, 0.5, 2.0), (400, 300));
    assert_eq!(backing_size(400.0, 300.0, f64::NAN, 2.0), (400, 300));
    // A max below 1 still allows 1.
    assert_eq!(backing_size(400.0, 300.0, 2.0, 0.5), (400, 300));
}

#[test]
fn backing_size_is_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 5.0, 1.0, 2.0), (1, 5));
}

#[test]
fn length_units() {
    assert_eq!(px(1000.0), "1000px");
    assert_eq!(percent(12.5), "12.5%");
    assert_eq!(translate(-3.5, 2.0), "translate(-3.5px, 2px)");
}
