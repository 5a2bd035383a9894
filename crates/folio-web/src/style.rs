// Pure CSS value builders. No DOM access so the host tests can include this file.

use folio_core::InteractionState;

pub const NAV_SCROLLED_CLASS: &str = "nav--scrolled";

#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", v)
}

#[inline]
pub fn percent(v: f64) -> String {
    format!("{}%", v)
}

/// Transform of the cursor follower, centred on the pointer.
pub fn cursor_transform(state: &InteractionState) -> String {
    let (x, y) = state.cursor_origin();
    format!("translate({}px, {}px) scale({})", x, y, state.cursor_scale())
}

/// Width of the scroll progress bar. A NaN fraction renders as `NaN%`,
/// which the browser rejects, so the bar keeps its previous width.
pub fn progress_width(state: &InteractionState) -> String {
    percent(state.progress_width_percent())
}

pub fn hero_parallax(state: &InteractionState) -> String {
    format!("translateY({}px)", state.hero_offset_px())
}

#[inline]
pub fn translate(x: f32, y: f32) -> String {
    format!("translate({}px, {}px)", x, y)
}

/// `#rrggbb` plus a two-digit hex alpha, e.g. a 12% tint of a brand colour.
pub fn tinted(color: &str, alpha_hex: &str) -> String {
    if color.len() == 7 && color.starts_with('#') {
        format!("{}{}", color, alpha_hex)
    } else {
        color.to_string()
    }
}

pub fn floating_icon_style(left_percent: f32, top_percent: f32, color: &str) -> String {
    format!(
        "left: {}%; top: {}%; color: {}",
        left_percent, top_percent, color
    )
}

/// Canvas backing-store size for a CSS box at the given device pixel ratio.
///
/// The ratio is clamped to `[1, max_dpr]` and each side is at least one pixel.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, max_dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() {
        dpr.clamp(1.0, max_dpr.max(1.0))
    } else {
        1.0
    };
    let w = (css_width * dpr).max(0.0) as u32;
    let h = (css_height * dpr).max(0.0) as u32;
    (w.max(1), h.max(1))
}
