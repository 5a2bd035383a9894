//! Page-level decorations driven by the shared interaction state: cursor
//! follower, scroll progress bar, nav background, hero parallax and the
//! contact-section glow.

use crate::dom;
use crate::style;
use folio_core::constants::{GLOW_DAMPING, GLOW_HALF_SIZE_PX, GLOW_STIFFNESS};
use folio_core::motion::SpringFollower;
use folio_core::InteractionState;
use glam::Vec2;
use web_sys as web;

const GLOW_REST_TOLERANCE: f32 = 0.05;

#[derive(Default)]
pub struct ChromeElements {
    pub cursor: Option<web::HtmlElement>,
    pub progress: Option<web::HtmlElement>,
    pub nav: Option<web::HtmlElement>,
    pub hero_content: Option<web::HtmlElement>,
    /// The glow and the section its coordinates are relative to.
    pub glow: Option<(web::HtmlElement, web::HtmlElement)>,
}

pub struct Chrome {
    els: ChromeElements,
    glow: SpringFollower,
    last: Option<InteractionState>,
}

impl Chrome {
    pub fn new(els: ChromeElements) -> Self {
        Self {
            els,
            glow: SpringFollower::new(GLOW_STIFFNESS, GLOW_DAMPING, 1.0),
            last: None,
        }
    }

    pub fn update(&mut self, state: &InteractionState, dt: f32) {
        if !self.last.is_some_and(|last| last.same_as(state)) {
            self.apply_state(state);
            self.last = Some(*state);
        }
        self.step_glow(state, dt);
    }

    fn apply_state(&self, state: &InteractionState) {
        if let Some(cursor) = &self.els.cursor {
            dom::set_style(cursor, "transform", &style::cursor_transform(state));
        }
        if let Some(bar) = &self.els.progress {
            dom::set_style(bar, "width", &style::progress_width(state));
        }
        if let Some(nav) = &self.els.nav {
            let _ = nav
                .class_list()
                .toggle_with_force(style::NAV_SCROLLED_CLASS, state.nav_scrolled());
        }
        if let Some(hero) = &self.els.hero_content {
            dom::set_style(hero, "transform", &style::hero_parallax(state));
        }
    }

    fn step_glow(&mut self, state: &InteractionState, dt: f32) {
        let Some((glow, section)) = &self.els.glow else {
            return;
        };
        let r = section.get_bounding_client_rect();
        let target = Vec2::new(
            (state.pointer.x - r.left()) as f32 - GLOW_HALF_SIZE_PX,
            (state.pointer.y - r.top()) as f32 - GLOW_HALF_SIZE_PX,
        );
        self.glow.set_target(target);
        if self.glow.is_resting(GLOW_REST_TOLERANCE) {
            return;
        }
        let p = self.glow.step(dt);
        dom::set_style(glow, "transform", &style::translate(p.x, p.y));
    }
}
