use crate::dom;
use folio_core::motion::{in_view, MotionSpec, MotionState, MotionStyle, Trigger};
use instant::Instant;
use web_sys as web;

struct Animated {
    el: web::Element,
    hover_source: web::Element,
    style: web::CssStyleDeclaration,
    state: MotionState,
    applied: Option<MotionStyle>,
}

/// Drives every declarative animation on the page from the frame loop.
pub struct Animator {
    items: Vec<Animated>,
    origin: Instant,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            origin: Instant::now(),
        }
    }

    /// Seconds since the page mounted; the time base of every motion state.
    #[inline]
    pub fn now(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }

    /// Register `el` and paint its initial style so nothing flashes in.
    /// Elements without an inline style (neither HTML nor SVG) are skipped.
    pub fn add(&mut self, el: &web::Element, spec: MotionSpec) -> Option<usize> {
        self.add_hovered_by(el, el, spec)
    }

    /// Like [`Animator::add`], but hover is tracked on `hover_source`.
    pub fn add_hovered_by(
        &mut self,
        el: &web::Element,
        hover_source: &web::Element,
        spec: MotionSpec,
    ) -> Option<usize> {
        let Some(style) = dom::inline_style(el) else {
            log::warn!("[motion] <{}> has no inline style", el.tag_name());
            return None;
        };
        let initial = spec.initial_style();
        apply(&style, &initial);
        self.items.push(Animated {
            el: el.clone(),
            hover_source: hover_source.clone(),
            style,
            state: MotionState::new(spec),
            applied: Some(initial),
        });
        Some(self.items.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hover sources of every item with a hover spec, with the item's index
    /// for [`Animator::set_hover`].
    pub fn hover_targets(&self) -> Vec<(usize, web::Element)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, a)| a.state.spec().hover.is_some())
            .map(|(i, a)| (i, a.hover_source.clone()))
            .collect()
    }

    pub fn set_hover(&mut self, index: usize, hovering: bool) {
        let now = self.now();
        if let Some(a) = self.items.get_mut(index) {
            a.state.set_hover(hovering, now);
        }
    }

    pub fn tick(&mut self, viewport_height: f64) {
        let now = self.now();
        for a in &mut self.items {
            match a.state.trigger() {
                Trigger::Mount => a.state.start(now),
                Trigger::InView { .. } => {
                    let rect = a.el.get_bounding_client_rect();
                    a.state
                        .on_visibility(in_view(rect.top(), rect.bottom(), viewport_height), now);
                }
                Trigger::Manual => {}
            }
            let sampled = a.state.sample(now);
            if a.applied.as_ref() != Some(&sampled) {
                apply(&a.style, &sampled);
                a.applied = Some(sampled);
            }
        }
    }
}

fn apply(style: &web::CssStyleDeclaration, sampled: &MotionStyle) {
    for (prop, value) in sampled.css_declarations() {
        let _ = style.set_property(prop, &value);
    }
}
