//! DOM event wiring. Every listener goes through [`Subscriptions`] so the
//! page can remove all of them on teardown.

pub mod host;

pub use host::DomHost;

use crate::motion::Animator;
use folio_core::{tilt, EventKind, InputEvent, Rect, Subscriptions, Tilt};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A card that tilts towards the pointer while hovered.
#[derive(Clone)]
pub struct TiltCard {
    pub el: web::HtmlElement,
    pub divisor: f64,
    pub lift_px: f64,
}

/// Hover enter/leave on every animated element that has a hover spec.
pub fn wire_motion_hover(animator: &Rc<RefCell<Animator>>) -> Subscriptions<DomHost> {
    let mut subs = Subscriptions::new();
    let targets = animator.borrow().hover_targets();
    for (index, el) in targets {
        let host = DomHost::of(&el);
        for (kind, hovering) in [
            (EventKind::PointerEnter, true),
            (EventKind::PointerLeave, false),
        ] {
            let animator = animator.clone();
            subs.add(
                &host,
                kind,
                Box::new(move |_: &InputEvent| {
                    animator.borrow_mut().set_hover(index, hovering)
                }),
            );
        }
    }
    subs
}

/// Pointer tilt on each card; leaving the card resets it to rest.
pub fn wire_tilt(cards: &[TiltCard]) -> Subscriptions<DomHost> {
    let mut subs = Subscriptions::new();
    for card in cards {
        let host = DomHost::of(&card.el);
        let moving = card.clone();
        subs.add(
            &host,
            EventKind::PointerMove,
            Box::new(move |ev: &InputEvent| {
                if let InputEvent::PointerMove { x, y } = *ev {
                    let r = moving.el.get_bounding_client_rect();
                    let rect = Rect::new(r.left(), r.top(), r.width(), r.height());
                    let t = tilt(x, y, &rect, moving.divisor);
                    crate::dom::set_style(
                        &moving.el,
                        "transform",
                        &t.css_transform(moving.lift_px),
                    );
                }
            }),
        );
        let leaving = card.el.clone();
        subs.add(
            &host,
            EventKind::PointerLeave,
            Box::new(move |_: &InputEvent| {
                let rest = Tilt::REST.css_transform(0.0);
                crate::dom::set_style(&leaving, "transform", &rest);
            }),
        );
    }
    subs
}

/// The contact form is decorative: submission is cancelled and logged.
pub fn wire_form(form: &web::HtmlElement) -> Subscriptions<DomHost> {
    let mut subs = Subscriptions::new();
    subs.add(
        &DomHost::of(form),
        EventKind::Submit,
        Box::new(|_: &InputEvent| log::info!("[events] contact form submit intercepted")),
    );
    subs
}
