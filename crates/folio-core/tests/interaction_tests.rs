// Host-side tests for the interaction math and listener registry.
// A fake host stands in for the DOM and dispatches synthetic events.

use folio_core::constants::PROJECT_TILT_DIVISOR;
use folio_core::{
    attach_interaction, scroll_fraction, tilt, EventKind, Handler, HoverState, InputEvent,
    InteractionState, ListenerHost, Rect, ScrollMetrics, Subscriptions, Tilt,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct Registry {
    next: u32,
    live: Vec<(u32, EventKind, Handler)>,
}

#[derive(Clone, Default)]
struct FakeHost(Rc<RefCell<Registry>>);

impl FakeHost {
    fn dispatch(&self, kind: EventKind, ev: InputEvent) {
        let mut reg = self.0.borrow_mut();
        for (_, k, handler) in reg.live.iter_mut() {
            if *k == kind {
                handler(&ev);
            }
        }
    }

    fn live(&self) -> usize {
        self.0.borrow().live.len()
    }
}

impl ListenerHost for FakeHost {
    type Token = u32;

    fn listen(&self, kind: EventKind, handler: Handler) -> u32 {
        let mut reg = self.0.borrow_mut();
        reg.next += 1;
        let id = reg.next;
        reg.live.push((id, kind, handler));
        id
    }

    fn unlisten(&self, token: u32) {
        self.0.borrow_mut().live.retain(|(id, _, _)| *id != token);
    }
}

fn counter(hits: &Rc<Cell<u32>>) -> Handler {
    let hits = hits.clone();
    Box::new(move |_: &InputEvent| hits.set(hits.get() + 1))
}

#[test]
fn tilt_is_zero_at_the_centre() {
    let rect = Rect::new(100.0, 50.0, 300.0, 200.0);
    let (cx, cy) = rect.center();
    assert_eq!(tilt(cx, cy, &rect, PROJECT_TILT_DIVISOR), Tilt::REST);
}

#[test]
fn tilt_is_linear_in_the_offset() {
    let rect = Rect::new(0.0, 0.0, 400.0, 200.0);
    let a = tilt(250.0, 120.0, &rect, PROJECT_TILT_DIVISOR);
    assert_eq!(a.rotate_x, (120.0 - 100.0) / 20.0);
    assert_eq!(a.rotate_y, (200.0 - 250.0) / 20.0);

    // doubling the offset doubles the angle
    let b = tilt(300.0, 140.0, &rect, PROJECT_TILT_DIVISOR);
    assert_eq!(b.rotate_x, 2.0 * a.rotate_x);
    assert_eq!(b.rotate_y, 2.0 * a.rotate_y);

    // halving the divisor doubles the angle too
    let steep = tilt(250.0, 120.0, &rect, PROJECT_TILT_DIVISOR / 2.0);
    assert_eq!(steep.rotate_x, 2.0 * a.rotate_x);
}

#[test]
fn tilt_is_not_clamped_outside_the_box() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let far = tilt(5000.0, -5000.0, &rect, PROJECT_TILT_DIVISOR);
    assert_eq!(far.rotate_x, (-5000.0 - 50.0) / 20.0);
    assert_eq!(far.rotate_y, (50.0 - 5000.0) / 20.0);
}

#[test]
fn tilt_css_includes_perspective_and_lift() {
    let t = Tilt {
        rotate_x: 1.5,
        rotate_y: -2.0,
    };
    assert_eq!(
        t.css_transform(20.0),
        "perspective(1000px) rotateX(1.5deg) rotateY(-2deg) translateZ(20px)"
    );
    assert_eq!(
        Tilt::REST.css_transform(0.0),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px)"
    );
}

#[test]
fn scroll_fraction_spans_zero_to_one() {
    assert_eq!(scroll_fraction(0.0, 3000.0, 800.0), 0.0);
    assert_eq!(scroll_fraction(2200.0, 3000.0, 800.0), 1.0);
    assert_eq!(scroll_fraction(1100.0, 3000.0, 800.0), 0.5);
}

#[test]
fn scroll_fraction_on_short_page_degrades_without_panicking() {
    assert!(scroll_fraction(0.0, 600.0, 600.0).is_nan());
    let mut state = InteractionState::default();
    state.apply(&InputEvent::Scroll(ScrollMetrics {
        scroll_y: 0.0,
        document_height: 500.0,
        viewport_height: 500.0,
    }));
    assert!(state.progress_width_percent().is_nan());
    assert!(!state.nav_scrolled());
}

#[test]
fn short_page_state_is_unchanged_between_identical_frames() {
    let mut state = InteractionState::default();
    state.apply(&InputEvent::Scroll(ScrollMetrics {
        scroll_y: 0.0,
        document_height: 500.0,
        viewport_height: 500.0,
    }));
    let next = state;
    // NaN fraction: derived equality never holds, the frame comparison does
    assert_ne!(state, next);
    assert!(state.same_as(&next));

    let mut moved = next;
    moved.apply(&InputEvent::PointerMove { x: 3.0, y: 4.0 });
    assert!(!state.same_as(&moved));

    let mut taller = next;
    taller.apply(&InputEvent::Scroll(ScrollMetrics {
        scroll_y: 0.0,
        document_height: 900.0,
        viewport_height: 500.0,
    }));
    assert!(!state.same_as(&taller));
}

#[test]
fn hover_state_machine() {
    let s = HoverState::Idle;
    let s = s.on_event(&InputEvent::PointerEnter);
    assert_eq!(s, HoverState::Hovering);
    let s = s.on_event(&InputEvent::PointerMove { x: 1.0, y: 2.0 });
    assert_eq!(s, HoverState::Hovering);
    assert_eq!(s.on_event(&InputEvent::PointerLeave), HoverState::Idle);
}

#[test]
fn interaction_state_derives_decorations() {
    let mut state = InteractionState::default();
    state.apply(&InputEvent::PointerMove { x: 300.0, y: 40.0 });
    assert_eq!(state.cursor_origin(), (290.0, 30.0));
    assert_eq!(state.cursor_scale(), 1.0);
    state.apply(&InputEvent::PointerEnter);
    assert_eq!(state.cursor_scale(), 1.5);

    state.apply(&InputEvent::Scroll(ScrollMetrics {
        scroll_y: 51.0,
        document_height: 1051.0,
        viewport_height: 1000.0,
    }));
    assert!(state.nav_scrolled());
    assert!((state.hero_offset_px() - 10.2).abs() < 1e-9);
    assert_eq!(state.progress_width_percent(), 100.0);

    state.apply(&InputEvent::Resize {
        width: 1280.0,
        height: 720.0,
    });
    assert_eq!(state.viewport_width, 1280.0);
}

#[test]
fn teardown_removes_every_listener() {
    let host = FakeHost::default();
    let hits = Rc::new(Cell::new(0));
    let mut subs = Subscriptions::new();
    subs.add(&host, EventKind::PointerMove, counter(&hits));
    subs.add(&host, EventKind::Scroll, counter(&hits));
    assert_eq!(subs.len(), 2);
    assert_eq!(host.live(), 2);

    host.dispatch(EventKind::PointerMove, InputEvent::PointerMove { x: 0.0, y: 0.0 });
    assert_eq!(hits.get(), 1);

    subs.teardown();
    assert_eq!(host.live(), 0);
    host.dispatch(EventKind::PointerMove, InputEvent::PointerMove { x: 0.0, y: 0.0 });
    host.dispatch(EventKind::Scroll, InputEvent::Scroll(ScrollMetrics::default()));
    assert_eq!(hits.get(), 1);
}

#[test]
fn dropping_subscriptions_unlistens() {
    let host = FakeHost::default();
    let hits = Rc::new(Cell::new(0));
    {
        let mut subs = Subscriptions::new();
        subs.add(&host, EventKind::Resize, counter(&hits));
        assert_eq!(host.live(), 1);
    }
    assert_eq!(host.live(), 0);
    host.dispatch(
        EventKind::Resize,
        InputEvent::Resize {
            width: 1.0,
            height: 1.0,
        },
    );
    assert_eq!(hits.get(), 0);
}

#[test]
fn absorb_moves_listeners_into_one_set() {
    let host = FakeHost::default();
    let hits = Rc::new(Cell::new(0));
    let mut a = Subscriptions::new();
    let mut b = Subscriptions::new();
    a.add(&host, EventKind::Scroll, counter(&hits));
    b.add(&host, EventKind::Scroll, counter(&hits));
    a.absorb(b);
    assert_eq!(a.len(), 2);
    assert_eq!(host.live(), 2);
    drop(a);
    assert_eq!(host.live(), 0);
}

#[test]
fn attach_interaction_wires_and_unwires_all_sources() {
    let document = FakeHost::default();
    let window = FakeHost::default();
    let buttons = vec![FakeHost::default(), FakeHost::default()];
    let state = InteractionState::shared();

    let subs = attach_interaction(&state, &document, &window, &buttons);
    assert_eq!(subs.len(), 3 + 2 * buttons.len());
    assert_eq!(document.live(), 1);
    assert_eq!(window.live(), 2);

    document.dispatch(EventKind::PointerMove, InputEvent::PointerMove { x: 12.0, y: 34.0 });
    buttons[1].dispatch(EventKind::PointerEnter, InputEvent::PointerEnter);
    window.dispatch(
        EventKind::Scroll,
        InputEvent::Scroll(ScrollMetrics {
            scroll_y: 100.0,
            document_height: 2000.0,
            viewport_height: 1000.0,
        }),
    );
    {
        let s = state.borrow();
        assert_eq!(s.pointer.x, 12.0);
        assert!(s.hover.is_hovering());
        assert_eq!(s.scroll_fraction, 0.1);
    }

    subs.teardown();
    let snapshot = *state.borrow();
    assert_eq!(document.live() + window.live(), 0);
    assert!(buttons.iter().all(|b| b.live() == 0));

    document.dispatch(EventKind::PointerMove, InputEvent::PointerMove { x: 99.0, y: 99.0 });
    buttons[1].dispatch(EventKind::PointerLeave, InputEvent::PointerLeave);
    assert_eq!(*state.borrow(), snapshot);
}
