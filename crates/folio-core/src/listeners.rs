//! Scoped event-listener registration.
//!
//! A [`ListenerHost`] is anything events can be listened on (the document,
//! the window, a single element). [`Subscriptions`] remembers every listener
//! it registered and removes all of them on teardown or drop, so each
//! registration is paired with exactly one removal.

use crate::interaction::{InputEvent, SharedInteraction};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    PointerEnter,
    PointerLeave,
    Scroll,
    Resize,
    Submit,
}

impl EventKind {
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::PointerMove => "mousemove",
            EventKind::PointerEnter => "mouseenter",
            EventKind::PointerLeave => "mouseleave",
            EventKind::Scroll => "scroll",
            EventKind::Resize => "resize",
            EventKind::Submit => "submit",
        }
    }
}

pub type Handler = Box<dyn FnMut(&InputEvent)>;

pub trait ListenerHost {
    type Token;

    fn listen(&self, kind: EventKind, handler: Handler) -> Self::Token;
    fn unlisten(&self, token: Self::Token);
}

pub struct Subscriptions<H: ListenerHost> {
    entries: Vec<(H, H::Token)>,
}

impl<H: ListenerHost> Default for Subscriptions<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H: ListenerHost> Subscriptions<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, host: &H, kind: EventKind, handler: Handler)
    where
        H: Clone,
    {
        let token = host.listen(kind, handler);
        self.entries.push((host.clone(), token));
    }

    /// Move every listener of `other` into this set.
    pub fn absorb(&mut self, mut other: Subscriptions<H>) {
        self.entries.append(&mut other.entries);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every registered listener. Equivalent to dropping.
    pub fn teardown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        for (host, token) in self.entries.drain(..) {
            host.unlisten(token);
        }
    }
}

impl<H: ListenerHost> Drop for Subscriptions<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Wire the shared interaction state to its event sources.
///
/// Pointer movement comes from the document, scroll and resize from the
/// window, and hover from each interactive element.
pub fn attach_interaction<H>(
    state: &SharedInteraction,
    document: &H,
    window: &H,
    interactive: &[H],
) -> Subscriptions<H>
where
    H: ListenerHost + Clone,
{
    let mut subs = Subscriptions::new();
    subs.add(document, EventKind::PointerMove, writer(state));
    subs.add(window, EventKind::Scroll, writer(state));
    subs.add(window, EventKind::Resize, writer(state));
    for el in interactive {
        subs.add(el, EventKind::PointerEnter, writer(state));
        subs.add(el, EventKind::PointerLeave, writer(state));
    }
    subs
}

fn writer(state: &SharedInteraction) -> Handler {
    let state = state.clone();
    Box::new(move |ev: &InputEvent| state.borrow_mut().apply(ev))
}
