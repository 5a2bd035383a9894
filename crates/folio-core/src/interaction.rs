//! Pointer, hover and scroll state shared by the page's decorations.
//!
//! One event callback writes, any number of per-frame readers read. The page
//! runs on a single-threaded event loop so a `RefCell` is enough.

use crate::constants::{
    CURSOR_HOVER_SCALE, CURSOR_OFFSET_PX, HERO_PARALLAX_FACTOR, NAV_SCROLLED_THRESHOLD_PX,
    TILT_PERSPECTIVE_PX,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering,
}

impl HoverState {
    pub fn on_event(self, ev: &InputEvent) -> Self {
        match ev {
            InputEvent::PointerEnter => HoverState::Hovering,
            InputEvent::PointerLeave => HoverState::Idle,
            _ => self,
        }
    }

    #[inline]
    pub fn is_hovering(self) -> bool {
        self == HoverState::Hovering
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[inline]
    pub fn fraction(&self) -> f64 {
        scroll_fraction(self.scroll_y, self.document_height, self.viewport_height)
    }
}

/// Vertical scroll progress through the page.
///
/// The denominator is not guarded: a page no taller than the viewport yields
/// NaN (or a signed zero/infinity), which the progress bar renders as-is.
#[inline]
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    scroll_y / (document_height - viewport_height)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerEnter,
    PointerLeave,
    Scroll(ScrollMetrics),
    Resize {
        width: f64,
        height: f64,
    },
    /// A form was submitted; the host has already cancelled the navigation.
    Submit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Card rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn css_transform(&self, lift_px: f64) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y, lift_px
        )
    }
}

/// Tilt for a pointer at client coordinates over `rect`.
///
/// Linear in the offset from the centre and not clamped: pointers far outside
/// the box give proportionally large angles.
#[inline]
pub fn tilt(pointer_x: f64, pointer_y: f64, rect: &Rect, divisor: f64) -> Tilt {
    let x = pointer_x - rect.left;
    let y = pointer_y - rect.top;
    Tilt {
        rotate_x: (y - rect.height / 2.0) / divisor,
        rotate_y: (rect.width / 2.0 - x) / divisor,
    }
}

/// True when any part of a box spanning `top..bottom` overlaps the viewport.
#[inline]
pub fn in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    bottom > 0.0 && top < viewport_height
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub pointer: PointerState,
    pub hover: HoverState,
    pub scroll_y: f64,
    pub scroll_fraction: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

pub type SharedInteraction = Rc<RefCell<InteractionState>>;

impl InteractionState {
    pub fn shared() -> SharedInteraction {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn apply(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::PointerMove { x, y } => {
                self.pointer = PointerState { x, y };
            }
            InputEvent::PointerEnter | InputEvent::PointerLeave => {
                self.hover = self.hover.on_event(ev);
            }
            InputEvent::Scroll(metrics) => {
                self.scroll_y = metrics.scroll_y;
                self.scroll_fraction = metrics.fraction();
                self.viewport_height = metrics.viewport_height;
            }
            InputEvent::Resize { width, height } => {
                self.viewport_width = width;
                self.viewport_height = height;
            }
            InputEvent::Submit => {}
        }
    }

    /// Scale of the cursor follower.
    #[inline]
    pub fn cursor_scale(&self) -> f64 {
        if self.hover.is_hovering() {
            CURSOR_HOVER_SCALE
        } else {
            1.0
        }
    }

    /// Top-left of the cursor follower so that it centres on the pointer.
    #[inline]
    pub fn cursor_origin(&self) -> (f64, f64) {
        (
            self.pointer.x - CURSOR_OFFSET_PX,
            self.pointer.y - CURSOR_OFFSET_PX,
        )
    }

    #[inline]
    pub fn nav_scrolled(&self) -> bool {
        self.scroll_y > NAV_SCROLLED_THRESHOLD_PX
    }

    #[inline]
    pub fn hero_offset_px(&self) -> f64 {
        self.scroll_y * HERO_PARALLAX_FACTOR
    }

    /// Field-wise equality where NaN equals NaN, so a short page's NaN
    /// scroll fraction still compares unchanged between frames.
    pub fn same_as(&self, other: &Self) -> bool {
        self.pointer == other.pointer
            && self.hover == other.hover
            && same_f64(self.scroll_y, other.scroll_y)
            && same_f64(self.scroll_fraction, other.scroll_fraction)
            && same_f64(self.viewport_width, other.viewport_width)
            && same_f64(self.viewport_height, other.viewport_height)
    }

    #[inline]
    pub fn progress_width_percent(&self) -> f64 {
        self.scroll_fraction * 100.0
    }
}

#[inline]
fn same_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
