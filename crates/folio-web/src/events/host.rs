use crate::dom;
use folio_core::{EventKind, Handler, InputEvent, ListenerHost};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Any DOM event target (window, document, element) as a listener host.
#[derive(Clone)]
pub struct DomHost {
    target: web::EventTarget,
}

impl DomHost {
    pub fn of<T: AsRef<web::EventTarget>>(target: &T) -> Self {
        Self {
            target: target.as_ref().clone(),
        }
    }
}

/// A registered DOM listener. Owns the JS closure, which must outlive the
/// registration.
pub struct DomListener {
    kind: EventKind,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerHost for DomHost {
    type Token = DomListener;

    fn listen(&self, kind: EventKind, mut handler: Handler) -> DomListener {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Some(input) = translate(kind, &ev) {
                handler(&input);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let callback = closure.as_ref().unchecked_ref();
        if let Err(e) = self
            .target
            .add_event_listener_with_callback(kind.dom_name(), callback)
        {
            log::warn!("[events] add {} failed: {:?}", kind.dom_name(), e);
        }
        DomListener { kind, closure }
    }

    fn unlisten(&self, token: DomListener) {
        let _ = self.target.remove_event_listener_with_callback(
            token.kind.dom_name(),
            token.closure.as_ref().unchecked_ref(),
        );
    }
}

fn translate(kind: EventKind, ev: &web::Event) -> Option<InputEvent> {
    match kind {
        EventKind::PointerMove => ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| InputEvent::PointerMove {
                x: m.client_x() as f64,
                y: m.client_y() as f64,
            }),
        EventKind::PointerEnter => Some(InputEvent::PointerEnter),
        EventKind::PointerLeave => Some(InputEvent::PointerLeave),
        EventKind::Scroll => web::window().map(|w| InputEvent::Scroll(dom::scroll_metrics(&w))),
        EventKind::Resize => web::window().map(|w| {
            let (width, height) = dom::viewport_size(&w);
            InputEvent::Resize { width, height }
        }),
        EventKind::Submit => {
            ev.prevent_default();
            Some(InputEvent::Submit)
        }
    }
}
