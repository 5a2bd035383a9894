use crate::style;
use anyhow::anyhow;
use folio_core::ScrollMetrics;
use wasm_bindgen::JsCast;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Create `<tag class="...">` as an `HtmlElement`.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let e = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        e.set_class_name(class);
    }
    e.dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("<{}> is not an HtmlElement", tag))
}

pub fn text(
    document: &web::Document,
    tag: &str,
    class: &str,
    content: &str,
) -> anyhow::Result<web::HtmlElement> {
    let e = el(document, tag, class)?;
    e.set_text_content(Some(content));
    Ok(e)
}

pub fn svg(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow!("create svg <{}>: {:?}", tag, e))
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append <{}>: {:?}", child.tag_name(), e))
}

#[inline]
pub fn set_attr(el: &web::Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        log::warn!("[mount] set {}={} failed: {:?}", name, value, e);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

/// Inline style of an HTML or SVG element.
pub fn inline_style(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        Some(h.style())
    } else {
        el.dyn_ref::<web::SvgElement>().map(|s| s.style())
    }
}

/// Current scroll position and page/viewport heights.
pub fn scroll_metrics(window: &web::Window) -> ScrollMetrics {
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height: viewport_size(window).1,
    }
}

pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Match the canvas backing store to its CSS box. Returns the new size when
/// it changed.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    max_dpr: f64,
) -> Option<(u32, u32)> {
    let w = web::window()?;
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = style::backing_size(
        rect.width(),
        rect.height(),
        w.device_pixel_ratio(),
        max_dpr,
    );
    if canvas.width() == w_px && canvas.height() == h_px {
        return None;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Some((w_px, h_px))
}

/// Every element matching `selector`, as `HtmlElement`s.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[mount] bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// `data-<key>` on the first element that has it.
pub fn data_attr(elements: &[&web::Element], key: &str) -> Option<String> {
    let name = format!("data-{}", key);
    elements.iter().find_map(|e| e.get_attribute(&name))
}
