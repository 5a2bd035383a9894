#![cfg(target_arch = "wasm32")]
mod chrome;
mod dom;
mod events;
mod frame;
mod motion;
mod render;
mod sections;
mod style;

use chrome::Chrome;
use events::DomHost;
use folio_core::constants::INTERACTIVE_SELECTOR;
use folio_core::{
    attach_interaction, AssetRegistry, InputEvent, InteractionState, SceneConfig, SceneDriver,
    Subscriptions, DEFAULT_ASSET_BASE,
};
use frame::{FrameContext, FrameLoop, SceneSlot};
use instant::Instant;
use motion::Animator;
use render::GpuContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything the mounted page keeps alive.
struct App {
    frames: FrameLoop,
    subs: Subscriptions<DomHost>,
    ctx: Rc<RefCell<FrameContext>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match mount() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("[mount] error: {:?}", e),
    }
    Ok(())
}

/// Stop the frame loop, remove every listener and release the GPU.
/// Calling it again after the page is torn down does nothing.
#[wasm_bindgen]
pub fn teardown() {
    let Some(app) = APP.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    app.frames.cancel();
    let listeners = app.subs.len();
    app.subs.teardown();
    app.ctx.borrow_mut().release_gpu();
    log::info!("[mount] torn down, {} listeners removed", listeners);
}

fn mount() -> anyhow::Result<App> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let root: web::Element = match document.get_element_by_id("app") {
        Some(el) => el,
        None => {
            log::warn!("[mount] missing #app, building into <body>");
            document
                .body()
                .ok_or_else(|| anyhow::anyhow!("missing <body>"))?
                .into()
        }
    };
    let base = root
        .get_attribute("data-assets")
        .unwrap_or_else(|| DEFAULT_ASSET_BASE.to_string());
    let assets = AssetRegistry::with_defaults(base);

    let mut animator = Animator::new();
    let page = sections::build(&document, &root, &assets, &mut animator)?;
    let animator = Rc::new(RefCell::new(animator));

    let interaction = InteractionState::shared();
    {
        let mut state = interaction.borrow_mut();
        let (width, height) = dom::viewport_size(&window);
        state.apply(&InputEvent::Resize { width, height });
        state.apply(&InputEvent::Scroll(dom::scroll_metrics(&window)));
    }

    let interactive: Vec<DomHost> = dom::query_all(&document, INTERACTIVE_SELECTOR)
        .iter()
        .map(DomHost::of)
        .collect();
    let mut subs = attach_interaction(
        &interaction,
        &DomHost::of(&document),
        &DomHost::of(&window),
        &interactive,
    );
    subs.absorb(events::wire_motion_hover(&animator));
    subs.absorb(events::wire_tilt(&page.tilt_cards));
    if let Some(form) = &page.form {
        subs.absorb(events::wire_form(form));
    }
    log::info!(
        "[events] {} listeners on {} interactive elements",
        subs.len(),
        interactive.len()
    );

    let mut scenes = Vec::with_capacity(page.canvases.len());
    for (canvas, preset) in &page.canvases {
        let attrs: [&web::Element; 2] = [canvas, &root];
        let config = SceneConfig::from_lookup(|key| dom::data_attr(&attrs, key))
            .unwrap_or_else(|e| {
                log::warn!("[config] {} scene: {}; using defaults", preset, e);
                SceneConfig::default()
            });
        let driver = SceneDriver::preset(*preset, &config);
        log::info!("[scene] {} ready: {:?}", preset, driver.effect_names());
        scenes.push(SceneSlot {
            canvas: canvas.clone(),
            driver,
            max_dpr: config.max_device_pixel_ratio,
            surface: None,
        });
    }

    let ctx = Rc::new(RefCell::new(FrameContext {
        interaction,
        animator,
        chrome: Chrome::new(page.chrome),
        scenes,
        gpu: None,
        last_instant: Instant::now(),
    }));
    let frames = frame::start_loop(ctx.clone());

    let canvases: Vec<web::HtmlCanvasElement> =
        page.canvases.iter().map(|(c, _)| c.clone()).collect();
    let weak = Rc::downgrade(&ctx);
    spawn_local(async move {
        match GpuContext::new(&canvases).await {
            Ok((gpu, surfaces)) => match weak.upgrade() {
                Some(ctx) => ctx.borrow_mut().attach_gpu(gpu, surfaces),
                None => log::warn!("[gpu] page torn down before the device was ready"),
            },
            Err(e) => log::warn!("[gpu] WebGPU unavailable, running without 3D: {:?}", e),
        }
    });

    log::info!("[mount] page mounted");
    Ok(App { frames, subs, ctx })
}
