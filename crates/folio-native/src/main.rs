use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use folio_core::gpu::SceneRenderer;
use folio_core::{SceneConfig, SceneDriver, ScenePreset, KEY_PARTICLES, KEY_SEED, KEY_SPARKLES};
use winit::dpi::LogicalSize;
use winit::{event::*, event_loop::EventLoop, window::Window, window::WindowBuilder};

/// Preview one of the page's background scenes in a desktop window.
#[derive(Parser, Debug)]
#[command(name = "folio-native", version)]
struct Args {
    /// Scene to show: hero, about, skills or projects
    #[arg(short, long, default_value = "hero")]
    scene: ScenePreset,

    /// Particle count of the hero field
    #[arg(long)]
    particles: Option<String>,

    /// Sparkle count of every sparkle effect
    #[arg(long)]
    sparkles: Option<String>,

    /// Seed for the random layouts
    #[arg(long)]
    seed: Option<String>,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,
}

impl Args {
    fn scene_config(&self) -> anyhow::Result<SceneConfig> {
        let config = SceneConfig::from_lookup(|key| match key {
            KEY_PARTICLES => self.particles.clone(),
            KEY_SPARKLES => self.sparkles.clone(),
            KEY_SEED => self.seed.clone(),
            _ => None,
        })?;
        Ok(config)
    }
}

struct GpuState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
    scene: SceneDriver,
    last_frame: Instant,
}

impl GpuState {
    async fn new(window: Arc<Window>, scene: SceneDriver) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(Arc::clone(&window))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let renderer = SceneRenderer::new(&device, format);

        let mut scene = scene;
        scene.set_aspect(config.width, config.height);
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            scene,
            last_frame: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.scene.set_aspect(new_size.width, new_size.height);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.scene.tick(dt);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .render(&self.device, &self.queue, &view, &self.scene);
        frame.present();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = args.scene_config()?;
    let scene = SceneDriver::preset(args.scene, &config);
    log::info!(
        "[scene] {} ready: {:?} (seed {})",
        args.scene,
        scene.effect_names(),
        config.seed
    );

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(format!("folio: {} scene", args.scene))
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .build(&event_loop)?,
    );

    let mut state = pollster::block_on(GpuState::new(Arc::clone(&window), scene))?;
    log::info!("[gpu] surface {}x{}", state.config.width, state.config.height);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => match state.render() {
            Ok(_) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.resize(state.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory");
                elwt.exit()
            }
            Err(_) => {}
        },
        _ => {}
    })?;
    Ok(())
}
