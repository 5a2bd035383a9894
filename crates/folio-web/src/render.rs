use anyhow::anyhow;
use folio_core::gpu::SceneRenderer;
use folio_core::SceneDriver;
use web_sys as web;

/// One WebGPU device shared by every scene canvas on the page.
pub struct GpuContext {
    device: wgpu::Device,
    queue: wgpu::Queue,
}

/// The swapchain and pipelines of a single scene canvas.
pub struct CanvasSurface {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
}

impl GpuContext {
    /// Create the device and one surface per canvas, in canvas order.
    pub async fn new(
        canvases: &[web::HtmlCanvasElement],
    ) -> anyhow::Result<(Self, Vec<CanvasSurface>)> {
        let instance = wgpu::Instance::default();
        let mut surfaces = Vec::with_capacity(canvases.len());
        for canvas in canvases {
            let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
            surfaces.push(instance.create_surface(target)?);
        }
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: surfaces.first(),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("No WebGPU adapter"))?;
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
            .await
            .map_err(|e| anyhow!(format!("request_device error: {:?}", e)))?;

        let ctx = Self { device, queue };
        let mut out = Vec::with_capacity(surfaces.len());
        for (surface, canvas) in surfaces.into_iter().zip(canvases) {
            out.push(ctx.configure(&adapter, surface, canvas.width(), canvas.height())?);
        }
        log::info!("[gpu] device ready, {} surfaces", out.len());
        Ok((ctx, out))
    }

    fn configure(
        &self,
        adapter: &wgpu::Adapter,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<CanvasSurface> {
        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&self.device, &config);
        Ok(CanvasSurface {
            surface,
            config,
            renderer: SceneRenderer::new(&self.device, format),
        })
    }
}

impl CanvasSurface {
    pub fn resize(&mut self, ctx: &GpuContext, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if self.config.width == width && self.config.height == height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&ctx.device, &self.config);
    }

    pub fn render(&mut self, ctx: &GpuContext, scene: &SceneDriver) -> anyhow::Result<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&ctx.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(anyhow!("surface error: {:?}", e)),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer.render(&ctx.device, &ctx.queue, &view, scene);
        frame.present();
        Ok(())
    }
}
