mod state;
mod ui;

use anyhow::{Context as _, Result};
use cglab_render_wgpu::{GpuContext, WgpuRenderer};
use cglab_scene::{DemoConfig, DemoKind};
use clap::Parser;
use egui::Context as EguiContext;
use state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "cglab-desktop", about = "Interactive graphics coursework demos")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Demo to start with (overrides the config file)
    #[arg(long)]
    demo: Option<DemoKind>,

    /// YAML demo configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Window and GPU resources, created once the event loop resumes.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

struct GpuApp {
    state: AppState,
    graphics: Option<Graphics>,
    egui_ctx: EguiContext,
}

impl GpuApp {
    fn new(config: DemoConfig) -> Self {
        Self {
            state: AppState::new(config),
            graphics: None,
            egui_ctx: EguiContext::default(),
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let config = &self.state.config;
        let attrs = Window::default_attributes()
            .with_title(format!("cglab: {}", self.state.kind().title()))
            .with_inner_size(PhysicalSize::new(config.width, config.height));
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let size = window.inner_size();
        let gpu = pollster::block_on(GpuContext::new(window.clone(), size.width, size.height))
            .context("initialize GPU")?;
        let renderer = WgpuRenderer::new(&gpu.device, &gpu.queue, gpu.format(), size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&gpu.device, gpu.format(), None, 1, false);

        Ok(Graphics {
            window,
            gpu,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn redraw(&mut self) {
        let Some(gfx) = &mut self.graphics else {
            return;
        };
        let frame = self.state.step();

        let output = match gfx.gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("surface lost, reconfiguring");
                gfx.gpu.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gfx.renderer.render(&gfx.gpu.device, &gfx.gpu.queue, &view, &frame);

        let raw_input = gfx.egui_winit.take_egui_input(&gfx.window);
        let state = &mut self.state;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            ui::draw_ui(state, ctx, &frame.annotations);
        });
        gfx.egui_winit
            .handle_platform_output(&gfx.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let (width, height) = gfx.gpu.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let device = &gfx.gpu.device;
        let queue = &gfx.gpu.queue;
        for (id, image_delta) in &full_output.textures_delta.set {
            gfx.egui_renderer.update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        gfx.egui_renderer
            .update_buffers(device, queue, &mut encoder, &paint_jobs, &screen_descriptor);
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gfx.egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gfx.egui_renderer.free_texture(id);
        }

        output.present();

        let title = format!("cglab: {}", self.state.kind().title());
        if gfx.window.title() != title {
            gfx.window.set_title(&title);
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(gfx) => {
                let (width, height) = gfx.gpu.size();
                self.state.resize(width, height);
                self.graphics = Some(gfx);
            }
            Err(e) => {
                tracing::error!("failed to start: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gfx) = &mut self.graphics {
            let response = gfx.egui_winit.on_window_event(&gfx.window, &event);
            // A release over the panel still has to end a drag started outside it.
            let ends_drag = self.state.button_held() && is_left_release(&event);
            if response.consumed && !ends_drag {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gfx) = &mut self.graphics {
                    gfx.gpu.resize(new_size.width, new_size.height);
                    let (width, height) = gfx.gpu.size();
                    gfx.renderer.resize(&gfx.gpu.device, width, height);
                    self.state.resize(width, height);
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.state.set_shift(modifiers.state().shift_key());
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed, repeat);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: btn_state,
                ..
            } => {
                self.state.mouse_button(btn_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.state.cursor_left();
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.state.scroll_lines(y),
                MouseScrollDelta::PixelDelta(p) => self.state.scroll_pixels(p.y as f32),
            },
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gfx) = &self.graphics {
            gfx.window.request_redraw();
        }
    }
}

fn is_left_release(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::MouseInput {
            button: MouseButton::Left,
            state: ElementState::Released,
            ..
        }
    )
}

fn load_config(cli: &Cli) -> Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if let Some(demo) = cli.demo {
        config.demo = demo;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(&cli)?;
    tracing::info!(demo = %config.demo, "cglab-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
