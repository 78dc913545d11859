//! Interactive Periodic Table with 3D Bohr Atom Viewer
//!
//! Browse all 118 elements on a periodic table, then inspect any of them as
//! an animated Bohr-model atom: a seeded nucleon cluster surrounded by
//! electrons on tilted orbits.
//!
//! Controls:
//! - Left/Right: previous/next element (table view)
//! - Click: select element
//! - A: atom view for the selected element
//! - T: back to the table
//! - Arrow keys / mouse drag: rotate camera (atom view)
//! - +/- or scroll: zoom
//! - Space: pause the animation
//! - Esc: quit

mod elements;
mod nucleus;
mod overlay;
mod renderer;
mod session;
mod shells;
mod table;

use common::{GraphicsContext, OrbitCamera};
use renderer::Renderer;
use session::{ViewMode, ViewSession};
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

/// Animation clock rate; electron speeds are expressed per tick at this rate.
const TICK_RATE: f32 = 60.0;

/// Camera rotation per arrow-key press, degrees.
const KEY_ORBIT_STEP: f32 = 3.0;

/// Camera rotation per dragged pixel, degrees.
const DRAG_ORBIT_STEP: f32 = 0.25;

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    session: ViewSession,
    camera: OrbitCamera,
    egui: EguiState,

    tick_accum: f32,
    cursor_pos: (f64, f64),
    dragging: bool,
    last_drag_pos: Option<(f64, f64)>,
    should_quit: bool,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let renderer = Renderer::new(&ctx);
        let camera = OrbitCamera::new(ctx.aspect_ratio());
        let session = ViewSession::new();

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            session,
            camera,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
            tick_accum: 0.0,
            cursor_pos: (0.0, 0.0),
            dragging: false,
            last_drag_pos: None,
            should_quit: false,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
        self.renderer
            .resize(&self.ctx.device, new_size.width, new_size.height);
    }

    /// Run the fixed-rate animation clock over the elapsed frame time.
    fn update(&mut self, dt: f32) {
        self.tick_accum += dt;
        let tick_interval = 1.0 / TICK_RATE;
        while self.tick_accum >= tick_interval {
            self.session.tick();
            self.tick_accum -= tick_interval;
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let frame = self.renderer.prepare(&self.ctx.queue, &self.session, &self.camera);

        // Build the egui overlay
        let cells = table::table_layout(&elements::ELEMENTS);
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            overlay::draw_overlay(ctx, &self.session, &cells);
        });

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, &frame);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Escape => self.should_quit = true,
            KeyCode::Space => self.session.toggle_pause(),
            KeyCode::Equal | KeyCode::NumpadAdd => self.camera.zoom(1.0),
            KeyCode::Minus | KeyCode::NumpadSubtract => self.camera.zoom(-1.0),
            KeyCode::KeyT => self.session.enter_table_view(),
            KeyCode::KeyA => self.session.enter_atom_view(),
            KeyCode::ArrowLeft => match self.session.mode {
                ViewMode::Table => self.session.navigate(-1),
                ViewMode::Atom => self.camera.orbit(-KEY_ORBIT_STEP, 0.0),
            },
            KeyCode::ArrowRight => match self.session.mode {
                ViewMode::Table => self.session.navigate(1),
                ViewMode::Atom => self.camera.orbit(KEY_ORBIT_STEP, 0.0),
            },
            KeyCode::ArrowUp => {
                if self.session.mode == ViewMode::Atom {
                    self.camera.orbit(0.0, KEY_ORBIT_STEP);
                }
            }
            KeyCode::ArrowDown => {
                if self.session.mode == ViewMode::Atom {
                    self.camera.orbit(0.0, -KEY_ORBIT_STEP);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse_button(&mut self, state: ElementState) {
        match (state, self.session.mode) {
            (ElementState::Pressed, ViewMode::Table) => {
                // Window coordinates -> the table's 0..100 space (y up)
                let fx = self.cursor_pos.0 as f32 * 100.0 / self.ctx.size.width as f32;
                let fy = (self.ctx.size.height as f32 - self.cursor_pos.1 as f32) * 100.0
                    / self.ctx.size.height as f32;

                let cells = table::table_layout(&elements::ELEMENTS);
                if let Some(index) = table::hit_test(&cells, fx, fy) {
                    self.session.select(index);
                }
            }
            (ElementState::Pressed, ViewMode::Atom) => {
                self.dragging = true;
            }
            (ElementState::Released, _) => {
                self.dragging = false;
                self.last_drag_pos = None;
            }
        }
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        self.cursor_pos = (x, y);
        if self.dragging && self.session.mode == ViewMode::Atom {
            if let Some((last_x, last_y)) = self.last_drag_pos {
                let dx = (x - last_x) as f32 * DRAG_ORBIT_STEP;
                let dy = (y - last_y) as f32 * DRAG_ORBIT_STEP;
                self.camera.orbit(dx, dy);
            }
            self.last_drag_pos = Some((x, y));
        }
    }

    fn handle_scroll(&mut self, delta: f32) {
        if self.session.mode == ViewMode::Atom {
            self.camera.zoom(delta * 2.0);
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui
            .state
            .on_window_event(&self.ctx.window, event)
            .consumed
    }
}

fn main() {
    println!("Interactive Periodic Table + 3D Bohr Atom Viewer");
    println!();
    println!("Controls:");
    println!("  Left/Right - Previous/next element (table view)");
    println!("  Click      - Select element");
    println!("  A          - Atom view of the selected element");
    println!("  T          - Back to the periodic table");
    println!("  Arrows     - Rotate camera (atom view)");
    println!("  Drag       - Orbit camera (atom view)");
    println!("  +/-        - Zoom");
    println!("  Space      - Pause animation");
    println!("  Esc        - Quit");
    println!();

    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Interactive 3D Atom + Full Periodic Table",
        1100,
        720,
    ));

    let mut app = App::new(ctx);
    let mut last_time = std::time::Instant::now();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    if !consumed {
                        match event {
                            WindowEvent::CloseRequested => elwt.exit(),
                            WindowEvent::Resized(size) => app.resize(*size),
                            WindowEvent::MouseInput {
                                state,
                                button: MouseButton::Left,
                                ..
                            } => app.handle_mouse_button(*state),
                            WindowEvent::CursorMoved { position, .. } => {
                                app.handle_mouse_move(position.x, position.y);
                            }
                            WindowEvent::KeyboardInput {
                                event:
                                    KeyEvent {
                                        physical_key: PhysicalKey::Code(key),
                                        state,
                                        ..
                                    },
                                ..
                            } => app.handle_key(*key, *state),
                            WindowEvent::MouseWheel { delta, .. } => {
                                let scroll = match delta {
                                    MouseScrollDelta::LineDelta(_, y) => *y,
                                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                                };
                                app.handle_scroll(scroll);
                            }
                            WindowEvent::RedrawRequested => {
                                let now = std::time::Instant::now();
                                let dt = (now - last_time).as_secs_f32().min(0.1);
                                last_time = now;

                                app.update(dt);
                                match app.render() {
                                    Ok(_) => {}
                                    Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                    Err(e) => eprintln!("Render error: {:?}", e),
                                }
                            }
                            _ => {}
                        }
                    }

                    if app.should_quit {
                        elwt.exit();
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
