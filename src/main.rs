use armviz::arm::{Arm, INDUSTRIAL_RANGES};
use armviz::render::{Camera, CameraController, GpuContext, SceneRenderer};
use armviz::ui::{joint_panel, JointControls};
use glam::Vec3;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

struct App<'a> {
    egui_renderer: Option<egui_wgpu::Renderer>,
    egui_state: Option<egui_winit::State>,
    renderer: Option<SceneRenderer>,
    context: Option<GpuContext<'a>>,
    window: Option<Arc<Window>>,
    arm: Arm,
    controls: JointControls,
    camera: Camera,
    controller: CameraController,
    show_axes: bool,
    gui_hovered: bool,
}

impl App<'_> {
    fn new() -> Self {
        let arm = Arm::industrial();
        let controls = JointControls::new(INDUSTRIAL_RANGES);
        let camera = Camera::default();
        let controller = CameraController::new(Vec3::new(0.0, 1.5, 0.0), 6.0);

        Self {
            egui_renderer: None,
            egui_state: None,
            renderer: None,
            context: None,
            window: None,
            arm,
            controls,
            camera,
            controller,
            show_axes: false,
            gui_hovered: false,
        }
    }

    fn update(&mut self) {
        self.controller.update(&mut self.camera);
    }

    fn render(&mut self) {
        if self.window.is_none()
            || self.context.is_none()
            || self.renderer.is_none()
            || self.egui_state.is_none()
            || self.egui_renderer.is_none()
        {
            return;
        }

        let window = self.window.as_ref().unwrap().clone();
        let context = self.context.as_ref().unwrap();

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return;
            }
            Err(e) => {
                log::error!("Surface error: {e:?}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let egui_state = self.egui_state.as_mut().unwrap();
        let raw_input = egui_state.take_egui_input(&window);
        let egui_ctx = egui_state.egui_ctx().clone();

        let full_output = egui_ctx.run(raw_input, |ctx| {
            joint_panel(ctx, &mut self.controls, &mut self.show_axes);
        });

        self.gui_hovered = egui_ctx.is_pointer_over_area();

        // The panel is the only angle mutation source; apply its validated
        // values before drawing so this frame shows the committed pose.
        self.arm.set_angles_deg(self.controls.angles());

        let egui_state = self.egui_state.as_mut().unwrap();
        egui_state.handle_platform_output(&window, full_output.platform_output);
        let clipped_primitives =
            egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let context = self.context.as_ref().unwrap();
        let egui_renderer = self.egui_renderer.as_mut().unwrap();

        for (id, delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.config.width, context.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let renderer = self.renderer.as_ref().unwrap();
        renderer.render(context, &view, &self.arm, &self.camera, self.show_axes);

        self.render_egui(
            &view,
            clipped_primitives,
            screen_descriptor,
            full_output.textures_delta.free,
        );

        output.present();
    }

    fn render_egui(
        &mut self,
        view: &wgpu::TextureView,
        clipped_primitives: Vec<egui::ClippedPrimitive>,
        screen_descriptor: egui_wgpu::ScreenDescriptor,
        textures_to_free: Vec<egui::TextureId>,
    ) {
        let context = self.context.as_ref().unwrap();
        let mut egui_renderer = self.egui_renderer.take().unwrap();

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Egui Encoder"),
            });

        egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            &mut encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
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

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        }

        context.queue.submit(std::iter::once(encoder.finish()));

        for id in &textures_to_free {
            egui_renderer.free_texture(id);
        }

        self.egui_renderer = Some(egui_renderer);
    }
}

impl ApplicationHandler for App<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("6-Axis Arm Viewer")
                .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

            let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
            self.window = Some(window.clone());

            let context = match pollster::block_on(GpuContext::new(window.clone())) {
                Ok(context) => context,
                Err(e) => {
                    log::error!("Failed to initialize GPU context: {e}");
                    event_loop.exit();
                    return;
                }
            };
            self.camera.set_aspect(context.aspect_ratio());

            let renderer = SceneRenderer::new(&context);

            let egui_ctx = egui::Context::default();
            let egui_state = egui_winit::State::new(
                egui_ctx,
                egui::ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );

            let egui_renderer =
                egui_wgpu::Renderer::new(&context.device, context.config.format, None, 1, false);

            self.context = Some(context);
            self.renderer = Some(renderer);
            self.egui_state = Some(egui_state);
            self.egui_renderer = Some(egui_renderer);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(egui_state) = &mut self.egui_state {
            if let Some(window) = &self.window {
                let response = egui_state.on_window_event(window, &event);
                if response.consumed {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.context {
                    context.resize(size);
                    self.camera.set_aspect(context.aspect_ratio());
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        match code {
                            KeyCode::Escape => event_loop.exit(),
                            KeyCode::KeyR => self.controller.reset(),
                            _ => {}
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if !self.gui_hovered {
                    let pressed = state == ElementState::Pressed;
                    match button {
                        MouseButton::Left => self.controller.on_mouse_button(0, pressed),
                        MouseButton::Right => self.controller.on_mouse_button(1, pressed),
                        MouseButton::Middle => self.controller.on_mouse_button(2, pressed),
                        _ => {}
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.controller
                    .on_mouse_move(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if !self.gui_hovered {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                    };
                    self.controller.on_scroll(scroll);
                }
            }

            WindowEvent::PinchGesture { delta, .. } => {
                if !self.gui_hovered {
                    self.controller.on_scroll(delta as f32 * 10.0);
                }
            }

            WindowEvent::RedrawRequested => {
                self.update();
                self.render();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).unwrap();
}
