//! Aurora surface demo
//!
//! Opens a window, drives a software SurfaceRenderTarget from the window's
//! resize events, renders a gradient each frame, and blits the target's
//! layer to the screen with softbuffer. This plays the role of a windowing
//! backend: resize on window changes, present through set_sw_frame, and
//! composite whatever the layer holds.

use std::num::NonZeroU32;
use std::sync::Arc;

use aurora_surface::aurora::target::{RenderTarget, SurfaceRenderTarget, SurfaceTargetConfig};
use aurora_surface::aurora::{Framebuffer, PixelFormat, PixelSize, ScaleFactor};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

struct DemoWindow {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    target: SurfaceRenderTarget,
    frame_count: u64,
}

#[derive(Default)]
struct DemoApp {
    state: Option<DemoWindow>,
}

impl DemoApp {
    fn device_size(window: &Window) -> PixelSize {
        let size = window.inner_size();
        PixelSize::new(size.width, size.height)
    }

    fn resize_target(state: &mut DemoWindow) {
        let size = Self::device_size(&state.window);
        if size.is_empty() {
            return;
        }
        let scale = ScaleFactor::new(state.window.scale_factor() as f32)
            .unwrap_or(ScaleFactor::IDENTITY);
        if let Err(err) = state.target.resize(size, scale) {
            eprintln!("resize failed: {}", err);
        }
    }

    /// Render a moving gradient into a caller-owned RGBA frame
    fn render_frame(size: PixelSize, tick: u64) -> Vec<u8> {
        let mut data = vec![0u8; (size.width * size.height * 4) as usize];
        for y in 0..size.height {
            for x in 0..size.width {
                let i = ((y * size.width + x) * 4) as usize;
                data[i] = ((x + tick as u32) % 256) as u8;
                data[i + 1] = (y % 256) as u8;
                data[i + 2] = 0x80;
                data[i + 3] = 0xFF;
            }
        }
        data
    }

    fn redraw(state: &mut DemoWindow) {
        let size = state.target.layer().size();
        if size.is_empty() {
            return;
        }

        // Render path: produce a frame and present it through the target.
        let frame = Self::render_frame(size, state.frame_count);
        let fb = Framebuffer::packed(&frame, size, PixelFormat::R8G8B8A8_UNORM);
        if let Err(err) = state.target.set_sw_frame(&fb) {
            eprintln!("present failed: {}", err);
            return;
        }
        state.frame_count += 1;

        // Compositor path: read the layer back and blit it to the window.
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        if state.surface.resize(width, height).is_err() {
            return;
        }
        let Ok(mut buffer) = state.surface.buffer_mut() else {
            return;
        };

        let contents = state.target.layer().contents();
        for y in 0..size.height {
            let row = contents.row_bytes(y);
            for x in 0..size.width {
                let px = &row[(x * 4) as usize..(x * 4 + 4) as usize];
                // softbuffer expects 0x00RRGGBB
                buffer[(y * size.width + x) as usize] =
                    ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
            }
        }
        if let Err(err) = buffer.present() {
            eprintln!("blit failed: {}", err);
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Aurora Surface Demo")
            .with_inner_size(LogicalSize::new(800, 600));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );

        let context = softbuffer::Context::new(Arc::clone(&window))
            .expect("Failed to create softbuffer context");
        let surface = softbuffer::Surface::new(&context, Arc::clone(&window))
            .expect("Failed to create softbuffer surface");

        let target = SurfaceRenderTarget::new(None, SurfaceTargetConfig::default());

        let mut state = DemoWindow {
            window,
            surface,
            target,
            frame_count: 0,
        };
        Self::resize_target(&mut state);
        self.state = Some(state);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                Self::resize_target(state);
                state.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                Self::redraw(state);
                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = DemoApp::default();
    event_loop.run_app(&mut app).expect("Event loop error");
}
