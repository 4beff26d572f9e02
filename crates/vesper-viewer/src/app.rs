//! Viewer application implementing winit ApplicationHandler
//!
//! Hosts one backdrop behind a simulated scrollable page: the frame buffer
//! spans the full content height and the window shows the slice at the
//! current scroll offset.

use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use vesper_field::{BackdropConfig, FieldKind};
use vesper_render::{Backdrop, Theme};
use vesper_runtime::{PointerTracker, Scheduler};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Wheel line-to-pixel conversion
const LINE_SCROLL_PX: f32 = 40.0;

pub struct ViewerApp {
    backdrop: Backdrop,
    scheduler: Scheduler,
    pointer: PointerTracker,

    /// Content height as a multiple of the viewport height (>= 1)
    page_factor: f32,
    fullscreen: bool,

    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
}

impl ViewerApp {
    pub fn new(
        kind: FieldKind,
        theme: Theme,
        config: BackdropConfig,
        page_factor: f32,
        fullscreen: bool,
    ) -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0x5EED);
        Self {
            backdrop: Backdrop::new(kind, theme, config, seed),
            scheduler: Scheduler::new(),
            pointer: PointerTracker::new(),
            page_factor: page_factor.max(1.0),
            fullscreen,
            window: None,
            pixels: None,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title("Vesper Viewer")
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                eprintln!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        if self.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        let size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(size.width.max(1), size.height.max(1), window.clone());
        match Pixels::new(size.width.max(1), size.height.max(1), surface_texture) {
            Ok(pixels) => self.pixels = Some(pixels),
            Err(e) => {
                eprintln!("Failed to create framebuffer: {e}");
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.apply_size(size);

        if !self
            .backdrop
            .palette()
            .field_enabled(self.backdrop.kind())
        {
            println!(
                "[viewer] {:?} field is disabled under this theme; staying idle",
                self.backdrop.kind()
            );
            return;
        }

        // A pre-mount (zero-size) surface makes this a silent no-op; the
        // next real resize attaches and the loop starts then.
        self.scheduler.start(&self.backdrop);
    }

    fn apply_size(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        if let Some(pixels) = &mut self.pixels {
            if let Err(e) = pixels.resize_surface(size.width, size.height) {
                eprintln!("Surface resize error: {e}");
            }
            if let Err(e) = pixels.resize_buffer(size.width, size.height) {
                eprintln!("Buffer resize error: {e}");
            }
        }
        let content_height = (size.height as f32 * self.page_factor) as u32;
        self.backdrop.resize(size.width, content_height);
        // Keep the scroll offset inside the new scrollable range
        self.pointer.scroll_by(0.0, self.max_scroll());
    }

    fn max_scroll(&self) -> f32 {
        let content = self.backdrop.surface().height as f32;
        let viewport = self
            .window
            .as_ref()
            .map_or(0.0, |w| w.inner_size().height as f32);
        (content - viewport).max(0.0)
    }

    fn redraw(&mut self) {
        self.scheduler
            .tick(&mut self.backdrop, self.pointer.surface_position());

        let Some(window) = &self.window else {
            return;
        };
        let Some(pixels) = &mut self.pixels else {
            return;
        };

        let viewport_height = window.inner_size().height;
        let scroll = self.pointer.scroll_offset().round() as u32;
        self.backdrop
            .frame()
            .copy_visible_rows(pixels.frame_mut(), viewport_height, scroll);

        if let Err(e) = pixels.render() {
            eprintln!("Render error: {e}");
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.scheduler.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                self.apply_size(new_size);
                // If the first real size arrived after a pre-mount start
                // attempt, start now; refused when already running.
                if self
                    .backdrop
                    .palette()
                    .field_enabled(self.backdrop.kind())
                {
                    self.scheduler.start(&self.backdrop);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        self.scheduler.stop();
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.set_viewport_position(position);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_SCROLL_PX,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                self.pointer.scroll_by(dy, self.max_scroll());
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
