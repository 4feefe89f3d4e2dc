//! Window and OpenGL context creation.

use glutin::dpi::{LogicalSize, PhysicalSize};
use glutin::event_loop::EventLoop;
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};

use crate::config::Config;
use crate::error::Error;
use crate::Context;

/// The context version requested from the platform.
pub const GL_REQUEST: GlRequest = GlRequest::Specific(Api::OpenGl, (3, 3));

/// A window with a current OpenGL context.
pub struct Window {
    context: WindowedContext<PossiblyCurrent>,
}

/// Opens a window and makes its OpenGL 3.3 core context current.
pub fn create(config: &Config) -> Result<(EventLoop<()>, Window), Error> {
    let event_loop = EventLoop::new();
    let window_builder = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height));
    let context = ContextBuilder::new()
        .with_gl(GL_REQUEST)
        .with_gl_profile(GlProfile::Core)
        .with_multisampling(config.samples)
        .with_vsync(config.vsync)
        .build_windowed(window_builder, &event_loop)?;
    let context = unsafe { context.make_current() }.map_err(|(_, err)| err)?;
    debug!("created {}x{} window", config.width, config.height);
    Ok((event_loop, Window { context }))
}

impl Window {
    /// Presents the back buffer; blocks on vsync when enabled.
    pub fn swap_buffers(&self) -> Result<(), Error> {
        self.context.swap_buffers()?;
        Ok(())
    }

    /// Resizes the drawable after the window changed size.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        self.context.resize(size);
    }

    /// Replaces the window title.
    pub fn set_title(&self, title: &str) {
        self.context.window().set_title(title);
    }
}

impl Context for Window {
    fn query_proc_address(&self, symbol: &str) -> *const () {
        self.context.get_proc_address(symbol) as *const ()
    }

    fn dimensions(&self) -> (u32, u32) {
        let size = self.context.window().inner_size();
        (size.width, size.height)
    }
}
