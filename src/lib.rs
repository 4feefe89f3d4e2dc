//! Draws a textured quad or triangle with OpenGL 3.3.
//!
//! The library wraps the handful of OpenGL calls the `quad`, `triangle`
//! and `fps` programs need: window creation, shader compilation, vertex
//! upload, texture upload and a blocking render loop.

extern crate crossbeam_channel;
extern crate glutin;
extern crate image;
#[macro_use] extern crate log;
extern crate thiserror;

#[macro_use]
mod macros;

mod factory;
mod handle;
mod queue;
mod util;
pub mod gl;

pub mod app;
pub mod buffer;
pub mod config;
pub mod draw_call;
pub mod error;
pub mod fps;
pub mod framebuffer;
pub mod pixels;
pub mod program;
pub mod scene;
pub mod shader;
pub mod texture;
pub mod vertex_array;
pub mod window;

/// The minimum OpenGL version the programs run on.
pub const GL_VERSION: (i32, i32) = (3, 3);

/// Provides access to an OpenGL context.
pub trait Context {
    /// Returns the address of an OpenGL function.
    fn query_proc_address(&self, symbol: &str) -> *const ();

    /// Returns the `(width, height)` of the default framebuffer in pixels.
    fn dimensions(&self) -> (u32, u32);
}

/// Initialize the library, creating a default framebuffer to render to and
/// a factory to instantiate library objects.
///
/// The context must be current. Fails if it does not provide at least
/// [`GL_VERSION`].
///
/// [`GL_VERSION`]: constant.GL_VERSION.html
pub fn init<C: Context>(context: &C) -> Result<(Framebuffer, Factory), Error> {
    let factory = Factory::new(|symbol| context.query_proc_address(symbol));
    factory.require_version(GL_VERSION)?;
    let (width, height) = context.dimensions();
    let framebuffer = Framebuffer::implicit(width, height);
    Ok((framebuffer, factory))
}

#[doc(inline)]
pub use buffer::Buffer;

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use draw_call::DrawCall;

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use factory::{Factory, Info};

#[doc(inline)]
pub use framebuffer::Framebuffer;

#[doc(inline)]
pub use program::{Invocation, Program};

#[doc(inline)]
pub use texture::Texture2;

#[doc(inline)]
pub use vertex_array::VertexArray;
