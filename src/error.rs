//! Error type.

use thiserror::Error;

use crate::shader;

/// Everything that can go wrong while setting up or rendering a frame.
#[derive(Debug, Error)]
pub enum Error {
    /// The window or its OpenGL context could not be created.
    #[error("failed to create window: {0}")]
    Creation(#[from] glutin::CreationError),

    /// The OpenGL context could not be made current or presented.
    #[error("OpenGL context error: {0}")]
    Context(#[from] glutin::ContextError),

    /// The driver does not provide the requested API version.
    #[error("OpenGL {required_major}.{required_minor} is not available (found {major}.{minor})")]
    UnsupportedVersion {
        major: i32,
        minor: i32,
        required_major: i32,
        required_minor: i32,
    },

    /// A shader object failed to compile.
    #[error("{kind} shader compilation failed:\n{log}")]
    Compile {
        kind: shader::Kind,
        log: String,
    },

    /// A program failed to link.
    #[error("program linking failed:\n{log}")]
    Link {
        log: String,
    },

    /// A vertex attribute bound before linking is not active in the program.
    #[error("vertex attribute `{0}` is not active in the program")]
    MissingAttribute(String),

    /// A required uniform is not active in the program.
    #[error("uniform `{0}` is not active in the program")]
    MissingUniform(String),

    /// A binding name was not a NUL-terminated byte string.
    #[error("binding name {0:?} is not NUL terminated")]
    InvalidName(String),

    /// The texture image could not be read or decoded.
    #[error("failed to load image `{path}`: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
}
