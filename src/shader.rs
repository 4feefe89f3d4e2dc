//! GLSL shader objects.

use std::fmt;

use crate::gl;
use crate::handle::Handle;

/// GLSL source code, NUL terminated.
pub type Source = std::ffi::CStr;

/// The pipeline stage a shader object runs in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Corresponds to `GL_VERTEX_SHADER`.
    Vertex,

    /// Corresponds to `GL_FRAGMENT_SHADER`.
    Fragment,
}

impl Kind {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Kind::Vertex => gl::VERTEX_SHADER,
            Kind::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Kind::Vertex => "vertex",
            Kind::Fragment => "fragment",
        })
    }
}

/// A compiled shader object, ready to be linked into a program.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Object {
    handle: Handle,
}

impl Object {
    pub(crate) fn new(handle: Handle) -> Self {
        Object { handle }
    }

    pub(crate) fn id(&self) -> u32 {
        self.handle.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_name_their_stage() {
        assert_eq!(Kind::Vertex.as_gl_enum(), gl::VERTEX_SHADER);
        assert_eq!(Kind::Fragment.as_gl_enum(), gl::FRAGMENT_SHADER);
        assert_eq!(Kind::Fragment.to_string(), "fragment");
    }
}
