//! Vertex array objects.

use crate::buffer::Buffer;
use crate::handle::Handle;

/// A vector of `f32` components inside an interleaved vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Attribute {
    /// Vertex shader input location.
    pub location: u32,

    /// Number of components, 1 to 4.
    pub components: u8,

    /// Byte offset from the start of the vertex.
    pub offset: usize,
}

/// Records where each vertex shader input reads from.
///
/// Keeps its buffers alive for as long as it exists.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct VertexArray {
    handle: Handle,
    _vertices: Buffer,
    indices: Option<Buffer>,
}

impl VertexArray {
    pub(crate) fn new(handle: Handle, vertices: Buffer, indices: Option<Buffer>) -> Self {
        VertexArray {
            handle,
            _vertices: vertices,
            indices,
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.handle.id()
    }

    /// Returns the element array buffer, if any.
    pub fn indices(&self) -> Option<&Buffer> {
        self.indices.as_ref()
    }
}
