//! Vertex and index data in GPU memory.

use crate::gl;
use crate::handle::Handle;

/// What a buffer's contents are read as.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Interleaved vertices.
    Vertex,

    /// `u32` vertex indices.
    Index,
}

impl Kind {
    /// The bind target, `GL_ARRAY_BUFFER` or `GL_ELEMENT_ARRAY_BUFFER`.
    pub(crate) fn target(self) -> u32 {
        match self {
            Kind::Vertex => gl::ARRAY_BUFFER,
            Kind::Index => gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// Immutable buffer object, filled once when created.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Buffer {
    handle: Handle,
    kind: Kind,
    count: usize,
}

impl Buffer {
    pub(crate) fn new(handle: Handle, kind: Kind, count: usize) -> Self {
        Buffer { handle, kind, count }
    }

    pub(crate) fn id(&self) -> u32 {
        self.handle.id()
    }

    /// Returns what the contents are read as.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the number of vertices or indices uploaded.
    pub fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::Garbage;
    use crate::queue::Queue;

    #[test]
    fn kinds_bind_to_their_targets() {
        assert_eq!(Kind::Vertex.target(), gl::ARRAY_BUFFER);
        assert_eq!(Kind::Index.target(), gl::ELEMENT_ARRAY_BUFFER);
    }

    #[test]
    fn clones_share_one_name() {
        let queue = Queue::new();
        let buffer = Buffer::new(Handle::new(Garbage::Buffer(9), queue.tx()), Kind::Index, 6);
        let clone = buffer.clone();
        drop(buffer);
        assert_eq!(queue.drain().count(), 0);
        assert_eq!((clone.id(), clone.count()), (9, 6));
        drop(clone);
        assert_eq!(queue.drain().collect::<Vec<_>>(), vec![Garbage::Buffer(9)]);
    }
}
