//! Shared ownership of OpenGL object names.

use std::{fmt, hash, sync};

use crate::queue;

/// An OpenGL object whose last handle was dropped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Garbage {
    Buffer(u32),
    VertexArray(u32),
    Texture(u32),
    Shader(u32),
    Program(u32),
}

impl Garbage {
    /// The OpenGL object name.
    pub(crate) fn id(self) -> u32 {
        match self {
            Garbage::Buffer(id)
            | Garbage::VertexArray(id)
            | Garbage::Texture(id)
            | Garbage::Shader(id)
            | Garbage::Program(id) => id,
        }
    }
}

struct Owner {
    name: Garbage,
    tx: queue::Sender<Garbage>,
}

impl Drop for Owner {
    fn drop(&mut self) {
        // The factory may already be gone, in which case so is the context.
        let _ = self.tx.send(self.name);
    }
}

/// Reference-counted object name.
///
/// Clones share one name. Dropping the last clone sends the name to the
/// factory, which deletes it in `collect_garbage`.
#[derive(Clone)]
pub(crate) struct Handle {
    owner: sync::Arc<Owner>,
}

impl Handle {
    pub(crate) fn new(name: Garbage, tx: queue::Sender<Garbage>) -> Self {
        Handle {
            owner: sync::Arc::new(Owner { name, tx }),
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.owner.name.id()
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.owner.name == other.owner.name
    }
}

impl Eq for Handle {}

impl hash::Hash for Handle {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.owner.name, state);
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.owner.name, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_clone_sends_the_name() {
        let queue = queue::Queue::new();
        let handle = Handle::new(Garbage::Texture(4), queue.tx());
        let clone = handle.clone();
        drop(handle);
        assert_eq!(queue.drain().count(), 0);
        assert_eq!(clone.id(), 4);
        drop(clone);
        assert_eq!(queue.drain().collect::<Vec<_>>(), vec![Garbage::Texture(4)]);
    }

    #[test]
    fn handles_compare_by_kind_and_name() {
        let queue = queue::Queue::new();
        let a = Handle::new(Garbage::Buffer(1), queue.tx());
        let b = Handle::new(Garbage::Buffer(1), queue.tx());
        let c = Handle::new(Garbage::VertexArray(1), queue.tx());
        assert_eq!(a, b);
        assert!(a != c);
        assert_eq!(format!("{:?}", c), "VertexArray(1)");
    }
}
