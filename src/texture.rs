//! 2D textures.

use crate::handle::Handle;

/// An `RGB8` texture sampled with linear filtering and clamped
/// co-ordinates.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Texture2 {
    handle: Handle,
}

impl Texture2 {
    pub(crate) fn new(handle: Handle) -> Self {
        Texture2 { handle }
    }

    pub(crate) fn id(&self) -> u32 {
        self.handle.id()
    }
}
