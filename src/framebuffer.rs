//! The window's default framebuffer.

/// Linear RGBA color.
pub type Color = [f32; 4];

/// Opaque black.
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// Framebuffer 0, sized to the window's drawable area.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
}

impl Framebuffer {
    pub(crate) fn implicit(width: u32, height: u32) -> Self {
        Framebuffer { width, height }
    }

    /// Returns the `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Records a new size, e.g. after the window was resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_resizes() {
        let mut framebuffer = Framebuffer::implicit(1280, 720);
        assert_eq!(framebuffer.dimensions(), (1280, 720));
        framebuffer.resize(640, 480);
        assert_eq!(framebuffer.dimensions(), (640, 480));
    }
}
