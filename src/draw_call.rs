//! Draw call commands.

/// Draws a triangle list starting at the first vertex or index.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DrawCall {
    /// `glDrawArrays` over this many vertices.
    Arrays(usize),

    /// `glDrawElements` over this many `u32` indices.
    Elements(usize),
}
