//! Helper macros.

/// Returns the byte offset of a field in a `#[repr(C)]` struct.
///
/// Used to describe interleaved vertex layouts.
///
/// ```rust
/// # #[macro_use] extern crate glquad;
/// #[repr(C)]
/// struct Vertex {
///     position: [f32; 3],
///     tex_coord: [f32; 2],
/// }
///
/// # fn main() {
/// assert_eq!(0, offset_of!(Vertex::position));
/// assert_eq!(12, offset_of!(Vertex::tex_coord));
/// # }
/// ```
#[macro_export]
macro_rules! offset_of {
    ($ty:ident::$field:ident) => {
        {
            let uninit = ::std::mem::MaybeUninit::<$ty>::uninit();
            let base = uninit.as_ptr();
            let field = unsafe { ::std::ptr::addr_of!((*base).$field) };
            field as usize - base as usize
        }
    };
}
