//! GLSL programs.

use std::ffi;

use crate::error::Error;
use crate::handle::Handle;
use crate::texture::Texture2;
use crate::util;

/// The number of vertex attribute slots a program may bind.
pub const MAX_ATTRIBUTES: usize = 8;

/// The number of texture units a program may sample from.
pub const MAX_SAMPLERS: usize = 4;

/// Names in a program's interface, each a NUL-terminated byte string such
/// as `b"aPos\0"`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Bindings {
    /// Vertex inputs; input `i` is bound to location `i` before linking
    /// and must be active afterwards.
    pub attributes: [Option<&'static [u8]>; MAX_ATTRIBUTES],

    /// Fragment output bound to color number 0 before linking.
    pub fragment_output: Option<&'static [u8]>,

    /// `sampler2D` uniforms; sampler `i` reads texture unit `i`.
    pub samplers: [Option<&'static [u8]>; MAX_SAMPLERS],
}

/// Casts a binding name into a C string.
pub(crate) fn binding_name(name: &'static [u8]) -> Result<&'static ffi::CStr, Error> {
    util::cstr(name).ok_or_else(|| Error::InvalidName(String::from_utf8_lossy(name).into_owned()))
}

/// Checks a linked program against `bindings`.
///
/// The lookups return the raw location of an attribute or uniform, `-1`
/// when it is not active. Returns the sampler uniform locations.
pub(crate) fn resolve<A, U>(
    bindings: &Bindings,
    mut attrib_location: A,
    mut uniform_location: U,
) -> Result<[Option<i32>; MAX_SAMPLERS], Error>
    where A: FnMut(&ffi::CStr) -> i32,
          U: FnMut(&ffi::CStr) -> i32,
{
    for (index, name) in bindings.attributes.iter().enumerate() {
        if let Some(name) = *name {
            let name = binding_name(name)?;
            match attrib_location(name) {
                location if location < 0 => {
                    return Err(Error::MissingAttribute(name.to_string_lossy().into_owned()));
                }
                location if location as usize == index => {}
                location => warn!("attribute {:?} bound to {} but linked at {}", name, index, location),
            }
        }
    }
    let mut samplers = [None; MAX_SAMPLERS];
    for (slot, name) in samplers.iter_mut().zip(bindings.samplers.iter()) {
        if let Some(name) = *name {
            let name = binding_name(name)?;
            match uniform_location(name) {
                location if location < 0 => {
                    return Err(Error::MissingUniform(name.to_string_lossy().into_owned()));
                }
                location => *slot = Some(location),
            }
        }
    }
    Ok(samplers)
}

/// A linked program with its sampler uniforms resolved.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Program {
    handle: Handle,
    samplers: [Option<i32>; MAX_SAMPLERS],
}

impl Program {
    pub(crate) fn new(handle: Handle, samplers: [Option<i32>; MAX_SAMPLERS]) -> Self {
        Program { handle, samplers }
    }

    pub(crate) fn id(&self) -> u32 {
        self.handle.id()
    }

    /// Returns the uniform location of sampler `binding`.
    pub fn sampler_location(&self, binding: usize) -> Option<i32> {
        self.samplers.get(binding).and_then(|x| *x)
    }
}

/// A program plus the textures bound for one draw.
#[derive(Clone, Debug)]
pub struct Invocation<'a> {
    /// The program to bind at draw time.
    pub program: &'a Program,

    /// Texture `i` is bound to texture unit `i`.
    pub textures: [Option<&'a Texture2>; MAX_SAMPLERS],
}

impl<'a> Invocation<'a> {
    /// An invocation with no textures bound.
    pub fn new(program: &'a Program) -> Self {
        Invocation {
            program,
            textures: [None; MAX_SAMPLERS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> Bindings {
        let mut bindings = Bindings::default();
        bindings.attributes[0] = Some(&b"aPos\0"[..]);
        bindings.attributes[2] = Some(&b"aTexCoord\0"[..]);
        bindings.samplers[0] = Some(&b"ourTexture\0"[..]);
        bindings
    }

    fn lookup(table: &'static [(&'static str, i32)]) -> impl FnMut(&ffi::CStr) -> i32 {
        move |name| {
            let name = name.to_str().unwrap();
            table.iter().find(|(n, _)| *n == name).map_or(-1, |&(_, location)| location)
        }
    }

    #[test]
    fn resolves_sampler_locations() {
        let samplers = resolve(
            &bindings(),
            lookup(&[("aPos", 0), ("aTexCoord", 2)]),
            lookup(&[("ourTexture", 5)]),
        ).unwrap();
        assert_eq!(samplers, [Some(5), None, None, None]);
    }

    #[test]
    fn inactive_attribute_is_an_error() {
        let result = resolve(
            &bindings(),
            lookup(&[("aPos", 0)]),
            lookup(&[("ourTexture", 5)]),
        );
        match result {
            Err(Error::MissingAttribute(name)) => assert_eq!(name, "aTexCoord"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn moved_attribute_is_accepted() {
        let samplers = resolve(
            &bindings(),
            lookup(&[("aPos", 1), ("aTexCoord", 2)]),
            lookup(&[("ourTexture", 0)]),
        ).unwrap();
        assert_eq!(samplers[0], Some(0));
    }

    #[test]
    fn inactive_sampler_is_an_error() {
        let result = resolve(&bindings(), lookup(&[("aPos", 0), ("aTexCoord", 2)]), lookup(&[]));
        match result {
            Err(Error::MissingUniform(name)) => assert_eq!(name, "ourTexture"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn binding_names_must_be_nul_terminated() {
        assert_eq!(binding_name(b"outColor\0").unwrap().to_bytes(), b"outColor");
        match binding_name(b"outColor") {
            Err(Error::InvalidName(name)) => assert_eq!(name, "outColor"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn sampler_location_out_of_range_is_none() {
        let queue = crate::queue::Queue::new();
        let handle = Handle::new(crate::handle::Garbage::Program(3), queue.tx());
        let program = Program::new(handle, [None, Some(5), None, None]);
        assert_eq!(program.sampler_location(0), None);
        assert_eq!(program.sampler_location(1), Some(5));
        assert_eq!(program.sampler_location(MAX_SAMPLERS), None);
    }
}
