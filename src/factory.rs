//! Factory.

use std::mem;

use crate::buffer;
use crate::gl;
use crate::program;
use crate::shader;

use crate::draw_call::DrawCall;
use crate::error::Error;
use crate::framebuffer::{Color, Framebuffer};
use crate::handle::{Garbage, Handle};
use crate::pixels::Pixels;
use crate::program::{Bindings, Invocation};
use crate::queue::Queue;
use crate::vertex_array::Attribute;
use crate::{Buffer, Program, Texture2, VertexArray};

/// Driver identification strings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Info {
    /// `GL_VERSION`.
    pub version: String,

    /// `GL_SHADING_LANGUAGE_VERSION`.
    pub shading_language_version: String,

    /// `GL_VENDOR`.
    pub vendor: String,

    /// `GL_RENDERER`.
    pub renderer: String,
}

impl Info {
    /// Logs every string at `info` level.
    pub fn log(&self) {
        info!("OpenGL version: {}", self.version);
        info!("GLSL version: {}", self.shading_language_version);
        info!("Vendor: {}", self.vendor);
        info!("Renderer: {}", self.renderer);
    }
}

/// OpenGL memory manager.
#[derive(Clone)]
pub struct Factory {
    /// Function pointers to the OpenGL backend.
    backend: gl::Backend,

    /// Names of dropped objects, deleted by `collect_garbage`.
    garbage: Queue<Garbage>,
}

impl Factory {
    /// Constructor.
    pub fn new<F>(query_proc_address: F) -> Self
        where F: FnMut(&str) -> *const ()
    {
        Factory {
            backend: gl::Backend::load(query_proc_address),
            garbage: Queue::new(),
        }
    }

    fn handle(&self, name: Garbage) -> Handle {
        Handle::new(name, self.garbage.tx())
    }

    /// Returns the `(major, minor)` version of the current context.
    pub fn version(&self) -> (i32, i32) {
        let major = self.backend.get_integer(gl::MAJOR_VERSION);
        let minor = self.backend.get_integer(gl::MINOR_VERSION);
        (major, minor)
    }

    /// Fails unless the context provides at least the given version.
    pub fn require_version(&self, required: (i32, i32)) -> Result<(), Error> {
        let (major, minor) = self.version();
        if (major, minor) < required {
            return Err(Error::UnsupportedVersion {
                major,
                minor,
                required_major: required.0,
                required_minor: required.1,
            });
        }
        Ok(())
    }

    /// Queries the driver identification strings.
    pub fn info(&self) -> Info {
        Info {
            version: self.backend.get_string(gl::VERSION),
            shading_language_version: self.backend.get_string(gl::SHADING_LANGUAGE_VERSION),
            vendor: self.backend.get_string(gl::VENDOR),
            renderer: self.backend.get_string(gl::RENDERER),
        }
    }

    /// Clears the window's color buffer.
    pub fn clear(&self, color: Color) {
        self.backend.clear_color(color);
    }

    /// Creates a buffer holding a copy of `data`.
    pub fn buffer<T: Copy>(&self, kind: buffer::Kind, data: &[T]) -> Buffer {
        let id = self.backend.gen_buffer();
        if kind == buffer::Kind::Index {
            // The element buffer binding belongs to the bound vertex array.
            self.backend.bind_vertex_array(0);
        }
        self.backend.bind_buffer(kind.target(), id);
        self.backend.buffer_data(kind.target(), data);
        self.backend.bind_buffer(kind.target(), 0);
        trace!("buffer {} holds {} bytes", id, mem::size_of_val(data));
        Buffer::new(self.handle(Garbage::Buffer(id)), kind, data.len())
    }

    /// Records interleaved float `attributes` read from `vertices`, each
    /// vertex `stride` bytes long, plus an optional index buffer.
    pub fn vertex_array(
        &self,
        vertices: &Buffer,
        stride: usize,
        attributes: &[Attribute],
        indices: Option<&Buffer>,
    ) -> VertexArray {
        debug_assert_eq!(vertices.kind(), buffer::Kind::Vertex);
        debug_assert!(indices.map_or(true, |indices| indices.kind() == buffer::Kind::Index));
        let id = self.backend.gen_vertex_array();
        self.backend.bind_vertex_array(id);
        self.backend.bind_buffer(gl::ARRAY_BUFFER, vertices.id());
        for attribute in attributes {
            self.backend.float_attribute(
                attribute.location,
                attribute.components,
                stride,
                attribute.offset,
            );
        }
        if let Some(indices) = indices {
            self.backend.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, indices.id());
        }
        self.backend.bind_vertex_array(0);
        self.backend.bind_buffer(gl::ARRAY_BUFFER, 0);
        VertexArray::new(
            self.handle(Garbage::VertexArray(id)),
            vertices.clone(),
            indices.cloned(),
        )
    }

    /// Compile GLSL shader code into a shader object.
    pub fn shader(
        &self,
        kind: shader::Kind,
        source: &shader::Source,
    ) -> Result<shader::Object, Error> {
        let id = self.backend.create_shader(kind.as_gl_enum());
        self.backend.shader_source(id, source);
        if !self.backend.compile_shader(id) {
            let log = self.backend.shader_info_log(id);
            self.backend.delete_shader(id);
            return Err(Error::Compile { kind, log });
        }
        Ok(shader::Object::new(self.handle(Garbage::Shader(id))))
    }

    /// Link GLSL objects to create a GLSL program.
    ///
    /// Names in `bindings` are bound before linking and checked after.
    pub fn program(
        &self,
        vertex: &shader::Object,
        fragment: &shader::Object,
        bindings: &Bindings,
    ) -> Result<Program, Error> {
        let id = self.backend.create_program();
        // Owns the name from here on, so early returns delete it too.
        let handle = self.handle(Garbage::Program(id));
        self.backend.attach_shader(id, vertex.id());
        self.backend.attach_shader(id, fragment.id());
        for (location, name) in bindings.attributes.iter().enumerate() {
            if let Some(name) = *name {
                let name = program::binding_name(name)?;
                self.backend.bind_attrib_location(id, location as u32, name);
            }
        }
        if let Some(name) = bindings.fragment_output {
            let name = program::binding_name(name)?;
            self.backend.bind_frag_data_location(id, 0, name);
        }
        if !self.backend.link_program(id) {
            let log = self.backend.program_info_log(id);
            return Err(Error::Link { log });
        }
        let samplers = program::resolve(
            bindings,
            |name| self.backend.attrib_location(id, name),
            |name| self.backend.uniform_location(id, name),
        )?;
        Ok(Program::new(handle, samplers))
    }

    /// Uploads `pixels` into a new texture without mipmaps.
    pub fn texture2(&self, pixels: &Pixels) -> Texture2 {
        let id = self.backend.gen_texture();
        self.backend.bind_texture(0, id);
        self.backend.tex_parameter(gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE);
        self.backend.tex_parameter(gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE);
        self.backend.tex_parameter(gl::TEXTURE_MIN_FILTER, gl::LINEAR);
        self.backend.tex_parameter(gl::TEXTURE_MAG_FILTER, gl::LINEAR);
        // RGB rows are not 4-byte aligned in general.
        self.backend.pixel_store(gl::UNPACK_ALIGNMENT, 1);
        self.backend.tex_image_rgb8(pixels.width(), pixels.height(), pixels.data());
        self.backend.pixel_store(gl::UNPACK_ALIGNMENT, 4);
        self.backend.bind_texture(0, 0);
        Texture2::new(self.handle(Garbage::Texture(id)))
    }

    /// Draws into `framebuffer` with culling and depth testing off.
    pub fn draw(
        &self,
        framebuffer: &Framebuffer,
        vertex_array: &VertexArray,
        draw_call: &DrawCall,
        invocation: &Invocation,
    ) {
        let (width, height) = framebuffer.dimensions();
        self.backend.viewport(width, height);
        self.backend.bind_vertex_array(vertex_array.id());
        self.backend.use_program(invocation.program.id());
        for (unit, texture) in invocation.textures.iter().enumerate() {
            if let Some(texture) = *texture {
                self.backend.bind_texture(unit as u32, texture.id());
                if let Some(location) = invocation.program.sampler_location(unit) {
                    self.backend.uniform_1i(location, unit as i32);
                }
            }
        }
        match *draw_call {
            DrawCall::Arrays(count) => self.backend.draw_arrays(count),
            DrawCall::Elements(count) if vertex_array.indices().is_some() => {
                self.backend.draw_elements(count);
            }
            DrawCall::Elements(_) => {
                error!("indexed draw call on a vertex array without indices");
            }
        }
        self.backend.use_program(0);
        self.backend.bind_vertex_array(0);
    }

    /// Deletes every GPU object whose last handle has been dropped.
    ///
    /// Must be called with this factory's context current.
    pub fn collect_garbage(&self) {
        for name in self.garbage.drain() {
            trace!("deleting {:?}", name);
            match name {
                Garbage::Buffer(id) => self.backend.delete_buffer(id),
                Garbage::VertexArray(id) => self.backend.delete_vertex_array(id),
                Garbage::Texture(id) => self.backend.delete_texture(id),
                Garbage::Shader(id) => self.backend.delete_shader(id),
                Garbage::Program(id) => self.backend.delete_program(id),
            }
        }
    }
}
