//! The fixed geometry, shaders and texture drawn by the demo programs.

use std::mem;
use std::path::Path;

use crate::buffer;
use crate::draw_call::DrawCall;
use crate::error::Error;
use crate::factory::Factory;
use crate::pixels::Pixels;
use crate::program::{Bindings, Program};
use crate::shader;
use crate::texture::Texture2;
use crate::util;
use crate::vertex_array::{Attribute, VertexArray};

/// Interleaved vertex: position, color, texture co-ordinate.
///
/// Size: 32
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Offset: 0
    pub position: [f32; 3],
    /// Offset: 12
    pub color: [f32; 3],
    /// Offset: 24
    pub tex_coord: [f32; 2],
}

/// Attribute location of `aPos`.
pub const POSITION: u32 = 0;

/// Attribute location of `aColor`.
pub const COLOR: u32 = 1;

/// Attribute location of `aTexCoord`.
pub const TEX_COORD: u32 = 2;

/// Texture unit the image is bound to.
pub const TEXTURE_UNIT: usize = 0;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// A centered square, white, covering the whole texture.
pub const QUAD_VERTICES: &[Vertex] = &[
    Vertex { position: [ 0.5,  0.5, 0.0], color: WHITE, tex_coord: [1.0, 1.0] }, // top right
    Vertex { position: [ 0.5, -0.5, 0.0], color: WHITE, tex_coord: [1.0, 0.0] }, // bottom right
    Vertex { position: [-0.5, -0.5, 0.0], color: WHITE, tex_coord: [0.0, 0.0] }, // bottom left
    Vertex { position: [-0.5,  0.5, 0.0], color: WHITE, tex_coord: [0.0, 1.0] }, // top left
];

/// Two triangles sharing the quad diagonal.
pub const QUAD_INDICES: &[u32] = &[
    0, 1, 3,
    1, 2, 3,
];

/// A single triangle tinted red, green and blue at its corners.
pub const TRIANGLE_VERTICES: &[Vertex] = &[
    Vertex { position: [-0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0], tex_coord: [0.0, 0.0] },
    Vertex { position: [ 0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0], tex_coord: [1.0, 0.0] },
    Vertex { position: [ 0.0,  0.5, 0.0], color: [0.0, 0.0, 1.0], tex_coord: [0.5, 1.0] },
];

pub const VERTEX_SHADER: &[u8] = b"#version 330 core
in vec3 aPos;
in vec3 aColor;
in vec2 aTexCoord;
out vec3 Color;
out vec2 TexCoord;
void main()
{
    gl_Position = vec4(aPos, 1.0);
    Color = aColor;
    TexCoord = aTexCoord;
}
\0";

pub const FRAGMENT_SHADER: &[u8] = b"#version 330 core
in vec3 Color;
in vec2 TexCoord;
out vec4 outColor;
uniform sampler2D ourTexture;
void main()
{
    outColor = texture(ourTexture, TexCoord) * vec4(Color, 1.0);
}
\0";

const A_POS: &[u8] = b"aPos\0";
const A_COLOR: &[u8] = b"aColor\0";
const A_TEX_COORD: &[u8] = b"aTexCoord\0";
const OUT_COLOR: &[u8] = b"outColor\0";
const OUR_TEXTURE: &[u8] = b"ourTexture\0";

/// The program interface of `VERTEX_SHADER` and `FRAGMENT_SHADER`.
pub fn bindings() -> Bindings {
    let mut bindings = Bindings::default();
    bindings.attributes[POSITION as usize] = Some(A_POS);
    bindings.attributes[COLOR as usize] = Some(A_COLOR);
    bindings.attributes[TEX_COORD as usize] = Some(A_TEX_COORD);
    bindings.fragment_output = Some(OUT_COLOR);
    bindings.samplers[TEXTURE_UNIT] = Some(OUR_TEXTURE);
    bindings
}

/// The interleaved `Vertex` layout.
pub fn attributes() -> [Attribute; 3] {
    [
        Attribute { location: POSITION, components: 3, offset: offset_of!(Vertex::position) },
        Attribute { location: COLOR, components: 3, offset: offset_of!(Vertex::color) },
        Attribute { location: TEX_COORD, components: 2, offset: offset_of!(Vertex::tex_coord) },
    ]
}

/// Geometry uploaded to the GPU plus the call that draws it.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex and index buffer bindings.
    pub vertex_array: VertexArray,

    /// Draws the whole mesh.
    pub draw_call: DrawCall,
}

impl Mesh {
    /// Uploads the indexed quad.
    pub fn quad(factory: &Factory) -> Self {
        let vertices = factory.buffer(buffer::Kind::Vertex, QUAD_VERTICES);
        let indices = factory.buffer(buffer::Kind::Index, QUAD_INDICES);
        Mesh {
            vertex_array: vertex_array(factory, &vertices, Some(&indices)),
            draw_call: DrawCall::Elements(indices.count()),
        }
    }

    /// Uploads the non-indexed triangle.
    pub fn triangle(factory: &Factory) -> Self {
        let vertices = factory.buffer(buffer::Kind::Vertex, TRIANGLE_VERTICES);
        Mesh {
            vertex_array: vertex_array(factory, &vertices, None),
            draw_call: DrawCall::Arrays(vertices.count()),
        }
    }
}

fn vertex_array(factory: &Factory, vertices: &buffer::Buffer, indices: Option<&buffer::Buffer>) -> VertexArray {
    factory.vertex_array(vertices, mem::size_of::<Vertex>(), &attributes(), indices)
}

/// Compiles and links the textured-vertex program.
pub fn program(factory: &Factory) -> Result<Program, Error> {
    let vertex = factory.shader(shader::Kind::Vertex, shader_source(VERTEX_SHADER)?)?;
    let fragment = factory.shader(shader::Kind::Fragment, shader_source(FRAGMENT_SHADER)?)?;
    factory.program(&vertex, &fragment, &bindings())
}

fn shader_source(bytes: &'static [u8]) -> Result<&'static shader::Source, Error> {
    util::cstr(bytes).ok_or_else(|| Error::InvalidName("shader source".to_owned()))
}

/// Loads the image at `path`, bottom row first, into a texture sampled
/// with linear filtering and clamped co-ordinates.
pub fn texture(factory: &Factory, path: &Path) -> Result<Texture2, Error> {
    let pixels = Pixels::open(path, true)?;
    Ok(factory.texture2(&pixels))
}
