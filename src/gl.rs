//! OpenGL 3.3 core bindings and a logging wrapper around them.

use std::{ffi, mem, os, ptr, rc};

use crate::util;

// Import OpenGL bindings.
include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));

/// Traces a raw call on the `gl` target, performs it, then checks
/// `glGetError`. Evaluates to the call's return value.
///
/// Arguments are evaluated twice when tracing is enabled.
macro_rules! call {
    ($backend:expr, $func:ident($($arg:expr),*)) => {{
        trace!(target: "gl", concat!("gl", stringify!($func), "{:?}"), ($($arg,)*));
        let value = unsafe { $backend.gl.$func($($arg),*) };
        $backend.check_error();
        value
    }};
}

/// Loaded function table of the current context.
#[derive(Clone)]
pub struct Backend {
    gl: rc::Rc<Gl>,
}

impl Backend {
    /// Loads every function through `query_proc_address`.
    pub fn load<F>(mut query_proc_address: F) -> Self
        where F: FnMut(&str) -> *const ()
    {
        let gl = Gl::load_with(|symbol| query_proc_address(symbol) as *const _);
        Backend { gl: rc::Rc::new(gl) }
    }

    /// Logs any pending `glGetError` code at `error` level.
    pub fn check_error(&self) {
        let code = unsafe { self.gl.GetError() };
        if code != NO_ERROR {
            error!(target: "gl", "0x{:x}", code);
        }
    }

    /// `glGetIntegerv` for a single value.
    pub fn get_integer(&self, name: u32) -> i32 {
        let mut value: i32 = 0;
        call!(self, GetIntegerv(name, &mut value));
        value
    }

    /// `glGetString`; empty if the driver returns `NULL`.
    pub fn get_string(&self, name: u32) -> String {
        let string = call!(self, GetString(name));
        if string.is_null() {
            return String::new();
        }
        unsafe { ffi::CStr::from_ptr(string as *const os::raw::c_char) }
            .to_string_lossy()
            .into_owned()
    }

    pub fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
        call!(self, ClearColor(r, g, b, a));
        call!(self, Clear(COLOR_BUFFER_BIT));
    }

    pub fn viewport(&self, width: u32, height: u32) {
        let (width, height) = (width as i32, height as i32);
        call!(self, Viewport(0, 0, width, height));
    }

    pub fn pixel_store(&self, param: u32, value: i32) {
        call!(self, PixelStorei(param, value));
    }

    // Buffers and vertex arrays

    pub fn gen_buffer(&self) -> u32 {
        let mut id: u32 = 0;
        call!(self, GenBuffers(1, &mut id));
        id
    }

    pub fn bind_buffer(&self, target: u32, id: u32) {
        call!(self, BindBuffer(target, id));
    }

    /// Uploads `data` to the buffer bound at `target` as `GL_STATIC_DRAW`.
    pub fn buffer_data<T: Copy>(&self, target: u32, data: &[T]) {
        let size = mem::size_of_val(data) as isize;
        let data = data.as_ptr() as *const os::raw::c_void;
        call!(self, BufferData(target, size, data, STATIC_DRAW));
    }

    pub fn delete_buffer(&self, id: u32) {
        call!(self, DeleteBuffers(1, &id));
    }

    pub fn gen_vertex_array(&self) -> u32 {
        let mut id: u32 = 0;
        call!(self, GenVertexArrays(1, &mut id));
        id
    }

    pub fn bind_vertex_array(&self, id: u32) {
        call!(self, BindVertexArray(id));
    }

    /// Enables `location` and points it at non-normalized `f32` data.
    pub fn float_attribute(&self, location: u32, components: u8, stride: usize, offset: usize) {
        let (size, stride) = (i32::from(components), stride as i32);
        let offset = offset as *const os::raw::c_void;
        call!(self, VertexAttribPointer(location, size, FLOAT, FALSE, stride, offset));
        call!(self, EnableVertexAttribArray(location));
    }

    pub fn delete_vertex_array(&self, id: u32) {
        call!(self, DeleteVertexArrays(1, &id));
    }

    // Shaders and programs

    pub fn create_shader(&self, kind: u32) -> u32 {
        call!(self, CreateShader(kind))
    }

    pub fn shader_source(&self, id: u32, source: &ffi::CStr) {
        let string = source.as_ptr();
        call!(self, ShaderSource(id, 1, &string, ptr::null::<i32>()));
    }

    /// Compiles and returns `GL_COMPILE_STATUS`.
    pub fn compile_shader(&self, id: u32) -> bool {
        let mut status: i32 = 0;
        call!(self, CompileShader(id));
        call!(self, GetShaderiv(id, COMPILE_STATUS, &mut status));
        status != 0
    }

    pub fn shader_info_log(&self, id: u32) -> String {
        let mut len: i32 = 0;
        call!(self, GetShaderiv(id, INFO_LOG_LENGTH, &mut len));
        let mut log = vec![0u8; len.max(0) as usize];
        let mut written: i32 = 0;
        let buffer = log.as_mut_ptr() as *mut os::raw::c_char;
        call!(self, GetShaderInfoLog(id, len, &mut written, buffer));
        log.truncate(written.max(0) as usize);
        util::info_log(&log)
    }

    pub fn delete_shader(&self, id: u32) {
        call!(self, DeleteShader(id));
    }

    pub fn create_program(&self) -> u32 {
        call!(self, CreateProgram())
    }

    pub fn attach_shader(&self, program: u32, shader: u32) {
        call!(self, AttachShader(program, shader));
    }

    pub fn bind_attrib_location(&self, program: u32, location: u32, name: &ffi::CStr) {
        call!(self, BindAttribLocation(program, location, name.as_ptr()));
    }

    pub fn bind_frag_data_location(&self, program: u32, color: u32, name: &ffi::CStr) {
        call!(self, BindFragDataLocation(program, color, name.as_ptr()));
    }

    /// Links and returns `GL_LINK_STATUS`.
    pub fn link_program(&self, id: u32) -> bool {
        let mut status: i32 = 0;
        call!(self, LinkProgram(id));
        call!(self, GetProgramiv(id, LINK_STATUS, &mut status));
        status != 0
    }

    pub fn program_info_log(&self, id: u32) -> String {
        let mut len: i32 = 0;
        call!(self, GetProgramiv(id, INFO_LOG_LENGTH, &mut len));
        let mut log = vec![0u8; len.max(0) as usize];
        let mut written: i32 = 0;
        let buffer = log.as_mut_ptr() as *mut os::raw::c_char;
        call!(self, GetProgramInfoLog(id, len, &mut written, buffer));
        log.truncate(written.max(0) as usize);
        util::info_log(&log)
    }

    /// `-1` if `name` is not an active attribute.
    pub fn attrib_location(&self, program: u32, name: &ffi::CStr) -> i32 {
        call!(self, GetAttribLocation(program, name.as_ptr()))
    }

    /// `-1` if `name` is not an active uniform.
    pub fn uniform_location(&self, program: u32, name: &ffi::CStr) -> i32 {
        call!(self, GetUniformLocation(program, name.as_ptr()))
    }

    pub fn uniform_1i(&self, location: i32, value: i32) {
        call!(self, Uniform1i(location, value));
    }

    pub fn use_program(&self, id: u32) {
        call!(self, UseProgram(id));
    }

    pub fn delete_program(&self, id: u32) {
        call!(self, DeleteProgram(id));
    }

    // Textures

    pub fn gen_texture(&self) -> u32 {
        let mut id: u32 = 0;
        call!(self, GenTextures(1, &mut id));
        id
    }

    /// Makes `unit` active and binds `id` to its `GL_TEXTURE_2D` target.
    pub fn bind_texture(&self, unit: u32, id: u32) {
        call!(self, ActiveTexture(TEXTURE0 + unit));
        call!(self, BindTexture(TEXTURE_2D, id));
    }

    pub fn tex_parameter(&self, param: u32, value: u32) {
        let value = value as i32;
        call!(self, TexParameteri(TEXTURE_2D, param, value));
    }

    /// Specifies level 0 of the bound texture as `RGB8`, read from
    /// tightly packed RGB bytes.
    pub fn tex_image_rgb8(&self, width: u32, height: u32, data: &[u8]) {
        let (internal, width, height) = (RGB8 as i32, width as i32, height as i32);
        let data = data.as_ptr() as *const os::raw::c_void;
        call!(self, TexImage2D(TEXTURE_2D, 0, internal, width, height, 0, RGB, UNSIGNED_BYTE, data));
    }

    pub fn delete_texture(&self, id: u32) {
        call!(self, DeleteTextures(1, &id));
    }

    // Drawing

    pub fn draw_arrays(&self, count: usize) {
        let count = count as i32;
        call!(self, DrawArrays(TRIANGLES, 0, count));
    }

    /// Draws `u32` indices from the start of the bound element buffer.
    pub fn draw_elements(&self, count: usize) {
        let count = count as i32;
        call!(self, DrawElements(TRIANGLES, count, UNSIGNED_INT, ptr::null::<os::raw::c_void>()));
    }
}
