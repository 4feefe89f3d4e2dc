extern crate gl_generator;

use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::{env, fs, path};

/// The context version every program requests.
const GL_VERSION: (u8, u8) = (3, 3);

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");
    let path = path::Path::new(&out_dir).join("gl_bindings.rs");
    let mut file = fs::File::create(&path).expect("failed to create GL bindings file");
    Registry::new(Api::Gl, GL_VERSION, Profile::Core, Fallbacks::All, [])
        .write_bindings(StructGenerator, &mut file)
        .expect("failed to write GL bindings");
}
