//! Non-indexed, textured triangle.

extern crate env_logger;
extern crate glquad;
#[macro_use] extern crate log;

use std::process;

use glquad::framebuffer::BLACK;
use glquad::scene::{self, Mesh};
use glquad::{app, window, Config, Error, Invocation};

fn run() -> Result<(), Error> {
    let config = Config::from_env().with_title("OpenGL Triangle");
    let (event_loop, window) = window::create(&config)?;
    let (mut framebuffer, factory) = glquad::init(&window)?;
    factory.info().log();

    {
        let mesh = Mesh::triangle(&factory);
        let program = scene::program(&factory)?;
        let texture = scene::texture(&factory, &config.image)?;
        let mut invocation = Invocation::new(&program);
        invocation.textures[scene::TEXTURE_UNIT] = Some(&texture);

        app::run(event_loop, &window, &mut framebuffer, |_, framebuffer| {
            factory.clear(BLACK);
            factory.draw(framebuffer, &mesh.vertex_array, &mesh.draw_call, &invocation);
            Ok(())
        })?;
    }

    factory.collect_garbage();
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}
