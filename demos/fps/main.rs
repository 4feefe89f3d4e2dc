//! Indexed, textured quad with the frame rate shown in the title bar.

extern crate env_logger;
extern crate glquad;
#[macro_use] extern crate log;

use std::process;
use std::time::Instant;

use glquad::framebuffer::BLACK;
use glquad::scene::{self, Mesh};
use glquad::{app, fps, window, Config, Error, Invocation};

fn run() -> Result<(), Error> {
    let config = Config::from_env();
    let (event_loop, window) = window::create(&config)?;
    let (mut framebuffer, factory) = glquad::init(&window)?;
    factory.info().log();

    {
        let mesh = Mesh::quad(&factory);
        let program = scene::program(&factory)?;
        let texture = scene::texture(&factory, &config.image)?;
        let mut invocation = Invocation::new(&program);
        invocation.textures[scene::TEXTURE_UNIT] = Some(&texture);

        let mut counter = fps::Counter::new(Instant::now());
        app::run(event_loop, &window, &mut framebuffer, |window, framebuffer| {
            factory.clear(BLACK);
            factory.draw(framebuffer, &mesh.vertex_array, &mesh.draw_call, &invocation);
            if let Some(rate) = counter.tick(Instant::now()) {
                debug!("{:.1} FPS", rate);
                window.set_title(&fps::title(&config.title, rate));
            }
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
