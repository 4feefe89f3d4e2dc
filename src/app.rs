//! The blocking render loop.

use glutin::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::platform::run_return::EventLoopExtRunReturn;

use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::window::Window;

/// Returns `true` for the key press that ends the render loop.
pub fn is_exit_key(input: &KeyboardInput) -> bool {
    input.state == ElementState::Pressed
        && input.virtual_keycode == Some(VirtualKeyCode::Escape)
}

/// Renders frames until the window is closed or Escape is pressed.
///
/// `render` is called once per frame, after pending events have been
/// handled, and the back buffer is swapped after it returns. The viewport
/// size recorded in `framebuffer` follows the window size. The first error
/// returned by `render` or by the buffer swap stops the loop and is
/// returned.
pub fn run<F>(
    mut event_loop: EventLoop<()>,
    window: &Window,
    framebuffer: &mut Framebuffer,
    mut render: F,
) -> Result<(), Error>
    where F: FnMut(&Window, &Framebuffer) -> Result<(), Error>
{
    let mut outcome = Ok(());
    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    debug!("window close requested");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if is_exit_key(&input) {
                        debug!("escape pressed");
                        *control_flow = ControlFlow::Exit;
                    }
                }
                WindowEvent::Resized(size) => {
                    trace!("resized to {}x{}", size.width, size.height);
                    window.resize(size);
                    framebuffer.resize(size.width, size.height);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let frame = render(window, &*framebuffer).and_then(|()| window.swap_buffers());
                finish_frame(frame, &mut outcome, control_flow);
            }
            _ => {}
        }
    });
    outcome
}

/// Records how a frame went. The first error is kept and ends the loop.
fn finish_frame(
    frame: Result<(), Error>,
    outcome: &mut Result<(), Error>,
    control_flow: &mut ControlFlow,
) {
    if let Err(err) = frame {
        if outcome.is_ok() {
            *outcome = Err(err);
        } else {
            debug!("dropping later frame error: {}", err);
        }
        *control_flow = ControlFlow::Exit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glutin::event::ModifiersState;

    #[allow(deprecated)]
    fn key(state: ElementState, virtual_keycode: Option<VirtualKeyCode>) -> KeyboardInput {
        KeyboardInput {
            scancode: 1,
            state,
            virtual_keycode,
            modifiers: ModifiersState::empty(),
        }
    }

    fn link_error(log: &str) -> Error {
        Error::Link { log: log.to_owned() }
    }

    #[test]
    fn good_frame_keeps_polling() {
        let mut outcome = Ok(());
        let mut control_flow = ControlFlow::Poll;
        finish_frame(Ok(()), &mut outcome, &mut control_flow);
        assert!(outcome.is_ok());
        assert_eq!(control_flow, ControlFlow::Poll);
    }

    #[test]
    fn first_frame_error_is_kept_and_exits() {
        let mut outcome = Ok(());
        let mut control_flow = ControlFlow::Poll;
        finish_frame(Err(link_error("first")), &mut outcome, &mut control_flow);
        assert_eq!(control_flow, ControlFlow::Exit);
        finish_frame(Err(link_error("second")), &mut outcome, &mut control_flow);
        match outcome {
            Err(Error::Link { log }) => assert_eq!(log, "first"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn escape_press_exits() {
        assert!(is_exit_key(&key(ElementState::Pressed, Some(VirtualKeyCode::Escape))));
    }

    #[test]
    fn escape_release_does_not_exit() {
        assert!(!is_exit_key(&key(ElementState::Released, Some(VirtualKeyCode::Escape))));
    }

    #[test]
    fn other_keys_do_not_exit() {
        assert!(!is_exit_key(&key(ElementState::Pressed, Some(VirtualKeyCode::Q))));
        assert!(!is_exit_key(&key(ElementState::Pressed, None)));
    }
}
