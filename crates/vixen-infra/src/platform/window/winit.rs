// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A `winit`-based implementation of the `GameWindow` trait.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::time::Instant;

use vixen_core::platform::{
    attach_and_initialize, run_frame, BackReferences, GameHost, GameWindow, WindowArgs,
    WindowError,
};
use vixen_core::renderer::{Renderer, SharedRenderer};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::platform::input::translate_window_event;

/// A desktop window driving the game loop through a `winit` event loop.
///
/// The OS window itself only exists while [`GameWindow::run`] is executing; it
/// is created when the event loop first resumes, as `winit` requires.
#[derive(Debug)]
pub struct WinitGameWindow {
    args: WindowArgs,
    refs: BackReferences,
}

impl WinitGameWindow {
    /// Creates a window description. Nothing is shown until `run` is called.
    pub fn new(args: WindowArgs) -> Self {
        Self {
            args,
            refs: BackReferences::new(),
        }
    }

    fn attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.args.title.clone())
            .with_inner_size(LogicalSize::new(self.args.width, self.args.height))
            .with_resizable(self.args.resizable)
            .with_fullscreen(self.args.fullscreen.then_some(Fullscreen::Borderless(None)))
            .with_visible(true)
    }
}

impl GameWindow for WinitGameWindow {
    fn args(&self) -> &WindowArgs {
        &self.args
    }

    fn set_parent(&mut self, parent: Weak<dyn GameHost>) {
        self.refs.set_parent(parent);
    }

    fn set_renderer(&mut self, renderer: Weak<RefCell<dyn Renderer>>) {
        self.refs.set_renderer(renderer);
    }

    fn run(&mut self) -> Result<(), WindowError> {
        let (host, renderer) = self.refs.upgrade()?;
        let event_loop = EventLoop::new().map_err(|e| WindowError::EventLoop(e.to_string()))?;

        let mut state = LoopState {
            attributes: Some(self.attributes()),
            host,
            renderer,
            window: None,
            last_frame: Instant::now(),
            error: None,
        };

        log::info!(
            "Opening window '{}' ({}x{}).",
            self.args.title,
            self.args.width,
            self.args.height
        );
        let result = event_loop
            .run_app(&mut state)
            .map_err(|e| WindowError::EventLoop(e.to_string()));

        if state.window.is_some() {
            state.host.shutdown();
        }
        result?;
        match state.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Everything the event loop callbacks touch while the window is open.
struct LoopState {
    attributes: Option<WindowAttributes>,
    host: Rc<dyn GameHost>,
    renderer: SharedRenderer,
    window: Option<Arc<Window>>,
    last_frame: Instant,
    error: Option<WindowError>,
}

impl LoopState {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: WindowError) {
        log::error!("Stopping the event loop: {error}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for LoopState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.attributes.take() else {
            return;
        };

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, WindowError::WindowCreation(e.to_string())),
        };
        log::info!("Winit window created (id: {:?}).", window.id());

        if let Err(e) = attach_and_initialize(&self.renderer, window.clone()) {
            return self.fail(event_loop, e.into());
        }

        self.host.startup(&mut *self.renderer.borrow_mut());
        self.last_frame = Instant::now();
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(|w| w.id()) != Some(id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting event loop.");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                run_frame(&*self.host, &self.renderer, dt);
                if self.host.exit_requested() {
                    log::info!("Game requested exit.");
                    event_loop.exit();
                }
            }
            other => {
                if let Some(input) = translate_window_event(&other) {
                    log::trace!("Input event: {input:?}");
                    self.host.handle_input(&input);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_back_references_fails_before_opening() {
        let mut window = WinitGameWindow::new(WindowArgs::default());
        assert!(matches!(window.run(), Err(WindowError::Detached("game"))));
    }

    #[test]
    fn test_args_are_kept() {
        let args = WindowArgs {
            title: "Sandbox".to_string(),
            width: 640,
            height: 480,
            resizable: false,
            fullscreen: false,
        };
        let window = WinitGameWindow::new(args.clone());
        assert_eq!(window.args(), &args);
    }
}
