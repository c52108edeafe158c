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

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::platform::InputEvent;
use crate::renderer::{RenderError, Renderer, SharedRenderer};

/// Combines the windowing handle traits required by graphics backends,
/// so that they can be used together in a trait object.
pub trait WindowHandle: HasWindowHandle + HasDisplayHandle {}

impl<T: HasWindowHandle + HasDisplayHandle> WindowHandle for T {}

/// An opaque, shareable reference to a platform window or surface.
pub type NativeHandle = Arc<dyn WindowHandle + Send + Sync>;

/// The configuration-derived arguments a window is constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowArgs {
    /// The title shown in the window decoration.
    pub title: String,
    /// The initial inner width in logical pixels.
    pub width: u32,
    /// The initial inner height in logical pixels.
    pub height: u32,
    /// Whether the user can resize the window.
    pub resizable: bool,
    /// Whether the window covers the whole monitor.
    pub fullscreen: bool,
}

impl Default for WindowArgs {
    fn default() -> Self {
        Self {
            title: "Vixen".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
            fullscreen: false,
        }
    }
}

/// An error that ends a window's main loop.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    /// The platform event loop could not be created or failed while running.
    #[error("event loop failure: {0}")]
    EventLoop(String),
    /// The operating system refused to create the window.
    #[error("failed to create the window: {0}")]
    WindowCreation(String),
    /// A back-reference was never set, or its target was dropped.
    #[error("the window is not attached to a {0}")]
    Detached(&'static str),
    /// The renderer could not be brought up against the window.
    #[error(transparent)]
    Renderer(#[from] RenderError),
}

/// What a window needs from the game that owns it.
///
/// Methods take `&self`: the window only holds a shared back-reference, so
/// implementors keep their mutable state behind interior mutability.
pub trait GameHost {
    /// Called once, after the renderer has been initialized.
    fn startup(&self, renderer: &mut dyn Renderer);

    /// Feeds one translated input event into the game's input state.
    fn handle_input(&self, event: &InputEvent);

    /// Advances the game by `dt` seconds.
    fn update(&self, dt: f32);

    /// Submits the game's draw calls for the current frame.
    fn render(&self, renderer: &mut dyn Renderer);

    /// Clears per-frame input edges once the frame has been presented.
    fn end_frame(&self);

    /// Called once, after the last frame.
    fn shutdown(&self);

    /// Returns `true` once the game has asked the loop to stop.
    fn exit_requested(&self) -> bool;
}

/// A platform window that drives the game's main loop.
pub trait GameWindow {
    /// The arguments the window was constructed with.
    fn args(&self) -> &WindowArgs;

    /// Sets the non-owning back-reference to the game.
    fn set_parent(&mut self, parent: Weak<dyn GameHost>);

    /// Sets the non-owning back-reference to the renderer.
    fn set_renderer(&mut self, renderer: Weak<RefCell<dyn Renderer>>);

    /// Runs the event and render loop until the application exits.
    ///
    /// Blocks the calling thread. Returns an error if the loop could not start
    /// or ended abnormally.
    fn run(&mut self) -> Result<(), WindowError>;
}

/// The two back-references every window holds.
///
/// Neither reference keeps its target alive; the game outlives its window's
/// loop and the window only upgrades them for the duration of `run`.
#[derive(Default)]
pub struct BackReferences {
    parent: Option<Weak<dyn GameHost>>,
    renderer: Option<Weak<RefCell<dyn Renderer>>>,
}

impl BackReferences {
    /// Creates an empty set of back-references.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the parent game.
    pub fn set_parent(&mut self, parent: Weak<dyn GameHost>) {
        self.parent = Some(parent);
    }

    /// Stores the renderer.
    pub fn set_renderer(&mut self, renderer: Weak<RefCell<dyn Renderer>>) {
        self.renderer = Some(renderer);
    }

    /// Returns `true` if both references are set and still alive.
    pub fn is_bound(&self) -> bool {
        self.upgrade().is_ok()
    }

    /// Upgrades both references for the duration of a loop.
    pub fn upgrade(&self) -> Result<(Rc<dyn GameHost>, SharedRenderer), WindowError> {
        let parent = self
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(WindowError::Detached("game"))?;
        let renderer = self
            .renderer
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(WindowError::Detached("renderer"))?;
        Ok((parent, renderer))
    }
}

impl std::fmt::Debug for BackReferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackReferences")
            .field("parent", &self.parent.is_some())
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}
