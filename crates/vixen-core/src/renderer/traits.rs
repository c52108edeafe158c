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

use std::cell::RefCell;
use std::rc::Rc;

use crate::asset::{Font, Model, Texture};
use crate::math::{LinearRgba, Rect, Vec2};
use crate::platform::NativeHandle;
use crate::renderer::{GraphicsBackend, RenderError};

bitflags::bitflags! {
    /// The buffers reset by [`Renderer::clear_buffer`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        /// The color attachment, reset to the clear color.
        const COLOR = 1 << 0;
        /// The depth buffer.
        const DEPTH = 1 << 1;
        /// The stencil buffer.
        const STENCIL = 1 << 2;
    }
}

impl Default for ClearFlags {
    /// Color and depth, the per-frame clear of a typical 3D scene.
    fn default() -> Self {
        ClearFlags::COLOR | ClearFlags::DEPTH
    }
}

/// Counters describing the frame currently being recorded.
///
/// The per-frame counters are reset by [`Renderer::swap_buffers`];
/// `frame_number` and `skipped_draws` accumulate over the renderer's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// The number of frames presented so far.
    pub frame_number: u64,
    /// Clears issued in the current frame.
    pub clears: u32,
    /// The flags of the most recent clear, if any.
    pub last_clear: Option<ClearFlags>,
    /// 2D texture draws submitted in the current frame.
    pub texture_draws: u32,
    /// 2D text draws submitted in the current frame.
    pub text_draws: u32,
    /// Model draws submitted in the current frame.
    pub model_draws: u32,
    /// Draw submissions dropped because their input was invalid.
    pub skipped_draws: u64,
}

impl FrameStats {
    /// Total number of draws submitted in the current frame.
    pub fn draw_calls(&self) -> u32 {
        self.texture_draws + self.text_draws + self.model_draws
    }
}

/// A rendering backend.
///
/// The lifecycle is: [`attach_native_handle`](Renderer::attach_native_handle),
/// then [`initialize`](Renderer::initialize), then any number of frames
/// (clear, draws, [`swap_buffers`](Renderer::swap_buffers)), then
/// [`deinitialize`](Renderer::deinitialize).
///
/// Draw submissions are fire-and-forget. A backend skips, without failing, any
/// submission it cannot honor: calls made while uninitialized, unloaded
/// textures, empty source rectangles, empty strings and empty models.
pub trait Renderer: std::fmt::Debug {
    /// The graphics API this renderer is built on.
    fn backend(&self) -> GraphicsBackend;

    /// Sets up the backend against the attached native handle.
    ///
    /// A failure here is fatal to application startup.
    fn initialize(&mut self) -> Result<(), RenderError>;

    /// Releases the backend resources. Calling it on a renderer that is not
    /// initialized does nothing.
    fn deinitialize(&mut self);

    /// Returns `true` between a successful `initialize` and `deinitialize`.
    fn is_initialized(&self) -> bool;

    /// Sets the color used by subsequent color clears.
    fn set_clear_color(&mut self, color: LinearRgba);

    /// Resets the selected buffers for a new frame.
    fn clear_buffer(&mut self, flags: ClearFlags);

    /// Presents the completed frame.
    fn swap_buffers(&mut self);

    /// Binds the backend to a platform window. Must precede `initialize`.
    fn attach_native_handle(&mut self, handle: NativeHandle);

    /// Draws the `source` region of `texture` with its top-left corner at `position`.
    fn render_texture_2d(&mut self, texture: &dyn Texture, position: Vec2, source: Rect);

    /// Draws `text` with `font`, starting at `position`.
    fn render_text_2d(&mut self, font: &dyn Font, text: &str, position: Vec2);

    /// Draws a 3D model.
    fn render_model(&mut self, model: &dyn Model);

    /// Returns the counters of the frame being recorded.
    fn stats(&self) -> &FrameStats;
}

/// A renderer owned by the game and borrowed by the window for each frame.
pub type SharedRenderer = Rc<RefCell<dyn Renderer>>;
