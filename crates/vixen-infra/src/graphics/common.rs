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

//! State and draw-call bookkeeping shared by every renderer backend.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use vixen_core::asset::{Font, Model, Texture};
use vixen_core::math::{LinearRgba, Rect, Vec2};
use vixen_core::platform::NativeHandle;
use vixen_core::renderer::{ClearFlags, FrameStats, GraphicsBackend, RenderError};

/// The backend-independent half of a renderer.
///
/// Backends own one of these and forward every [`Renderer`] call to it, adding
/// only their own handle validation on `initialize`.
///
/// [`Renderer`]: vixen_core::renderer::Renderer
pub(crate) struct BackendCore {
    backend: GraphicsBackend,
    handle: Option<NativeHandle>,
    surface: Option<RawWindowHandle>,
    initialized: bool,
    clear_color: LinearRgba,
    stats: FrameStats,
}

impl BackendCore {
    pub(crate) fn new(backend: GraphicsBackend) -> Self {
        Self {
            backend,
            handle: None,
            surface: None,
            initialized: false,
            clear_color: LinearRgba::BLACK,
            stats: FrameStats::default(),
        }
    }

    pub(crate) fn backend(&self) -> GraphicsBackend {
        self.backend
    }

    pub(crate) fn clear_color(&self) -> LinearRgba {
        self.clear_color
    }

    pub(crate) fn surface(&self) -> Option<RawWindowHandle> {
        self.surface
    }

    /// Brings the backend up once `accept` has vetted the window handle.
    ///
    /// `accept` receives the resolved raw window handle and rejects the ones
    /// the backend cannot present to.
    pub(crate) fn initialize(
        &mut self,
        accept: impl FnOnce(RawWindowHandle) -> Result<(), RenderError>,
    ) -> Result<(), RenderError> {
        if self.initialized {
            log::debug!("{} renderer already initialized.", self.backend);
            return Ok(());
        }
        let handle = self.handle.as_ref().ok_or(RenderError::NoNativeHandle)?;
        let window = handle
            .window_handle()
            .map_err(|e| RenderError::InvalidNativeHandle(e.to_string()))?
            .as_raw();
        handle
            .display_handle()
            .map_err(|e| RenderError::InvalidNativeHandle(e.to_string()))?;
        accept(window)?;

        self.surface = Some(window);
        self.initialized = true;
        self.stats = FrameStats {
            skipped_draws: self.stats.skipped_draws,
            ..FrameStats::default()
        };
        log::info!("{} renderer initialized ({}).", self.backend, surface_kind(&window));
        Ok(())
    }

    pub(crate) fn deinitialize(&mut self) {
        if !self.initialized {
            return;
        }
        self.initialized = false;
        self.surface = None;
        log::info!(
            "{} renderer deinitialized after {} frame(s).",
            self.backend,
            self.stats.frame_number
        );
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn set_clear_color(&mut self, color: LinearRgba) {
        self.clear_color = color;
    }

    pub(crate) fn clear_buffer(&mut self, flags: ClearFlags) {
        if !self.initialized {
            self.skip("clear", "renderer not initialized");
            return;
        }
        self.stats.clears += 1;
        self.stats.last_clear = Some(flags);
    }

    pub(crate) fn swap_buffers(&mut self) {
        if !self.initialized {
            self.skip("swap", "renderer not initialized");
            return;
        }
        self.stats.frame_number += 1;
        self.stats.clears = 0;
        self.stats.last_clear = None;
        self.stats.texture_draws = 0;
        self.stats.text_draws = 0;
        self.stats.model_draws = 0;
    }

    pub(crate) fn attach_native_handle(&mut self, handle: NativeHandle) {
        if self.initialized {
            log::warn!(
                "{} renderer received a new native handle while initialized; it applies after the next initialize.",
                self.backend
            );
        }
        self.handle = Some(handle);
    }

    pub(crate) fn render_texture_2d(&mut self, texture: &dyn Texture, position: Vec2, source: Rect) {
        if !self.initialized {
            return self.skip("texture", "renderer not initialized");
        }
        if !texture.is_loaded() {
            return self.skip("texture", "texture not loaded");
        }
        if source.is_empty() {
            return self.skip("texture", "empty source rectangle");
        }
        log::trace!(
            "{}: texture {} '{}' at ({}, {})",
            self.backend,
            texture.unique_id(),
            texture.name(),
            position.x,
            position.y
        );
        self.stats.texture_draws += 1;
    }

    pub(crate) fn render_text_2d(&mut self, font: &dyn Font, text: &str, position: Vec2) {
        if !self.initialized {
            return self.skip("text", "renderer not initialized");
        }
        if text.is_empty() {
            return self.skip("text", "empty string");
        }
        log::trace!(
            "{}: {} char(s) of '{}' at ({}, {})",
            self.backend,
            text.chars().count(),
            font.name(),
            position.x,
            position.y
        );
        self.stats.text_draws += 1;
    }

    pub(crate) fn render_model(&mut self, model: &dyn Model) {
        if !self.initialized {
            return self.skip("model", "renderer not initialized");
        }
        if model.vertex_count() == 0 {
            return self.skip("model", "model has no vertices");
        }
        log::trace!("{}: model '{}'", self.backend, model.name());
        self.stats.model_draws += 1;
    }

    pub(crate) fn stats(&self) -> &FrameStats {
        &self.stats
    }

    fn skip(&mut self, what: &str, reason: &str) {
        log::trace!("{}: {what} skipped, {reason}.", self.backend);
        self.stats.skipped_draws += 1;
    }
}

impl std::fmt::Debug for BackendCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendCore")
            .field("backend", &self.backend)
            .field("has_handle", &self.handle.is_some())
            .field("initialized", &self.initialized)
            .field("clear_color", &self.clear_color)
            .field("stats", &self.stats)
            .finish()
    }
}

/// A short platform name for a raw window handle, for logs and errors.
pub(crate) fn surface_kind(handle: &RawWindowHandle) -> &'static str {
    match handle {
        RawWindowHandle::Win32(_) => "Win32",
        RawWindowHandle::WinRt(_) => "WinRT",
        RawWindowHandle::Xlib(_) => "Xlib",
        RawWindowHandle::Xcb(_) => "Xcb",
        RawWindowHandle::Wayland(_) => "Wayland",
        RawWindowHandle::AppKit(_) => "AppKit",
        RawWindowHandle::UiKit(_) => "UIKit",
        RawWindowHandle::AndroidNdk(_) => "Android",
        RawWindowHandle::Web(_) => "Web",
        _ => "other",
    }
}

/// Implements [`Renderer`](vixen_core::renderer::Renderer) for a backend type by
/// forwarding to its `core: BackendCore` field. The backend provides
/// `fn accept_surface(RawWindowHandle) -> Result<(), RenderError>`.
macro_rules! forward_renderer_to_core {
    ($backend:ty) => {
        impl vixen_core::renderer::Renderer for $backend {
            fn backend(&self) -> vixen_core::renderer::GraphicsBackend {
                self.core.backend()
            }

            fn initialize(&mut self) -> Result<(), vixen_core::renderer::RenderError> {
                self.core.initialize(<$backend>::accept_surface)
            }

            fn deinitialize(&mut self) {
                self.core.deinitialize()
            }

            fn is_initialized(&self) -> bool {
                self.core.is_initialized()
            }

            fn set_clear_color(&mut self, color: vixen_core::math::LinearRgba) {
                self.core.set_clear_color(color)
            }

            fn clear_buffer(&mut self, flags: vixen_core::renderer::ClearFlags) {
                self.core.clear_buffer(flags)
            }

            fn swap_buffers(&mut self) {
                self.core.swap_buffers()
            }

            fn attach_native_handle(&mut self, handle: vixen_core::platform::NativeHandle) {
                self.core.attach_native_handle(handle)
            }

            fn render_texture_2d(
                &mut self,
                texture: &dyn vixen_core::asset::Texture,
                position: vixen_core::math::Vec2,
                source: vixen_core::math::Rect,
            ) {
                self.core.render_texture_2d(texture, position, source)
            }

            fn render_text_2d(
                &mut self,
                font: &dyn vixen_core::asset::Font,
                text: &str,
                position: vixen_core::math::Vec2,
            ) {
                self.core.render_text_2d(font, text, position)
            }

            fn render_model(&mut self, model: &dyn vixen_core::asset::Model) {
                self.core.render_model(model)
            }

            fn stats(&self) -> &vixen_core::renderer::FrameStats {
                self.core.stats()
            }
        }
    };
}

pub(crate) use forward_renderer_to_core;
