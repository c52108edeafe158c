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

//! The OpenGL renderer backend.

use raw_window_handle::RawWindowHandle;
use vixen_core::math::LinearRgba;
use vixen_core::renderer::{GraphicsBackend, RenderError};

use super::common::{forward_renderer_to_core, surface_kind, BackendCore};

/// A renderer presenting through an OpenGL context.
///
/// OpenGL contexts exist on every desktop windowing system, so any window
/// handle that resolves is accepted.
#[derive(Debug)]
pub struct GlRenderer {
    core: BackendCore,
}

impl GlRenderer {
    /// Creates an uninitialized OpenGL renderer.
    pub fn new() -> Self {
        Self {
            core: BackendCore::new(GraphicsBackend::OpenGl),
        }
    }

    /// The color used by color clears.
    pub fn clear_color(&self) -> LinearRgba {
        self.core.clear_color()
    }

    /// The windowing system of the surface, once initialized.
    pub fn surface_kind(&self) -> Option<&'static str> {
        self.core.surface().as_ref().map(surface_kind)
    }

    fn accept_surface(window: RawWindowHandle) -> Result<(), RenderError> {
        log::debug!("Creating OpenGL context for a {} surface.", surface_kind(&window));
        Ok(())
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

forward_renderer_to_core!(GlRenderer);
