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

//! Renderer backends and the factory that picks one at startup.

mod common;
#[cfg(target_os = "windows")]
mod dx;
mod gl;

use std::cell::RefCell;
use std::rc::Rc;

use vixen_core::renderer::{GraphicsBackend, RenderError, SharedRenderer};

#[cfg(target_os = "windows")]
pub use self::dx::DxRenderer;
pub use self::gl::GlRenderer;

/// Creates the renderer for `backend`.
///
/// # Errors
/// Returns [`RenderError::UnsupportedBackend`] when the backend is not built
/// for the current platform (DirectX outside Windows).
pub fn create_renderer(backend: GraphicsBackend) -> Result<SharedRenderer, RenderError> {
    log::info!("Creating {backend} renderer.");
    match backend {
        GraphicsBackend::OpenGl => Ok(Rc::new(RefCell::new(GlRenderer::new()))),
        #[cfg(target_os = "windows")]
        GraphicsBackend::DirectX => Ok(Rc::new(RefCell::new(DxRenderer::new()))),
        #[cfg(not(target_os = "windows"))]
        GraphicsBackend::DirectX => {
            log::error!("The {backend} backend is only available on Windows.");
            Err(RenderError::UnsupportedBackend(backend))
        }
    }
}

/// Lists the backends this build can create, in order of preference.
pub fn available_backends() -> Vec<GraphicsBackend> {
    GraphicsBackend::ALL
        .into_iter()
        .filter(|backend| backend.is_available())
        .collect()
}
