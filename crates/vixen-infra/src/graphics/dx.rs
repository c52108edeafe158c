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

//! The DirectX renderer backend. Only built for Windows targets.

use raw_window_handle::RawWindowHandle;
use vixen_core::renderer::{GraphicsBackend, RenderError};

use super::common::{forward_renderer_to_core, surface_kind, BackendCore};

/// A renderer presenting through a DXGI swap chain.
#[derive(Debug)]
pub struct DxRenderer {
    core: BackendCore,
}

impl DxRenderer {
    /// Creates an uninitialized DirectX renderer.
    pub fn new() -> Self {
        Self {
            core: BackendCore::new(GraphicsBackend::DirectX),
        }
    }

    fn accept_surface(window: RawWindowHandle) -> Result<(), RenderError> {
        match window {
            RawWindowHandle::Win32(win32) => {
                log::debug!("Creating DXGI swap chain for HWND {:?}.", win32.hwnd);
                Ok(())
            }
            other => Err(RenderError::InvalidNativeHandle(format!(
                "DirectX needs a Win32 window, got {}",
                surface_kind(&other)
            ))),
        }
    }
}

impl Default for DxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

forward_renderer_to_core!(DxRenderer);
