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

//! Defines the error type of the rendering subsystem.

use super::GraphicsBackend;

/// An error that can occur while creating or initializing a renderer.
///
/// Draw submissions never fail; only setup does.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The requested backend cannot be created on this platform.
    #[error("the {0} backend is not available on this platform")]
    UnsupportedBackend(GraphicsBackend),
    /// `initialize` was called before a native window handle was attached.
    #[error("no native window handle has been attached to the renderer")]
    NoNativeHandle,
    /// The attached native handle cannot be used by this backend.
    #[error("the native window handle is unusable: {0}")]
    InvalidNativeHandle(String),
    /// A failure occurred during the initialization of the graphics backend.
    #[error("failed to initialize graphics backend: {0}")]
    InitializationFailed(String),
}
