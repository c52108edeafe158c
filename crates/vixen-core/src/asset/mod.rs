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

//! Asset contracts consumed by the renderer.
//!
//! Only the texture contract carries behavior here; fonts and models are opaque
//! to the engine core and are described by the minimal metadata a backend needs
//! to decide whether a draw call is worth submitting.

pub mod texture;

pub use self::texture::{Texture, TextureError, TextureId, TextureInfo};

/// A font that the renderer can draw text with.
pub trait Font: std::fmt::Debug {
    /// The family or file name of the font.
    fn name(&self) -> &str;

    /// The distance between two baselines, in pixels.
    fn line_height(&self) -> f32;
}

/// A renderable 3D model.
pub trait Model: std::fmt::Debug {
    /// A human-readable name for the model.
    fn name(&self) -> &str;

    /// The number of vertices across all meshes of the model.
    fn vertex_count(&self) -> usize;
}
