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

//! # Vixen Core
//!
//! Foundational crate containing the math value types, the asset and renderer
//! contracts, and the platform interfaces (window, input) that the rest of the
//! engine is written against. Concrete implementations live in `vixen-infra`.

#![warn(missing_docs)]

pub mod asset;
pub mod math;
pub mod platform;
pub mod renderer;

pub use asset::{Font, Model, Texture, TextureError, TextureId, TextureInfo};
pub use math::{LinearRgba, Rect, Vec2, Vec3};
pub use platform::{GameHost, GameWindow, NativeHandle, WindowArgs, WindowError};
pub use renderer::{ClearFlags, FrameStats, GraphicsBackend, RenderError, Renderer};
