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

//! # Vixen Infra
//!
//! Concrete implementations of the contracts declared in `vixen-core`: the
//! OpenGL and DirectX renderer backends with the factory that selects one at
//! startup, the `winit` window and input adapter, and `image`-backed textures.

#![warn(missing_docs)]

pub mod asset;
pub mod graphics;
pub mod platform;

pub use asset::ImageTexture;
pub use graphics::{available_backends, create_renderer, GlRenderer};
pub use platform::input::translate_window_event;
pub use platform::window::WinitGameWindow;
