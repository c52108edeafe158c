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

//! The public-facing SDK for Vixen games.
//!
//! A game is a [`GameConfig`] plus a [`GameLogic`] implementation handed to
//! [`Game::new`]; [`Game::run`] opens the window, drives the loop and returns a
//! process exit code.

#![warn(missing_docs)]

pub mod config;
mod game;
pub mod logging;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, GameContext, GameError, GameLogic, GameState};

/// The types most games need, in one import.
pub mod prelude {
    pub use crate::{Game, GameConfig, GameContext, GameLogic};
    pub use vixen_core::asset::{Font, Model, Texture};
    pub use vixen_core::math::{LinearRgba, Rect, Vec2, Vec3};
    pub use vixen_core::platform::MouseButton;
    pub use vixen_core::renderer::{ClearFlags, GraphicsBackend, Renderer};
    pub use vixen_infra::ImageTexture;
}
