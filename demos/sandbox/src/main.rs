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

//! A small Vixen game: a marker moved with the arrow keys or WASD, drawn as a
//! textured quad with a status line. Escape quits.
//!
//! Usage: `sandbox [config.ron] [texture.png]`

use anyhow::{Context, Result};
use vixen_sdk::logging;
use vixen_sdk::prelude::*;

const SPEED: f32 = 240.0;

#[derive(Debug)]
struct DebugFont;

impl Font for DebugFont {
    fn name(&self) -> &str {
        "debug-8x16"
    }

    fn line_height(&self) -> f32 {
        16.0
    }
}

#[derive(Debug)]
struct Marker;

impl Model for Marker {
    fn name(&self) -> &str {
        "marker"
    }

    fn vertex_count(&self) -> usize {
        24
    }
}

struct Sandbox {
    texture: ImageTexture,
    position: Vec3,
    elapsed: f32,
}

impl Sandbox {
    fn new(texture_path: Option<String>) -> Self {
        let mut texture = ImageTexture::new();
        if let Some(path) = texture_path {
            if let Err(e) = texture.init_from_file(std::path::Path::new(&path)) {
                log::warn!("Running without a texture: {e}");
            }
        }
        Self {
            texture,
            position: Vec3::new(100.0, 100.0, 0.0),
            elapsed: 0.0,
        }
    }

    fn direction(ctx: &GameContext<'_>) -> Vec3 {
        let keys = ctx.keyboard();
        let held = |a: &str, b: &str| keys.is_down(a) || keys.is_down(b);
        let mut direction = Vec3::ZERO;
        if held("ArrowLeft", "KeyA") {
            direction += Vec3::LEFT;
        }
        if held("ArrowRight", "KeyD") {
            direction += Vec3::RIGHT;
        }
        // Screen space grows downwards.
        if held("ArrowUp", "KeyW") {
            direction += Vec3::DOWN;
        }
        if held("ArrowDown", "KeyS") {
            direction += Vec3::UP;
        }
        direction.normalize()
    }
}

impl GameLogic for Sandbox {
    fn on_startup(&mut self, ctx: &GameContext<'_>, renderer: &mut dyn Renderer) {
        log::info!(
            "Sandbox '{}' running on {}.",
            ctx.config().window.title,
            renderer.backend()
        );
    }

    fn on_update(&mut self, ctx: &GameContext<'_>, dt: f32) {
        self.elapsed += dt;
        self.position += Self::direction(ctx) * (SPEED * dt);
        if ctx.mouse().was_pressed(MouseButton::Left) {
            let cursor = ctx.mouse().position();
            self.position = Vec3::new(cursor.x, cursor.y, 0.0);
        }
        if ctx.keyboard().was_pressed("Escape") {
            ctx.request_exit();
        }
    }

    fn on_render(&mut self, renderer: &mut dyn Renderer) {
        let at = Vec2::new(self.position.x(), self.position.y());
        let source = Rect::from_size(self.texture.width(), self.texture.height());
        renderer.render_texture_2d(&self.texture, at, source);
        renderer.render_model(&Marker);
        renderer.render_text_2d(
            &DebugFont,
            &format!("{:#} t={:.1}s", self.position, self.elapsed),
            Vec2::new(8.0, 8.0),
        );
    }

    fn on_shutdown(&mut self) {
        log::info!("Sandbox ran for {:.1}s.", self.elapsed);
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "sandbox.ron".to_string());

    let mut config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("loading '{config_path}'"))?;
    config
        .apply_env_overrides()
        .context("applying environment overrides")?;
    logging::init(&config.log_filter);

    let mut game = Game::new(config, Sandbox::new(args.next())).context("building the game")?;
    std::process::exit(game.run());
}
