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

//! The game object: owns the window, the renderer and the input state, and
//! runs the main loop.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use vixen_core::platform::{
    apply_input, GameHost, GameWindow, InputEvent, KeyboardState, MouseState,
};
use vixen_core::renderer::{RenderError, Renderer, SharedRenderer};
use vixen_infra::{create_renderer, WinitGameWindow};

use crate::config::{ConfigError, GameConfig};

/// An error that prevents a game from being constructed.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The configured renderer backend cannot be created.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Built and wired, the loop has not started.
    Constructed,
    /// Inside [`Game::run`].
    Running,
    /// The loop has ended and the renderer was deinitialized.
    ShutDown,
}

/// What the game logic can see and do during a callback.
pub struct GameContext<'a> {
    config: &'a GameConfig,
    keyboard: &'a KeyboardState,
    mouse: &'a MouseState,
    exit: &'a Cell<bool>,
}

impl GameContext<'_> {
    /// The configuration the game was built from.
    pub fn config(&self) -> &GameConfig {
        self.config
    }

    /// The keyboard state for the current frame.
    pub fn keyboard(&self) -> &KeyboardState {
        self.keyboard
    }

    /// The mouse state for the current frame.
    pub fn mouse(&self) -> &MouseState {
        self.mouse
    }

    /// Asks the main loop to stop after the current frame.
    pub fn request_exit(&self) {
        self.exit.set(true);
    }

    /// Returns `true` once an exit was requested.
    pub fn exit_requested(&self) -> bool {
        self.exit.get()
    }
}

/// The user-provided part of a game. Every hook does nothing by default.
pub trait GameLogic {
    /// Called once the renderer is initialized, before the first frame.
    fn on_startup(&mut self, _ctx: &GameContext<'_>, _renderer: &mut dyn Renderer) {}

    /// Advances the game by `dt` seconds.
    fn on_update(&mut self, _ctx: &GameContext<'_>, _dt: f32) {}

    /// Submits draw calls. The buffers were cleared just before.
    fn on_render(&mut self, _renderer: &mut dyn Renderer) {}

    /// Called once after the last frame.
    fn on_shutdown(&mut self) {}
}

/// State reachable from the window through its back-reference.
struct GameShared {
    config: GameConfig,
    keyboard: RefCell<KeyboardState>,
    mouse: RefCell<MouseState>,
    logic: RefCell<Box<dyn GameLogic>>,
    exit: Cell<bool>,
}

impl GameShared {
    fn with_context<R>(&self, f: impl FnOnce(&GameContext<'_>) -> R) -> R {
        let keyboard = self.keyboard.borrow();
        let mouse = self.mouse.borrow();
        f(&GameContext {
            config: &self.config,
            keyboard: &keyboard,
            mouse: &mouse,
            exit: &self.exit,
        })
    }
}

impl GameHost for GameShared {
    fn startup(&self, renderer: &mut dyn Renderer) {
        log::info!("Game starting up with the {} renderer.", renderer.backend());
        let mut logic = self.logic.borrow_mut();
        self.with_context(|ctx| logic.on_startup(ctx, renderer));
    }

    fn handle_input(&self, event: &InputEvent) {
        apply_input(
            event,
            &mut self.keyboard.borrow_mut(),
            &mut self.mouse.borrow_mut(),
        );
    }

    fn update(&self, dt: f32) {
        let mut logic = self.logic.borrow_mut();
        self.with_context(|ctx| logic.on_update(ctx, dt));
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        self.logic.borrow_mut().on_render(renderer);
    }

    fn end_frame(&self) {
        self.keyboard.borrow_mut().end_frame();
        self.mouse.borrow_mut().end_frame();
    }

    fn shutdown(&self) {
        log::info!("Game shutting down.");
        self.logic.borrow_mut().on_shutdown();
    }

    fn exit_requested(&self) -> bool {
        self.exit.get()
    }
}

/// A game: configuration, window, renderer and input state, wired together.
///
/// The game owns everything. The window only holds weak back-references to the
/// game's shared state and to the renderer, which it upgrades while `run` lasts.
pub struct Game {
    shared: Rc<GameShared>,
    window: Box<dyn GameWindow>,
    renderer: SharedRenderer,
    state: GameState,
}

impl Game {
    /// Builds a game with a `winit` window and the renderer backend named in
    /// the configuration.
    ///
    /// # Errors
    /// Fails if the configuration is invalid or the backend is not available on
    /// this platform.
    pub fn new(config: GameConfig, logic: impl GameLogic + 'static) -> Result<Self, GameError> {
        config.validate()?;
        let window = WinitGameWindow::new(config.window_args());
        let renderer = create_renderer(config.renderer.backend)?;
        Self::from_parts(config, Box::new(window), renderer, logic)
    }

    /// Wires caller-provided collaborators into a game.
    pub fn from_parts(
        config: GameConfig,
        mut window: Box<dyn GameWindow>,
        renderer: SharedRenderer,
        logic: impl GameLogic + 'static,
    ) -> Result<Self, GameError> {
        let clear_color = config.clear_color()?;
        renderer.borrow_mut().set_clear_color(clear_color);

        let shared = Rc::new(GameShared {
            config,
            keyboard: RefCell::new(KeyboardState::new()),
            mouse: RefCell::new(MouseState::new()),
            logic: RefCell::new(Box::new(logic)),
            exit: Cell::new(false),
        });
        window.set_parent(Rc::downgrade(&(shared.clone() as Rc<dyn GameHost>)));
        window.set_renderer(Rc::downgrade(&renderer));

        log::debug!(
            "Game constructed: window '{}', {} renderer.",
            window.args().title,
            renderer.borrow().backend()
        );
        Ok(Self {
            shared,
            window,
            renderer,
            state: GameState::Constructed,
        })
    }

    /// Runs the main loop until the window closes or the game asks to exit.
    ///
    /// Returns `0` on a clean exit and `-1` if the loop failed. The renderer is
    /// deinitialized before returning on both paths. A game runs once: later
    /// calls log a warning and return `-1`.
    pub fn run(&mut self) -> i32 {
        if self.state != GameState::Constructed {
            log::warn!("Game::run called on a game in state {:?}.", self.state);
            return -1;
        }
        self.state = GameState::Running;

        let code = match self.window.run() {
            Ok(()) => 0,
            Err(e) => {
                log::error!("Application loop encountered error: {e}");
                -1
            }
        };

        self.renderer.borrow_mut().deinitialize();
        self.state = GameState::ShutDown;
        log::info!("Game exited with code {code}.");
        code
    }

    /// The window driving the loop.
    pub fn window(&self) -> &dyn GameWindow {
        &*self.window
    }

    /// The renderer, shared with the window.
    pub fn renderer(&self) -> &SharedRenderer {
        &self.renderer
    }

    /// The configuration the game was built from.
    pub fn config(&self) -> &GameConfig {
        &self.shared.config
    }

    /// The keyboard state.
    pub fn keyboard(&self) -> Ref<'_, KeyboardState> {
        self.shared.keyboard.borrow()
    }

    /// The mouse state.
    pub fn mouse(&self) -> Ref<'_, MouseState> {
        self.shared.mouse.borrow()
    }

    /// The lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("title", &self.window.args().title)
            .field("renderer", &self.renderer)
            .field("state", &self.state)
            .finish()
    }
}
