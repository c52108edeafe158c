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

//! Integration tests for the game lifecycle: wiring, the main loop result and
//! the renderer teardown guarantee.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::{Arc, Mutex, Once};

use vixen_core::asset::{Font, Model, Texture};
use vixen_core::math::{LinearRgba, Rect, Vec2};
use vixen_core::platform::{
    attach_and_initialize, run_frame, BackReferences, GameHost, GameWindow, InputEvent,
    NativeHandle, WindowArgs, WindowError,
};
use vixen_core::renderer::{
    ClearFlags, FrameStats, GraphicsBackend, RenderError, Renderer, SharedRenderer,
};
use vixen_sdk::{Game, GameConfig, GameContext, GameError, GameLogic, GameState};

// --- Test Setup: log capture ---
static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }
    fn log(&self, record: &log::Record) {
        CAPTURED
            .lock()
            .unwrap()
            .push(format!("{}: {}", record.level(), record.args()));
    }
    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn capture_logs() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in this test binary");
        log::set_max_level(log::LevelFilter::Trace);
    });
}

fn logged(needle: &str) -> bool {
    CAPTURED.lock().unwrap().iter().any(|line| line.contains(needle))
}

// --- Test Setup: a renderer that counts teardowns ---
#[derive(Debug, Default)]
struct SpyRenderer {
    deinit_calls: Rc<Cell<u32>>,
    has_handle: bool,
    initialized: bool,
    clear_color: Option<LinearRgba>,
    stats: FrameStats,
}

impl Renderer for SpyRenderer {
    fn backend(&self) -> GraphicsBackend {
        GraphicsBackend::OpenGl
    }
    fn initialize(&mut self) -> Result<(), RenderError> {
        if !self.has_handle {
            return Err(RenderError::NoNativeHandle);
        }
        self.initialized = true;
        Ok(())
    }
    fn deinitialize(&mut self) {
        self.deinit_calls.set(self.deinit_calls.get() + 1);
        self.initialized = false;
    }
    fn is_initialized(&self) -> bool {
        self.initialized
    }
    fn set_clear_color(&mut self, color: LinearRgba) {
        self.clear_color = Some(color);
    }
    fn clear_buffer(&mut self, flags: ClearFlags) {
        self.stats.clears += 1;
        self.stats.last_clear = Some(flags);
    }
    fn swap_buffers(&mut self) {
        self.stats.frame_number += 1;
        self.stats.clears = 0;
        self.stats.model_draws = 0;
    }
    fn attach_native_handle(&mut self, _handle: NativeHandle) {
        self.has_handle = true;
    }
    fn render_texture_2d(&mut self, _texture: &dyn Texture, _position: Vec2, _source: Rect) {}
    fn render_text_2d(&mut self, _font: &dyn Font, _text: &str, _position: Vec2) {}
    fn render_model(&mut self, _model: &dyn Model) {
        self.stats.model_draws += 1;
    }
    fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

// --- Test Setup: a window that plays a fixed script instead of opening ---
struct NullHandle;

impl raw_window_handle::HasWindowHandle for NullHandle {
    fn window_handle(
        &self,
    ) -> Result<raw_window_handle::WindowHandle<'_>, raw_window_handle::HandleError> {
        Err(raw_window_handle::HandleError::Unavailable)
    }
}

impl raw_window_handle::HasDisplayHandle for NullHandle {
    fn display_handle(
        &self,
    ) -> Result<raw_window_handle::DisplayHandle<'_>, raw_window_handle::HandleError> {
        Err(raw_window_handle::HandleError::Unavailable)
    }
}

struct ScriptedWindow {
    args: WindowArgs,
    refs: BackReferences,
    frames: u32,
    failure: Option<&'static str>,
}

impl ScriptedWindow {
    fn frames(frames: u32) -> Box<Self> {
        Box::new(Self {
            args: WindowArgs::default(),
            refs: BackReferences::new(),
            frames,
            failure: None,
        })
    }

    fn failing(reason: &'static str) -> Box<Self> {
        let mut window = Self::frames(0);
        window.failure = Some(reason);
        window
    }
}

impl GameWindow for ScriptedWindow {
    fn args(&self) -> &WindowArgs {
        &self.args
    }
    fn set_parent(&mut self, parent: Weak<dyn GameHost>) {
        self.refs.set_parent(parent);
    }
    fn set_renderer(&mut self, renderer: Weak<RefCell<dyn Renderer>>) {
        self.refs.set_renderer(renderer);
    }
    fn run(&mut self) -> Result<(), WindowError> {
        if let Some(reason) = self.failure {
            return Err(WindowError::WindowCreation(reason.to_string()));
        }
        let (host, renderer) = self.refs.upgrade()?;
        attach_and_initialize(&renderer, Arc::new(NullHandle))?;
        host.startup(&mut *renderer.borrow_mut());

        host.handle_input(&InputEvent::KeyPressed {
            key_code: "Space".to_string(),
        });
        for _ in 0..self.frames {
            run_frame(&*host, &renderer, 1.0 / 60.0);
            if host.exit_requested() {
                break;
            }
        }
        host.shutdown();
        Ok(())
    }
}

// --- Test Setup: game logic that journals its hooks ---
#[derive(Default)]
struct JournalLogic {
    journal: Rc<RefCell<Vec<String>>>,
    exit_after: Option<u32>,
    updates: u32,
}

#[derive(Debug)]
struct Cube;

impl Model for Cube {
    fn name(&self) -> &str {
        "cube"
    }
    fn vertex_count(&self) -> usize {
        36
    }
}

impl GameLogic for JournalLogic {
    fn on_startup(&mut self, ctx: &GameContext<'_>, renderer: &mut dyn Renderer) {
        assert!(renderer.is_initialized());
        self.journal
            .borrow_mut()
            .push(format!("startup {}", ctx.config().window.title));
    }

    fn on_update(&mut self, ctx: &GameContext<'_>, _dt: f32) {
        self.updates += 1;
        let space = if ctx.keyboard().was_pressed("Space") {
            "pressed"
        } else if ctx.keyboard().is_down("Space") {
            "held"
        } else {
            "up"
        };
        self.journal.borrow_mut().push(format!("update space={space}"));
        if Some(self.updates) == self.exit_after {
            ctx.request_exit();
        }
    }

    fn on_render(&mut self, renderer: &mut dyn Renderer) {
        assert_eq!(renderer.stats().clears, 1);
        renderer.render_model(&Cube);
    }

    fn on_shutdown(&mut self) {
        self.journal.borrow_mut().push("shutdown".to_string());
    }
}

fn spy_renderer() -> (SharedRenderer, Rc<Cell<u32>>) {
    let deinit_calls = Rc::new(Cell::new(0));
    let spy = SpyRenderer {
        deinit_calls: deinit_calls.clone(),
        ..SpyRenderer::default()
    };
    (Rc::new(RefCell::new(spy)), deinit_calls)
}
// ---

#[test]
fn test_successful_loop_returns_zero_and_tears_down_once() {
    capture_logs();
    let (renderer, deinit_calls) = spy_renderer();
    let logic = JournalLogic::default();
    let journal = logic.journal.clone();

    let mut game = Game::from_parts(
        GameConfig::default(),
        ScriptedWindow::frames(3),
        renderer.clone(),
        logic,
    )
    .expect("valid parts");
    assert_eq!(game.state(), GameState::Constructed);

    assert_eq!(game.run(), 0);

    assert_eq!(deinit_calls.get(), 1);
    assert_eq!(game.state(), GameState::ShutDown);
    assert!(!renderer.borrow().is_initialized());
    assert_eq!(renderer.borrow().stats().frame_number, 3);
    assert_eq!(
        *journal.borrow(),
        vec![
            "startup Vixen",
            "update space=pressed",
            "update space=held",
            "update space=held",
            "shutdown",
        ]
    );
    assert!(game.keyboard().is_down("Space"));
}

#[test]
fn test_failing_loop_returns_minus_one_and_still_tears_down() {
    capture_logs();
    let (renderer, deinit_calls) = spy_renderer();

    let mut game = Game::from_parts(
        GameConfig::default(),
        ScriptedWindow::failing("no display"),
        renderer,
        JournalLogic::default(),
    )
    .expect("valid parts");

    assert_eq!(game.run(), -1);
    assert_eq!(deinit_calls.get(), 1);
    assert_eq!(game.state(), GameState::ShutDown);
    assert!(logged("Application loop encountered error: failed to create the window: no display"));
}

#[test]
fn test_second_run_is_refused_without_second_teardown() {
    capture_logs();
    let (renderer, deinit_calls) = spy_renderer();
    let mut game = Game::from_parts(
        GameConfig::default(),
        ScriptedWindow::frames(1),
        renderer,
        JournalLogic::default(),
    )
    .expect("valid parts");

    assert_eq!(game.run(), 0);
    assert_eq!(game.run(), -1);
    assert_eq!(deinit_calls.get(), 1);
}

#[test]
fn test_exit_request_stops_the_loop() {
    let (renderer, _) = spy_renderer();
    let logic = JournalLogic {
        exit_after: Some(2),
        ..JournalLogic::default()
    };
    let journal = logic.journal.clone();
    let mut game = Game::from_parts(
        GameConfig::default(),
        ScriptedWindow::frames(100),
        renderer.clone(),
        logic,
    )
    .expect("valid parts");

    assert_eq!(game.run(), 0);
    assert_eq!(renderer.borrow().stats().frame_number, 2);
    assert_eq!(journal.borrow().last().map(String::as_str), Some("shutdown"));
}

#[test]
fn test_configured_clear_color_reaches_the_renderer() {
    let (renderer, _) = spy_renderer();
    let mut config = GameConfig::default();
    config.renderer.clear_color = "#FFFFFF".to_string();

    let game = Game::from_parts(
        config,
        ScriptedWindow::frames(0),
        renderer.clone(),
        JournalLogic::default(),
    )
    .expect("valid parts");

    let spy_color = format!("{:?}", renderer.borrow());
    assert!(spy_color.contains("clear_color: Some"));
    assert_eq!(game.config().renderer.clear_color, "#FFFFFF");
    assert_eq!(game.window().args(), &WindowArgs::default());
}

#[test]
fn test_invalid_clear_color_fails_construction() {
    let (renderer, _) = spy_renderer();
    let mut config = GameConfig::default();
    config.renderer.clear_color = "teal".to_string();

    let result = Game::from_parts(
        config,
        ScriptedWindow::frames(0),
        renderer,
        JournalLogic::default(),
    );
    assert!(matches!(result, Err(GameError::Config(_))));
}

#[test]
fn test_new_builds_the_configured_backend_without_opening_a_window() {
    let game = Game::new(GameConfig::default(), JournalLogic::default()).expect("OpenGL game");
    assert_eq!(game.renderer().borrow().backend(), GraphicsBackend::OpenGl);
    assert!(!game.renderer().borrow().is_initialized());
    assert_eq!(game.state(), GameState::Constructed);
    assert_eq!(game.mouse().position(), Vec2::ZERO);
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_new_rejects_unavailable_backend() {
    let mut config = GameConfig::default();
    config.renderer.backend = GraphicsBackend::DirectX;

    let result = Game::new(config, JournalLogic::default());
    assert!(matches!(
        result,
        Err(GameError::Render(RenderError::UnsupportedBackend(
            GraphicsBackend::DirectX
        )))
    ));
}
