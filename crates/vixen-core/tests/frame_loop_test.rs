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

//! Integration tests for the shared frame sequence and window back-references.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use vixen_core::asset::{Font, Model, Texture};
use vixen_core::math::{LinearRgba, Rect, Vec2};
use vixen_core::platform::{
    attach_and_initialize, run_frame, BackReferences, GameHost, InputEvent, NativeHandle,
    WindowError,
};
use vixen_core::renderer::{ClearFlags, FrameStats, GraphicsBackend, RenderError, Renderer};

// --- Test Setup: a renderer and a host that journal every call ---
type Journal = Rc<RefCell<Vec<String>>>;

#[derive(Debug)]
struct JournalRenderer {
    journal: Journal,
    fail_init: bool,
    has_handle: bool,
    initialized: bool,
    stats: FrameStats,
}

impl JournalRenderer {
    fn new(journal: Journal) -> Self {
        Self {
            journal,
            fail_init: false,
            has_handle: false,
            initialized: false,
            stats: FrameStats::default(),
        }
    }

    fn log(&self, entry: &str) {
        self.journal.borrow_mut().push(entry.to_string());
    }
}

impl Renderer for JournalRenderer {
    fn backend(&self) -> GraphicsBackend {
        GraphicsBackend::OpenGl
    }
    fn initialize(&mut self) -> Result<(), RenderError> {
        self.log("initialize");
        if self.fail_init {
            return Err(RenderError::InitializationFailed("test".into()));
        }
        if !self.has_handle {
            return Err(RenderError::NoNativeHandle);
        }
        self.initialized = true;
        Ok(())
    }
    fn deinitialize(&mut self) {
        self.log("deinitialize");
        self.initialized = false;
    }
    fn is_initialized(&self) -> bool {
        self.initialized
    }
    fn set_clear_color(&mut self, _color: LinearRgba) {}
    fn clear_buffer(&mut self, flags: ClearFlags) {
        self.log("clear");
        self.stats.last_clear = Some(flags);
    }
    fn swap_buffers(&mut self) {
        self.log("swap");
        self.stats.frame_number += 1;
    }
    fn attach_native_handle(&mut self, _handle: NativeHandle) {
        self.log("attach");
        self.has_handle = true;
    }
    fn render_texture_2d(&mut self, _texture: &dyn Texture, _position: Vec2, _source: Rect) {}
    fn render_text_2d(&mut self, _font: &dyn Font, _text: &str, _position: Vec2) {}
    fn render_model(&mut self, _model: &dyn Model) {}
    fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

struct JournalHost {
    journal: Journal,
}

impl GameHost for JournalHost {
    fn startup(&self, _renderer: &mut dyn Renderer) {
        self.journal.borrow_mut().push("startup".into());
    }
    fn handle_input(&self, _event: &InputEvent) {}
    fn update(&self, dt: f32) {
        self.journal.borrow_mut().push(format!("update {dt}"));
    }
    fn render(&self, renderer: &mut dyn Renderer) {
        self.journal.borrow_mut().push("render".into());
        assert!(renderer.stats().last_clear.is_some());
    }
    fn end_frame(&self) {
        self.journal.borrow_mut().push("end_frame".into());
    }
    fn shutdown(&self) {}
    fn exit_requested(&self) -> bool {
        false
    }
}

/// A handle that never resolves; the journal renderer does not inspect it.
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
// ---

#[test]
fn test_run_frame_orders_update_clear_render_swap() {
    let journal: Journal = Rc::default();
    let host = JournalHost {
        journal: journal.clone(),
    };
    let renderer = RefCell::new(JournalRenderer::new(journal.clone()));

    run_frame(&host, &renderer, 0.5);

    assert_eq!(
        *journal.borrow(),
        vec!["update 0.5", "clear", "render", "swap", "end_frame"]
    );
    let renderer = renderer.borrow();
    assert_eq!(renderer.stats().frame_number, 1);
    assert_eq!(
        renderer.stats().last_clear,
        Some(ClearFlags::COLOR | ClearFlags::DEPTH)
    );
}

#[test]
fn test_attach_and_initialize_attaches_first() {
    let journal: Journal = Rc::default();
    let renderer = RefCell::new(JournalRenderer::new(journal.clone()));

    attach_and_initialize(&renderer, Arc::new(NullHandle)).expect("initialization succeeds");

    assert_eq!(*journal.borrow(), vec!["attach", "initialize"]);
    assert!(renderer.borrow().is_initialized());
}

#[test]
fn test_attach_and_initialize_propagates_failure() {
    let journal: Journal = Rc::default();
    let mut failing = JournalRenderer::new(journal);
    failing.fail_init = true;
    let renderer = RefCell::new(failing);

    let result = attach_and_initialize(&renderer, Arc::new(NullHandle));

    assert!(matches!(result, Err(RenderError::InitializationFailed(_))));
    assert!(!renderer.borrow().is_initialized());
}

#[test]
fn test_back_references_report_missing_targets() {
    let journal: Journal = Rc::default();
    let mut refs = BackReferences::new();
    assert!(matches!(refs.upgrade(), Err(WindowError::Detached("game"))));

    let host: Rc<dyn GameHost> = Rc::new(JournalHost {
        journal: journal.clone(),
    });
    refs.set_parent(Rc::downgrade(&host));
    assert!(matches!(
        refs.upgrade(),
        Err(WindowError::Detached("renderer"))
    ));

    let renderer: Rc<RefCell<dyn Renderer>> =
        Rc::new(RefCell::new(JournalRenderer::new(journal)));
    refs.set_renderer(Rc::downgrade(&renderer));
    assert!(refs.is_bound());

    drop(renderer);
    assert!(!refs.is_bound());
}

#[test]
fn test_back_references_do_not_keep_the_game_alive() {
    let journal: Journal = Rc::default();
    let host: Rc<dyn GameHost> = Rc::new(JournalHost { journal });
    let weak: Weak<dyn GameHost> = Rc::downgrade(&host);
    let mut refs = BackReferences::new();
    refs.set_parent(weak);

    assert_eq!(Rc::strong_count(&host), 1);
    drop(host);
    assert!(matches!(refs.upgrade(), Err(WindowError::Detached("game"))));
}
