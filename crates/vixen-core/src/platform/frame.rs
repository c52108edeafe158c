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

//! The per-frame sequence shared by every window implementation.

use std::cell::RefCell;

use crate::platform::{GameHost, NativeHandle};
use crate::renderer::{ClearFlags, RenderError, Renderer};

/// Binds the renderer to a freshly created window and initializes it.
pub fn attach_and_initialize(
    renderer: &RefCell<dyn Renderer>,
    handle: NativeHandle,
) -> Result<(), RenderError> {
    let mut renderer = renderer.borrow_mut();
    log::debug!("Attaching the window to the {} renderer.", renderer.backend());
    renderer.attach_native_handle(handle);
    let result = renderer.initialize();
    if let Err(e) = &result {
        log::error!("{} renderer failed to initialize: {e}", renderer.backend());
    }
    result
}

/// Runs one frame of the cooperative main loop.
///
/// Order: game update, clear (color and depth), game draw calls, present,
/// then the input edges of the frame are cleared.
pub fn run_frame(host: &dyn GameHost, renderer: &RefCell<dyn Renderer>, dt: f32) {
    host.update(dt);
    {
        let mut renderer = renderer.borrow_mut();
        renderer.clear_buffer(ClearFlags::default());
        host.render(&mut *renderer);
        renderer.swap_buffers();
    }
    host.end_frame();
}
