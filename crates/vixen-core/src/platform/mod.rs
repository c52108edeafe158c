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

//! Provides abstractions over platform-specific functionalities.
//!
//! This module defines the engine-wide interface to the operating system
//! window and its input devices, and the per-frame sequence a window drives.

pub mod frame;
pub mod input;
pub mod window;

pub use frame::{attach_and_initialize, run_frame};
pub use input::{apply_input, InputEvent, KeyboardState, MouseButton, MouseState};
pub use window::{
    BackReferences, GameHost, GameWindow, NativeHandle, WindowArgs, WindowError, WindowHandle,
};
