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

//! Textures decoded on the CPU from image files.

use std::io::ErrorKind;
use std::path::Path;

use vixen_core::asset::{Texture, TextureError, TextureId, TextureInfo};

/// A texture whose pixels live in memory as tightly packed RGBA8, sRGB encoded.
///
/// The id is allocated on construction and survives reloads, so a texture keeps
/// its identity when `init_from_file` replaces its contents.
#[derive(Debug)]
pub struct ImageTexture {
    info: TextureInfo,
    pixels: Vec<u8>,
}

impl ImageTexture {
    /// Creates an empty, unloaded texture with a fresh id.
    pub fn new() -> Self {
        Self {
            info: TextureInfo::unloaded(TextureId::allocate()),
            pixels: Vec::new(),
        }
    }

    /// Creates a texture and loads it from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let mut texture = Self::new();
        texture.init_from_file(path.as_ref())?;
        Ok(texture)
    }

    /// The decoded pixels, row by row, four bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl Default for ImageTexture {
    fn default() -> Self {
        Self::new()
    }
}

impl Texture for ImageTexture {
    fn init_from_file(&mut self, path: &Path) -> Result<(), TextureError> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TextureError::NotFound(path.to_path_buf()),
            _ => TextureError::Io(e),
        })?;

        let rgba = image::load_from_memory(&bytes)
            .map_err(|e| TextureError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
            .to_rgba8();
        let (width, height) = rgba.dimensions();

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!(
            "Loaded texture {} '{name}' ({width}x{height}) from '{}'.",
            self.info.unique_id(),
            path.display()
        );

        self.info = TextureInfo::new(self.info.unique_id(), name, width, height);
        self.pixels = rgba.into_raw();
        Ok(())
    }

    fn info(&self) -> &TextureInfo {
        &self.info
    }
}
