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

//! The texture contract: identity and metadata of a loaded image.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// A process-unique identity token for a texture.
///
/// Two textures are the same texture if and only if their ids are equal,
/// regardless of their names, sizes or pixels. Ids come from a 64-bit counter
/// that cannot realistically wrap within a process, so they are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

impl TextureId {
    /// Hands out a fresh id that no other texture in this process has received.
    pub fn allocate() -> Self {
        Self(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only metadata shared by every texture implementation.
#[derive(Debug, Clone)]
pub struct TextureInfo {
    id: TextureId,
    name: String,
    width: u32,
    height: u32,
}

impl TextureInfo {
    /// Creates metadata for a texture.
    pub fn new(id: TextureId, name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id,
            name: name.into(),
            width,
            height,
        }
    }

    /// Metadata for a texture that has been given an id but no pixels yet.
    pub fn unloaded(id: TextureId) -> Self {
        Self::new(id, String::new(), 0, 0)
    }

    /// The unique id of the texture.
    pub fn unique_id(&self) -> TextureId {
        self.id
    }

    /// The display name of the texture.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl PartialEq for TextureInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TextureInfo {}

/// An error raised while loading a texture from disk.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// The file does not exist.
    #[error("texture file not found: '{}'", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be decoded as an image.
    #[error("failed to decode texture '{}': {reason}", path.display())]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
        /// The decoder's description of the failure.
        reason: String,
    },
    /// Any other I/O failure while reading the file.
    #[error("I/O error while reading texture: {0}")]
    Io(#[from] std::io::Error),
}

/// An image asset that a renderer can draw.
///
/// Implementors own the pixel data and decide how files are read and decoded;
/// the engine only relies on the metadata exposed through [`Texture::info`].
pub trait Texture: fmt::Debug {
    /// Loads the texture from an image file, replacing any previous contents.
    fn init_from_file(&mut self, path: &Path) -> Result<(), TextureError>;

    /// Returns the metadata of the texture.
    fn info(&self) -> &TextureInfo;

    /// The unique id of the texture.
    fn unique_id(&self) -> TextureId {
        self.info().unique_id()
    }

    /// The display name of the texture.
    fn name(&self) -> &str {
        self.info().name()
    }

    /// The width in pixels.
    fn width(&self) -> u32 {
        self.info().width()
    }

    /// The height in pixels.
    fn height(&self) -> u32 {
        self.info().height()
    }

    /// Returns `true` once the texture holds pixels.
    fn is_loaded(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }
}

impl PartialEq for dyn Texture + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.unique_id() == other.unique_id()
    }
}
