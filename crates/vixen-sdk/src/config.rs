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

//! Game configuration, stored as RON.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vixen_core::math::LinearRgba;
use vixen_core::platform::WindowArgs;
use vixen_core::renderer::{GraphicsBackend, UnknownBackend};

/// The environment variable that overrides the configured renderer backend.
pub const BACKEND_ENV_VAR: &str = "VIXEN_BACKEND";

/// An error raised while loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid RON for a game configuration.
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The configuration could not be written out as RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    /// The clear color is not a `#RRGGBB` or `#RRGGBBAA` hex string.
    #[error("invalid clear color '{0}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),
    /// The window would have no area.
    #[error("invalid window size {width}x{height}")]
    InvalidDimensions {
        /// The configured width.
        width: u32,
        /// The configured height.
        height: u32,
    },
    /// An environment override named an unknown backend.
    #[error(transparent)]
    UnknownBackend(#[from] UnknownBackend),
}

/// Settings of the main window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// The window title.
    pub title: String,
    /// The initial inner width in logical pixels.
    pub width: u32,
    /// The initial inner height in logical pixels.
    pub height: u32,
    /// Whether the user can resize the window.
    pub resizable: bool,
    /// Whether the window starts fullscreen.
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        let args = WindowArgs::default();
        Self {
            title: args.title,
            width: args.width,
            height: args.height,
            resizable: args.resizable,
            fullscreen: args.fullscreen,
        }
    }
}

/// Settings of the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// The graphics API to render with.
    pub backend: GraphicsBackend,
    /// The color the back buffer is cleared to, as a hex string.
    pub clear_color: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            backend: GraphicsBackend::default(),
            clear_color: "#6495ED".to_string(),
        }
    }
}

/// The full configuration of a game.
///
/// Every field has a default, so a configuration file only needs to list the
/// settings it changes:
///
/// ```
/// use vixen_sdk::config::GameConfig;
///
/// let config = GameConfig::from_ron_str("(window: (title: \"Pong\"))").unwrap();
/// assert_eq!(config.window.title, "Pong");
/// assert_eq!(config.window.width, 1280);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window settings.
    pub window: WindowConfig,
    /// Renderer settings.
    pub renderer: RendererConfig,
    /// The default `env_logger` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            renderer: RendererConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Reads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&text)?;
        log::info!("Loaded configuration from '{}'.", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    ///
    /// Only a file that does not exist falls back; any other read failure,
    /// such as a permission error, is reported.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let config = Self::from_ron_str(&text)?;
                log::info!("Loaded configuration from '{}'.", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No configuration at '{}', using defaults.", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parses and validates a configuration from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::default().indentor("    ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let WindowConfig { width, height, .. } = self.window;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        self.clear_color().map(|_| ())
    }

    /// The clear color, decoded.
    pub fn clear_color(&self) -> Result<LinearRgba, ConfigError> {
        LinearRgba::from_hex(&self.renderer.clear_color)
            .ok_or_else(|| ConfigError::InvalidColor(self.renderer.clear_color.clone()))
    }

    /// Applies the overrides found in the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup` instead of the environment.
    pub fn apply_overrides_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(BACKEND_ENV_VAR) {
            let backend: GraphicsBackend = value.parse()?;
            log::info!("{BACKEND_ENV_VAR} overrides the renderer backend with {backend}.");
            self.renderer.backend = backend;
        }
        Ok(())
    }

    /// The arguments the main window is constructed from.
    pub fn window_args(&self) -> WindowArgs {
        WindowArgs {
            title: self.window.title.clone(),
            width: self.window.width,
            height: self.window.height,
            resizable: self.window.resizable,
            fullscreen: self.window.fullscreen,
        }
    }
}
