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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The graphics API a renderer backend is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicsBackend {
    /// OpenGL, available on every desktop platform.
    #[default]
    #[serde(alias = "gl")]
    OpenGl,
    /// Direct3D, only available on Windows.
    #[serde(alias = "dx", alias = "d3d")]
    DirectX,
}

impl GraphicsBackend {
    /// Every backend the engine knows about, in order of preference.
    pub const ALL: [GraphicsBackend; 2] = [GraphicsBackend::OpenGl, GraphicsBackend::DirectX];

    /// Returns `true` if this backend can be created on the current target.
    pub const fn is_available(self) -> bool {
        match self {
            GraphicsBackend::OpenGl => true,
            GraphicsBackend::DirectX => cfg!(target_os = "windows"),
        }
    }
}

impl fmt::Display for GraphicsBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsBackend::OpenGl => write!(f, "OpenGL"),
            GraphicsBackend::DirectX => write!(f, "DirectX"),
        }
    }
}

/// The error returned when parsing an unknown backend name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown graphics backend '{0}' (expected 'opengl' or 'directx')")]
pub struct UnknownBackend(pub String);

impl FromStr for GraphicsBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opengl" | "gl" => Ok(GraphicsBackend::OpenGl),
            "directx" | "dx" | "d3d" => Ok(GraphicsBackend::DirectX),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_backend_names() {
        assert_eq!("OpenGL".parse::<GraphicsBackend>(), Ok(GraphicsBackend::OpenGl));
        assert_eq!(" gl ".parse::<GraphicsBackend>(), Ok(GraphicsBackend::OpenGl));
        assert_eq!("DirectX".parse::<GraphicsBackend>(), Ok(GraphicsBackend::DirectX));
        assert_eq!("dx".parse::<GraphicsBackend>(), Ok(GraphicsBackend::DirectX));
        assert!("vulkan".parse::<GraphicsBackend>().is_err());
    }

    #[test]
    fn availability_follows_target() {
        assert!(GraphicsBackend::OpenGl.is_available());
        assert_eq!(
            GraphicsBackend::DirectX.is_available(),
            cfg!(target_os = "windows")
        );
    }
}
