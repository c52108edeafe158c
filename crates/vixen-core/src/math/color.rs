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

//! Defines the `LinearRgba` color type used for clear colors.

/// A color in **linear RGBA** space with `f32` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent black (`[0.0, 0.0, 0.0, 0.0]`).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses an sRGB hex string (`#RRGGBB` or `#RRGGBBAA`, `#` optional).
    ///
    /// The RGB channels are converted to linear space; alpha is only normalized.
    /// Returns `None` for any other length or for non-hex digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use vixen_core::math::LinearRgba;
    /// assert_eq!(LinearRgba::from_hex("#FFFFFF"), Some(LinearRgba::WHITE));
    /// assert_eq!(LinearRgba::from_hex("#12345"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        // `from_str_radix` alone would also take a leading sign.
        let well_formed = hex.bytes().all(|b| b.is_ascii_hexdigit());
        if !(hex.len() == 6 || hex.len() == 8) || !well_formed {
            return None;
        }
        let channel = |i: usize| -> Option<f32> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        let a = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self {
            r: srgb_to_linear(channel(0)?),
            g: srgb_to_linear(channel(2)?),
            b: srgb_to_linear(channel(4)?),
            a,
        })
    }
}

impl Default for LinearRgba {
    /// Returns opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

/// Converts an sRGB component to linear space.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
