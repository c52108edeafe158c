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

//! Provides the 2D and 3D vector types and their associated operations.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::clamp;

// --- Vec2 ---

/// A 2-dimensional vector with `f32` components, used for screen-space positions.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
}

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

// --- Vec3 ---

/// A 3-dimensional vector with `f32` components, used for points and directions.
///
/// `Vec3` is a plain value type: every operator returns a new vector, except the
/// compound assignment operators (`+=`, `-=`, `*=`, `/=`) and
/// [`Vec3::normalize_in_place`], which mutate the receiver.
///
/// Dividing by a zero scalar is a precondition violation and panics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// The unit vector pointing along the positive X-axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);
    /// World up (`+Y`).
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// World down (`-Y`).
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// World right (`+X`).
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// World left (`-X`).
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// World forward (`-Z`, right-handed).
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);
    /// World backward (`+Z`, right-handed).
    pub const BACKWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the y component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the z component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Adds two vectors. Same result as the `+` operator.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    /// Subtracts `rhs` from this vector. Same result as the `-` operator.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    /// Scales the vector by `scalar`. Same result as the `*` operator.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn mul(self, scalar: f32) -> Self {
        self * scalar
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Calculates the squared length of the vector.
    /// Cheaper than `length()` when only comparing magnitudes.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: Self) -> f32 {
        (*self - other).length()
    }

    /// Calculates the squared distance between this vector and another.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> f32 {
        (*self - other).length_squared()
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Scales this vector to unit length and returns its length before scaling.
    ///
    /// A vector of length exactly zero is left untouched and `0.0` is returned.
    #[inline]
    pub fn normalize_in_place(&mut self) -> f32 {
        let len = self.length();
        if len > 0.0 {
            let inv_len = 1.0 / len;
            self.x *= inv_len;
            self.y *= inv_len;
            self.z *= inv_len;
        }
        len
    }

    /// Returns a unit-length copy of this vector, leaving `self` unchanged.
    ///
    /// The zero vector normalizes to itself.
    #[inline]
    pub fn normalize(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize_in_place();
        normalized
    }

    /// Returns the unsigned angle in radians between the directions of two vectors.
    ///
    /// If either vector is zero the result is `PI / 2`, since the normalized
    /// dot product degenerates to `0.0`.
    #[inline]
    pub fn angle(&self, other: Self) -> f32 {
        clamped_acos(self.normalize().dot(other.normalize()))
    }

    /// Computes the right-handed cross product of this vector and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        let new_x = self.y * other.z - other.y * self.z;
        let new_y = -(self.x * other.z - other.x * self.z);
        let new_z = self.x * other.y - other.x * self.y;
        Self::new(new_x, new_y, new_z)
    }
}

/// `acos` with its input clamped to `[-1, 1]`; rounding can push a normalized
/// dot product of near-parallel vectors just outside that domain.
#[inline]
fn clamped_acos(cos_theta: f32) -> f32 {
    clamp(cos_theta, -1.0, 1.0).acos()
}

impl Default for Vec3 {
    /// Returns `Vec3::ZERO`.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Vec3 {
    /// Formats as `X=1.000 Y=2.000 Z=3.000`.
    /// The alternate form (`{:#}`) wraps it as `Vector3 [ X=1.000 Y=2.000 Z=3.000 ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "Vector3 [ X={:.3} Y={:.3} Z={:.3} ]",
                self.x, self.y, self.z
            )
        } else {
            write!(f, "X={:.3} Y={:.3} Z={:.3}", self.x, self.y, self.z)
        }
    }
}

// --- Operator Overloads ---

impl Add for Vec3 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<f32> for Vec3 {
    type Output = Self;
    /// Adds `rhs` to every component.
    #[inline]
    fn add(self, rhs: f32) -> Self::Output {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<f32> for Vec3 {
    type Output = Self;
    /// Subtracts `rhs` from every component.
    #[inline]
    fn sub(self, rhs: f32) -> Self::Output {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Div for Vec3 {
    type Output = Self;
    /// Divides two vectors component-wise.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    /// Divides the vector by a scalar.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        assert!(rhs != 0.0, "Vec3 divided by zero");
        let inv_rhs = 1.0 / rhs;
        Self::new(self.x * inv_rhs, self.y * inv_rhs, self.z * inv_rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl AddAssign<f32> for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: f32) {
        self.x += rhs;
        self.y += rhs;
        self.z += rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl SubAssign<f32> for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: f32) {
        self.x -= rhs;
        self.y -= rhs;
        self.z -= rhs;
    }
}

impl MulAssign for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl DivAssign for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
        self.z /= rhs.z;
    }
}

impl DivAssign<f32> for Vec3 {
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        assert!(rhs != 0.0, "Vec3 divided by zero");
        let inv_rhs = 1.0 / rhs;
        self.x *= inv_rhs;
        self.y *= inv_rhs;
        self.z *= inv_rhs;
    }
}

// --- Approximate comparison ---

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> Self::Epsilon {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
