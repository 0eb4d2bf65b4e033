use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::{KnotError, Result};

/// Two dimensional vector used both for positions and for velocities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector pointing from `b` to `a`, i.e. `a - b`.
    pub fn between(a: Point2D, b: Point2D) -> Self {
        a - b
    }

    /// Builds a point from a raw component slice. Anything other than exactly
    /// two components is rejected with [`KnotError::InvalidDimension`].
    pub fn from_components(components: &[f64]) -> Result<Self> {
        match components {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(KnotError::InvalidDimension {
                found: components.len(),
            }),
        }
    }

    /// Returns the component at `index` (0 for x, 1 for y).
    pub fn component(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(KnotError::IndexOutOfRange { index }),
        }
    }

    pub fn dot(self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean norm.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean norm floored to a whole number of pixels.
    pub fn magnitude(self) -> i64 {
        self.length().floor() as i64
    }

    pub fn midpoint(self, other: Point2D) -> Self {
        (self + other) * 0.5
    }

    /// Integer pixel coordinates, each component floored independently.
    pub fn to_int_pair(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl TryFrom<&[f64]> for Point2D {
    type Error = KnotError;

    fn try_from(value: &[f64]) -> Result<Self> {
        Self::from_components(value)
    }
}

impl TryFrom<Vec<f64>> for Point2D {
    type Error = KnotError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Self::from_components(&value)
    }
}
