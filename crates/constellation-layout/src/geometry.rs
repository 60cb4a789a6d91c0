//! Planar geometry primitives.
//!
//! Two coordinate systems appear throughout the crate:
//!
//! - **Authored space**: the design-time reference panel (e.g. 482×300).
//! - **Render space**: the panel actually requested by the caller.
//!
//! Both use screen orientation: x grows to the right, y grows downward, so a
//! positive angle turns clockwise on screen.

use std::f64::consts::TAU;
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or offset) in either authored or render space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (grows downward)
    pub y: f64,
}

impl Point {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of length `radius` in direction `theta` (radians).
    pub fn from_polar(radius: f64, theta: f64) -> Self {
        Self {
            x: radius * theta.cos(),
            y: radius * theta.sin(),
        }
    }

    /// Euclidean length when treated as an offset.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Direction of this offset in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        normalize_angle(self.y.atan2(self.x))
    }

    /// Both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Midpoint of a box of this size anchored at the origin.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Both extents are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// Fold any finite angle into `[0, 2π)`.
///
/// `rem_euclid` can round up to exactly `2π` for tiny negative inputs, which
/// is folded back to zero.
pub fn normalize_angle(theta: f64) -> f64 {
    let folded = theta.rem_euclid(TAU);
    if folded >= TAU {
        0.0
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn origin_is_zero() {
        assert_eq!(Point::ORIGIN, Point::new(0.0, 0.0));
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn polar_cardinal_directions() {
        let east = Point::from_polar(10.0, 0.0);
        assert!((east.x - 10.0).abs() < EPS && east.y.abs() < EPS);

        // Screen space: +π/2 points down
        let down = Point::from_polar(10.0, FRAC_PI_2);
        assert!(down.x.abs() < EPS && (down.y - 10.0).abs() < EPS);

        let west = Point::from_polar(10.0, PI);
        assert!((west.x + 10.0).abs() < EPS && west.y.abs() < EPS);
    }

    #[test]
    fn arithmetic() {
        let a = Point::new(3.0, -2.0);
        let b = Point::new(1.0, 5.0);
        assert_eq!(a + b, Point::new(4.0, 3.0));
        assert_eq!(a - b, Point::new(2.0, -7.0));
        assert_eq!(-a, Point::new(-3.0, 2.0));
        assert_eq!(a * 2.0, Point::new(6.0, -4.0));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < EPS);
        assert!((b.distance(&a) - 5.0).abs() < EPS);
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < EPS);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);

        let tiny = normalize_angle(-1e-300);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn angle_of_offset() {
        assert!((Point::new(0.0, -1.0).angle() - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((Point::new(-1.0, 0.0).angle() - PI).abs() < EPS);
    }

    #[test]
    fn size_validity() {
        assert!(Size::new(482.0, 300.0).is_valid());
        assert!(!Size::new(0.0, 300.0).is_valid());
        assert!(!Size::new(482.0, -1.0).is_valid());
        assert!(!Size::new(f64::NAN, 300.0).is_valid());
        assert!(!Size::new(f64::INFINITY, 300.0).is_valid());
        assert_eq!(Size::new(482.0, 300.0).center(), Point::new(241.0, 150.0));
    }
}
