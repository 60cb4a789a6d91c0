//! Panel sizing and the authored → render similarity transform.
//!
//! The scale factor is `s = min(W/W0, H/H0)`: aspect is preserved and the
//! authored frame always fits the requested panel. The center emblem lands on
//! the render panel center `(W/2, H/2)` and every other point keeps its offset
//! from the center, multiplied by `s`. No shear, no per-axis scaling.

use crate::error::Violation;
use crate::{Point, Polar, Size};

/// Reference width of the authored panel.
pub const AUTHORED_WIDTH: f64 = 482.0;

/// Reference height of the authored panel.
pub const AUTHORED_HEIGHT: f64 = 300.0;

/// The authored reference panel and the size it is rendered at.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    /// Design-time reference size `W0×H0`
    pub authored: Size,
    /// Requested render size `W×H`
    pub render: Size,
}

impl Panel {
    /// Panel rendered at an explicit size.
    pub const fn new(authored: Size, render: Size) -> Self {
        Self { authored, render }
    }

    /// Panel rendered at its authored size.
    pub const fn authored(width: f64, height: f64) -> Self {
        let size = Size::new(width, height);
        Self::new(size, size)
    }

    /// Same authored frame, rendered at a new size.
    pub const fn resized(self, width: f64, height: f64) -> Self {
        Self::new(self.authored, Size::new(width, height))
    }

    /// Uniform scale factor `min(W/W0, H/H0)`.
    pub fn scale(&self) -> f64 {
        (self.render.width / self.authored.width).min(self.render.height / self.authored.height)
    }

    pub(crate) fn validate(&self, out: &mut Vec<Violation>) {
        let mut valid = true;
        for (space, size) in [("authored", self.authored), ("render", self.render)] {
            if !size.is_valid() {
                valid = false;
                out.push(Violation::Panel {
                    space,
                    width: size.width,
                    height: size.height,
                });
            }
        }

        // Extreme size ratios overflow or underflow the division.
        let scale = self.scale();
        if valid && !(scale.is_finite() && scale > 0.0) {
            out.push(Violation::Scale { scale });
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::authored(AUTHORED_WIDTH, AUTHORED_HEIGHT)
    }
}

/// Maps authored-space geometry into render space for one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    authored_center: Point,
    render_center: Point,
    scale: f64,
}

impl Projector {
    /// Build the transform for `panel`, anchoring `authored_center` on the
    /// render panel's midpoint.
    ///
    /// The panel must already be valid.
    pub fn new(panel: &Panel, authored_center: Point) -> Self {
        Self {
            authored_center,
            render_center: panel.render.center(),
            scale: panel.scale(),
        }
    }

    /// The applied scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Render-space position of the center emblem.
    pub fn render_center(&self) -> Point {
        self.render_center
    }

    /// Authored-space position of the center emblem.
    pub fn authored_center(&self) -> Point {
        self.authored_center
    }

    /// Polar coordinate → authored-space point.
    #[inline]
    pub fn to_authored(&self, polar: Polar) -> Point {
        self.authored_center + Point::from_polar(polar.radius, polar.theta)
    }

    /// Authored-space point → render-space point.
    #[inline]
    pub fn project(&self, authored: Point) -> Point {
        self.render_center + (authored - self.authored_center) * self.scale
    }

    /// Authored-space length → render-space length.
    #[inline]
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.scale
    }
}
