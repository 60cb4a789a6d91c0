//! Connector styling.
//!
//! Every satellite gets one connector from the center emblem. Its opacity and
//! stroke weight come from a configured curve indexed by the ring's radial
//! rank (innermost ring first). The curve must be non-increasing in both
//! fields, so an outer ring is never drawn heavier than an inner one.
//!
//! Rings beyond the last curve step reuse the last step.

use crate::error::{ConfigError, CurveDefect, Result, Violation};
use crate::{Point, RingRegistry};

/// Opacity and stroke weight of one connector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectorStyle {
    /// Opacity in `[0, 1]`
    pub opacity: f64,
    /// Stroke weight in render units
    pub weight: f64,
}

impl ConnectorStyle {
    /// Create a new style.
    pub const fn new(opacity: f64, weight: f64) -> Self {
        Self { opacity, weight }
    }
}

/// Non-increasing sequence of connector styles, innermost ring first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ConnectorCurve {
    steps: Vec<ConnectorStyle>,
}

impl ConnectorCurve {
    /// Validate and wrap `steps`.
    pub fn new(steps: Vec<ConnectorStyle>) -> Result<Self> {
        let curve = Self { steps };
        let mut violations = Vec::new();
        curve.validate(&mut violations);
        ConfigError::check(violations).map(|()| curve)
    }

    /// Build from opacities with a shared stroke weight.
    pub fn from_opacities(opacities: &[f64], weight: f64) -> Result<Self> {
        Self::new(
            opacities
                .iter()
                .map(|&opacity| ConnectorStyle::new(opacity, weight))
                .collect(),
        )
    }

    /// Build without validation; composition validates before use.
    pub fn unchecked(steps: Vec<ConnectorStyle>) -> Self {
        Self { steps }
    }

    /// The configured steps.
    pub fn steps(&self) -> &[ConnectorStyle] {
        &self.steps
    }

    /// Whether no steps are configured.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Style for the ring at radial rank `rank`, clamped to the last step.
    pub fn style_for(&self, rank: usize) -> Option<ConnectorStyle> {
        self.steps
            .get(rank)
            .or_else(|| self.steps.last())
            .copied()
    }

    /// Append one violation per offending step to `out`.
    ///
    /// Emptiness is not checked here: an empty curve is fine when there is
    /// nothing to connect.
    pub(crate) fn validate(&self, out: &mut Vec<Violation>) {
        let mut previous: Option<ConnectorStyle> = None;
        for (step, style) in self.steps.iter().enumerate() {
            let mut defects = Vec::new();
            if !(0.0..=1.0).contains(&style.opacity) {
                defects.push(CurveDefect::Opacity(style.opacity));
            }
            if !(style.weight.is_finite() && style.weight >= 0.0) {
                defects.push(CurveDefect::Weight(style.weight));
            }
            if let Some(inner) = previous {
                for (field, previous, value) in [
                    ("opacity", inner.opacity, style.opacity),
                    ("weight", inner.weight, style.weight),
                ] {
                    if value > previous {
                        defects.push(CurveDefect::Increasing {
                            field,
                            previous,
                            value,
                        });
                    }
                }
            }
            if !defects.is_empty() {
                out.push(Violation::CurveStep { step, defects });
            }
            previous = Some(*style);
        }
    }
}

/// A styled line from the center emblem to one satellite, in render space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connector {
    /// Start point (center emblem)
    pub from: Point,
    /// End point (satellite)
    pub to: Point,
    /// Visual weight
    pub style: ConnectorStyle,
}

impl Connector {
    /// Render-space length of the line.
    pub fn length(&self) -> f64 {
        self.from.distance(&self.to)
    }
}

/// Assigns connector styles to rings.
pub struct ConnectorStylist<'a> {
    curve: &'a ConnectorCurve,
    registry: &'a RingRegistry,
}

impl<'a> ConnectorStylist<'a> {
    /// Pair a validated curve with a validated registry.
    pub fn new(curve: &'a ConnectorCurve, registry: &'a RingRegistry) -> Self {
        Self { curve, registry }
    }

    /// Style for every connector ending on ring `ring`.
    pub fn style_for_ring(&self, ring: usize) -> Option<ConnectorStyle> {
        self.registry
            .radial_rank(ring)
            .and_then(|rank| self.curve.style_for(rank))
    }

    /// Connector from `center` to `node` on ring `ring`.
    pub fn connect(&self, center: Point, node: Point, ring: usize) -> Option<Connector> {
        self.style_for_ring(ring).map(|style| Connector {
            from: center,
            to: node,
            style,
        })
    }
}
