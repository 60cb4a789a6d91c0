//! Error types for constellation layout.
//!
//! Every failure is a static configuration defect. Composition collects all
//! of them before giving up. A single [`ConfigError`] holds one [`Violation`]
//! per offending subject (panel space, center, ring, node, curve step), and
//! each violation lists every defect found on that subject.

use std::fmt::Display;

use thiserror::Error;

use crate::NodeId;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A structurally invalid constellation configuration.
///
/// Never retryable: the configuration must be corrected first.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid constellation configuration ({} violation(s)): {}", .violations.len(), join(.violations))]
pub struct ConfigError {
    violations: Vec<Violation>,
}

impl ConfigError {
    /// Wrap a non-empty list of violations.
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Turn a collected list into `Ok(())` when empty.
    pub(crate) fn check(violations: Vec<Violation>) -> Result<()> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self::new(violations))
        }
    }

    /// All violations, one per offending subject, in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the error, yielding its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Whether ring `index` is an offending subject.
    pub fn concerns_ring(&self, index: usize) -> bool {
        self.violations.iter().any(|v| v.ring() == Some(index))
    }

    /// Whether node `id` is an offending subject.
    pub fn concerns_node(&self, id: &NodeId) -> bool {
        self.violations.iter().any(|v| v.node() == Some(id))
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Every defect of one offending subject.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// A panel dimension is zero, negative or not finite.
    #[error("{space} panel size must be positive and finite, got {width}×{height}")]
    Panel {
        space: &'static str,
        width: f64,
        height: f64,
    },

    /// The authored → render scale factor is not a positive finite number.
    #[error("scale factor must be positive and finite, got {scale}")]
    Scale { scale: f64 },

    /// The center emblem is invalid.
    #[error("center: {}", join(.defects))]
    Center { defects: Vec<CenterDefect> },

    /// A ring definition is invalid.
    #[error("ring {ring}: {}", join(.defects))]
    Ring {
        ring: usize,
        defects: Vec<RingDefect>,
    },

    /// A node is invalid.
    #[error("node {node}: {}", join(.defects))]
    Node {
        node: NodeId,
        defects: Vec<NodeDefect>,
    },

    /// The connector curve has no steps although nodes need styling.
    #[error("connector curve is empty")]
    EmptyCurve,

    /// A connector curve step is invalid.
    #[error("connector curve step {step}: {}", join(.defects))]
    CurveStep {
        step: usize,
        defects: Vec<CurveDefect>,
    },
}

impl Violation {
    /// The ring this violation is attributed to, if any.
    pub fn ring(&self) -> Option<usize> {
        match self {
            Violation::Ring { ring, .. } => Some(*ring),
            _ => None,
        }
    }

    /// The node this violation is attributed to, if any.
    pub fn node(&self) -> Option<&NodeId> {
        match self {
            Violation::Node { node, .. } => Some(node),
            _ => None,
        }
    }
}

/// A defect of the center emblem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CenterDefect {
    /// The position is not finite.
    #[error("position must be finite, got ({x}, {y})")]
    Position { x: f64, y: f64 },

    /// The marker size is zero, negative or not finite.
    #[error("marker size must be positive and finite, got {0}")]
    MarkerSize(f64),

    /// The marker size overflows once scaled.
    #[error("scaled marker size is not finite")]
    Overflow,
}

/// A defect of one ring definition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingDefect {
    /// The radius is zero, negative or not finite.
    #[error("radius must be positive and finite, got {0}")]
    Radius(f64),

    /// The ring declares no slots.
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    /// An explicit ring supplies a different number of angles than its capacity.
    #[error("explicit placement declares capacity {capacity} but supplies {supplied} angle(s)")]
    AngleCount { capacity: usize, supplied: usize },

    /// An explicit angle is not finite.
    #[error("angle for slot {slot} must be finite, got {angle}")]
    Angle { slot: usize, angle: f64 },

    /// An even ring's angular offset is not finite.
    #[error("angular offset must be finite, got {0}")]
    Offset(f64),

    /// The radius overflows once scaled.
    #[error("scaled radius is not finite")]
    Overflow,
}

/// A defect of one node.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NodeDefect {
    /// Another node already uses this identifier.
    #[error("duplicate identifier")]
    Duplicate,

    /// The marker size is zero, negative or not finite.
    #[error("marker size must be positive and finite, got {0}")]
    MarkerSize(f64),

    /// The ring does not exist.
    #[error("unknown ring {0}")]
    UnknownRing(usize),

    /// The ordinal is outside the ring's capacity.
    #[error("ordinal {ordinal} out of range for ring {ring} with capacity {capacity}")]
    Ordinal {
        ring: usize,
        ordinal: usize,
        capacity: usize,
    },

    /// Another node already occupies the slot.
    #[error("slot {ordinal} on ring {ring} already taken by {holder}")]
    SlotTaken {
        ring: usize,
        ordinal: usize,
        holder: NodeId,
    },

    /// The projected position or scaled marker size is not finite.
    #[error("projected geometry is not finite")]
    Overflow,
}

/// A defect of one connector curve step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveDefect {
    /// Opacity is outside `[0, 1]`.
    #[error("opacity must lie in [0, 1], got {0}")]
    Opacity(f64),

    /// Stroke weight is negative or not finite.
    #[error("weight must be finite and non-negative, got {0}")]
    Weight(f64),

    /// The step is heavier than the step inside it.
    #[error("{field} increases from {previous} to {value}")]
    Increasing {
        field: &'static str,
        previous: f64,
        value: f64,
    },
}

/// Per-subject defect lists, kept in first-seen order.
///
/// Pushing a defect for a subject that already has an entry extends that
/// entry instead of adding a new one.
#[derive(Debug)]
pub(crate) struct Grouped<K, D> {
    entries: Vec<(K, Vec<D>)>,
}

impl<K: PartialEq, D> Grouped<K, D> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, subject: K, defect: D) {
        match self.entries.iter_mut().find(|(k, _)| *k == subject) {
            Some((_, defects)) => defects.push(defect),
            None => self.entries.push((subject, vec![defect])),
        }
    }

    /// Append one violation per subject to `out`.
    pub(crate) fn drain_into(self, out: &mut Vec<Violation>, wrap: impl Fn(K, Vec<D>) -> Violation) {
        out.extend(
            self.entries
                .into_iter()
                .map(|(subject, defects)| wrap(subject, defects)),
        );
    }
}
