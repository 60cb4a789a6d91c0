//! Node placement: ring slot → polar coordinate in authored space.
//!
//! # Slot angles
//!
//! - **Explicit** rings: slot `j` takes `angles[j]` verbatim.
//! - **Even** rings of capacity `k`: slot `j` sits at `offset + j·2π/k`.
//!   A single-slot ring places its node at `offset`.
//!
//! The raw angle is what positions a node. The normalized angle in
//! `[0, 2π)` is reported alongside it for consumers that compare angles, but
//! it never feeds back into the position.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;

use crate::error::{Grouped, NodeDefect, Violation};
use crate::geometry::normalize_angle;
use crate::{Node, NodeId, Placement, Ring, RingRegistry};

/// A polar coordinate around the center emblem, in authored space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polar {
    /// Distance from the center (the ring radius)
    pub radius: f64,
    /// Angle in radians as configured, not normalized
    pub theta: f64,
}

impl Polar {
    /// Create a new polar coordinate.
    pub const fn new(radius: f64, theta: f64) -> Self {
        Self { radius, theta }
    }

    /// The angle folded into `[0, 2π)`.
    pub fn normalized_theta(&self) -> f64 {
        normalize_angle(self.theta)
    }
}

/// Angle of slot `ordinal` on an even ring.
#[inline]
pub fn even_angle(offset: f64, capacity: usize, ordinal: usize) -> f64 {
    offset + ordinal as f64 * (TAU / capacity as f64)
}

/// Angle of slot `ordinal` on `ring`, or `None` when the slot does not exist.
pub fn slot_angle(ring: &Ring, ordinal: usize) -> Option<f64> {
    if ordinal >= ring.capacity {
        return None;
    }
    match &ring.placement {
        Placement::Explicit { angles } => angles.get(ordinal).copied(),
        Placement::Even { offset } => Some(even_angle(*offset, ring.capacity, ordinal)),
    }
}

/// A node resolved to its ring and polar coordinate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Resolved<'a> {
    pub(crate) node: &'a Node,
    pub(crate) polar: Polar,
}

/// Resolve nodes while appending one violation per offending node to `out`.
///
/// Nodes with defects are skipped; the result is only complete when nothing
/// was appended.
pub(crate) fn collect<'a>(
    registry: &RingRegistry,
    nodes: &'a [Node],
    out: &mut Vec<Violation>,
) -> Vec<Resolved<'a>> {
    let mut ids: HashSet<&NodeId> = HashSet::with_capacity(nodes.len());
    let mut slots: HashMap<(usize, usize), &NodeId> = HashMap::with_capacity(nodes.len());
    let mut defects = Grouped::new();
    let mut resolved = Vec::with_capacity(nodes.len());

    for node in nodes {
        let mut flawed = false;
        let mut flag = |defect: NodeDefect| {
            defects.push(node.id.clone(), defect);
            flawed = true;
        };

        if !ids.insert(&node.id) {
            flag(NodeDefect::Duplicate);
        }
        if !(node.size.is_finite() && node.size > 0.0) {
            flag(NodeDefect::MarkerSize(node.size));
        }

        let Some(ring) = registry.get(node.ring) else {
            flag(NodeDefect::UnknownRing(node.ring));
            continue;
        };

        // Zero-capacity rings are already reported by the registry.
        if node.ordinal >= ring.capacity {
            if ring.capacity > 0 {
                flag(NodeDefect::Ordinal {
                    ring: node.ring,
                    ordinal: node.ordinal,
                    capacity: ring.capacity,
                });
            }
            continue;
        }

        // First claimant keeps the slot.
        match slots.entry((node.ring, node.ordinal)) {
            Entry::Occupied(held) => {
                flag(NodeDefect::SlotTaken {
                    ring: node.ring,
                    ordinal: node.ordinal,
                    holder: (*held.get()).clone(),
                });
                continue;
            }
            Entry::Vacant(free) => {
                free.insert(&node.id);
            }
        }

        if flawed {
            continue;
        }
        // Explicit rings with a mismatched angle count may lack this slot.
        if let Some(theta) = slot_angle(ring, node.ordinal) {
            resolved.push(Resolved {
                node,
                polar: Polar::new(ring.radius, theta),
            });
        }
    }

    defects.drain_into(out, |node, defects| Violation::Node { node, defects });
    resolved
}
