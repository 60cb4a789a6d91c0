//! Layout composition: the public entry point.
//!
//! [`compose`] validates the whole configuration, collecting every defect
//! before failing, then runs registry → placement → projection → styling and
//! returns one immutable [`LayoutResult`]. It keeps no state between calls;
//! identical inputs give identical output.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use crate::connector::{Connector, ConnectorCurve, ConnectorStylist};
use crate::error::{CenterDefect, ConfigError, NodeDefect, Result, RingDefect, Violation};
use crate::{placement, Center, Node, NodeId, Panel, Point, Projector, Ring, RingRegistry, StyleToken};

/// The center emblem in render space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedCenter {
    /// Render-space position, always the panel midpoint
    pub position: Point,
    /// Render-space marker size
    pub size: f64,
    /// Presentation reference
    pub style: StyleToken,
}

/// A satellite in render space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedNode {
    /// Owning ring index
    pub ring: usize,
    /// Render-space position
    pub position: Point,
    /// Authored-space position
    pub authored: Point,
    /// Angle around the center in `[0, 2π)`
    pub angle: f64,
    /// Render-space marker size
    pub size: f64,
    /// Presentation reference
    pub style: StyleToken,
}

/// A ring outline in render space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingGuide {
    /// Ring index
    pub ring: usize,
    /// Render-space center (the emblem position)
    pub center: Point,
    /// Render-space radius
    pub radius: f64,
}

/// The computed constellation for one panel size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    /// Uniform authored → render scale factor
    pub scale: f64,
    /// Center emblem
    pub center: PlacedCenter,
    /// Satellites keyed by identifier
    pub nodes: BTreeMap<NodeId, PlacedNode>,
    /// Connectors keyed by the satellite they end on
    pub connectors: BTreeMap<NodeId, Connector>,
    /// One outline per ring, in ring order
    pub rings: Vec<RingGuide>,
}

impl LayoutResult {
    /// Render-space position of node `id`.
    pub fn position(&self, id: &NodeId) -> Option<Point> {
        self.nodes.get(id).map(|node| node.position)
    }

    /// Connector ending on node `id`.
    pub fn connector(&self, id: &NodeId) -> Option<&Connector> {
        self.connectors.get(id)
    }

    /// Render-space positions of every node, ordered by identifier.
    pub fn positions(&self) -> impl Iterator<Item = (&NodeId, Point)> {
        self.nodes.iter().map(|(id, node)| (id, node.position))
    }
}

/// Compute the layout of `nodes` on `rings` for `panel`.
///
/// Fails with a single [`ConfigError`] listing every panel, center, ring,
/// node and curve defect.
pub fn compose(
    panel: &Panel,
    center: &Center,
    rings: &[Ring],
    nodes: &[Node],
    curve: &ConnectorCurve,
) -> Result<LayoutResult> {
    let mut violations = Vec::new();

    panel.validate(&mut violations);
    let mut center_defects = Vec::new();
    if !center.position.is_finite() {
        center_defects.push(CenterDefect::Position {
            x: center.position.x,
            y: center.position.y,
        });
    }
    if !(center.size.is_finite() && center.size > 0.0) {
        center_defects.push(CenterDefect::MarkerSize(center.size));
    }
    if !center_defects.is_empty() {
        violations.push(Violation::Center {
            defects: center_defects,
        });
    }

    let registry = RingRegistry::collect(rings.to_vec(), &mut violations);
    let resolved = placement::collect(&registry, nodes, &mut violations);

    curve.validate(&mut violations);
    if curve.is_empty() && !nodes.is_empty() {
        violations.push(Violation::EmptyCurve);
    }

    reject(violations)?;

    let projector = Projector::new(panel, center.position);
    let stylist = ConnectorStylist::new(curve, &registry);
    let origin = projector.render_center();

    // Finite inputs can still overflow once scaled.
    let mut overflows = Vec::new();

    let center_size = projector.scale_length(center.size);
    if !center_size.is_finite() {
        overflows.push(Violation::Center {
            defects: vec![CenterDefect::Overflow],
        });
    }

    let guides: Vec<RingGuide> = registry
        .iter()
        .map(|(ring, def)| RingGuide {
            ring,
            center: origin,
            radius: projector.scale_length(def.radius),
        })
        .collect();
    overflows.extend(
        guides
            .iter()
            .filter(|guide| !guide.radius.is_finite())
            .map(|guide| Violation::Ring {
                ring: guide.ring,
                defects: vec![RingDefect::Overflow],
            }),
    );

    let mut placed = BTreeMap::new();
    let mut connectors = BTreeMap::new();

    for entry in resolved {
        let authored = projector.to_authored(entry.polar);
        let position = projector.project(authored);
        let size = projector.scale_length(entry.node.size);
        let node = entry.node;

        if !(authored.is_finite() && position.is_finite() && size.is_finite()) {
            overflows.push(Violation::Node {
                node: node.id.clone(),
                defects: vec![NodeDefect::Overflow],
            });
            continue;
        }

        trace!(
            node = %node.id,
            ring = node.ring,
            theta = entry.polar.theta,
            "Placed {} at {}",
            node.id,
            position
        );

        if let Some(connector) = stylist.connect(origin, position, node.ring) {
            connectors.insert(node.id.clone(), connector);
        }
        placed.insert(
            node.id.clone(),
            PlacedNode {
                ring: node.ring,
                position,
                authored,
                angle: entry.polar.normalized_theta(),
                size,
                style: node.style.clone(),
            },
        );
    }

    reject(overflows)?;

    debug!(
        rings = registry.len(),
        nodes = placed.len(),
        scale = projector.scale(),
        "Composed constellation for {} panel",
        panel.render
    );

    Ok(LayoutResult {
        scale: projector.scale(),
        center: PlacedCenter {
            position: origin,
            size: center_size,
            style: center.style.clone(),
        },
        nodes: placed,
        connectors,
        rings: guides,
    })
}

fn reject(violations: Vec<Violation>) -> Result<()> {
    ConfigError::check(violations).inspect_err(|err| {
        warn!(
            violations = err.violations().len(),
            "Rejected constellation configuration"
        );
    })
}
