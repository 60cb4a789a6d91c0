//! Declarative constellation configuration.
//!
//! A configuration is authored once and never edited at runtime. The caller
//! chooses only the render size; everything else comes from here.

use std::f64::consts::{FRAC_PI_4, PI};

use crate::error::Result;
use crate::{
    compose, Center, ConnectorCurve, ConnectorStyle, LayoutResult, Node, Panel, Point, Ring, Size,
    AUTHORED_HEIGHT, AUTHORED_WIDTH,
};

/// Everything needed to lay out one constellation, minus the render size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstellationConfig {
    /// Design-time reference panel size
    pub authored: Size,
    /// Center emblem
    pub center: Center,
    /// Rings in index order
    pub rings: Vec<Ring>,
    /// Satellite markers
    pub nodes: Vec<Node>,
    /// Connector weight per radial rank
    pub curve: ConnectorCurve,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self::integration_preset()
    }
}

impl ConstellationConfig {
    /// The integration constellation: three rings of equipment and service
    /// markers around a single emblem.
    pub fn integration_preset() -> Self {
        let node = |id: &str, ring, ordinal, style: &str| Node::new(id, ring, ordinal).with_style(style);

        Self {
            authored: Size::new(AUTHORED_WIDTH, AUTHORED_HEIGHT),
            center: Center::new(Point::new(250.0, 179.0)).with_style("emblem:wheat"),
            rings: vec![
                Ring::explicit(80.0, [PI, 0.0]),
                Ring::explicit(120.0, [-FRAC_PI_4, 3.0 * FRAC_PI_4, 5.0 * FRAC_PI_4]),
                Ring::explicit(160.0, [PI, 0.0]),
            ],
            nodes: vec![
                node("tractor", 0, 0, "icon:tractor"),
                node("weather", 0, 1, "icon:weather"),
                node("irrigation", 1, 0, "icon:droplet"),
                node("soil", 1, 1, "icon:seedling"),
                node("drone", 1, 2, "icon:drone"),
                node("market", 2, 0, "icon:barn"),
                node("analytics", 2, 1, "icon:chart"),
            ],
            curve: ConnectorCurve::unchecked(vec![
                ConnectorStyle::new(0.2, 1.0),
                ConnectorStyle::new(0.15, 1.0),
                ConnectorStyle::new(0.1, 1.0),
            ]),
        }
    }

    /// Panel for this configuration, rendered at `render` or at the authored
    /// size when unspecified.
    pub fn panel(&self, render: Option<Size>) -> Panel {
        Panel::new(self.authored, render.unwrap_or(self.authored))
    }

    /// Compose the layout at `render` (or the authored size).
    pub fn compose(&self, render: Option<Size>) -> Result<LayoutResult> {
        compose(
            &self.panel(render),
            &self.center,
            &self.rings,
            &self.nodes,
            &self.curve,
        )
    }
}
