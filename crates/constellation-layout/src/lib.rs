//! Constellation Layout
//!
//! Radial layout engine: a fixed center emblem, satellite markers on
//! concentric rings, and one styled connector per satellite.
//!
//! # Pipeline
//!
//! Data flows one way and nothing is mutated along the way:
//!
//! 1. [`RingRegistry`] validates ring definitions (radius, capacity, angles).
//! 2. The placement resolver turns each node's ring slot into a [`Polar`]
//!    coordinate, either from an explicit angle or by even spacing.
//! 3. [`Projector`] maps polar coordinates to authored space, then to render
//!    space with the uniform scale `s = min(W/W0, H/H0)`.
//! 4. [`ConnectorStylist`] assigns opacity and weight from a non-increasing
//!    [`ConnectorCurve`].
//! 5. [`compose`] runs the pipeline and returns a [`LayoutResult`].
//!
//! # Errors
//!
//! All defects are static configuration errors. They are collected across the
//! whole input and reported together in one [`ConfigError`].
//!
//! # Usage
//!
//! ```
//! use constellation_layout::{compose, Center, ConnectorCurve, Node, Panel, Point, Ring};
//!
//! let panel = Panel::authored(482.0, 300.0).resized(964.0, 600.0);
//! let center = Center::new(Point::new(250.0, 179.0));
//! let rings = vec![Ring::even(120.0, 3)];
//! let nodes = vec![Node::new("a", 0, 0), Node::new("b", 0, 1), Node::new("c", 0, 2)];
//! let curve = ConnectorCurve::from_opacities(&[0.2], 1.0).unwrap();
//!
//! let layout = compose(&panel, &center, &rings, &nodes, &curve).unwrap();
//! assert_eq!(layout.scale, 2.0);
//! assert_eq!(layout.center.position, Point::new(482.0, 300.0));
//! ```

mod compose;
mod config;
mod connector;
mod error;
mod geometry;
mod node;
mod placement;
mod projection;
mod ring;

pub use compose::{compose, LayoutResult, PlacedCenter, PlacedNode, RingGuide};
pub use config::ConstellationConfig;
pub use connector::{Connector, ConnectorCurve, ConnectorStyle, ConnectorStylist};
pub use error::{CenterDefect, ConfigError, CurveDefect, NodeDefect, Result, RingDefect, Violation};
pub use geometry::{normalize_angle, Point, Size};
pub use node::{Center, Node, NodeId, StyleToken, DEFAULT_CENTER_SIZE, DEFAULT_NODE_SIZE};
pub use placement::{even_angle, slot_angle, Polar};
pub use projection::{Panel, Projector, AUTHORED_HEIGHT, AUTHORED_WIDTH};
pub use ring::{Placement, Ring, RingRegistry};

// Compile-time check that results can cross threads
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LayoutResult>();
    assert_send_sync::<ConstellationConfig>();
};
