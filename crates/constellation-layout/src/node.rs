//! Satellite nodes and the center emblem.

use crate::Point;

/// Marker size of a satellite node in authored space.
pub const DEFAULT_NODE_SIZE: f64 = 32.0;

/// Marker size of the center emblem in authored space.
pub const DEFAULT_CENTER_SIZE: f64 = 72.0;

/// Unique identifier of a satellite node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub String);

impl NodeId {
    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque presentation reference (color, icon, glyph).
///
/// The engine carries it through to the result untouched; only the rendering
/// surface interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleToken(pub String);

impl From<&str> for StyleToken {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A satellite marker bound to one slot of one ring.
///
/// For an even ring the ordinal selects the `j`-th equally spaced position;
/// for an explicit ring it selects the `j`-th declared angle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Index of the owning ring
    pub ring: usize,
    /// Slot on the ring, `0..capacity`
    pub ordinal: usize,
    /// Marker size in authored space
    #[cfg_attr(feature = "serde", serde(default = "default_node_size"))]
    pub size: f64,
    /// Presentation reference
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: StyleToken,
}

#[cfg(feature = "serde")]
fn default_node_size() -> f64 {
    DEFAULT_NODE_SIZE
}

impl Node {
    /// Create a node with the default marker size and no style.
    pub fn new(id: impl Into<NodeId>, ring: usize, ordinal: usize) -> Self {
        Self {
            id: id.into(),
            ring,
            ordinal,
            size: DEFAULT_NODE_SIZE,
            style: StyleToken::default(),
        }
    }

    /// Set the presentation token.
    pub fn with_style(mut self, style: impl Into<StyleToken>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the marker size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// The fixed center emblem. Not on any ring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Center {
    /// Position in authored space
    pub position: Point,
    /// Marker size in authored space
    pub size: f64,
    /// Presentation reference
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: StyleToken,
}

impl Center {
    /// Create a center emblem at an authored position with the default size.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            size: DEFAULT_CENTER_SIZE,
            style: StyleToken::default(),
        }
    }

    /// Set the presentation token.
    pub fn with_style(mut self, style: impl Into<StyleToken>) -> Self {
        self.style = style.into();
        self
    }
}
