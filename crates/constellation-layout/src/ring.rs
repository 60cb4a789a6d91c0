//! Ring definitions and the read-only ring registry.
//!
//! A ring is a concentric circle around the center emblem. Its index is its
//! position in the configuration list; rings are always processed in
//! ascending index order. Radii need not grow with the index.

use crate::error::{ConfigError, Result, RingDefect, Violation};

/// How the slots of a ring are angled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum Placement {
    /// Slot `j` sits at `angles[j]` (radians, any real value).
    Explicit {
        /// One angle per slot
        angles: Vec<f64>,
    },
    /// Slot `j` sits at `offset + j·2π/capacity`.
    Even {
        /// Angle of slot 0 in radians
        #[cfg_attr(feature = "serde", serde(default))]
        offset: f64,
    },
}

/// A ring definition in authored space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    /// Radius in authored space
    pub radius: f64,
    /// Number of slots
    pub capacity: usize,
    /// Slot angle rule
    pub placement: Placement,
}

impl Ring {
    /// Ring whose slots take the given angles; capacity is the angle count.
    pub fn explicit(radius: f64, angles: impl Into<Vec<f64>>) -> Self {
        let angles = angles.into();
        Self {
            radius,
            capacity: angles.len(),
            placement: Placement::Explicit { angles },
        }
    }

    /// Ring of `capacity` equally spaced slots starting at angle zero.
    pub fn even(radius: f64, capacity: usize) -> Self {
        Self {
            radius,
            capacity,
            placement: Placement::Even { offset: 0.0 },
        }
    }

    /// Rotate an even ring so slot 0 sits at `offset`.
    ///
    /// Explicit rings are returned unchanged.
    pub fn with_offset(mut self, offset: f64) -> Self {
        if let Placement::Even { offset: current } = &mut self.placement {
            *current = offset;
        }
        self
    }

    /// Whether slots are auto-distributed.
    pub fn is_even(&self) -> bool {
        matches!(self.placement, Placement::Even { .. })
    }

    /// Every defect of this ring, empty when the ring is valid.
    pub(crate) fn validate(&self) -> Vec<RingDefect> {
        let mut defects = Vec::new();
        if !(self.radius.is_finite() && self.radius > 0.0) {
            defects.push(RingDefect::Radius(self.radius));
        }
        if self.capacity == 0 {
            defects.push(RingDefect::ZeroCapacity);
        }
        match &self.placement {
            Placement::Explicit { angles } => {
                if self.capacity != 0 && angles.len() != self.capacity {
                    defects.push(RingDefect::AngleCount {
                        capacity: self.capacity,
                        supplied: angles.len(),
                    });
                }
                defects.extend(
                    angles
                        .iter()
                        .enumerate()
                        .filter(|(_, angle)| !angle.is_finite())
                        .map(|(slot, &angle)| RingDefect::Angle { slot, angle }),
                );
            }
            Placement::Even { offset } => {
                if !offset.is_finite() {
                    defects.push(RingDefect::Offset(*offset));
                }
            }
        }
        defects
    }
}

/// Validated, ordered, read-only view of the ring definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct RingRegistry {
    rings: Vec<Ring>,
    /// `ranks[i]` is ring `i`'s position in ascending-radius order.
    ranks: Vec<usize>,
}

impl RingRegistry {
    /// Validate `rings`, failing with every defect found.
    pub fn new(rings: Vec<Ring>) -> Result<Self> {
        let mut violations = Vec::new();
        let registry = Self::collect(rings, &mut violations);
        ConfigError::check(violations).map(|()| registry)
    }

    /// Build the registry while appending defects to `out`.
    ///
    /// The returned registry is only meaningful when nothing was appended.
    pub(crate) fn collect(rings: Vec<Ring>, out: &mut Vec<Violation>) -> Self {
        for (index, ring) in rings.iter().enumerate() {
            let defects = ring.validate();
            if !defects.is_empty() {
                out.push(Violation::Ring {
                    ring: index,
                    defects,
                });
            }
        }

        let mut order: Vec<usize> = (0..rings.len()).collect();
        order.sort_by(|&a, &b| {
            rings[a]
                .radius
                .total_cmp(&rings[b].radius)
                .then(a.cmp(&b))
        });
        let mut ranks = vec![0; rings.len()];
        for (rank, &index) in order.iter().enumerate() {
            ranks[index] = rank;
        }

        Self { rings, ranks }
    }

    /// Ring at `index`.
    pub fn get(&self, index: usize) -> Option<&Ring> {
        self.rings.get(index)
    }

    /// Rings in ascending index order, paired with their index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Ring)> {
        self.rings.iter().enumerate()
    }

    /// Number of rings.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    /// Whether there are no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Position of ring `index` when rings are sorted by radius (ties by index).
    pub fn radial_rank(&self, index: usize) -> Option<usize> {
        self.ranks.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn valid_registry() {
        let registry = RingRegistry::new(vec![
            Ring::explicit(80.0, [0.0, PI]),
            Ring::even(120.0, 3),
            Ring::explicit(160.0, [PI, 0.0]),
        ])
        .unwrap();

        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert_eq!(registry.get(1).map(|r| r.capacity), Some(3));
        assert!(registry.get(3).is_none());
        let indices: Vec<_> = registry.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn explicit_constructor_sets_capacity() {
        let ring = Ring::explicit(80.0, vec![0.0, 1.0, 2.0]);
        assert_eq!(ring.capacity, 3);
        assert!(!ring.is_even());
    }

    #[test]
    fn offset_only_applies_to_even_rings() {
        let even = Ring::even(50.0, 4).with_offset(0.5);
        assert_eq!(even.placement, Placement::Even { offset: 0.5 });

        let explicit = Ring::explicit(50.0, [1.0]).with_offset(0.5);
        assert_eq!(explicit.placement, Placement::Explicit { angles: vec![1.0] });
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = RingRegistry::new(vec![Ring::even(100.0, 0)]).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::Ring {
                ring: 0,
                defects: vec![RingDefect::ZeroCapacity],
            }]
        );
    }

    #[test]
    fn non_positive_radius_rejected() {
        let err = RingRegistry::new(vec![
            Ring::even(0.0, 1),
            Ring::even(-5.0, 1),
            Ring::even(f64::NAN, 1),
        ])
        .unwrap_err();
        assert_eq!(err.violations().len(), 3);
        assert!(err.concerns_ring(0) && err.concerns_ring(1) && err.concerns_ring(2));
    }

    #[test]
    fn mismatched_angle_count_identifies_ring() {
        let ring = Ring {
            radius: 80.0,
            capacity: 2,
            placement: Placement::Explicit {
                angles: vec![0.0, 1.0, 2.0],
            },
        };
        let err = RingRegistry::new(vec![Ring::even(40.0, 1), ring]).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::Ring {
                ring: 1,
                defects: vec![RingDefect::AngleCount {
                    capacity: 2,
                    supplied: 3,
                }],
            }]
        );
        assert!(err.concerns_ring(1));
        assert!(!err.concerns_ring(0));
    }

    #[test]
    fn all_ring_defects_reported_together() {
        let err = RingRegistry::new(vec![
            Ring::even(-1.0, 0),
            Ring::explicit(10.0, [f64::INFINITY]),
            Ring::even(10.0, 2).with_offset(f64::NAN),
        ])
        .unwrap_err();

        // One entry per offending ring, each listing all of its defects
        assert_eq!(err.violations().len(), 3);
        assert_eq!(
            err.violations()[0],
            Violation::Ring {
                ring: 0,
                defects: vec![RingDefect::Radius(-1.0), RingDefect::ZeroCapacity],
            }
        );
        assert!(matches!(
            &err.violations()[1],
            Violation::Ring { ring: 1, defects } if matches!(defects[..], [RingDefect::Angle { slot: 0, .. }])
        ));
        assert!(matches!(
            &err.violations()[2],
            Violation::Ring { ring: 2, defects } if matches!(defects[..], [RingDefect::Offset(_)])
        ));
    }

    #[test]
    fn radial_rank_follows_radius_not_index() {
        let registry = RingRegistry::new(vec![
            Ring::even(160.0, 1),
            Ring::even(80.0, 1),
            Ring::even(120.0, 1),
            Ring::even(80.0, 1),
        ])
        .unwrap();
        assert_eq!(registry.radial_rank(0), Some(3));
        assert_eq!(registry.radial_rank(1), Some(0));
        assert_eq!(registry.radial_rank(2), Some(2));
        assert_eq!(registry.radial_rank(3), Some(1));
        assert_eq!(registry.radial_rank(4), None);
    }
}
