//! Planar geometry: positions, rectangular bounds, and the infection
//! neighborhood test.
//!
//! Agent positions are abstract plane coordinates in `f32` — the outer loop
//! decides what a unit means.  The infection neighborhood is an axis-aligned
//! square (Chebyshev box), not a Euclidean disc: an agent is in range when
//! *both* coordinate differences are strictly within the half-width.

/// A planar position stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Strict Chebyshev-box test: `true` when both per-axis differences from
    /// `center` are strictly less than `half_width`.
    ///
    /// Agents sitting exactly on the box edge are *not* in range; the
    /// boundary is open on all four sides.
    #[inline]
    pub fn in_box(self, center: Point, half_width: f32) -> bool {
        (self.x - center.x).abs() < half_width && (self.y - center.y).abs() < half_width
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle `[xmin, ymin, xmax, ymax]`, e.g. the roaming
/// area of a quarantine location.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl Bounds {
    #[inline]
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// Geometric center of the rectangle.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            self.xmin + (self.xmax - self.xmin) * 0.5,
            self.ymin + (self.ymax - self.ymin) * 0.5,
        )
    }

    /// Half-extents along each axis.
    #[inline]
    pub fn half_extents(self) -> (f32, f32) {
        ((self.xmax - self.xmin) * 0.5, (self.ymax - self.ymin) * 0.5)
    }

    /// `true` when the rectangle has positive area.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.xmin < self.xmax && self.ymin < self.ymax
    }
}
