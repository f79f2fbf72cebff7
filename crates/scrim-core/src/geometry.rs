#![forbid(unsafe_code)]

//! Geometry primitives in host coordinates.
//!
//! All values are `f32` in the host toolkit's coordinate space (origin
//! top-left, y growing downward). The presentation core never produces
//! negative sizes: every subtraction that could underflow clamps at zero.
//!
//! # Invariants
//!
//! - `Rect` width/height are non-negative after any operation here.
//! - `round()` rounds every component to the nearest whole unit; callers
//!   use it to avoid sub-pixel seams between stacked surfaces.

/// A point in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round both components to the nearest whole unit.
    #[must_use]
    pub fn round(self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
        }
    }
}

/// A 2D vector, used for gesture velocities and shadow offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub dx: f32,
    pub dy: f32,
}

impl Vector {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a new vector.
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// A size in host coordinates. Components are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size, clamping negative components to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Round both components to the nearest whole unit.
    #[must_use]
    pub fn round(self) -> Self {
        Self {
            width: self.width.round(),
            height: self.height.round(),
        }
    }

    /// Shrink by the given insets, clamping at zero.
    #[must_use]
    pub fn inset_by(self, insets: EdgeInsets) -> Self {
        Self::new(
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
    }
}

/// An axis-aligned rectangle in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a rectangle from origin and size components.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Right edge (x + width).
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge (y + height).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Whether the rectangle has zero area.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Round origin and size to whole units.
    #[must_use]
    pub fn round(self) -> Self {
        Self {
            origin: self.origin.round(),
            size: self.size.round(),
        }
    }

    /// Translate by the given vector.
    #[must_use]
    pub fn offset_by(self, delta: Vector) -> Self {
        Self {
            origin: Point::new(self.origin.x + delta.dx, self.origin.y + delta.dy),
            size: self.size,
        }
    }

    /// Shrink on all sides by the given insets, clamping size at zero.
    #[must_use]
    pub fn inset_by(self, insets: EdgeInsets) -> Self {
        Self {
            origin: Point::new(self.origin.x + insets.left, self.origin.y + insets.top),
            size: self.size.inset_by(insets),
        }
    }
}

/// Per-edge insets (safe areas, padding).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create insets with the same value on every edge.
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    /// Create insets per edge.
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Combined left + right insets.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Combined top + bottom insets.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Component-wise sum of two inset sets.
    #[must_use]
    pub fn adding(self, other: Self) -> Self {
        Self {
            top: self.top + other.top,
            left: self.left + other.left,
            bottom: self.bottom + other.bottom,
            right: self.right + other.right,
        }
    }
}
