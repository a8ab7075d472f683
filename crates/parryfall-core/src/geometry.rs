//! Axis-aligned rectangles and the overlap test.
//!
//! Every collision in the simulation is a [`Hitbox`] compared against another
//! [`Hitbox`]: actor bodies, attack swings, platforms and the goal zone.
//!
//! # Coordinates
//!
//! Screen convention: the origin is the top-left corner, `x` grows to the right
//! and `y` grows downwards. A hitbox is anchored at its top-left corner.
//!
//! # Example
//!
//! ```
//! use parryfall_core::geometry::Hitbox;
//!
//! let a = Hitbox::new(0.0, 0.0, 10.0, 10.0);
//! let b = Hitbox::new(5.0, 5.0, 10.0, 10.0);
//! let c = Hitbox::new(10.0, 0.0, 10.0, 10.0);
//!
//! assert!(a.intersects(&b));
//! // Touching edges do not count as overlap.
//! assert!(!a.intersects(&c));
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with a top-left origin.
///
/// Used both as the live bounding box of a body and as the transient
/// rectangle of an attack swing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hitbox {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent, expected to be non-negative.
    pub width: f32,
    /// Vertical extent, expected to be non-negative.
    pub height: f32,
}

impl Hitbox {
    /// Empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a hitbox from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a hitbox from a top-left position and a size vector.
    #[must_use]
    pub fn from_position(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Width and height as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the hitbox moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Open-interval overlap test.
    ///
    /// Rectangles that only share an edge or a corner do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns `true` if every field is finite and the size is non-negative.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Free-function form of [`Hitbox::intersects`].
#[must_use]
pub fn intersects(a: &Hitbox, b: &Hitbox) -> bool {
    a.intersects(b)
}
