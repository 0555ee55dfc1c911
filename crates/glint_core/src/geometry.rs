//! Geometric primitives and coordinate-space-tagged points
//!
//! Scroll containers translate their content, which makes "where is the
//! pointer" ambiguous: screen coordinates and scrolled-content coordinates
//! differ by the scroll offset. [`ScreenPoint`] and [`ContentPoint`] are
//! distinct types so the two spaces cannot be mixed accidentally; the only
//! way across is an explicit offset conversion.

/// A point in unspecified (local) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A pointer position in top-level screen space (logical pixels)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Enter a scrolled content space: the content has been translated by
    /// `-offset`, so the pointer moves by `+offset` to stay in lockstep.
    pub fn to_content(self, offset_x: f32, offset_y: f32) -> ContentPoint {
        ContentPoint {
            x: self.x + offset_x,
            y: self.y + offset_y,
        }
    }
}

/// A pointer position inside a scroll container's content space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentPoint {
    pub x: f32,
    pub y: f32,
}

impl ContentPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Leave the content space, undoing the scroll translation.
    pub fn to_screen(self, offset_x: f32, offset_y: f32) -> ScreenPoint {
        ScreenPoint {
            x: self.x - offset_x,
            y: self.y - offset_y,
        }
    }
}

/// A rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether the rect has any drawable area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Geometric intersection, clamped so width/height are never negative.
    ///
    /// Disjoint rects produce a zero-area rect at the clamp boundary.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect {
            x,
            y,
            width: (right - x).max(0.0),
            height: (bottom - y).max(0.0),
        }
    }
}

/// Per-corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Clamp every radius to `min(w, h) / 2` so opposing arcs never overlap
    pub fn clamped(self, width: f32, height: f32) -> Self {
        let max = (width.min(height) / 2.0).max(0.0);
        Self {
            top_left: self.top_left.clamp(0.0, max),
            top_right: self.top_right.clamp(0.0, max),
            bottom_right: self.bottom_right.clamp(0.0, max),
            bottom_left: self.bottom_left.clamp(0.0, max),
        }
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}
