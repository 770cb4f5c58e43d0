//! Basic geometric types for page layout

/// Points per millimetre (1 point = 1/72 inch).
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Converts millimetres to points.
pub fn mm(value: f64) -> f64 {
    value * POINTS_PER_MM
}

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined by two points, in PDF user space (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Lower-left corner
    pub lower_left: Point,
    /// Upper-right corner
    pub upper_right: Point,
}

impl Rectangle {
    /// Create a new rectangle from two points
    pub fn new(lower_left: Point, upper_right: Point) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// Create a rectangle from position and size
    pub fn from_position_and_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            lower_left: Point::new(x, y),
            upper_right: Point::new(x + width, y + height),
        }
    }

    pub fn x(&self) -> f64 {
        self.lower_left.x
    }

    pub fn y(&self) -> f64 {
        self.lower_left.y
    }

    /// Get the width
    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }

    /// Get the height
    pub fn height(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }

    /// Get the center point
    pub fn center(&self) -> Point {
        Point::new(
            (self.lower_left.x + self.upper_right.x) / 2.0,
            (self.lower_left.y + self.upper_right.y) / 2.0,
        )
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom.
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self::from_position_and_size(
            self.x() + dx,
            self.y() + dy,
            self.width() - 2.0 * dx,
            self.height() - 2.0 * dy,
        )
    }

    /// True when `other` lies entirely inside this rectangle, with a small
    /// tolerance for floating point error.
    pub fn contains(&self, other: &Rectangle) -> bool {
        const EPS: f64 = 1e-6;
        other.lower_left.x >= self.lower_left.x - EPS
            && other.lower_left.y >= self.lower_left.y - EPS
            && other.upper_right.x <= self.upper_right.x + EPS
            && other.upper_right.y <= self.upper_right.y + EPS
    }
}
