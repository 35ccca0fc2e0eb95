//! A single waypoint on a squad's movement path.

/// Canvas coordinates of one waypoint.
///
/// Coordinates are stored exactly as given; there is no unit conversion
/// and no bounds check against the background image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovePoint {
    x: f64,
    y: f64,
}

impl MovePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl From<(f64, f64)> for MovePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
