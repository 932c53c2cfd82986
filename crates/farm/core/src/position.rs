//! World-space coordinates.

/// A point in world space. `y` is height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean 3-D distance. Used for melee and path-node checks.
    pub fn distance(&self, other: &Position) -> f64 {
        let (dx, dy, dz) = self.delta_to(other);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Euclidean distance on the X/Z ground plane, ignoring height.
    ///
    /// Used for waypoint proximity, where a mob on a ledge above the route is
    /// still "near" it.
    pub fn ground_distance(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Component-wise vector from `self` to `other`.
    pub fn delta_to(&self, other: &Position) -> (f64, f64, f64) {
        (other.x - self.x, other.y - self.y, other.z - self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_distance_ignores_height() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 100.0, 4.0);
        assert_eq!(a.ground_distance(&b), 5.0);
        assert!(a.distance(&b) > 100.0);
    }

    #[test]
    fn distance_is_three_dimensional() {
        let a = Position::new(1.0, 2.0, 3.0);
        let b = Position::new(1.0, 4.0, 3.0);
        assert_eq!(a.distance(&b), 2.0);
        assert_eq!(a.delta_to(&b), (0.0, 2.0, 0.0));
    }
}
