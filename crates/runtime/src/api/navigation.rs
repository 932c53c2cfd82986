//! Navigation collaborators.
use std::collections::VecDeque;

use farm_core::Position;

/// Path queries against the zone's navigation mesh.
pub trait NavMesh: Send {
    /// Ordered path nodes from `from` to `to`, possibly empty.
    fn find_path_between(&self, from: Position, to: Position) -> VecDeque<Position>;
}

/// Movement output: heading, follow vector, and arrival tolerance.
pub trait Navigator: Send {
    fn distance_tolerance(&self) -> f64;

    fn set_distance_tolerance(&mut self, tolerance: f64);

    /// Turns the player to face `position`.
    fn face_heading(&mut self, position: Position);

    /// Starts moving along the relative vector `(dx, dy, dz)`.
    fn set_follow_coords(&mut self, dx: f64, dy: f64, dz: f64);

    /// Stops following.
    fn reset(&mut self);
}

/// A mesh without obstacles: every path is the destination itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct StraightLineNavMesh;

impl NavMesh for StraightLineNavMesh {
    fn find_path_between(&self, _from: Position, to: Position) -> VecDeque<Position> {
        VecDeque::from([to])
    }
}
