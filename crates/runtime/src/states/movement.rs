//! Path following shared by every behavior that walks somewhere.

use farm_core::Position;

use crate::GameContext;

/// Arrival tolerance while more than one node remains on the path.
pub const MULTI_NODE_TOLERANCE: f64 = 0.5;

/// Progress made by one call to [`advance_along`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    /// A follow vector toward the next node was issued.
    Moving,
    /// Every node is within tolerance; the destination is reached.
    Arrived,
    /// The navmesh found no path.
    NoPath,
}

/// Moves the player one step along a fresh path to `destination`.
///
/// Nodes already within the navigator's tolerance are dropped. The tolerance
/// is [`MULTI_NODE_TOLERANCE`] while the path has several nodes and
/// `final_tolerance` for the last leg. The follow vector always points at the
/// first remaining node.
pub fn advance_along(ctx: &mut GameContext, destination: Position, final_tolerance: f64) -> Leg {
    let nodes = ctx.plan_path(destination);
    if nodes == 0 {
        return Leg::NoPath;
    }

    let tolerance = if nodes > 1 {
        MULTI_NODE_TOLERANCE
    } else {
        final_tolerance
    };
    ctx.navigator_mut().set_distance_tolerance(tolerance);

    let tolerance = ctx.navigator().distance_tolerance();
    ctx.drop_reached_nodes(tolerance);

    match ctx.path().front().copied() {
        Some(node) => {
            let (dx, dy, dz) = ctx.player().position.delta_to(&node);
            ctx.navigator_mut().set_follow_coords(dx, dy, dz);
            Leg::Moving
        }
        None => Leg::Arrived,
    }
}
