//! World snapshots from the memory-reading collaborator.
use farm_core::{Party, Player, Unit};
use serde::{Deserialize, Serialize};

use super::errors::SnapshotError;

/// Everything the decision core reads about the world for one tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSnapshot {
    pub player: Player,
    pub party: Party,

    /// Id of the unit currently targeted in the game client.
    pub targeted_id: Option<u32>,

    /// Units surrounding the player.
    pub units: Vec<Unit>,
}

impl WorldSnapshot {
    /// Looks up a surrounding unit by id.
    pub fn unit(&self, id: u32) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }
}

/// Source of fresh world snapshots, queried once per tick.
pub trait WorldSnapshotProvider: Send {
    fn snapshot(&mut self) -> Result<WorldSnapshot, SnapshotError>;
}
