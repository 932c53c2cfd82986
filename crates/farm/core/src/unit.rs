//! Units as reported by the memory-reading collaborator.
//!
//! A [`Unit`] is a read-only snapshot produced fresh every tick. The decision
//! core never mutates one; it only asks questions about it.

use bitflags::bitflags;

use crate::Position;

/// Classification of a unit.
///
/// Only [`NpcType::Mob`] is ever auto-targeted.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NpcType {
    /// Another player character.
    Player,
    /// Friendly or neutral non-player character.
    #[default]
    Npc,
    /// Hostile monster.
    Mob,
    /// Doors, tents, and other scenery.
    InanimateObject,
}

/// Combat status of a unit or of the player.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Status {
    #[default]
    Standing,
    /// Engaged in melee.
    Fighting,
    Dead,
    /// Resting to recover HP/MP.
    Healing,
    Unknown,
}

bitflags! {
    /// Boolean status flags carried by every [`Unit`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct UnitFlags: u8 {
        const ACTIVE      = 1 << 0;
        const DEAD        = 1 << 1;
        const RENDERED    = 1 << 2;
        const PET         = 1 << 3;
        /// The unit engaged the player unprompted.
        const AGGROED     = 1 << 4;
        /// Someone holds claim on the unit.
        const CLAIMED     = 1 << 5;
        /// A party member holds claim on the unit.
        const PARTY_CLAIM = 1 << 6;
    }
}

/// A unit in the player's surroundings.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Unit {
    /// Client-side id, used for targeting and placeholder matching.
    pub id: u32,

    /// Server-side id.
    pub server_id: u32,

    pub name: String,
    pub npc_type: NpcType,
    pub status: Status,
    pub position: Position,

    /// Distance from the player, as computed by the game client.
    pub distance: f64,

    /// Height difference from the player.
    pub y_difference: f64,

    /// Remaining HP in percent.
    pub hpp: u8,

    pub flags: UnitFlags,

    /// Server id of the claim holder, `0` when unclaimed.
    pub claimed_id: u32,
}

impl Unit {
    /// Creates an active, rendered mob at the origin.
    pub fn mob(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            server_id: id,
            name: name.into(),
            npc_type: NpcType::Mob,
            hpp: 100,
            flags: UnitFlags::ACTIVE | UnitFlags::RENDERED,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    #[must_use]
    pub fn with_y_difference(mut self, y_difference: f64) -> Self {
        self.y_difference = y_difference;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_npc_type(mut self, npc_type: NpcType) -> Self {
        self.npc_type = npc_type;
        self
    }

    /// Adds flags on top of the current ones.
    #[must_use]
    pub fn with_flags(mut self, flags: UnitFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Removes flags from the current ones.
    #[must_use]
    pub fn without_flags(mut self, flags: UnitFlags) -> Self {
        self.flags.remove(flags);
        self
    }

    /// Marks the unit as claimed by `server_id`.
    #[must_use]
    pub fn claimed_by(mut self, server_id: u32) -> Self {
        self.flags |= UnitFlags::CLAIMED;
        self.claimed_id = server_id;
        self
    }

    pub fn is_active(&self) -> bool {
        self.flags.contains(UnitFlags::ACTIVE)
    }

    pub fn is_dead(&self) -> bool {
        self.flags.contains(UnitFlags::DEAD)
    }

    pub fn is_rendered(&self) -> bool {
        self.flags.contains(UnitFlags::RENDERED)
    }

    pub fn is_pet(&self) -> bool {
        self.flags.contains(UnitFlags::PET)
    }

    pub fn has_aggroed(&self) -> bool {
        self.flags.contains(UnitFlags::AGGROED)
    }

    pub fn is_claimed(&self) -> bool {
        self.flags.contains(UnitFlags::CLAIMED)
    }

    pub fn party_claim(&self) -> bool {
        self.flags.contains(UnitFlags::PARTY_CLAIM)
    }

    pub fn is_fighting(&self) -> bool {
        self.status == Status::Fighting
    }
}
