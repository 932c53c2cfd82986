//! The player's own state and party roster.

use std::collections::BTreeMap;

use crate::{Position, Status};

/// The player character as seen by the decision core.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Player {
    pub id: u32,
    pub server_id: u32,
    pub name: String,
    pub position: Position,
    pub status: Status,

    /// HP in percent.
    pub hpp: u8,
    /// MP in percent.
    pub mpp: u8,
    pub mp: u32,
    pub tp: u32,

    /// Names of currently active status effects (buffs and debuffs).
    pub status_effects: Vec<String>,

    /// Remaining recast per ability name, in seconds. Missing means ready.
    pub recasts: BTreeMap<String, u32>,
}

impl Player {
    pub fn is_fighting(&self) -> bool {
        self.status == Status::Fighting
    }

    pub fn is_resting(&self) -> bool {
        self.status == Status::Healing
    }

    pub fn is_dead(&self) -> bool {
        self.status == Status::Dead
    }

    /// Case-insensitive lookup of an active status effect.
    pub fn has_status_effect(&self, effect: &str) -> bool {
        self.status_effects
            .iter()
            .any(|active| active.eq_ignore_ascii_case(effect))
    }

    /// Seconds until `ability` can be used again.
    pub fn recast_remaining(&self, ability: &str) -> u32 {
        self.recasts.get(ability).copied().unwrap_or(0)
    }
}

/// One entry of the party roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyMember {
    pub name: String,
    pub server_id: u32,
}

/// Ordered party roster. The first member is the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Party {
    members: Vec<PartyMember>,
}

impl Party {
    pub fn new(members: Vec<PartyMember>) -> Self {
        Self { members }
    }

    /// The designated member whose claim counts as "ours".
    pub fn leader(&self) -> Option<&PartyMember> {
        self.members.first()
    }

    pub fn members(&self) -> &[PartyMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Case-insensitive membership check by name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.members
            .iter()
            .any(|member| member.name.eq_ignore_ascii_case(name))
    }
}
