//! Abilities, battle lists, and the usability check.
//!
//! Behaviors never decide *how* to act in detail; they pick the first usable
//! ability from a named battle list configured in the [`crate::Policy`].

use crate::Player;

/// Well-known battle list names.
pub mod lists {
    /// Abilities used to pull a target from range.
    pub const PULL: &str = "Pull";
    /// Abilities used while engaged.
    pub const BATTLE: &str = "Battle";
    /// Self heals, gated by the player HP window.
    pub const HEALING: &str = "Healing";
    /// Buffs kept up outside of rest.
    pub const BUFF: &str = "Buff";
    /// Trust summons.
    pub const TRUSTS: &str = "Trusts";
}

/// The command family used to trigger an ability.
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
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AbilityType {
    #[default]
    Unknown,
    Magic,
    Ninjutsu,
    Song,
    /// Raw text command, sent verbatim.
    Trigger,
    Weaponskill,
    Range,
    /// Raw echo command, sent verbatim.
    Echo,
    Jobability,
    Pet,
    Monsterskill,
    Item,
    Trust,
}

impl AbilityType {
    /// Chat command prefix, or `None` for verbatim commands.
    pub const fn command_prefix(self) -> Option<&'static str> {
        match self {
            Self::Magic | Self::Trust => Some("/magic"),
            Self::Ninjutsu => Some("/ninjutsu"),
            Self::Song => Some("/song"),
            Self::Weaponskill => Some("/weaponskill"),
            Self::Range => Some("/range"),
            Self::Jobability => Some("/jobability"),
            Self::Pet => Some("/pet"),
            Self::Monsterskill => Some("/monsterskill"),
            Self::Item => Some("/item"),
            Self::Unknown | Self::Trigger | Self::Echo => None,
        }
    }
}

/// Who an ability is aimed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AbilityTarget {
    /// The current target, `<t>`.
    #[default]
    Target,
    /// The player, `<me>`.
    Me,
}

impl AbilityTarget {
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Target => "<t>",
            Self::Me => "<me>",
        }
    }
}

/// One configured ability inside a battle list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BattleAbility {
    pub name: String,
    pub ability_type: AbilityType,
    pub enabled: bool,
    pub target: AbilityTarget,
    pub mp_cost: u32,
    pub tp_cost: u32,

    /// Maximum distance to the target at which the ability is worth using.
    pub distance: f64,

    /// Lowest player HP% at which the ability may fire.
    pub player_low_health: u8,
    /// Highest player HP% at which the ability may fire.
    pub player_high_health: u8,

    /// Status effect this ability grants. Skipped while the effect is active.
    pub status_effect: Option<String>,
}

impl Default for BattleAbility {
    fn default() -> Self {
        Self {
            name: String::new(),
            ability_type: AbilityType::Unknown,
            enabled: true,
            target: AbilityTarget::Target,
            mp_cost: 0,
            tp_cost: 0,
            distance: 17.0,
            player_low_health: 0,
            player_high_health: 100,
            status_effect: None,
        }
    }
}

impl BattleAbility {
    pub fn new(name: impl Into<String>, ability_type: AbilityType) -> Self {
        Self {
            name: name.into(),
            ability_type,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn on_self(mut self) -> Self {
        self.target = AbilityTarget::Me;
        self
    }

    /// The chat command that triggers this ability.
    pub fn command(&self) -> String {
        match self.ability_type.command_prefix() {
            Some(prefix) => format!("{prefix} \"{}\" {}", self.name, self.target.as_token()),
            None => self.name.clone(),
        }
    }
}

/// Usability checks for configured abilities.
pub struct ActionFilters;

impl ActionFilters {
    /// Returns true if `player` can use `ability` right now.
    ///
    /// Checks, in order: enabled, named, known type, recast, MP, TP,
    /// player HP window, and that the granted status effect is not already up.
    pub fn is_usable(player: &Player, ability: &BattleAbility) -> bool {
        if !ability.enabled {
            return false;
        }
        if ability.name.trim().is_empty() {
            return false;
        }
        if ability.ability_type == AbilityType::Unknown {
            return false;
        }
        if player.recast_remaining(&ability.name) > 0 {
            return false;
        }
        if player.mp < ability.mp_cost || player.tp < ability.tp_cost {
            return false;
        }
        if player.hpp < ability.player_low_health || player.hpp > ability.player_high_health {
            return false;
        }
        if let Some(effect) = &ability.status_effect
            && player.has_status_effect(effect)
        {
            return false;
        }
        true
    }
}
