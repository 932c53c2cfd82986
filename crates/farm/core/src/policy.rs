//! The user's policy: thresholds, lists, and toggles.
//!
//! A [`Policy`] is an immutable snapshot for the duration of a tick. Every
//! field has a default, so partial configuration files are valid.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

use crate::{BattleAbility, ConfigError, Position};

/// Decision policy consumed by the unit filter and the behavior roster.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Policy {
    /// Units at or beyond this distance are never considered.
    pub detection_distance: f64,

    /// Maximum ground distance from any route waypoint for a unit to be in bounds.
    pub wander_distance: f64,

    /// Units more than this far above or below the player are out of reach.
    pub height_threshold: f64,

    /// Distance at which the player is close enough to melee.
    pub melee_distance: f64,

    pub route: Route,

    /// Named ability lists, see [`crate::ability::lists`].
    pub battle_lists: BTreeMap<String, Vec<BattleAbility>>,

    /// Units whose name matches any of these are never attacked.
    pub ignored_mobs: NamePatterns,

    /// When non-empty, only units matching one of these are attacked
    /// (aggroed units excepted).
    pub targeted_mobs: NamePatterns,

    /// Attack units claimed by a party member.
    pub party_filter: bool,
    /// Attack unclaimed units.
    pub unclaimed_filter: bool,
    /// Attack units claimed by anyone.
    pub claimed_filter: bool,

    /// Send the engage command when the target comes within range.
    pub engage_enabled: bool,
    /// Walk to the target along navmesh paths.
    pub approach_enabled: bool,

    pub rest: RestPolicy,
    pub retreat: RetreatPolicy,

    /// Trusts are only summoned while the party is smaller than this.
    pub max_party_size: usize,

    pub nm_hunting: NmHunting,
}

impl Policy {
    pub const DEFAULT_DETECTION_DISTANCE: f64 = 17.0;
    pub const DEFAULT_WANDER_DISTANCE: f64 = 15.0;
    pub const DEFAULT_HEIGHT_THRESHOLD: f64 = 5.0;
    pub const DEFAULT_MELEE_DISTANCE: f64 = 3.0;
    pub const DEFAULT_MAX_PARTY_SIZE: usize = 6;

    /// The abilities configured under `name`, empty if the list is missing.
    pub fn battle_list(&self, name: &str) -> &[BattleAbility] {
        self.battle_lists
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            detection_distance: Self::DEFAULT_DETECTION_DISTANCE,
            wander_distance: Self::DEFAULT_WANDER_DISTANCE,
            height_threshold: Self::DEFAULT_HEIGHT_THRESHOLD,
            melee_distance: Self::DEFAULT_MELEE_DISTANCE,
            route: Route::default(),
            battle_lists: BTreeMap::new(),
            ignored_mobs: NamePatterns::default(),
            targeted_mobs: NamePatterns::default(),
            party_filter: false,
            unclaimed_filter: true,
            claimed_filter: false,
            engage_enabled: true,
            approach_enabled: true,
            rest: RestPolicy::default(),
            retreat: RetreatPolicy::default(),
            max_party_size: Self::DEFAULT_MAX_PARTY_SIZE,
            nm_hunting: NmHunting::default(),
        }
    }
}

/// Patrol route. Engagement stays within wander distance of its waypoints.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Route {
    pub waypoints: Vec<Position>,
}

impl Route {
    pub fn new(waypoints: Vec<Position>) -> Self {
        Self { waypoints }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint with the smallest ground distance to `position`.
    pub fn nearest(&self, position: &Position) -> Option<Position> {
        self.waypoints.iter().copied().min_by(|a, b| {
            a.ground_distance(position)
                .total_cmp(&b.ground_distance(position))
        })
    }
}

/// When to sit down and recover.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RestPolicy {
    pub health_enabled: bool,
    pub low_health: u8,
    pub high_health: u8,
    pub magic_enabled: bool,
    pub low_magic: u8,
    pub high_magic: u8,
}

impl Default for RestPolicy {
    fn default() -> Self {
        Self {
            health_enabled: true,
            low_health: 50,
            high_health: 100,
            magic_enabled: false,
            low_magic: 50,
            high_magic: 100,
        }
    }
}

/// When to give up a fight and fall back to the route.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RetreatPolicy {
    pub enabled: bool,
    /// Retreat while HP% is strictly below this.
    pub health_threshold: u8,
}

impl Default for RetreatPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            health_threshold: 20,
        }
    }
}

/// Notorious monster hunting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct NmHunting {
    pub enabled: bool,
    pub notorious_monster_name: String,

    /// Hexadecimal unit ids of the monster's placeholders.
    pub placeholder_ids: Vec<String>,

    /// Fire the alert hook when the notorious monster is spotted.
    pub play_alert: bool,
}

impl NmHunting {
    /// Parsed placeholder ids. Entries that are not hexadecimal are skipped.
    pub fn placeholder_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.placeholder_ids
            .iter()
            .filter_map(|raw| match parse_placeholder_id(raw) {
                Ok(id) => Some(id),
                Err(err) => {
                    tracing::warn!("skipping placeholder id: {}", err);
                    None
                }
            })
    }
}

/// Parses a hexadecimal unit id, with or without a `0x` prefix.
pub fn parse_placeholder_id(raw: &str) -> Result<u32, ConfigError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidPlaceholderId {
        raw: raw.to_owned(),
    })
}

/// Case-insensitive name patterns, compiled once when the policy is built.
///
/// A pattern matches anywhere in the name. Patterns that fail to compile are
/// dropped with a warning instead of invalidating the whole list.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct NamePatterns {
    patterns: Vec<Regex>,
}

impl NamePatterns {
    /// Compiles a single pattern.
    pub fn compile(pattern: &str) -> Result<Regex, ConfigError> {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| ConfigError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: err.to_string(),
            })
    }

    /// Returns true if any pattern matches `name`.
    pub fn matches_any(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NamePatterns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let patterns = iter
            .into_iter()
            .filter_map(|raw| match Self::compile(raw.as_ref()) {
                Ok(pattern) => Some(pattern),
                Err(err) => {
                    tracing::warn!("skipping name pattern: {}", err);
                    None
                }
            })
            .collect();
        Self { patterns }
    }
}

impl From<Vec<String>> for NamePatterns {
    fn from(raw: Vec<String>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<NamePatterns> for Vec<String> {
    fn from(patterns: NamePatterns) -> Self {
        patterns
            .patterns
            .iter()
            .map(|pattern| pattern.as_str().to_owned())
            .collect()
    }
}
