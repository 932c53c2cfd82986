//! Target eligibility.
//!
//! [`UnitFilters`] answers one question: is this unit a legitimate combat
//! target under the current [`Policy`]? The answer is an ordered rule chain
//! where each rule either rejects, accepts, or falls through. Order is
//! load-bearing:
//!
//! 1. Structural rejects (absent, inactive, dead, unrendered, not a mob, too far)
//! 2. Notorious monster hunting accepts (name, then placeholder ids)
//! 3. Locality rejects (pet, off-route, out of reach vertically)
//! 4. Name rejects (ignored list, then targeted whitelist unless aggroed)
//! 5. Claim accepts (party, unclaimed, claimed, aggro)
//! 6. Fallback: only what the party leader personally claimed
//!
//! An aggroed unit bypasses the whitelist and the claim toggles but is still
//! rejected by the ignored list, because the ignored check runs first.

use std::sync::Arc;

use crate::{NpcType, Party, Policy, Unit};

/// Eligibility predicate used for target acquisition and target validity.
pub trait UnitFilter: Send + Sync {
    /// Returns true if `mob` may be attacked.
    ///
    /// `party` and `mob` are optional because an absent context or candidate is
    /// a normal input: both answer `false`.
    fn is_attackable(&self, party: Option<&Party>, mob: Option<&Unit>, policy: &Policy) -> bool;
}

/// Hook fired when notorious monster hunting finds its quarry.
pub trait NotoriousMonsterAlert: Send + Sync {
    fn notorious_monster_found(&self, mob: &Unit);
}

/// The standard rule chain.
#[derive(Clone, Default)]
pub struct UnitFilters {
    alert: Option<Arc<dyn NotoriousMonsterAlert>>,
}

impl UnitFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the hook fired when `nm_hunting.play_alert` is set.
    #[must_use]
    pub fn with_alert(mut self, alert: Arc<dyn NotoriousMonsterAlert>) -> Self {
        self.alert = Some(alert);
        self
    }

    /// Notorious monster branch. `Some(true)` accepts, `None` falls through.
    fn nm_hunting(&self, mob: &Unit, policy: &Policy) -> Option<bool> {
        let hunting = &policy.nm_hunting;
        if !hunting.enabled {
            return None;
        }

        if mob.name == hunting.notorious_monster_name {
            tracing::info!("notorious monster {} ({}) spotted", mob.name, mob.id);
            if hunting.play_alert
                && let Some(alert) = &self.alert
            {
                alert.notorious_monster_found(mob);
            }
            return Some(true);
        }

        if hunting.placeholder_ids().any(|id| id == mob.id) {
            tracing::debug!("placeholder {} ({}) matched", mob.name, mob.id);
            return Some(true);
        }

        None
    }
}

impl UnitFilter for UnitFilters {
    fn is_attackable(&self, party: Option<&Party>, mob: Option<&Unit>, policy: &Policy) -> bool {
        let (Some(party), Some(mob)) = (party, mob) else {
            return false;
        };

        if !mob.is_active() || mob.is_dead() || !mob.is_rendered() {
            return false;
        }

        if mob.npc_type != NpcType::Mob {
            return false;
        }

        // NaN distances fail the comparison and are rejected too.
        if !(mob.distance < policy.detection_distance) {
            tracing::trace!("{} rejected: out of detection range", mob.name);
            return false;
        }

        if let Some(accept) = self.nm_hunting(mob, policy) {
            return accept;
        }

        if mob.is_pet() {
            return false;
        }

        let waypoints = &policy.route.waypoints;
        if !waypoints.is_empty()
            && !waypoints.iter().any(|waypoint| {
                mob.position.ground_distance(waypoint) <= policy.wander_distance
            })
        {
            tracing::trace!("{} rejected: outside wander distance", mob.name);
            return false;
        }

        if mob.y_difference > policy.height_threshold {
            tracing::trace!("{} rejected: too high", mob.name);
            return false;
        }

        if policy.ignored_mobs.matches_any(&mob.name) {
            tracing::trace!("{} rejected: ignored", mob.name);
            return false;
        }

        if !policy.targeted_mobs.is_empty()
            && !policy.targeted_mobs.matches_any(&mob.name)
            && !mob.has_aggroed()
        {
            tracing::trace!("{} rejected: not on targeted list", mob.name);
            return false;
        }

        if mob.party_claim() && policy.party_filter {
            return true;
        }

        if !mob.is_claimed() && policy.unclaimed_filter {
            return true;
        }

        if mob.is_claimed() && policy.claimed_filter {
            return true;
        }

        if mob.has_aggroed() {
            return true;
        }

        party
            .leader()
            .is_some_and(|leader| mob.claimed_id == leader.server_id)
    }
}
