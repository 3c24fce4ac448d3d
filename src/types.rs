//! Common types used throughout the win-prediction service

use serde::{Deserialize, Serialize};
use skillratings::trueskill::TrueSkillRating;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Unique identifier for players
pub type PlayerId = String;

/// Side of the map a roster slot belongs to
///
/// Roster data comes from an external store that keys entries by a free-form
/// side label. `"blue"` and `"red"` are the two sides of an actual game;
/// anything else round-trips through `Other` and is excluded from win-rate
/// calculations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Side {
    Blue,
    Red,
    Other(String),
}

impl From<String> for Side {
    fn from(label: String) -> Self {
        match label.as_str() {
            "blue" => Side::Blue,
            "red" => Side::Red,
            _ => Side::Other(label),
        }
    }
}

impl From<Side> for String {
    fn from(side: Side) -> Self {
        match side {
            Side::Blue => "blue".to_string(),
            Side::Red => "red".to_string(),
            Side::Other(label) => label,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Blue => write!(f, "blue"),
            Side::Red => write!(f, "red"),
            Side::Other(label) => write!(f, "{}", label),
        }
    }
}

/// In-game role a player fills within a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Top => write!(f, "top"),
            Role::Jungle => write!(f, "jungle"),
            Role::Mid => write!(f, "mid"),
            Role::Bot => write!(f, "bot"),
            Role::Support => write!(f, "support"),
        }
    }
}

/// Skill estimate for a player in one role
///
/// `mu` is the mean skill estimate and `sigma` the standard deviation of that
/// estimate. Values are produced and owned by the external rating store; this
/// crate only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillRating {
    pub mu: f64,
    pub sigma: f64,
}

impl Default for SkillRating {
    fn default() -> Self {
        TrueSkillRating::new().into()
    }
}

impl From<TrueSkillRating> for SkillRating {
    fn from(rating: TrueSkillRating) -> Self {
        Self {
            mu: rating.rating,
            sigma: rating.uncertainty,
        }
    }
}

impl From<SkillRating> for TrueSkillRating {
    fn from(rating: SkillRating) -> Self {
        Self {
            rating: rating.mu,
            uncertainty: rating.sigma,
        }
    }
}

/// Key identifying one slot in a match roster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterSlot {
    pub side: Side,
    pub role: Role,
}

impl RosterSlot {
    pub fn new(side: Side, role: Role) -> Self {
        Self { side, role }
    }
}

/// Player record as exposed by the external rating store
///
/// Carries the player's skill estimate for every role they have been rated
/// in. A player occupying a roster slot may lack a rating for that slot's
/// role; callers treat that as incomplete upstream data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub ratings: HashMap<Role, SkillRating>,
}

impl Player {
    /// Create a player rated in a single role
    pub fn with_rating(id: impl Into<PlayerId>, role: Role, rating: SkillRating) -> Self {
        let mut ratings = HashMap::new();
        ratings.insert(role, rating);
        Self {
            id: id.into(),
            ratings,
        }
    }
}

/// One entry of a serialized roster
///
/// This is the wire shape of a roster: a flat list of (side, role, player)
/// entries. `MatchRoster` converts from and to it so rosters can live in
/// JSON files despite the struct-keyed map inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub side: Side,
    pub role: Role,
    pub player: Player,
}

/// Typed roster table keyed by (side, role)
///
/// Replaces the ad hoc tuple-keyed dictionary the rating store hands out with
/// a mapping whose key shape is explicit. Inserting a second player into an
/// occupied slot replaces the previous occupant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<RosterEntry>", into = "Vec<RosterEntry>")]
pub struct MatchRoster {
    slots: HashMap<RosterSlot, Player>,
}

impl MatchRoster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a player into a roster slot
    pub fn insert(&mut self, slot: RosterSlot, player: Player) {
        self.slots.insert(slot, player);
    }

    /// Get the player occupying a slot, if any
    pub fn get(&self, slot: &RosterSlot) -> Option<&Player> {
        self.slots.get(slot)
    }

    /// Iterate over all occupied slots
    pub fn iter(&self) -> impl Iterator<Item = (&RosterSlot, &Player)> {
        self.slots.iter()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the roster has no occupied slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Collect the role-matched skill ratings of every player on one side
    ///
    /// Slots on other sides are skipped. A player without a rating for their
    /// slot's role is skipped as well; this is non-fatal and may leave the
    /// side short of players, which downstream callers treat as incomplete
    /// match data rather than an error.
    pub fn side_ratings(&self, side: &Side) -> Vec<SkillRating> {
        let mut ratings = Vec::new();
        for (slot, player) in &self.slots {
            if &slot.side != side {
                continue;
            }
            match player.ratings.get(&slot.role) {
                Some(rating) => ratings.push(*rating),
                None => {
                    warn!(
                        "Player {} occupies {} {} but has no rating for that role",
                        player.id, slot.side, slot.role
                    );
                }
            }
        }
        ratings
    }
}

impl From<Vec<RosterEntry>> for MatchRoster {
    fn from(entries: Vec<RosterEntry>) -> Self {
        let mut roster = MatchRoster::new();
        for entry in entries {
            roster.insert(RosterSlot::new(entry.side, entry.role), entry.player);
        }
        roster
    }
}

impl From<MatchRoster> for Vec<RosterEntry> {
    fn from(roster: MatchRoster) -> Self {
        roster
            .slots
            .into_iter()
            .map(|(slot, player)| RosterEntry {
                side: slot.side,
                role: slot.role,
                player,
            })
            .collect()
    }
}
