use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The five roles of a team, in display order.
pub const ALL_ROLES: [Role; 5] = [
    Role::Top,
    Role::Jungle,
    Role::Mid,
    Role::Adc,
    Role::Support,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (player, role, tier) record; a player has one per role they can play.
/// Higher tier = stronger in that role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRating {
    pub player: String,
    pub role: Role,
    pub tier: i32,
}

impl fmt::Display for RoleRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.role, self.player, self.tier)
    }
}

/// A team under construction: at most one rating per role, with the running
/// tier total kept in sync by `add`.
#[derive(Debug, Clone)]
pub struct Team {
    squad: HashMap<Role, RoleRating>,
    tier_sum: i32,
}

impl Default for Team {
    fn default() -> Self {
        Self::new()
    }
}

impl Team {
    pub fn new() -> Self {
        Self {
            squad: HashMap::with_capacity(ALL_ROLES.len()),
            tier_sum: 0,
        }
    }

    pub fn add(&mut self, rating: RoleRating) {
        self.tier_sum += rating.tier;
        self.squad.insert(rating.role, rating);
    }

    pub fn tier_sum(&self) -> i32 {
        self.tier_sum
    }

    pub fn get(&self, role: Role) -> Option<&RoleRating> {
        self.squad.get(&role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.squad.contains_key(&role)
    }

    pub fn filled_roles(&self) -> usize {
        self.squad.len()
    }

    pub fn is_full(&self) -> bool {
        self.filled_roles() == ALL_ROLES.len()
    }

    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.squad.values().map(|r| r.player.as_str())
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, role) in ALL_ROLES.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if let Some(rating) = self.squad.get(role) {
                write!(f, "{rating}")?;
            }
        }
        Ok(())
    }
}
