use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Membership level of a pass
///
/// Ordering is defined by [`Tier::rank`], not by declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    /// Position in the Bronze < Silver < Gold order
    pub fn rank(&self) -> u8 {
        match self {
            Tier::Bronze => 0,
            Tier::Silver => 1,
            Tier::Gold => 2,
        }
    }

    /// All tiers, lowest first
    pub fn all() -> &'static [Tier] {
        &[Tier::Bronze, Tier::Silver, Tier::Gold]
    }

    /// The tier directly above this one (None for Gold)
    pub fn next(&self) -> Option<Tier> {
        match self {
            Tier::Bronze => Some(Tier::Silver),
            Tier::Silver => Some(Tier::Gold),
            Tier::Gold => None,
        }
    }

    /// Stable lowercase key
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bronze" | "b" => Some(Tier::Bronze),
            "silver" | "s" | "prata" => Some(Tier::Silver),
            "gold" | "g" | "ouro" => Some(Tier::Gold),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
        }
    }
}

impl PartialOrd for Tier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
