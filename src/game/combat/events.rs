// Structured records of what happened during combat

use std::fmt;

use super::items::ThrowableItem;
use super::player::Species;
use super::status::StatusEffect;

/// One thing that happened in a fight. Displayed as a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// A pet let go of an item
    Thrown {
        thrower: String,
        species: Species,
        item: ThrowableItem,
        target: String,
    },
    /// An item connected; `damage` is the nominal total over all hits
    Hit {
        target: String,
        item: ThrowableItem,
        hits: u32,
        damage: u32,
        health: u32,
    },
    StatusApplied {
        target: String,
        effect: StatusEffect,
        duration_ms: u64,
    },
    StatusExpired {
        target: String,
        effect: StatusEffect,
    },
    /// Health reached zero
    Defeated {
        target: String,
    },
    PowerUpApplied {
        player: String,
        kind: String,
        duration_ms: u64,
    },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::Thrown {
                thrower,
                species,
                item,
                target,
            } => write!(f, "{} {} {} at {}", thrower, species.throw_verb(), item, target),
            CombatEvent::Hit {
                target,
                item,
                hits,
                damage,
                health,
            } => {
                let times = match hits {
                    1 => String::new(),
                    2 => " twice".to_string(),
                    n => format!(" {} times", n),
                };
                write!(
                    f,
                    "{} hits {}{} and deals {} damage ({} health left)",
                    item, target, times, damage, health
                )
            }
            CombatEvent::StatusApplied {
                target,
                effect,
                duration_ms,
            } => write!(f, "{} is {} for {} ms", target, effect.name(), duration_ms),
            CombatEvent::StatusExpired { target, effect } => {
                write!(f, "{} is no longer {}", target, effect.name())
            }
            CombatEvent::Defeated { target } => write!(f, "{} is defeated", target),
            CombatEvent::PowerUpApplied {
                player,
                kind,
                duration_ms,
            } => write!(f, "Power-up applied to {}: {} ({} ms)", player, kind, duration_ms),
        }
    }
}
