// Combat system
//
// Two pets throw things at each other:
// - Throwable items and what they do on impact
// - Players with health, position and timed status effects
// - Power-ups (no mechanical effect yet)
// - A duel that resolves throws between its two players by id

pub mod duel;
pub mod events;
pub mod items;
pub mod player;
pub mod powerup;
pub mod status;

pub use duel::Duel;
pub use events::CombatEvent;
pub use items::ThrowableItem;
pub use player::{Player, PlayerId};
pub use powerup::PowerUp;

/// Reasons a throw or power-up cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} has been defeated")]
    Defeated(String),

    #[error("{0} is stunned and cannot throw")]
    Stunned(String),
}
