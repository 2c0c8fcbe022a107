// Power-ups: picked up by a pet, announced, no mechanical effect yet

use super::events::CombatEvent;
use super::player::Player;
use super::CombatError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerUp {
    kind: String,
    effect_duration_ms: u64,
}

impl PowerUp {
    pub fn new(kind: &str, effect_duration_ms: u64) -> Self {
        Self {
            kind: kind.to_string(),
            effect_duration_ms,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn effect_duration_ms(&self) -> u64 {
        self.effect_duration_ms
    }

    /// Give this power-up to `player`. Only records the pickup.
    pub fn apply(&self, player: &mut Player) -> Result<CombatEvent, CombatError> {
        if !player.is_alive() {
            return Err(CombatError::Defeated(player.name().to_string()));
        }

        let event = CombatEvent::PowerUpApplied {
            player: player.name().to_string(),
            kind: self.kind.clone(),
            duration_ms: self.effect_duration_ms,
        };
        log::info!("{}", event);
        Ok(event)
    }
}
