// Player entity: a pet with health, a position and status effects

use glam::IVec2;

use super::events::CombatEvent;
use super::items::ThrowableItem;
use super::status::{StatusEffect, StatusEffects};
use super::CombatError;

/// Unique identifier for a player
pub type PlayerId = u32;

/// Health every pet starts with
pub const MAX_HEALTH: u32 = 100;

/// Kind of pet. Only changes how a throw is announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn throw_verb(&self) -> &'static str {
        match self {
            Species::Dog => "throws",
            Species::Cat => "flings",
        }
    }
}

/// Alive until health hits zero; there is no way back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifeState {
    #[default]
    Alive,
    Defeated,
}

#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    species: Species,
    health: u32,
    /// Screen position; not bounds checked
    position: IVec2,
    life: LifeState,
    statuses: StatusEffects,
}

impl Player {
    pub fn new(id: PlayerId, name: &str, species: Species, x: i32, y: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            species,
            health: MAX_HEALTH,
            position: IVec2::new(x, y),
            life: LifeState::Alive,
            statuses: StatusEffects::new(),
        }
    }

    pub fn dog(id: PlayerId, name: &str, x: i32, y: i32) -> Self {
        Self::new(id, name, Species::Dog, x, y)
    }

    pub fn cat(id: PlayerId, name: &str, x: i32, y: i32) -> Self {
        Self::new(id, name, Species::Cat, x, y)
    }

    /// Throw `item` at `target`.
    ///
    /// Announces the throw, then lets the item resolve its effect on the
    /// target. Defeated or stunned throwers and defeated targets are refused.
    pub fn throw_item(
        &self,
        item: ThrowableItem,
        target: &mut Player,
    ) -> Result<Vec<CombatEvent>, CombatError> {
        if target.id == self.id {
            return Err(CombatError::InvalidArgument(format!(
                "{} cannot throw at itself",
                self.name
            )));
        }
        if !self.is_alive() {
            return Err(CombatError::Defeated(self.name.clone()));
        }
        if self.is_stunned() {
            return Err(CombatError::Stunned(self.name.clone()));
        }
        if !target.is_alive() {
            return Err(CombatError::Defeated(target.name.clone()));
        }

        let thrown = CombatEvent::Thrown {
            thrower: self.name.clone(),
            species: self.species,
            item,
            target: target.name.clone(),
        };
        log::info!("{}", thrown);

        let mut events = vec![thrown];
        events.extend(item.apply_effect(target));
        Ok(events)
    }

    /// Reduce health by `amount`, never below zero.
    /// Returns true when this blow is the one that defeats the player.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 && self.life == LifeState::Alive {
            self.life = LifeState::Defeated;
            self.statuses.clear();
            return true;
        }
        false
    }

    /// Put a timed status on this player; ignored once defeated
    pub fn apply_status(&mut self, effect: StatusEffect, duration_ms: u64) {
        if self.is_alive() {
            self.statuses.apply(effect, duration_ms);
        }
    }

    /// Advance status timers, reporting the effects that wore off
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<CombatEvent> {
        self.statuses
            .tick(elapsed_ms)
            .into_iter()
            .map(|effect| {
                log::debug!("{} is no longer {}", self.name, effect.name());
                CombatEvent::StatusExpired {
                    target: self.name.clone(),
                    effect,
                }
            })
            .collect()
    }

    /// Walk by (`dx`, `dy`). Slowed pets cover half the distance, stunned or
    /// defeated pets stay put. Returns the new position.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> IVec2 {
        if !self.is_alive() || self.is_stunned() {
            return self.position;
        }
        let step = IVec2::new(dx, dy);
        let step = if self.is_slowed() { step / 2 } else { step };
        self.position += step;
        self.position
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn life_state(&self) -> LifeState {
        self.life
    }

    pub fn is_alive(&self) -> bool {
        self.life == LifeState::Alive
    }

    pub fn is_stunned(&self) -> bool {
        self.statuses.is_active(StatusEffect::Stun)
    }

    pub fn is_slowed(&self) -> bool {
        self.statuses.is_active(StatusEffect::Slow)
    }

    pub fn statuses(&self) -> &StatusEffects {
        &self.statuses
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn set_x(&mut self, x: i32) {
        self.position.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.position.y = y;
    }
}
