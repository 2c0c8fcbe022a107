// A fight between exactly two players, addressed by id

use super::events::CombatEvent;
use super::items::ThrowableItem;
use super::player::{Player, PlayerId};
use super::powerup::PowerUp;
use super::CombatError;

/// Most events a duel remembers; older ones are dropped first
pub const HISTORY_CAPACITY: usize = 256;

#[derive(Debug)]
pub struct Duel {
    players: [Player; 2],
    /// Recent events, oldest first, at most `HISTORY_CAPACITY` long
    history: Vec<CombatEvent>,
}

impl Duel {
    /// Pit two players against each other. Their ids must differ.
    pub fn new(first: Player, second: Player) -> Result<Self, CombatError> {
        if first.id() == second.id() {
            return Err(CombatError::InvalidArgument(format!(
                "both players use id {}",
                first.id()
            )));
        }
        Ok(Self {
            players: [first, second],
            history: Vec::new(),
        })
    }

    fn record(&mut self, events: &[CombatEvent]) {
        self.history.extend_from_slice(events);
        let excess = self.history.len().saturating_sub(HISTORY_CAPACITY);
        self.history.drain(..excess);
    }

    fn index_of(&self, id: PlayerId) -> Result<usize, CombatError> {
        self.players
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| CombatError::InvalidArgument(format!("unknown player {}", id)))
    }

    /// Resolve `thrower` throwing `item` at `target`
    pub fn throw(
        &mut self,
        thrower: PlayerId,
        item: ThrowableItem,
        target: PlayerId,
    ) -> Result<Vec<CombatEvent>, CombatError> {
        let thrower_index = self.index_of(thrower)?;
        let target_index = self.index_of(target)?;
        if thrower_index == target_index {
            return Err(CombatError::InvalidArgument(format!(
                "player {} cannot throw at itself",
                thrower
            )));
        }

        let [first, second] = &mut self.players;
        let (thrower, target) = if thrower_index == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        let events = thrower.throw_item(item, target)?;
        self.record(&events);
        Ok(events)
    }

    /// Hand a power-up to one player
    pub fn apply_power_up(
        &mut self,
        player: PlayerId,
        power_up: &PowerUp,
    ) -> Result<CombatEvent, CombatError> {
        let index = self.index_of(player)?;
        let event = power_up.apply(&mut self.players[index])?;
        self.record(std::slice::from_ref(&event));
        Ok(event)
    }

    /// Advance status timers on both players
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<CombatEvent> {
        let events: Vec<CombatEvent> = self
            .players
            .iter_mut()
            .flat_map(|p| p.tick(elapsed_ms))
            .collect();
        self.record(&events);
        events
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The last player standing, once the other is defeated
    pub fn winner(&self) -> Option<&Player> {
        match &self.players {
            [a, b] if a.is_alive() && !b.is_alive() => Some(a),
            [a, b] if b.is_alive() && !a.is_alive() => Some(b),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.players.iter().any(|p| !p.is_alive())
    }

    pub fn history(&self) -> &[CombatEvent] {
        &self.history
    }

    /// Take every remembered event, leaving the history empty
    pub fn drain_history(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.history)
    }
}
