// Timed status effects

/// A status that temporarily limits a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEffect {
    /// Cannot throw or move
    Stun,
    /// Moves at half speed
    Slow,
}

impl StatusEffect {
    pub fn name(&self) -> &'static str {
        match self {
            StatusEffect::Stun => "stunned",
            StatusEffect::Slow => "slowed",
        }
    }
}

/// A status effect and how long it has left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveStatus {
    pub effect: StatusEffect,
    pub remaining_ms: u64,
}

/// The effects currently on one player. At most one entry per effect.
#[derive(Debug, Clone, Default)]
pub struct StatusEffects {
    active: Vec<ActiveStatus>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an effect. Re-applying keeps whichever duration is longer.
    pub fn apply(&mut self, effect: StatusEffect, duration_ms: u64) {
        if duration_ms == 0 {
            return;
        }
        match self.active.iter_mut().find(|s| s.effect == effect) {
            Some(existing) => existing.remaining_ms = existing.remaining_ms.max(duration_ms),
            None => self.active.push(ActiveStatus {
                effect,
                remaining_ms: duration_ms,
            }),
        }
    }

    /// Count down all effects and drop the expired ones, returning them
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<StatusEffect> {
        for status in &mut self.active {
            status.remaining_ms = status.remaining_ms.saturating_sub(elapsed_ms);
        }
        let expired = self
            .active
            .iter()
            .filter(|s| s.remaining_ms == 0)
            .map(|s| s.effect)
            .collect();
        self.active.retain(|s| s.remaining_ms > 0);
        expired
    }

    pub fn is_active(&self, effect: StatusEffect) -> bool {
        self.active.iter().any(|s| s.effect == effect)
    }

    pub fn remaining_ms(&self, effect: StatusEffect) -> Option<u64> {
        self.active
            .iter()
            .find(|s| s.effect == effect)
            .map(|s| s.remaining_ms)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveStatus> {
        self.active.iter()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_and_expire() {
        let mut statuses = StatusEffects::new();
        statuses.apply(StatusEffect::Stun, 2000);
        assert!(statuses.is_active(StatusEffect::Stun));
        assert!(!statuses.is_active(StatusEffect::Slow));

        assert!(statuses.tick(1500).is_empty());
        assert_eq!(statuses.remaining_ms(StatusEffect::Stun), Some(500));

        assert_eq!(statuses.tick(500), vec![StatusEffect::Stun]);
        assert!(statuses.is_empty());
    }

    #[test]
    fn test_reapply_keeps_longer_duration() {
        let mut statuses = StatusEffects::new();
        statuses.apply(StatusEffect::Slow, 3000);
        statuses.tick(2500);
        statuses.apply(StatusEffect::Slow, 1000);
        assert_eq!(statuses.remaining_ms(StatusEffect::Slow), Some(1000));

        statuses.apply(StatusEffect::Slow, 400);
        assert_eq!(statuses.remaining_ms(StatusEffect::Slow), Some(1000));
        assert_eq!(statuses.iter().count(), 1);
    }

    #[test]
    fn test_independent_effects() {
        let mut statuses = StatusEffects::new();
        statuses.apply(StatusEffect::Stun, 100);
        statuses.apply(StatusEffect::Slow, 300);

        assert_eq!(statuses.tick(200), vec![StatusEffect::Stun]);
        assert!(statuses.is_active(StatusEffect::Slow));
    }

    #[test]
    fn test_zero_duration_ignored() {
        let mut statuses = StatusEffects::new();
        statuses.apply(StatusEffect::Stun, 0);
        assert!(statuses.is_empty());
    }
}
