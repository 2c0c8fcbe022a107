// Throwable items and their effect on whoever they hit

use std::fmt;

use super::events::CombatEvent;
use super::player::Player;
use super::status::StatusEffect;

/// How long a shoe to the head keeps a pet stunned
pub const SHOE_STUN_MS: u64 = 2_000;

/// How long a soaked pet stays slowed
pub const WATER_BALLOON_SLOW_MS: u64 = 3_000;

/// Descriptive label carried by every item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectTag {
    Bounce,
    Normal,
    Stun,
    Slow,
}

impl EffectTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectTag::Bounce => "bounce",
            EffectTag::Normal => "normal",
            EffectTag::Stun => "stun",
            EffectTag::Slow => "slow",
        }
    }
}

/// Everything a pet can throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrowableItem {
    /// Bounces and hits twice
    Ball,
    Bone,
    Fish,
    /// Hits once and stuns
    Shoe,
    /// Hits once and slows
    WaterBalloon,
}

impl ThrowableItem {
    pub const ALL: [ThrowableItem; 5] = [
        ThrowableItem::Ball,
        ThrowableItem::Bone,
        ThrowableItem::Fish,
        ThrowableItem::Shoe,
        ThrowableItem::WaterBalloon,
    ];

    /// Damage dealt per hit
    pub fn damage(&self) -> u32 {
        match self {
            ThrowableItem::Ball => 8,
            ThrowableItem::Bone | ThrowableItem::Fish => 10,
            ThrowableItem::Shoe => 5,
            ThrowableItem::WaterBalloon => 6,
        }
    }

    /// Flight speed. Cosmetic; plays no part in resolution.
    pub fn speed(&self) -> u32 {
        match self {
            ThrowableItem::Ball => 7,
            ThrowableItem::Bone | ThrowableItem::Fish => 5,
            ThrowableItem::Shoe => 3,
            ThrowableItem::WaterBalloon => 4,
        }
    }

    pub fn effect(&self) -> EffectTag {
        match self {
            ThrowableItem::Ball => EffectTag::Bounce,
            ThrowableItem::Bone | ThrowableItem::Fish => EffectTag::Normal,
            ThrowableItem::Shoe => EffectTag::Stun,
            ThrowableItem::WaterBalloon => EffectTag::Slow,
        }
    }

    /// How many times the item connects
    pub fn hits(&self) -> u32 {
        match self {
            ThrowableItem::Ball => 2,
            _ => 1,
        }
    }

    /// Status inflicted on impact, with its duration in milliseconds
    pub fn status_effect(&self) -> Option<(StatusEffect, u64)> {
        match self {
            ThrowableItem::Shoe => Some((StatusEffect::Stun, SHOE_STUN_MS)),
            ThrowableItem::WaterBalloon => Some((StatusEffect::Slow, WATER_BALLOON_SLOW_MS)),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThrowableItem::Ball => "Ball",
            ThrowableItem::Bone => "Bone",
            ThrowableItem::Fish => "Fish",
            ThrowableItem::Shoe => "Shoe",
            ThrowableItem::WaterBalloon => "Water Balloon",
        }
    }

    /// Hit `target` with this item.
    ///
    /// Damage is applied once per hit, then any status effect lands if the
    /// target is still standing. Returns what happened, in order.
    pub fn apply_effect(&self, target: &mut Player) -> Vec<CombatEvent> {
        let hits = self.hits();
        let mut defeated = false;
        for _ in 0..hits {
            defeated |= target.take_damage(self.damage());
        }

        let mut events = vec![CombatEvent::Hit {
            target: target.name().to_string(),
            item: *self,
            hits,
            damage: self.damage() * hits,
            health: target.health(),
        }];

        if let Some((effect, duration_ms)) = self.status_effect() {
            if target.is_alive() {
                target.apply_status(effect, duration_ms);
                events.push(CombatEvent::StatusApplied {
                    target: target.name().to_string(),
                    effect,
                    duration_ms,
                });
            }
        }

        if defeated {
            events.push(CombatEvent::Defeated {
                target: target.name().to_string(),
            });
        }

        for event in &events {
            log::info!("{}", event);
        }
        events
    }
}

impl fmt::Display for ThrowableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
