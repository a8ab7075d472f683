//! Melee hit resolution.
//!
//! Runs after collision, against the corrected hitboxes:
//!
//! 1. The player's live swing damages the first overlapping enemy in spawn
//!    order and closes. One swing lands at most once.
//! 2. Every enemy's live swing is then checked against the player. A raised
//!    guard turns the hit into a counter: the enemy takes the parry damage
//!    and its swing closes. Otherwise the player is hurt and the swing stays
//!    live, so it can land again on later frames until its window ends.
//!
//! Both passes always run, so a killing blow and a counter-hit in the same
//! frame both apply.

use tracing::trace;

use crate::arena::Arena;
use crate::config::Tuning;
use crate::event::{EventLog, GameEvent};

use super::Resolver;

/// Resolver for swings landing on opposing actors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatResolver;

impl CombatResolver {
    /// Creates a new combat resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for CombatResolver {
    fn name(&self) -> &'static str {
        "combat"
    }

    fn resolve(&self, arena: &mut Arena, tuning: &Tuning, events: &mut EventLog) {
        let damage = &tuning.damage;
        let (_, player, enemies) = arena.split_mut();

        if let Some(swing) = player.body.attack.live_hitbox().copied() {
            if let Some(enemy) = enemies
                .iter_mut()
                .find(|enemy| swing.intersects(&enemy.body.hitbox()))
            {
                enemy.body.take_damage(damage.player_attack);
                player.body.attack.cancel();
                trace!(enemy = %enemy.id(), health = enemy.body.health, "player swing landed");
                events.push(GameEvent::EnemyHit {
                    enemy: enemy.id(),
                    damage: damage.player_attack,
                });
            }
        }

        for enemy in enemies.iter_mut() {
            let Some(swing) = enemy.body.attack.live_hitbox().copied() else {
                continue;
            };
            if !swing.intersects(&player.body.hitbox()) {
                continue;
            }

            if player.is_parrying() {
                enemy.body.take_damage(damage.parry_counter);
                enemy.body.attack.cancel();
                trace!(enemy = %enemy.id(), health = enemy.body.health, "swing parried");
                events.push(GameEvent::Parried {
                    enemy: enemy.id(),
                    counter_damage: damage.parry_counter,
                });
            } else {
                player.body.take_damage(damage.enemy_attack);
                trace!(enemy = %enemy.id(), health = player.body.health, "player hit");
                events.push(GameEvent::PlayerHit {
                    by: enemy.id(),
                    damage: damage.enemy_attack,
                });
            }
        }
    }
}
