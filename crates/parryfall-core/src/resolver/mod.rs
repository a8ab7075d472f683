//! Resolver module: the world-level passes of a step.
//!
//! Once every actor has applied its intent and integrated its motion, the
//! simulation runs its resolvers in order. Each resolver sees the whole
//! arena and may mutate it.
//!
//! # Default Order
//!
//! 1. [`CollisionResolver`]: separates bodies from platforms
//! 2. [`CombatResolver`]: lands swings and parries
//!
//! Extra resolvers added with
//! [`Simulation::add_resolver`](crate::simulation::Simulation::add_resolver)
//! run after these, before the win and loss checks.
//!
//! # Invariants
//!
//! - Resolvers MUST be deterministic given the same arena and tuning
//! - Resolvers MUST iterate enemies in arena order

mod collision;
mod combat;
pub mod physics;

pub use collision::{resolve_platform_contact, CollisionResolver, Contact};
pub use combat::CombatResolver;
pub use physics::{integrate, Integration};

use crate::arena::Arena;
use crate::config::Tuning;
use crate::event::EventLog;

/// A pass over the whole arena.
///
/// # Example
///
/// ```
/// use parryfall_core::arena::Arena;
/// use parryfall_core::config::Tuning;
/// use parryfall_core::event::EventLog;
/// use parryfall_core::resolver::Resolver;
///
/// /// Heals the player a little every frame.
/// struct Regen;
///
/// impl Resolver for Regen {
///     fn name(&self) -> &'static str {
///         "regen"
///     }
///
///     fn resolve(&self, arena: &mut Arena, _tuning: &Tuning, _events: &mut EventLog) {
///         let body = &mut arena.player_mut().body;
///         body.health = (body.health + 0.1).min(body.max_health);
///     }
/// }
/// ```
pub trait Resolver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Applies this pass to `arena`, recording anything notable in `events`.
    fn resolve(&self, arena: &mut Arena, tuning: &Tuning, events: &mut EventLog);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    #[test]
    fn resolver_is_object_safe() {
        fn _accepts_boxed(_resolver: Box<dyn Resolver>) {}
        fn _accepts_slice(_resolvers: &[Box<dyn Resolver>]) {}
    }

    #[test]
    fn default_resolvers_are_named() {
        let resolvers: Vec<Box<dyn Resolver>> =
            vec![Box::new(CollisionResolver::new()), Box::new(CombatResolver::new())];
        let names: Vec<&str> = resolvers.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["collision", "combat"]);
    }
}
