//! Gameplay events recorded for render and audio collaborators.
//!
//! The simulation appends an [`EventRecord`] whenever something worth a
//! sound or an effect happens. Events have no gameplay effect; dropping them
//! unread changes nothing.
//!
//! # Usage
//!
//! The log keeps growing until it is drained with
//! [`EventLog::take_events`], typically once per rendered frame.

use serde::{Deserialize, Serialize};

use crate::entity::{ActorRef, EntityId};

/// Something that happened during a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// An actor began a swing.
    AttackStarted {
        /// Who swung.
        actor: ActorRef,
    },
    /// The player raised the guard.
    ParryRaised,
    /// The player's swing landed.
    EnemyHit {
        /// Enemy struck.
        enemy: EntityId,
        /// Damage dealt.
        damage: f32,
    },
    /// An enemy's swing landed on an unguarded player.
    PlayerHit {
        /// Enemy that struck.
        by: EntityId,
        /// Damage dealt.
        damage: f32,
    },
    /// An enemy's swing met the guard and was countered.
    Parried {
        /// Enemy countered.
        enemy: EntityId,
        /// Damage dealt back.
        counter_damage: f32,
    },
    /// An actor dropped below the death line.
    FellOutOfWorld {
        /// Who fell.
        actor: ActorRef,
    },
    /// An enemy was removed from the roster.
    EnemyDefeated {
        /// Enemy removed.
        enemy: EntityId,
    },
    /// The player touched the goal.
    GoalReached,
    /// The player ran out of health.
    PlayerDefeated,
}

/// An event stamped with the frame it happened in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Frame number, starting at 0 for the first step.
    pub frame: u64,
    /// What happened.
    pub event: GameEvent,
}

/// Append-only event buffer.
///
/// # Example
///
/// ```
/// use parryfall_core::event::{EventLog, GameEvent};
///
/// let mut log = EventLog::new();
/// log.set_frame(7);
/// log.push(GameEvent::GoalReached);
///
/// let events = log.take_events();
/// assert_eq!(events[0].frame, 7);
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    frame: u64,
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the frame number stamped onto subsequent events.
    pub fn set_frame(&mut self, frame: u64) {
        self.frame = frame;
    }

    /// Records `event` in the current frame.
    pub fn push(&mut self, event: GameEvent) {
        self.records.push(EventRecord {
            frame: self.frame,
            event,
        });
    }

    /// Events recorded since the last drain, oldest first.
    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Drains and returns all recorded events.
    pub fn take_events(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.records)
    }

    /// Returns the number of events currently in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the event log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clears all events from the log without returning them.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn events_keep_order_and_frame() {
        let mut log = EventLog::new();
        log.push(GameEvent::ParryRaised);
        log.set_frame(3);
        log.push(GameEvent::EnemyDefeated {
            enemy: EntityId::new(2),
        });

        assert_eq!(log.len(), 2);
        let records = log.take_events();
        assert_eq!(records[0].frame, 0);
        assert_eq!(records[0].event, GameEvent::ParryRaised);
        assert_eq!(records[1].frame, 3);
        assert!(log.is_empty());
    }

    #[test]
    fn clear_discards() {
        let mut log = EventLog::new();
        log.push(GameEvent::GoalReached);
        log.clear();
        assert!(log.take_events().is_empty());
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let json = serde_json::to_string(&GameEvent::PlayerHit {
            by: EntityId::new(1),
            damage: 10.0,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"player_hit","by":1,"damage":10.0}"#);
    }
}
