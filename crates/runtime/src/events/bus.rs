//! Broadcast fan-out of encounter events, one channel per [`Topic`].

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use battle_core::{ActionOutcome, EncounterPhase, NarrativePhase, ScriptPayload};

/// Which stream an [`Event`] is delivered on.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Applied action outcomes
    Combat,
    /// Phase transitions
    Encounter,
    /// Story scripts that fired
    Narrative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// One outcome already applied by the encounter. `nonce` is the action
    /// counter after application.
    Outcome {
        nonce: u64,
        elapsed_millis: u64,
        outcome: ActionOutcome,
    },
    PhaseChanged {
        from: EncounterPhase,
        to: EncounterPhase,
        elapsed_millis: u64,
    },
    Narrative {
        phase: NarrativePhase,
        payload: ScriptPayload,
    },
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Outcome { .. } => Topic::Combat,
            Event::PhaseChanged { .. } => Topic::Encounter,
            Event::Narrative { .. } => Topic::Narrative,
        }
    }
}

/// Cloneable publisher shared by the worker and every handle.
///
/// Lagging receivers lose the oldest events; the worker never waits on them.
#[derive(Clone)]
pub struct EventBus {
    combat: broadcast::Sender<Event>,
    encounter: broadcast::Sender<Event>,
    narrative: broadcast::Sender<Event>,
}

impl EventBus {
    /// Bus with 100 buffered events per topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            combat: broadcast::channel(capacity).0,
            encounter: broadcast::channel(capacity).0,
            narrative: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Encounter => &self.encounter,
            Topic::Narrative => &self.narrative,
        }
    }

    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!(target: "runtime::events", ?topic, "no subscribers");
        }
    }

    /// Receiver for events published after this call.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.sender(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_route_to_their_topic_only() {
        let bus = EventBus::with_capacity(4);
        let mut combat = bus.subscribe(Topic::Combat);
        let mut encounter = bus.subscribe(Topic::Encounter);

        bus.publish(Event::PhaseChanged {
            from: EncounterPhase::Idle,
            to: EncounterPhase::Active,
            elapsed_millis: 0,
        });

        let received = encounter.recv().await.expect("phase event");
        assert_eq!(received.topic(), Topic::Encounter);
        assert!(combat.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::Narrative {
            phase: NarrativePhase::Camp,
            payload: ScriptPayload::default(),
        });
        assert_eq!(bus.subscriber_count(Topic::Narrative), 0);
    }
}
