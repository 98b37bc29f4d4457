//! Event system for two-phase simulation state updates.
//!
//! Organism updates run over an immutable snapshot of the world and report
//! collection changes as events; the world applies them in a second pass, so
//! nothing mutates a collection while it is being walked.

use super::ecosystem::Ecosystem;
use super::organism::Organism;

/// Events that modify the world's collections.
///
/// Collected during the organism pass and applied afterwards.
#[derive(Debug, Clone)]
pub enum SimulationEvent {
    /// An organism claimed and ate a food item.
    FoodEaten {
        /// Index of the item in the food table at the start of the pass.
        food_index: usize,
    },
    /// An organism reproduced.
    OrganismSpawned {
        /// The offspring, appended to the world after the pass.
        offspring: Organism,
    },
}

/// Queue for collecting simulation events during an update pass.
#[derive(Debug)]
pub struct EventQueue {
    events: Vec<SimulationEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SimulationEvent> {
        self.events.drain(..)
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Applies all queued events to the world.
///
/// Eaten food is removed by index in descending order so earlier indices
/// stay valid and survivors keep their insertion order. Offspring are
/// appended last; they were queued past the update pass, so their first
/// update happens next frame.
pub fn apply_events(state: &mut Ecosystem, mut queue: EventQueue) {
    let mut eaten: Vec<usize> = Vec::new();
    let mut spawned: Vec<Organism> = Vec::new();

    for event in queue.drain() {
        match event {
            SimulationEvent::FoodEaten { food_index } => {
                eaten.push(food_index);
            }
            SimulationEvent::OrganismSpawned { offspring } => {
                spawned.push(offspring);
            }
        }
    }

    // Claims are exclusive per item, so the indices are unique.
    eaten.sort_unstable();
    eaten.reverse();
    for index in eaten {
        state.food.remove(index);
    }

    state.organisms.extend(spawned);
}
