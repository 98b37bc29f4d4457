//! Main ecosystem simulation: world state and the per-frame step.
//!
//! The ecosystem owns the organism and food collections and drives the
//! frame cycle: food grows and splits, organisms steer, eat, reproduce, and
//! starve. Entity updates report collection changes as events that are
//! applied after the pass, so the collections are never mutated while being
//! walked.

use ndarray::array;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::events::{self, EventQueue};
use super::food::{Food, FoodView};
use super::organism::Organism;
use super::params::Params;

/// The world: both entity collections and the frame counter.
///
/// Both collections are insertion-ordered and exclusively owned here;
/// entities see them only through the views and events the step hands out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ecosystem {
    /// All living organisms.
    pub organisms: Vec<Organism>,
    /// All uneaten food items.
    pub food: Vec<Food>,
    /// Frames simulated so far.
    pub frame: u64,
}

impl Ecosystem {
    /// Seeds a world with random organisms and food.
    ///
    /// Entities are placed uniformly at random, one body radius away from
    /// the walls.
    pub fn new(params: &Params) -> Self {
        let mut rng = rand::rng();

        let mut organisms = Vec::with_capacity(params.n_organism);
        let mut food = Vec::with_capacity(params.n_food);

        for _ in 0..params.n_organism {
            let margin = params.organism_radius;
            let pos = array![
                rng.random_range(margin..params.box_width - margin),
                rng.random_range(margin..params.box_height - margin),
            ];
            organisms.push(Organism::new(pos, params));
        }

        for _ in 0..params.n_food {
            let margin = params.food_radius;
            let pos = array![
                rng.random_range(margin..params.box_width - margin),
                rng.random_range(margin..params.box_height - margin),
            ];
            food.push(Food::new(pos, params.food_radius, params.food_color));
        }

        Self {
            organisms,
            food,
            frame: 0,
        }
    }

    /// Advances the simulation by one frame.
    ///
    /// Order per frame: every food item grows and may split (children are
    /// buffered and appended after the pass, so they are not visited in
    /// their birth frame); every organism updates in index order against a
    /// claim-tracking view of the food table; the queued events are applied;
    /// starved organisms are removed the same frame they starve.
    pub fn step(&mut self, params: &Params) {
        self.frame += 1;

        let mut sprouted = Vec::new();
        for item in self.food.iter_mut() {
            item.grow(params);
            if let Some(child) = item.replicate(params) {
                sprouted.push(child);
            }
        }
        self.food.extend(sprouted);

        let mut queue = EventQueue::new();
        {
            let mut view = FoodView::new(&self.food);
            for organism in self.organisms.iter_mut() {
                organism.update(&mut view, &mut queue, params);
            }
        }

        events::apply_events(self, queue);

        self.organisms.retain(|organism| !organism.is_starved());
    }
}
