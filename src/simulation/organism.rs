//! Organism behavior, state, and lifecycle management.
//!
//! Organisms wander the box, steer toward the nearest food in view while
//! hungry, flee the nearest food while full, and starve when they go too
//! long without eating. Well-fed organisms occasionally reproduce.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::events::{EventQueue, SimulationEvent};
use super::food::FoodView;
use super::geometric_utils::unit_heading;
use super::params::Params;

/// Whether an organism is looking for food or digesting a meal.
///
/// A full organism flees food instead of seeking it, and its hunger timer
/// doubles as a fullness counter until the fullness limit clears the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HungerState {
    /// Seeking food within the field of view.
    Hungry,
    /// Recently ate; fleeing food until the fullness counter runs out.
    Full,
}

/// Whether an organism may reproduce this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReproductionState {
    /// Waiting out the cooldown timer.
    CoolingDown,
    /// Cooldown elapsed; the next successful draw reproduces.
    Ready,
}

/// A mobile agent that eats food, reproduces, and starves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    /// Position in 2D space.
    pub pos: Array1<f64>,
    /// Velocity; components seeded uniform in [-1, 1), replaced by exact
    /// unit headings whenever steering finds a target.
    pub vel: Array1<f64>,
    /// Body radius, fixed for the organism's lifetime.
    pub radius: f64,
    /// Frames since the last meal. While full this counts double and serves
    /// as the fullness counter.
    pub hunger: f64,
    /// Frames without eating before starvation.
    pub max_hunger: f64,
    /// Frames required before reproduction becomes ready again.
    pub cooldown_len: f64,
    /// Frames accumulated toward the current cooldown.
    pub cooldown_timer: f64,
    /// Per-frame reproduction chance while well-fed and ready.
    pub repro_chance: f64,
    /// Independent chance of a second offspring per reproduction.
    pub bonus_chance: f64,
    /// Seeking or digesting.
    pub hunger_state: HungerState,
    /// Cooling down or ready to reproduce.
    pub repro_state: ReproductionState,
}

impl Organism {
    /// Creates an organism at the given position with a random velocity and
    /// the parameter defaults.
    pub fn new(pos: Array1<f64>, params: &Params) -> Self {
        Self {
            pos,
            vel: Array1::random(2, Uniform::new(-1.0, 1.0)),
            radius: params.organism_radius,
            hunger: 0.0,
            max_hunger: params.starvation_time,
            cooldown_len: params.reproduction_cooldown,
            cooldown_timer: 0.0,
            repro_chance: params.reproduction_chance,
            bonus_chance: params.extra_reproduction_chance,
            hunger_state: HungerState::Hungry,
            repro_state: ReproductionState::CoolingDown,
        }
    }

    /// Advances the organism by one frame.
    ///
    /// Reads food through the view, claims at most one item, and reports
    /// consumption and offspring as events for the world to apply after the
    /// pass; the organism itself only mutates its own state.
    pub fn update(&mut self, food: &mut FoodView<'_>, events: &mut EventQueue, params: &Params) {
        self.steer(food, params);
        self.advance(params);

        // eat the first overlapping item, one per frame
        if self.hunger_state == HungerState::Hungry {
            if let Some(food_index) = food.claim_overlapping(&self.pos, self.radius) {
                self.hunger = 0.0;
                self.hunger_state = HungerState::Full;
                events.push(SimulationEvent::FoodEaten { food_index });
            }
        }

        // hunger rises twice as fast while full, so the same timer measures
        // fullness duration
        self.hunger += 1.0;
        if self.hunger_state == HungerState::Full {
            self.hunger += 1.0;
            if self.hunger >= params.fullness_limit {
                self.hunger_state = HungerState::Hungry;
                self.hunger = 0.0;
            }
        }

        if self.repro_state == ReproductionState::CoolingDown {
            self.cooldown_timer += 1.0;
            if self.cooldown_timer >= self.cooldown_len {
                self.repro_state = ReproductionState::Ready;
                self.cooldown_timer = 0.0;
            }
        }

        if self.hunger < self.max_hunger / 2.0
            && rand::rng().random::<f64>() < self.repro_chance
            && self.repro_state == ReproductionState::Ready
        {
            self.reproduce(events, params);
            self.repro_state = ReproductionState::CoolingDown;
        }

        // Oversized organisms are always ready, pre-empting the cooldown
        // every frame. Inherited quirk, kept as-is.
        if self.radius > params.maturity_radius {
            self.repro_state = ReproductionState::Ready;
        }
    }

    /// Pushes one offspring, or two on a bonus draw, as spawn events.
    ///
    /// Both offspring share one random offset from the parent. Also clears
    /// readiness; the update loop clears it again, which is harmless.
    pub fn reproduce(&mut self, events: &mut EventQueue, params: &Params) {
        let offset = Array1::random(2, Uniform::new(-params.spawn_spread, params.spawn_spread));
        let pos = &self.pos + &offset;

        if rand::rng().random::<f64>() < self.bonus_chance {
            events.push(SimulationEvent::OrganismSpawned {
                offspring: self.offspring(pos.clone(), params),
            });
        }

        events.push(SimulationEvent::OrganismSpawned {
            offspring: self.offspring(pos, params),
        });

        self.repro_state = ReproductionState::CoolingDown;
    }

    /// Checks whether the organism has starved.
    pub fn is_starved(&self) -> bool {
        self.hunger > self.max_hunger
    }

    /// Sets the heading for this frame.
    ///
    /// Hungry: toward the nearest unclaimed food strictly within the field
    /// of view. Full: directly away from the nearest food anywhere in the
    /// box. When the scan finds nothing (including an empty food table) the
    /// heading is left unchanged and the organism keeps moving straight.
    fn steer(&mut self, food: &FoodView<'_>, params: &Params) {
        match self.hunger_state {
            HungerState::Hungry => {
                if let Some(target) = food.nearest_within(&self.pos, params.fov_radius) {
                    self.vel = unit_heading(&self.pos, &target.pos);
                }
            }
            HungerState::Full => {
                if let Some(threat) = food.nearest(&self.pos) {
                    self.vel = unit_heading(&threat.pos, &self.pos);
                }
            }
        }
    }

    /// Moves one velocity step and reflects off the box walls.
    ///
    /// Only the velocity component flips when an edge is crossed; the
    /// position recovers over the following frames.
    fn advance(&mut self, params: &Params) {
        self.pos += &self.vel;

        if self.pos[0] + self.radius > params.box_width || self.pos[0] - self.radius < 0.0 {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] + self.radius > params.box_height || self.pos[1] - self.radius < 0.0 {
            self.vel[1] = -self.vel[1];
        }
    }

    /// Builds one offspring at the given position.
    ///
    /// Starvation limit, cooldown length, and both probabilities are
    /// inherited from the parent; the radius is the fixed starting radius.
    fn offspring(&self, pos: Array1<f64>, params: &Params) -> Organism {
        Organism {
            pos,
            vel: Array1::random(2, Uniform::new(-1.0, 1.0)),
            radius: params.organism_radius,
            hunger: 0.0,
            max_hunger: self.max_hunger,
            cooldown_len: self.cooldown_len,
            cooldown_timer: 0.0,
            repro_chance: self.repro_chance,
            bonus_chance: self.bonus_chance,
            hunger_state: HungerState::Hungry,
            repro_state: ReproductionState::CoolingDown,
        }
    }
}
