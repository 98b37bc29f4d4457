//! Food items that organisms seek, flee, and consume.
//!
//! Food grows a little every frame and splits in two once it reaches the
//! split threshold.

use ndarray::{Array1, array};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometric_utils::distance;
use super::params::Params;

/// A circular food item.
///
/// Food never moves. It grows by a fixed increment per frame and, once its
/// radius reaches the split threshold, sheds a small child at a random angle
/// while halving itself. It leaves the world only by being eaten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Position in 2D space.
    pub pos: Array1<f64>,
    /// Current radius.
    pub radius: f64,
    /// RGB color, inherited by split children.
    pub color: [u8; 3],
}

impl Food {
    /// Creates a food item at the given position.
    pub fn new(pos: Array1<f64>, radius: f64, color: [u8; 3]) -> Self {
        Self { pos, radius, color }
    }

    /// Grows the radius by the per-frame growth rate.
    pub fn grow(&mut self, params: &Params) {
        self.radius += params.food_growth_rate;
    }

    /// Splits off a child once the radius has reached the split threshold.
    ///
    /// The child spawns at a random angle, two pre-split radii away, with the
    /// starting radius and the parent's color; the parent's radius halves.
    /// The caller appends the child to the world after the food pass.
    ///
    /// # Returns
    ///
    /// The child, or `None` while still below the threshold.
    pub fn replicate(&mut self, params: &Params) -> Option<Food> {
        if self.radius < params.food_split_threshold {
            return None;
        }

        let angle = rand::rng().random::<f64>() * std::f64::consts::TAU;
        let offset = self.radius * 2.0;
        let pos = array![
            self.pos[0] + angle.cos() * offset,
            self.pos[1] + angle.sin() * offset,
        ];

        self.radius /= 2.0;

        Some(Food::new(pos, params.food_radius, self.color))
    }
}

/// Read view over the food table for one organism pass.
///
/// Organisms scan and claim food through this view instead of touching the
/// shared collection: claimed items stay in the table until the world applies
/// the frame's events, but are excluded from every later scan in the same
/// frame, so each item is eaten at most once.
pub struct FoodView<'a> {
    items: &'a [Food],
    claimed: Vec<bool>,
}

impl<'a> FoodView<'a> {
    /// Creates a view over the food table with nothing claimed.
    pub fn new(items: &'a [Food]) -> Self {
        Self {
            claimed: vec![false; items.len()],
            items,
        }
    }

    /// Finds the nearest unclaimed item strictly within `radius` of `pos`.
    pub fn nearest_within(&self, pos: &Array1<f64>, radius: f64) -> Option<&'a Food> {
        let mut best_distance = radius;
        let mut best = None;

        for (item, claimed) in self.items.iter().zip(&self.claimed) {
            if *claimed {
                continue;
            }
            let dist = distance(pos, &item.pos);
            if dist < best_distance {
                best_distance = dist;
                best = Some(item);
            }
        }

        best
    }

    /// Finds the nearest unclaimed item in the entire table.
    pub fn nearest(&self, pos: &Array1<f64>) -> Option<&'a Food> {
        self.nearest_within(pos, f64::INFINITY)
    }

    /// Claims the first unclaimed item overlapping a body at `pos`.
    ///
    /// Overlap means the center distance is less than the sum of the radii.
    /// Items are tested in insertion order; the first match wins, which is
    /// not necessarily the closest.
    ///
    /// # Returns
    ///
    /// The index of the claimed item, or `None` if nothing overlaps.
    pub fn claim_overlapping(&mut self, pos: &Array1<f64>, radius: f64) -> Option<usize> {
        for (index, item) in self.items.iter().enumerate() {
            if self.claimed[index] {
                continue;
            }
            if distance(pos, &item.pos) < radius + item.radius {
                self.claimed[index] = true;
                return Some(index);
            }
        }
        None
    }
}
