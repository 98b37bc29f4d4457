//! # Petri - Predator/Food Ecosystem Toy
//!
//! A 2D simulation of simple organisms grazing on food that grows and splits
//! over time. Hungry organisms steer toward the nearest food in view; full
//! ones flee it while they digest. Well-fed organisms reproduce, and anything
//! that goes too long without eating starves.
//!
//! ## Features
//!
//! - Field-of-view based food seeking and post-meal fleeing
//! - Growing, self-splitting food particles
//! - Stochastic reproduction with a cooldown and a bonus-offspring chance
//! - Starvation-driven population turnover
//! - Real-time macroquad rendering with hunger-shaded bodies
//!
//! ## Core Modules
//!
//! - [`simulation::ecosystem`] - World state and the per-frame step
//! - [`simulation::organism`] - Organism behavior and state
//! - [`simulation::food`] - Food growth, splitting, and the claim view
//! - [`simulation::events`] - Two-phase update plumbing

/// Core simulation logic and data structures.
pub mod simulation {
    /// World state and the per-frame update cycle.
    pub mod ecosystem;
    /// Event queue for two-phase collection updates.
    pub mod events;
    /// Food items that grow, split, and get eaten.
    pub mod food;
    /// Geometric utility functions for distance and heading calculations.
    pub mod geometric_utils;
    /// Organism behavior, state, and lifecycle.
    pub mod organism;
    /// Simulation parameters.
    pub mod params;
}
