use serde::{Deserialize, Serialize};

/// Simulation parameters that control ecosystem behavior.
///
/// All values are fixed when the world is seeded; nothing is reconfigured at
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Number of organisms seeded at world creation.
    pub n_organism: usize,
    /// Number of food items seeded at world creation.
    pub n_food: usize,
    /// Simulation area width.
    pub box_width: f64,
    /// Simulation area height.
    pub box_height: f64,
    /// Radius within which a hungry organism detects food.
    pub fov_radius: f64,
    /// Frames without eating before an organism starves.
    pub starvation_time: f64,
    /// Per-frame chance to reproduce while well-fed and ready.
    pub reproduction_chance: f64,
    /// Independent chance that a reproduction yields a second offspring.
    pub extra_reproduction_chance: f64,
    /// Frames required before an organism can reproduce again.
    pub reproduction_cooldown: f64,
    /// Fullness-counter value at which a full organism becomes hungry again.
    pub fullness_limit: f64,
    /// Body radius of seeded organisms and of offspring.
    pub organism_radius: f64,
    /// Half-range of the random offset offspring spawn at, per axis.
    pub spawn_spread: f64,
    /// Radius of seeded food items and of split children.
    pub food_radius: f64,
    /// Food radius increase per frame.
    pub food_growth_rate: f64,
    /// Radius at which a food item splits.
    pub food_split_threshold: f64,
    /// Body radius above which an organism is always ready to reproduce.
    pub maturity_radius: f64,
    /// RGB color shared by all food items.
    pub food_color: [u8; 3],
}
