#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::array;
use petri::simulation::food::{Food, FoodView};
use petri::simulation::geometric_utils::distance;
use petri::simulation::params::Params;

fn create_test_params() -> Params {
    Params {
        n_organism: 20,
        n_food: 50,
        box_width: 800.0,
        box_height: 600.0,
        fov_radius: 50.0,
        starvation_time: 500.0,
        reproduction_chance: 0.03,
        extra_reproduction_chance: 0.01,
        reproduction_cooldown: 600.0,
        fullness_limit: 300.0,
        organism_radius: 5.0,
        spawn_spread: 10.0,
        food_radius: 3.0,
        food_growth_rate: 0.01,
        food_split_threshold: 10.0,
        maturity_radius: 10.0,
        food_color: [0, 128, 0],
    }
}

#[test]
fn test_grow_adds_exactly_the_growth_rate() {
    let params = create_test_params();
    let mut food = Food::new(array![100.0, 100.0], 3.0, params.food_color);

    food.grow(&params);

    assert_eq!(food.radius, 3.0 + params.food_growth_rate);
}

#[test]
fn test_replicate_below_threshold_does_nothing() {
    let params = create_test_params();
    let mut food = Food::new(array![100.0, 100.0], 9.98, params.food_color);

    assert!(food.replicate(&params).is_none());
    assert_eq!(food.radius, 9.98);
}

#[test]
fn test_replicate_at_exact_threshold_splits() {
    let params = create_test_params();
    let mut food = Food::new(array![100.0, 100.0], 10.0, params.food_color);

    let child = food.replicate(&params).expect("threshold radius must split");

    assert_eq!(food.radius, 5.0);
    assert_eq!(child.radius, params.food_radius);
}

#[test]
fn test_one_growth_step_tips_over_the_threshold() {
    // 9.99 + 0.01 rounds up to the threshold under IEEE doubles, so the
    // very next split check must fire.
    let params = create_test_params();
    let origin = array![200.0, 150.0];
    let mut food = Food::new(origin.clone(), 9.99, params.food_color);

    food.grow(&params);
    assert!((food.radius - 10.0).abs() < 1e-9);

    let pre_split_radius = food.radius;
    let child = food.replicate(&params).expect("grown food must split");

    assert!((food.radius - 5.0).abs() < 1e-9);
    assert_eq!(child.radius, params.food_radius);
    assert_eq!(child.color, food.color);

    // the child lands two pre-split radii from the parent's position
    let offset = distance(&child.pos, &origin);
    assert!((offset - 2.0 * pre_split_radius).abs() < 1e-9);
}

#[test]
fn test_view_nearest_within_is_a_strict_bound() {
    let params = create_test_params();
    let items = vec![Food::new(array![150.0, 100.0], 3.0, params.food_color)];
    let view = FoodView::new(&items);

    // exactly on the rim is out of view
    assert!(view.nearest_within(&array![100.0, 100.0], 50.0).is_none());
    assert!(view.nearest_within(&array![101.0, 100.0], 50.0).is_some());
}

#[test]
fn test_view_nearest_picks_the_closest_item() {
    let params = create_test_params();
    let items = vec![
        Food::new(array![300.0, 100.0], 3.0, params.food_color),
        Food::new(array![120.0, 100.0], 3.0, params.food_color),
    ];
    let view = FoodView::new(&items);

    let nearest = view.nearest(&array![100.0, 100.0]).expect("table not empty");
    assert_eq!(nearest.pos, array![120.0, 100.0]);
}

#[test]
fn test_view_nearest_over_empty_table_is_none() {
    let items: Vec<Food> = Vec::new();
    let view = FoodView::new(&items);

    assert!(view.nearest(&array![100.0, 100.0]).is_none());
}

#[test]
fn test_view_claims_in_insertion_order_not_by_distance() {
    let params = create_test_params();
    // both overlap a radius-5 body at the origin; index 1 is closer
    let items = vec![
        Food::new(array![4.0, 0.0], 3.0, params.food_color),
        Food::new(array![1.0, 0.0], 3.0, params.food_color),
    ];
    let mut view = FoodView::new(&items);

    assert_eq!(view.claim_overlapping(&array![0.0, 0.0], 5.0), Some(0));
}

#[test]
fn test_claimed_items_are_invisible_to_later_scans() {
    let params = create_test_params();
    let items = vec![Food::new(array![1.0, 0.0], 3.0, params.food_color)];
    let mut view = FoodView::new(&items);

    assert_eq!(view.claim_overlapping(&array![0.0, 0.0], 5.0), Some(0));

    // a second claimant in the same frame finds nothing
    assert_eq!(view.claim_overlapping(&array![0.0, 0.0], 5.0), None);
    assert!(view.nearest(&array![0.0, 0.0]).is_none());
    assert!(view.nearest_within(&array![0.0, 0.0], 50.0).is_none());
}
