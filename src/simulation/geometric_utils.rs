//! Geometric utility functions for distance and heading calculations.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::{Array1, array};

/// Calculates the Euclidean distance between two points.
///
/// # Arguments
///
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
///
/// The Euclidean distance between the two points.
pub fn distance(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Calculates the unit heading from one point toward another.
///
/// The heading is derived from the arctangent of the offset, so the result
/// always has length 1 even when the points coincide (atan2(0, 0) is 0,
/// giving a heading along the positive x axis).
///
/// # Arguments
///
/// * `from` - Starting point
/// * `to` - Target point
///
/// # Returns
///
/// A unit vector pointing from `from` toward `to`.
pub fn unit_heading(from: &Array1<f64>, to: &Array1<f64>) -> Array1<f64> {
    let angle = (to[1] - from[1]).atan2(to[0] - from[0]);
    array![angle.cos(), angle.sin()]
}
