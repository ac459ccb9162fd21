//! Neighbor ranking
//!
//! Orders scored training samples from nearest to farthest.

use gesture_spi::ScoredSample;

/// Sort scored samples ascending by distance.
///
/// The sort is unstable: samples at equal distance may come out in any
/// relative order. Distances are compared with [`f64::total_cmp`], so a NaN
/// distance sorts after every finite one instead of poisoning the order.
pub fn rank(mut scored: Vec<ScoredSample>) -> Vec<ScoredSample> {
    scored.sort_unstable_by(|a, b| a.distance.total_cmp(&b.distance));
    scored
}
