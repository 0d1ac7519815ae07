//! Star track resolution.
//!
//! Leftover space is split by weight with whole pixel shares. Each share is
//! the floor of its exact value and the pixels lost to flooring go one each
//! to the earliest weighted tracks, so the shares always add up to the
//! budget. A list whose weights sum to zero is split evenly.

use crate::track::{Track, TrackUnit};

/// Split `budget` pixels across tracks proportionally to `weights`.
///
/// A negative budget is treated as zero.
pub fn distribute_star_space(budget: i32, weights: &[f32]) -> Vec<i32> {
    if weights.is_empty() {
        return Vec::new();
    }
    let budget = budget.max(0);
    let total_weight: f64 = weights.iter().map(|&weight| f64::from(weight.max(0.0))).sum();
    let even_split = !(total_weight > 0.0 && total_weight.is_finite());

    let weight_of = |weight: f32| -> f64 {
        if even_split {
            1.0
        } else {
            f64::from(weight.max(0.0))
        }
    };
    let total = if even_split {
        weights.len() as f64
    } else {
        total_weight
    };

    let mut shares: Vec<i32> = weights
        .iter()
        .map(|&weight| (f64::from(budget) * weight_of(weight) / total).floor() as i32)
        .collect();

    let assigned = shares.iter().fold(0_i32, |total, &share| total.saturating_add(share));
    let mut remainder = budget.saturating_sub(assigned);
    for (share, &weight) in shares.iter_mut().zip(weights) {
        if remainder <= 0 {
            break;
        }
        if weight_of(weight) > 0.0 {
            *share += 1;
            remainder -= 1;
        }
    }
    shares
}

/// Measure-time star resolution.
///
/// Every [`TrackUnit::Star`] track gets its share of what the other tracks
/// leave of `total_available` as measure size, and that share raises its
/// measured minimum.
pub fn resolve_stars(tracks: &mut [Track], total_available: i32) {
    let mut space_left = total_available;
    let mut weights = Vec::new();
    for track in tracks.iter() {
        if track.measure_unit() == TrackUnit::Star {
            weights.push(track.definition().star_weight());
        } else {
            space_left = space_left.saturating_sub(track.measured_min());
        }
    }
    if weights.is_empty() {
        return;
    }

    let shares = distribute_star_space(space_left, &weights);
    tracing::trace!(
        "resolve_stars: available={}, space_left={}, shares={:?}",
        total_available,
        space_left,
        shares
    );
    let star_tracks = tracks
        .iter_mut()
        .filter(|track| track.measure_unit() == TrackUnit::Star);
    for (track, share) in star_tracks.zip(shares) {
        track.set_measure_size(share);
        track.apply_measure_min(share);
    }
}

/// Arrange-time star resolution.
///
/// Star-like tracks share what the other tracks leave of `total_available`.
/// When that leftover cannot even hold the stars' measured minimums the
/// stars keep their minimums and the content overflows.
pub fn finalize_stars(tracks: &mut [Track], total_available: i32) {
    let mut space_left = total_available;
    let mut star_min_total: i32 = 0;
    let mut weights = Vec::new();
    for track in tracks.iter() {
        if track.measure_unit().is_star_like() {
            weights.push(track.definition().star_weight());
            star_min_total = star_min_total.saturating_add(track.measured_min());
        } else {
            space_left = space_left.saturating_sub(track.measured_min());
        }
    }
    if weights.is_empty() || space_left < star_min_total {
        return;
    }

    let shares = distribute_star_space(space_left, &weights);
    let minimums: Vec<i32> = tracks
        .iter()
        .filter(|track| track.measure_unit().is_star_like())
        .map(Track::measured_min)
        .collect();
    let mut sizes: Vec<i32> = shares
        .iter()
        .zip(&minimums)
        .map(|(&share, &min)| share.max(min))
        .collect();
    let mut size_total = sizes.iter().fold(0_i32, |total, &size| total.saturating_add(size));

    // Minimums above their share push the total past the budget; take it back
    // one pixel at a time from the last tracks that still have room.
    let mut changed = true;
    while size_total > space_left && changed {
        changed = false;
        for (size, &min) in sizes.iter_mut().zip(&minimums).rev() {
            if size_total <= space_left {
                break;
            }
            if *size > min {
                *size -= 1;
                size_total -= 1;
                changed = true;
            }
        }
    }

    tracing::trace!(
        "finalize_stars: available={}, space_left={}, sizes={:?}",
        total_available,
        space_left,
        sizes
    );
    if size_total <= space_left {
        let star_tracks = tracks
            .iter_mut()
            .filter(|track| track.measure_unit().is_star_like());
        for (track, size) in star_tracks.zip(sizes) {
            track.set_arrange_min(size);
        }
    }
}
