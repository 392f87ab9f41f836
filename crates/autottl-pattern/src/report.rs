use std::cmp::Ordering;

use autottl_core::constants::MAX_ACTIVE_HOURS;
use autottl_core::{ActiveHour, UpdatePattern};

/// The (up to) three hours with the highest update density.
///
/// Sorted by density descending; equal densities keep ascending hour order.
pub fn most_active_hours(pattern: &UpdatePattern) -> Vec<ActiveHour> {
    let mut hours: Vec<ActiveHour> = pattern
        .hours
        .iter()
        .map(|(&hour, profile)| ActiveHour {
            hour,
            density: profile.density,
        })
        .collect();

    // `sort_by` is stable, so ties stay in BTreeMap (hour-ascending) order.
    hours.sort_by(|a, b| {
        b.density
            .partial_cmp(&a.density)
            .unwrap_or(Ordering::Equal)
    });
    hours.truncate(MAX_ACTIVE_HOURS);
    hours
}
