//! Scale-level (level-of-detail) resolution for tiled map services.

use serde::{Deserialize, Serialize};

/// One level of detail in a tiled map service's resolution pyramid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lod {
    /// Level identifier (usually the zoom level).
    pub level: u32,

    /// Map units per pixel at this level.
    pub resolution: f64,

    /// Scale denominator at this level.
    pub scale: f64,
}

impl Lod {
    pub fn new(level: u32, resolution: f64, scale: f64) -> Self {
        Self {
            level,
            resolution,
            scale,
        }
    }
}

/// Find the level matching a scale threshold.
///
/// `levels` must be ordered by decreasing scale (index 0 = most zoomed-out).
/// Returns the index of the level whose scale is the tightest bound still
/// `>=` the threshold. A threshold of `0` means "no limit" and resolves to
/// the last (most zoomed-in) level.
///
/// # Panics
/// Panics if `levels` is empty.
pub fn resolve_level(levels: &[Lod], scale_threshold: f64) -> usize {
    assert!(!levels.is_empty(), "level list must not be empty");

    if scale_threshold == 0.0 {
        return levels.len() - 1;
    }

    // Binary search: narrow [low, high] until the cursors are adjacent.
    // Terminates for any list length, including 2 (high - low shrinks by
    // at least 1 every iteration since mid is strictly between the cursors).
    let mut low = 0;
    let mut high = levels.len() - 1;
    while high - low > 1 {
        let mid = (low + high) / 2;
        if levels[mid].scale >= scale_threshold {
            low = mid;
        } else {
            high = mid;
        }
    }

    if levels[high].scale >= scale_threshold {
        high
    } else {
        low
    }
}
