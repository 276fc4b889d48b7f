//! Night-sky star placement.

#[cfg(test)]
#[path = "star_field_test.rs"]
mod star_field_test;

use scene::consts::{STAR_MAX_DELAY_S, STAR_MAX_TOP_PCT};

/// One twinkling star, positioned in percent of the sky box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
}

impl Star {
    /// Inline style placing the star and offsetting its twinkle.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s;",
            self.left_pct, self.top_pct, self.delay_s
        )
    }
}

/// Scatter `count` stars across the upper sky.
///
/// The same seed always yields the same field, so a mounted sky keeps its
/// stars across theme toggles.
#[must_use]
pub fn star_field(seed: u64, count: usize) -> Vec<Star> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| Star {
            left_pct: rng.f64() * 100.0,
            top_pct: rng.f64() * STAR_MAX_TOP_PCT,
            delay_s: rng.f64() * STAR_MAX_DELAY_S,
        })
        .collect()
}
