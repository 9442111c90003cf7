//! Textfit - shrink description text until it clears the stats row
//!
//! Iterative: try the largest size, measure the free gap, step down
//! until the gap meets the target margin or the readability floor is
//! hit. Measurement goes through a trait so the algorithm tests run on
//! the host against fake layouts.

pub mod dom;

/// Tuning for one fit pass; sizes in rem, margins in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    pub max_rem: f32,
    pub min_rem: f32,
    pub step_rem: f32,
    pub target_margin_px: f32,
    pub max_iterations: u32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_rem: 0.7,
            min_rem: 0.5,
            step_rem: 0.05,
            target_margin_px: 8.0,
            max_iterations: 10,
        }
    }
}

/// Result of a fit pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitOutcome {
    /// Text fits at this size with the target margin to spare
    Fits { rem: f32 },
    /// Floor reached without fitting; caller should line-clamp
    Clamped { rem: f32 },
}

impl FitOutcome {
    pub fn rem(&self) -> f32 {
        match self {
            Self::Fits { rem } | Self::Clamped { rem } => *rem,
        }
    }

    pub fn needs_clamp(&self) -> bool {
        matches!(self, Self::Clamped { .. })
    }
}

/// Tighter leading below 0.6rem buys a little extra room
pub fn line_height_for(rem: f32) -> f32 {
    if rem < 0.6 { 1.2 } else { 1.3 }
}

/// Reports the free space (px) between the text block and whatever sits
/// below it, after applying a candidate font size. Negative when they
/// overlap.
pub trait TextMetrics {
    fn gap_at(&mut self, font_rem: f32, line_height: f32) -> f32;
}

impl<F: FnMut(f32, f32) -> f32> TextMetrics for F {
    fn gap_at(&mut self, font_rem: f32, line_height: f32) -> f32 {
        self(font_rem, line_height)
    }
}

/// Step the font size down until the text fits or the floor is hit.
/// The final candidate size is always applied through `metrics` before
/// returning, so the caller's layout matches the outcome.
pub fn fit_text<M: TextMetrics>(metrics: &mut M, config: &FitConfig) -> FitOutcome {
    let mut rem = config.max_rem;
    let mut iterations = 0;

    loop {
        let gap = metrics.gap_at(rem, line_height_for(rem));
        if gap >= config.target_margin_px {
            return FitOutcome::Fits { rem };
        }
        if rem <= config.min_rem || iterations >= config.max_iterations {
            return FitOutcome::Clamped { rem };
        }
        rem = (rem - config.step_rem).max(config.min_rem);
        iterations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_immediately_when_roomy() {
        let mut metrics = |_rem: f32, _lh: f32| 40.0;
        let outcome = fit_text(&mut metrics, &FitConfig::default());
        assert_eq!(outcome, FitOutcome::Fits { rem: 0.7 });
    }

    #[test]
    fn steps_down_until_gap_opens() {
        // Gap grows 20px per step down: needs two reductions
        let mut metrics = |rem: f32, _lh: f32| (0.7 - rem) / 0.05 * 20.0 - 32.0;
        let outcome = fit_text(&mut metrics, &FitConfig::default());
        assert!(!outcome.needs_clamp());
        assert!((outcome.rem() - 0.6).abs() < 1e-4);
    }

    #[test]
    fn clamps_at_floor_when_nothing_fits() {
        let mut metrics = |_rem: f32, _lh: f32| -50.0;
        let outcome = fit_text(&mut metrics, &FitConfig::default());
        assert!(outcome.needs_clamp());
        assert!((outcome.rem() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn iteration_budget_bounds_the_search() {
        let config = FitConfig {
            min_rem: 0.0,
            max_iterations: 3,
            ..FitConfig::default()
        };
        let mut calls = 0;
        let mut metrics = |_rem: f32, _lh: f32| {
            calls += 1;
            -50.0
        };
        let outcome = fit_text(&mut metrics, &config);
        assert!(outcome.needs_clamp());
        assert_eq!(calls, 4); // initial probe + one per iteration
    }

    #[test]
    fn leading_tightens_below_threshold() {
        assert_eq!(line_height_for(0.7), 1.3);
        assert_eq!(line_height_for(0.55), 1.2);
    }

    #[test]
    fn measured_line_height_follows_candidate_size() {
        let mut seen = Vec::new();
        let mut metrics = |rem: f32, lh: f32| {
            seen.push((rem, lh));
            if rem < 0.56 { 10.0 } else { -10.0 }
        };
        let outcome = fit_text(&mut metrics, &FitConfig::default());
        assert!(!outcome.needs_clamp());
        let (last_rem, last_lh) = *seen.last().unwrap();
        assert!(last_rem < 0.6);
        assert_eq!(last_lh, 1.2);
    }
}
