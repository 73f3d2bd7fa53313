//! Render configuration, statistics, and the per-render context.

use std::fmt;
use std::time::{Duration, Instant};

use stingray_math::{Colour, Vector};

use crate::Stage;

/// Deepest mirror recursion followed before a ray gives up.
pub const MAX_RECURSE: u32 = 8;

/// Sub-pixel sample layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AntiAlias {
    /// One ray through the pixel corner.
    #[default]
    Off,
    /// Two rays, half a pixel either side horizontally.
    Pair,
    /// Four rays on the half-pixel diagonals.
    Quad,
}

const OFF: [Vector; 1] = [Vector::new(0.0, 0.0, 0.0)];

const PAIR: [Vector; 2] = [Vector::new(-0.5, 0.0, 0.0), Vector::new(0.5, 0.0, 0.0)];

const QUAD: [Vector; 4] = [
    Vector::new(-0.5, 0.5, 0.0),
    Vector::new(0.5, 0.5, 0.0),
    Vector::new(-0.5, -0.5, 0.0),
    Vector::new(0.5, -0.5, 0.0),
];

impl AntiAlias {
    /// Viewplane offsets for each sample, in pixels.
    pub fn offsets(&self) -> &'static [Vector] {
        match self {
            AntiAlias::Off => &OFF,
            AntiAlias::Pair => &PAIR,
            AntiAlias::Quad => &QUAD,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum mirror recursion depth
    pub max_depth: u32,
    /// Colour of rays that hit nothing
    pub miss: Colour,
    /// Samples per pixel
    pub antialias: AntiAlias,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_RECURSE,
            miss: Colour::BLACK,
            antialias: AntiAlias::Off,
        }
    }
}

/// Counters and timing for one render.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    rays_cast: u64,
    shadow_rays_cast: u64,
    started: Option<Instant>,
    duration: Duration,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stop the clock. Does nothing if [`Statistics::start`] was never called.
    pub fn end(&mut self) {
        if let Some(started) = self.started {
            self.duration = started.elapsed();
        }
    }

    pub fn inc_rays_cast(&mut self) {
        self.rays_cast += 1;
    }

    pub fn inc_shadow_rays_cast(&mut self) {
        self.shadow_rays_cast += 1;
    }

    /// Primary rays cast.
    pub fn rays_cast(&self) -> u64 {
        self.rays_cast
    }

    pub fn shadow_rays_cast(&self) -> u64 {
        self.shadow_rays_cast
    }

    /// Wall-clock time between `start` and `end`.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duration: {:.3} secs; Rays: {}; Shadow rays: {}",
            self.duration.as_secs_f64(),
            self.rays_cast,
            self.shadow_rays_cast
        )
    }
}

/// State threaded through one render: the stage being drawn and the
/// running statistics.
pub struct RenderContext<'a> {
    stage: &'a Stage,
    statistics: Statistics,
    max_depth: u32,
}

impl<'a> RenderContext<'a> {
    pub fn new(stage: &'a Stage) -> Self {
        Self {
            stage,
            statistics: Statistics::new(),
            max_depth: MAX_RECURSE,
        }
    }

    /// Set the recursion ceiling.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The stage being rendered. The borrow outlives `self`.
    pub fn stage(&self) -> &'a Stage {
        self.stage
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }

    pub fn into_statistics(self) -> Statistics {
        self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.miss, Colour::BLACK);
        assert_eq!(config.antialias, AntiAlias::Off);
    }

    #[test]
    fn test_antialias_offsets() {
        assert_eq!(AntiAlias::Off.offsets(), &[Vector::ZERO]);
        assert_eq!(AntiAlias::Pair.offsets().len(), 2);
        assert_eq!(AntiAlias::Quad.offsets().len(), 4);

        // Sample patterns are centred on the pixel corner
        for aa in [AntiAlias::Pair, AntiAlias::Quad] {
            let sum = aa
                .offsets()
                .iter()
                .fold(Vector::ZERO, |acc, offset| acc + *offset);
            assert_eq!(sum, Vector::ZERO);
        }
    }

    #[test]
    fn test_statistics_counting() {
        let mut stats = Statistics::new();
        stats.start();
        stats.inc_rays_cast();
        stats.inc_rays_cast();
        stats.inc_shadow_rays_cast();
        stats.end();

        assert_eq!(stats.rays_cast(), 2);
        assert_eq!(stats.shadow_rays_cast(), 1);
        assert!(stats.to_string().starts_with("Duration: "));
        assert!(stats.to_string().contains("Rays: 2"));
    }

    #[test]
    fn test_end_without_start() {
        let mut stats = Statistics::new();
        stats.end();
        assert_eq!(stats.duration(), Duration::ZERO);
    }
}
