// Temporal evolution: slow parameter drift for animated and idle modes.
//
// Holds a start time and derives an evolved parameter record from an
// explicit `now_ms` each tick: complexity breathes on a slow sine, and
// the seed steps once per ~30 real seconds at the default speed, giving
// periodic visual jumps rather than continuous drift. This module never
// renders and never reads the clock — the caller's scheduler supplies
// timestamps, which keeps evolution reproducible in tests.

use crate::params::GenerationParameters;

const DEFAULT_SPEED: f64 = 0.0001;
const SEED_CYCLE_MS: f64 = 30_000.0;

pub struct TemporalEvolution {
    start_ms: u64,
    base: GenerationParameters,
    speed: f64,
}

impl TemporalEvolution {
    pub fn new(base: GenerationParameters, start_ms: u64) -> Self {
        Self {
            start_ms,
            base,
            speed: DEFAULT_SPEED,
        }
    }

    /// Evolved parameters for the given instant.
    pub fn evolved(&self, now_ms: u64) -> GenerationParameters {
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64 * self.speed;

        let complexity_offset = (elapsed * 0.5).sin() * 0.1;
        let complexity = (self.base.complexity + complexity_offset).clamp(0.1, 1.0);

        // One seed step per SEED_CYCLE_MS of real time at the current
        // speed; speed zero never advances the seed.
        let cycle = if self.speed > 0.0 {
            (elapsed / (SEED_CYCLE_MS * self.speed)).floor() as u64
        } else {
            0
        };
        let seed = format!("{}{cycle}", self.base.seed);

        GenerationParameters {
            complexity,
            seed,
            ..self.base.clone()
        }
    }

    /// Evolution phase in [0, 1) over one full sine cycle.
    pub fn phase(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64 * self.speed;
        (elapsed % std::f64::consts::TAU) / std::f64::consts::TAU
    }

    /// Restart the clock, optionally swapping the base parameters.
    pub fn reset(&mut self, now_ms: u64, new_base: Option<GenerationParameters>) {
        self.start_ms = now_ms;
        if let Some(base) = new_base {
            self.base = base;
        }
    }

    /// Swap the base parameters while keeping the evolution clock.
    pub fn update_base(&mut self, base: GenerationParameters) {
        self.base = base;
    }

    /// Speeds below zero are clamped to zero (evolution frozen).
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.max(0.0);
    }
}

/// Hermite smoothstep between two edges.
pub fn smooth_step(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Three-octave sine mix in [-1, 1] for time-based wobble.
pub fn time_noise(t: f64, frequency: f64) -> f64 {
    ((t * frequency).sin()
        + (t * frequency * 1.618).sin() * 0.5
        + (t * frequency * 2.618).sin() * 0.25)
        / 1.75
}

/// Gentle scale oscillation around 1.0 for breathing effects.
pub fn breathing_scale(phase: f64, intensity: f64) -> f64 {
    1.0 + (phase * std::f64::consts::TAU).sin() * intensity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> GenerationParameters {
        GenerationParameters {
            seed: "evo".to_string(),
            complexity: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn at_start_seed_cycle_is_zero() {
        let evo = TemporalEvolution::new(base(), 1000);
        let p = evo.evolved(1000);
        assert_eq!(p.seed, "evo0");
        assert!((p.complexity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn seed_steps_every_thirty_seconds() {
        let evo = TemporalEvolution::new(base(), 0);
        assert_eq!(evo.evolved(29_999).seed, "evo0");
        assert_eq!(evo.evolved(30_000).seed, "evo1");
        assert_eq!(evo.evolved(90_000).seed, "evo3");
    }

    #[test]
    fn complexity_stays_clamped_at_extremes() {
        let mut b = base();
        b.complexity = 1.0;
        let evo = TemporalEvolution::new(b, 0);
        // Scan a full sine cycle worth of ticks.
        for tick in 0..200u64 {
            let c = evo.evolved(tick * 1000).complexity;
            assert!((0.1..=1.0).contains(&c), "complexity escaped clamp: {c}");
        }
    }

    #[test]
    fn evolution_is_deterministic_in_now() {
        let evo = TemporalEvolution::new(base(), 500);
        assert_eq!(evo.evolved(42_000), evo.evolved(42_000));
    }

    #[test]
    fn reset_restarts_the_cycle() {
        let mut evo = TemporalEvolution::new(base(), 0);
        assert_eq!(evo.evolved(60_000).seed, "evo2");
        evo.reset(60_000, None);
        assert_eq!(evo.evolved(60_000).seed, "evo0");
    }

    #[test]
    fn zero_speed_freezes_evolution() {
        let mut evo = TemporalEvolution::new(base(), 0);
        evo.set_speed(0.0);
        let p = evo.evolved(120_000);
        assert_eq!(p.seed, "evo0");
        assert!((p.complexity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn negative_speed_clamps_to_zero() {
        let mut evo = TemporalEvolution::new(base(), 0);
        evo.set_speed(-3.0);
        assert_eq!(evo.evolved(120_000).seed, "evo0");
    }

    #[test]
    fn smooth_step_hits_edges() {
        assert_eq!(smooth_step(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smooth_step(0.0, 1.0, 2.0), 1.0);
        assert!((smooth_step(0.0, 1.0, 0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn time_noise_stays_bounded() {
        for i in 0..1000 {
            let v = time_noise(f64::from(i) * 0.1, 1.0);
            assert!((-1.0..=1.0).contains(&v), "time_noise escaped bounds: {v}");
        }
    }

    #[test]
    fn breathing_scale_oscillates_around_one() {
        assert!((breathing_scale(0.0, 0.02) - 1.0).abs() < 1e-9);
        assert!(breathing_scale(0.25, 0.02) > 1.0);
        assert!(breathing_scale(0.75, 0.02) < 1.0);
    }
}
