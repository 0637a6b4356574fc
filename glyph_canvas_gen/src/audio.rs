// Audio feature model and the feed interface.
//
// The engine does not own audio capture. An external collaborator (the
// host's analyzer, a file decoder, the synthetic feed below) produces one
// `AudioFrequencyData` per animation tick from a 128-bin byte spectrum;
// the render call consumes it by reference and discards it. Audio is only
// ever an explicit optional argument to a generator — never a hidden
// global — so renders stay deterministic given identical inputs.
//
// Band layout over the 128-bin spectrum: bass = bins [0, 4), mid =
// [4, 16), treble = [16, 32), each normalized by bin count and 255.
// Volume is the mean of all bins. Beat is a threshold-and-refractory edge
// detector: bass above 0.3 with more than 200 ms since the last detected
// beat. Timestamps are explicit arguments so the detector is testable
// without a wall clock.

/// Normalized per-tick audio features. Ephemeral: produced once per feed
/// tick, consumed by at most one render call, not retained by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioFrequencyData {
    pub raw: Vec<u8>,
    pub bass: f64,
    pub mid: f64,
    pub treble: f64,
    pub volume: f64,
    pub beat: bool,
}

/// Bin ranges for the three bands (half-open).
const BASS_BINS: (usize, usize) = (0, 4);
const MID_BINS: (usize, usize) = (4, 16);
const TREBLE_BINS: (usize, usize) = (16, 32);

/// Beat edge detector with a refractory period.
///
/// Stateful across ticks: holds the time of the last detected beat and
/// refuses to fire again until `refractory_ms` has passed.
#[derive(Clone, Debug)]
pub struct BeatDetector {
    threshold: f64,
    refractory_ms: u64,
    last_beat_ms: Option<u64>,
}

impl Default for BeatDetector {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            refractory_ms: 200,
            last_beat_ms: None,
        }
    }
}

impl BeatDetector {
    /// Feed one tick's bass energy. Returns `true` only on the tick a beat
    /// is detected.
    pub fn detect(&mut self, bass: f64, now_ms: u64) -> bool {
        let elapsed_ok = self
            .last_beat_ms
            .is_none_or(|last| now_ms.saturating_sub(last) > self.refractory_ms);
        if bass > self.threshold && elapsed_ok {
            self.last_beat_ms = Some(now_ms);
            return true;
        }
        false
    }
}

/// Mean energy of a half-open bin range, normalized to [0, 1].
fn band_energy(bins: &[u8], range: (usize, usize)) -> f64 {
    let (start, end) = range;
    let sum: u64 = bins[start.min(bins.len())..end.min(bins.len())]
        .iter()
        .map(|&b| u64::from(b))
        .sum();
    sum as f64 / (end - start) as f64 / 255.0
}

/// Extract the full feature record from one spectrum frame.
pub fn features_from_bins(bins: &[u8], detector: &mut BeatDetector, now_ms: u64) -> AudioFrequencyData {
    let bass = band_energy(bins, BASS_BINS);
    let mid = band_energy(bins, MID_BINS);
    let treble = band_energy(bins, TREBLE_BINS);
    let volume = if bins.is_empty() {
        0.0
    } else {
        bins.iter().map(|&b| u64::from(b)).sum::<u64>() as f64 / bins.len() as f64 / 255.0
    };
    let beat = detector.detect(bass, now_ms);
    AudioFrequencyData {
        raw: bins.to_vec(),
        bass,
        mid,
        treble,
        volume,
        beat,
    }
}

/// What the engine requires of an audio collaborator: a per-tick pull and
/// an idempotent teardown. Acquisition is the implementor's constructor.
pub trait AudioFeatureSource {
    /// Pull this tick's features, or `None` when no audio is available
    /// (not yet started, released, or acquisition failed). A `None` simply
    /// disables audio reactivity for the tick — it is never an error.
    fn poll(&mut self, now_ms: u64) -> Option<AudioFrequencyData>;

    /// Release any acquired resources. Safe to call repeatedly.
    fn release(&mut self);
}

/// Deterministic stand-in feed for tests and offline rendering.
///
/// Synthesizes a 128-bin spectrum as phase-offset sinusoids of the tick
/// time, with a bass pulse at a fixed period so beat-reactive paths get
/// exercised. Same `now_ms` in, same features out.
#[derive(Clone, Debug)]
pub struct SyntheticFeed {
    detector: BeatDetector,
    pulse_period_ms: u64,
    released: bool,
}

impl SyntheticFeed {
    pub fn new(pulse_period_ms: u64) -> Self {
        Self {
            detector: BeatDetector::default(),
            pulse_period_ms: pulse_period_ms.max(1),
            released: false,
        }
    }

    fn bins_at(&self, now_ms: u64) -> Vec<u8> {
        let t = now_ms as f64 / 1000.0;
        let pulse = now_ms % self.pulse_period_ms;
        let mut bins = Vec::with_capacity(128);
        for i in 0..128u32 {
            let phase = t * 2.1 + f64::from(i) * 0.31;
            let mut v = (phase.sin() * 0.5 + 0.5) * 160.0;
            // Bass pulse: the low bins spike at the start of each period.
            if i < 4 && pulse < 60 {
                v += 90.0;
            }
            bins.push(v.min(255.0) as u8);
        }
        bins
    }
}

impl AudioFeatureSource for SyntheticFeed {
    fn poll(&mut self, now_ms: u64) -> Option<AudioFrequencyData> {
        if self.released {
            return None;
        }
        let bins = self.bins_at(now_ms);
        Some(features_from_bins(&bins, &mut self.detector, now_ms))
    }

    fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_energy_normalizes_to_unit_range() {
        let bins = vec![255u8; 128];
        let f = features_from_bins(&bins, &mut BeatDetector::default(), 1000);
        assert!((f.bass - 1.0).abs() < 1e-9);
        assert!((f.mid - 1.0).abs() < 1e-9);
        assert!((f.treble - 1.0).abs() < 1e-9);
        assert!((f.volume - 1.0).abs() < 1e-9);
    }

    #[test]
    fn silent_bins_give_zero_features() {
        let bins = vec![0u8; 128];
        let f = features_from_bins(&bins, &mut BeatDetector::default(), 1000);
        assert_eq!(f.bass, 0.0);
        assert_eq!(f.volume, 0.0);
        assert!(!f.beat);
    }

    #[test]
    fn beat_requires_bass_above_threshold() {
        let mut d = BeatDetector::default();
        assert!(!d.detect(0.29, 1000));
        assert!(d.detect(0.31, 1010));
    }

    #[test]
    fn beat_refractory_limits_rate() {
        // Bass above threshold every 10 ms: at most one beat per 200 ms
        // window.
        let mut d = BeatDetector::default();
        let mut beats = 0;
        for tick in 0..100u64 {
            if d.detect(0.9, tick * 10) {
                beats += 1;
            }
        }
        // 1000 ms of ticks, >200 ms spacing: first fire plus four more.
        assert!(beats <= 5, "too many beats: {beats}");
        assert!(beats >= 1, "detector never fired");
    }

    #[test]
    fn synthetic_feed_is_deterministic() {
        let mut a = SyntheticFeed::new(500);
        let mut b = SyntheticFeed::new(500);
        for tick in 0..20u64 {
            assert_eq!(a.poll(tick * 16), b.poll(tick * 16));
        }
    }

    #[test]
    fn release_is_idempotent_and_stops_polling() {
        let mut feed = SyntheticFeed::new(500);
        assert!(feed.poll(0).is_some());
        feed.release();
        feed.release();
        assert!(feed.poll(16).is_none());
    }

    #[test]
    fn features_carry_raw_bins() {
        let bins: Vec<u8> = (0..128).map(|i| i as u8).collect();
        let f = features_from_bins(&bins, &mut BeatDetector::default(), 0);
        assert_eq!(f.raw, bins);
    }
}
