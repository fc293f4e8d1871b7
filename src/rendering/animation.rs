//! Keyframes of the marker halo pulse.
//!
//! The keyframes are built once per process and only sampled with the
//! presentation clock; nothing is registered per frame.

use crate::core::constants::PULSE_PERIOD_SECS;
use once_cell::sync::Lazy;

/// The shared pulse used by every map view
pub static PULSE: Lazy<PulseAnimation> = Lazy::new(|| {
    log::trace!("building marker pulse keyframes");
    PulseAnimation::ping(PULSE_PERIOD_SECS)
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseFrame {
    /// Halo radius multiplier
    pub scale: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Position in the cycle, 0.0 to 1.0
    pub at: f64,
    pub frame: PulseFrame,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PulseAnimation {
    pub period_secs: f64,
    keyframes: Vec<Keyframe>,
}

impl PulseAnimation {
    /// Grow to twice the size while fading out over the first 75% of the cycle, then rest
    pub fn ping(period_secs: f64) -> Self {
        let faded = PulseFrame {
            scale: 2.0,
            opacity: 0.0,
        };
        Self {
            period_secs,
            keyframes: vec![
                Keyframe {
                    at: 0.0,
                    frame: PulseFrame {
                        scale: 1.0,
                        opacity: 0.75,
                    },
                },
                Keyframe {
                    at: 0.75,
                    frame: faded,
                },
                Keyframe {
                    at: 1.0,
                    frame: faded,
                },
            ],
        }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Position within the current cycle; loops forever
    pub fn phase(&self, time_secs: f64) -> f64 {
        if self.period_secs <= 0.0 {
            return 0.0;
        }
        (time_secs / self.period_secs).rem_euclid(1.0)
    }

    pub fn sample(&self, time_secs: f64) -> PulseFrame {
        let phase = self.phase(time_secs);
        let Some(first) = self.keyframes.first() else {
            return PulseFrame {
                scale: 1.0,
                opacity: 0.0,
            };
        };

        for pair in self.keyframes.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            if phase >= from.at && phase <= to.at {
                let span = to.at - from.at;
                let t = if span > 0.0 {
                    ease_out_cubic((phase - from.at) / span)
                } else {
                    1.0
                };
                return PulseFrame {
                    scale: lerp(from.frame.scale, to.frame.scale, t),
                    opacity: lerp(from.frame.opacity, to.frame.opacity, t),
                };
            }
        }
        first.frame
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}
