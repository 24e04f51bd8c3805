use bevy::prelude::*;
use std::f32::consts::PI;

use crate::engine::motion::Motion;
use constants::motion::{
    PRIZE_PULSE_AMPLITUDE, PRIZE_PULSE_PERIOD, PRIZE_PULSE_SCALE, PRIZE_PULSE_STAGGER,
    STAT_BOB_AMPLITUDE, STAT_BOB_PERIOD, STAT_BOB_STAGGER,
};

/// Endless yoyo loop on an element's ambient channel. `phase` staggers
/// cards in a row so they never move in lockstep.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bob {
    pub amplitude: f32,
    pub scale_pulse: f32,
    pub period: f32,
    pub phase: f32,
}

impl Bob {
    pub fn stat_card(index: usize) -> Self {
        Self {
            amplitude: STAT_BOB_AMPLITUDE,
            scale_pulse: 0.0,
            period: STAT_BOB_PERIOD,
            phase: index as f32 * STAT_BOB_STAGGER,
        }
    }

    pub fn prize_card(index: usize) -> Self {
        Self {
            amplitude: PRIZE_PULSE_AMPLITUDE,
            scale_pulse: PRIZE_PULSE_SCALE,
            period: PRIZE_PULSE_PERIOD,
            phase: index as f32 * PRIZE_PULSE_STAGGER,
        }
    }
}

/// Smooth 0..1..0 yoyo wave with sine ends, one way per `period` seconds.
pub fn wave01(t: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    0.5 - 0.5 * (PI * t / period).cos()
}

pub fn advance_bobs(time: Res<Time>, mut query: Query<(&Bob, &mut Motion)>) {
    let now = time.elapsed_secs();
    for (bob, mut motion) in &mut query {
        let wave = wave01(now + bob.phase, bob.period);
        motion.ambient.offset.y = bob.amplitude * wave;
        motion.ambient.scale = 1.0 + bob.scale_pulse * wave;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_stays_in_unit_range() {
        for i in 0..1000 {
            let w = wave01(i as f32 * 0.037, 2.0);
            assert!((0.0..=1.0).contains(&w));
        }
    }

    #[test]
    fn wave_peaks_once_per_period() {
        assert!(wave01(0.0, 2.0).abs() < 1e-6);
        assert!((wave01(2.0, 2.0) - 1.0).abs() < 1e-5);
        assert!(wave01(4.0, 2.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_period_is_inert() {
        assert_eq!(wave01(1.0, 0.0), 0.0);
    }
}
