use std::f32::consts::PI;

use constants::motion::{BACK_OUT_DEFAULT, BACK_OUT_SOFT};

/// Easing curves used by the entrance timelines and scroll effects. Inputs
/// are clamped to [0, 1]; `back_out` intentionally overshoots above 1 in its
/// tail, so opacity must be clamped at the application site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power3Out,
    BackOut,
    BackOutSoft,
    SineInOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => power_out(t, 2),
            Self::Power3Out => power_out(t, 3),
            Self::BackOut => back_out(t, BACK_OUT_DEFAULT),
            Self::BackOutSoft => back_out(t, BACK_OUT_SOFT),
            Self::SineInOut => sine_in_out(t),
        }
    }
}

fn power_out(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

fn back_out(t: f32, overshoot: f32) -> f32 {
    let t = t - 1.0;
    1.0 + t * t * ((overshoot + 1.0) * t + overshoot)
}

fn sine_in_out(t: f32) -> f32 {
    0.5 - 0.5 * (PI * t).cos()
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::BackOut,
        Ease::BackOutSoft,
        Ease::SineInOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for ease in ALL {
            assert!((ease.apply(0.0)).abs() < 1e-5, "{ease:?} start");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-5, "{ease:?} end");
        }
    }

    #[test]
    fn inputs_outside_unit_range_are_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-2.0), ease.apply(0.0));
            assert_eq!(ease.apply(3.0), ease.apply(1.0));
        }
    }

    #[test]
    fn back_out_overshoots_past_one() {
        let peak = (0..100)
            .map(|i| Ease::BackOut.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn monotone_curves_do_not_regress() {
        for ease in [Ease::Linear, Ease::Power2Out, Ease::Power3Out, Ease::SineInOut] {
            let mut last = f32::MIN;
            for i in 0..=100 {
                let value = ease.apply(i as f32 / 100.0);
                assert!(value >= last - 1e-6, "{ease:?} at {i}");
                last = value;
            }
        }
    }
}
