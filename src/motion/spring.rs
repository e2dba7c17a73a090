use super::constants::{FRAME_DT_MAX_SEC, SPRING_MASS, SPRING_REST_DELTA, SPRING_REST_SPEED};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    #[inline]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / SPRING_MASS).sqrt()
    }

    /// ζ: below 1 the spring oscillates, at or above 1 it does not.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * SPRING_MASS).sqrt())
    }

    /// Largest overshoot of a step response from rest, as a fraction of the step.
    pub fn overshoot_bound(&self) -> f32 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            0.0
        } else {
            (-std::f32::consts::PI * zeta / (1.0 - zeta * zeta).sqrt()).exp()
        }
    }
}

/// Per-axis simulation state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub current: f32,
    pub velocity: f32,
}

/// Damped spring used by every pointer-driven value.
///
/// A unit-mass oscillator `x'' = -k (x - target) - c x'`. Each step advances
/// it with the closed-form solution, so large or uneven frame deltas never
/// destabilise it and the step response never overshoots more than
/// [`SpringConfig::overshoot_bound`].
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    state: SpringState,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            state: SpringState {
                current: initial,
                velocity: 0.0,
            },
            target: initial,
        }
    }

    #[inline]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    #[inline]
    pub fn state(&self) -> SpringState {
        self.state
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.state.current
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Move the target; the current value keeps its position and velocity.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop. The only way `current` changes discontinuously.
    pub fn reset(&mut self, value: f32) {
        self.target = value;
        self.state = SpringState {
            current: value,
            velocity: 0.0,
        };
    }

    pub fn is_at_rest(&self) -> bool {
        self.state.current == self.target && self.state.velocity == 0.0
    }

    /// Advance by `dt_sec`. Returns true while still moving.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        if self.is_at_rest() {
            return false;
        }
        let dt = dt_sec.clamp(0.0, FRAME_DT_MAX_SEC);
        let (d, v) = advance(
            self.config,
            self.state.current - self.target,
            self.state.velocity,
            dt,
        );
        self.state.current = self.target + d;
        self.state.velocity = v;

        if d.abs() < SPRING_REST_DELTA && v.abs() < SPRING_REST_SPEED {
            self.state.current = self.target;
            self.state.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Closed-form displacement/velocity after `t` seconds, starting from
/// displacement `d0` (relative to the target) and velocity `v0`.
fn advance(config: SpringConfig, d0: f32, v0: f32, t: f32) -> (f32, f32) {
    let omega = config.natural_frequency();
    let zeta = config.damping_ratio();
    if omega <= 0.0 || t <= 0.0 {
        return (d0, v0);
    }

    if (zeta - 1.0).abs() < 1e-4 {
        // critically damped
        let env = (-omega * t).exp();
        let b = v0 + omega * d0;
        let d = env * (d0 + b * t);
        let v = env * (v0 - omega * b * t);
        (d, v)
    } else if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let env = (-zeta * omega * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let d = env * (d0 * cos + (v0 + zeta * omega * d0) / omega_d * sin);
        let v = env * (v0 * cos - (zeta * omega * v0 + omega * omega * d0) / omega_d * sin);
        (d, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let a = (v0 - r2 * d0) / (r1 - r2);
        let b = d0 - a;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (a * e1 + b * e2, r1 * a * e1 + r2 * b * e2)
    }
}

/// Linear map of `value` from `input` to `output`, clamped to the output range.
#[inline]
pub fn map_range(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span == 0.0 {
        return output[0];
    }
    let t = ((value - input[0]) / span).clamp(0.0, 1.0);
    output[0] + (output[1] - output[0]) * t
}
