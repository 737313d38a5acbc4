//! Damped spring driving the needle's displayed angle.
//!
//! The constants are tuned per tick at [`TICK_RATE`] ticks per second. Hosts
//! with a different refresh rate go through a [`Ticker`], which turns frame
//! timestamps into a whole number of fixed ticks so the motion looks the same
//! everywhere.

use std::time::Duration;

pub const STIFFNESS: f64 = 0.12;
pub const DAMPING: f64 = 0.82;
pub const MOTION_THRESHOLD: f64 = 0.8;
pub const TICK_RATE: u32 = 60;
/// Upper bound on ticks replayed for a single frame after a stall.
pub const MAX_CATCH_UP: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: STIFFNESS,
            damping: DAMPING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    pub displayed_angle: f64,
    pub velocity: f64,
    pub target_angle: f64,
}

impl SpringState {
    /// A spring at rest on `angle`.
    pub fn at_rest(angle: f64) -> Self {
        Self {
            displayed_angle: angle,
            velocity: 0.0,
            target_angle: angle,
        }
    }

    /// One tick of the integrator. Keeps running even when already settled;
    /// the leftover motion just decays.
    #[must_use]
    pub fn step(self, params: SpringParams) -> Self {
        let force = (self.target_angle - self.displayed_angle) * params.stiffness;
        let velocity = self.velocity * params.damping + force;
        Self {
            displayed_angle: self.displayed_angle + velocity,
            velocity,
            target_angle: self.target_angle,
        }
    }

    #[must_use]
    pub fn with_target(self, target_angle: f64) -> Self {
        Self {
            target_angle,
            ..self
        }
    }

    /// Pins both the displayed angle and the target, dropping all velocity.
    #[must_use]
    pub fn snap_to(self, angle: f64) -> Self {
        Self::at_rest(angle)
    }

    #[must_use]
    pub fn stopped(self) -> Self {
        Self {
            velocity: 0.0,
            ..self
        }
    }

    /// Cosmetic only: fast enough to be worth blurring.
    pub fn in_motion(&self) -> bool {
        self.velocity.abs() > MOTION_THRESHOLD
    }
}

/// Fixed-timestep accumulator converting frame timestamps into spring ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last: Option<Duration>,
    carry: Duration,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

impl Ticker {
    pub fn new(rate: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / rate.max(1),
            last: None,
            carry: Duration::ZERO,
        }
    }

    /// Number of ticks to run for a frame stamped `now`. The first frame always
    /// gets exactly one tick; time running backwards gets none.
    pub fn ticks(&mut self, now: Duration) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 1;
        };

        let elapsed = now.saturating_sub(last) + self.carry;
        let ticks = elapsed.as_nanos() / self.period.as_nanos();

        if ticks > u128::from(MAX_CATCH_UP) {
            log::debug!("frame stalled for {:?}, dropping backlog", elapsed);
            self.carry = Duration::ZERO;
            return MAX_CATCH_UP;
        }

        // bounded by MAX_CATCH_UP above
        let ticks = ticks as u32;
        self.carry = elapsed - self.period * ticks;
        ticks
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.carry = Duration::ZERO;
    }
}
