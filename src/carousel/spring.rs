//! Damped spring used to slide the card strip between resting offsets.
//!
//! The motion is evaluated in closed form rather than integrated step by
//! step, so sampling at any frame rate gives the same curve. With the
//! default parameters (stiffness 200, damping 30, mass 0.5) the damping
//! ratio is 1.5: a strip released from rest approaches its target without
//! passing it.

use crate::constants::{SPRING_DAMPING, SPRING_MASS, SPRING_REST_EPSILON, SPRING_STIFFNESS};
use std::time::Instant;

/// Spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringConfig {
    /// Undamped angular frequency
    #[inline]
    fn omega(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio; 1.0 is critical damping
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A single spring motion from a start state toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    target: f32,
    /// Displacement from target at t = 0
    x0: f32,
    /// Velocity at t = 0
    v0: f32,
}

impl Spring {
    /// A spring already resting at `position`.
    pub fn at_rest(config: SpringConfig, position: f32) -> Self {
        Self {
            config,
            target: position,
            x0: 0.0,
            v0: 0.0,
        }
    }

    /// A spring starting at `from` with `velocity`, pulled toward `to`.
    pub fn new(config: SpringConfig, from: f32, to: f32, velocity: f32) -> Self {
        Self {
            config,
            target: to,
            x0: from - to,
            v0: velocity,
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Position and velocity `elapsed` seconds after the motion started.
    pub fn sample(&self, elapsed: f32) -> (f32, f32) {
        if self.x0 == 0.0 && self.v0 == 0.0 {
            return (self.target, 0.0);
        }

        let t = elapsed.max(0.0);
        let omega = self.config.omega();
        let zeta = self.config.damping_ratio();
        let (x0, v0) = (self.x0, self.v0);

        let (x, v) = if (zeta - 1.0).abs() < 1e-4 {
            // Critically damped
            let a = -omega;
            let e = v0 - a * x0;
            let decay = (a * t).exp();
            (decay * (x0 + e * t), decay * (v0 + a * e * t))
        } else if zeta < 1.0 {
            // Underdamped
            let a = -zeta * omega;
            let wd = omega * (1.0 - zeta * zeta).sqrt();
            let d = (v0 - a * x0) / wd;
            let decay = (a * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            (
                decay * (x0 * cos + d * sin),
                decay * (v0 * cos + (a * d - x0 * wd) * sin),
            )
        } else {
            // Overdamped
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;
            let a = (v0 - r2 * x0) / (r1 - r2);
            let b = x0 - a;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (a * e1 + b * e2, r1 * a * e1 + r2 * b * e2)
        };

        (self.target + x, v)
    }

    /// Position at `elapsed`, snapped to the target once settled.
    pub fn position(&self, elapsed: f32) -> f32 {
        let (position, velocity) = self.sample(elapsed);
        if Self::is_resting(position - self.target, velocity) {
            self.target
        } else {
            position
        }
    }

    pub fn is_settled(&self, elapsed: f32) -> bool {
        let (position, velocity) = self.sample(elapsed);
        Self::is_resting(position - self.target, velocity)
    }

    /// Redirect toward `to`, continuing from the state at `elapsed`.
    pub fn retarget(&self, elapsed: f32, to: f32) -> Self {
        let (position, velocity) = self.sample(elapsed);
        Self::new(self.config, position, to, velocity)
    }

    #[inline]
    fn is_resting(displacement: f32, velocity: f32) -> bool {
        displacement.abs() < SPRING_REST_EPSILON && velocity.abs() < SPRING_REST_EPSILON
    }
}

/// A spring anchored to the wall-clock instant it started at.
///
/// This is what a view holds: it asks for the offset "now" each frame and
/// keeps requesting frames until the motion has settled.
#[derive(Debug, Clone, Copy)]
pub struct SpringMotion {
    spring: Spring,
    started: Instant,
}

impl SpringMotion {
    pub fn at_rest(position: f32, now: Instant) -> Self {
        Self {
            spring: Spring::at_rest(SpringConfig::default(), position),
            started: now,
        }
    }

    #[inline]
    fn elapsed(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started).as_secs_f32()
    }

    pub fn offset(&self, now: Instant) -> f32 {
        self.spring.position(self.elapsed(now))
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.spring.is_settled(self.elapsed(now))
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    /// Head for `target`, continuing from wherever the strip is now.
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        if self.spring.target() == target {
            return;
        }
        self.spring = self.spring.retarget(self.elapsed(now), target);
        self.started = now;
    }

    /// Start a fresh motion from `from` with an initial velocity.
    pub fn launch(&mut self, from: f32, target: f32, velocity: f32, now: Instant) {
        self.spring = Spring::new(self.spring.config, from, target, velocity);
        self.started = now;
    }
}
