//! Steering behaviors
//!
//! Each behavior turns an agent's situation into a desired direction. They
//! are independent of path following and of each other: a host that wants
//! to blend several scales each output by the behavior's [`weight`] and
//! combines them however it likes.
//!
//! [`weight`]: SteeringBehavior::weight

use glam::{Vec2, Vec3};
use polynav_common::{direction, distance};

use super::NavAgent;

/// Default weight of a steering behavior
pub const DEFAULT_STEERING_WEIGHT: f32 = 1.0;

/// A behavior producing a desired movement direction for an agent
pub trait SteeringBehavior {
    /// Computes the desired direction for `agent` this frame
    ///
    /// The base behavior wants nothing and returns zero.
    fn calculate(&mut self, _agent: &NavAgent) -> Vec3 {
        Vec3::ZERO
    }

    /// Scaling factor a host may apply when combining behaviors
    fn weight(&self) -> f32;
}

/// Behavior that never steers
#[derive(Debug, Clone, PartialEq)]
pub struct Idle {
    pub weight: f32,
}

impl Default for Idle {
    fn default() -> Self {
        Self {
            weight: DEFAULT_STEERING_WEIGHT,
        }
    }
}

impl SteeringBehavior for Idle {
    fn weight(&self) -> f32 {
        self.weight
    }
}

/// Steers straight towards a target
#[derive(Debug, Clone, PartialEq)]
pub struct Seek {
    pub target: Option<Vec3>,
    pub weight: f32,
}

impl Seek {
    pub fn new(target: Vec3) -> Self {
        Self {
            target: Some(target),
            weight: DEFAULT_STEERING_WEIGHT,
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn set_target(&mut self, target: Option<Vec3>) {
        self.target = target;
    }
}

impl Default for Seek {
    fn default() -> Self {
        Self {
            target: None,
            weight: DEFAULT_STEERING_WEIGHT,
        }
    }
}

impl SteeringBehavior for Seek {
    fn calculate(&mut self, agent: &NavAgent) -> Vec3 {
        match self.target {
            Some(target) => direction(&agent.position(), &target),
            None => Vec3::ZERO,
        }
    }

    fn weight(&self) -> f32 {
        self.weight
    }
}

/// Steers directly away from a threat while it is within `panic_distance`
#[derive(Debug, Clone, PartialEq)]
pub struct Flee {
    pub target: Option<Vec3>,
    pub panic_distance: f32,
    pub weight: f32,
}

impl Flee {
    pub fn new(target: Vec3, panic_distance: f32) -> Self {
        Self {
            target: Some(target),
            panic_distance,
            weight: DEFAULT_STEERING_WEIGHT,
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn set_target(&mut self, target: Option<Vec3>) {
        self.target = target;
    }
}

impl SteeringBehavior for Flee {
    fn calculate(&mut self, agent: &NavAgent) -> Vec3 {
        let Some(target) = self.target else {
            return Vec3::ZERO;
        };

        let position = agent.position();
        if distance(&position, &target) > self.panic_distance {
            return Vec3::ZERO;
        }
        direction(&target, &position)
    }

    fn weight(&self) -> f32 {
        self.weight
    }
}

/// Smooth pseudo-random heading
///
/// Keeps a wander target on a circle of `radius` in the horizontal plane.
/// Every call nudges it by up to `jitter` along each axis, pulls it back
/// onto the circle and returns its direction. The target persists between
/// calls, so consecutive headings stay close to each other.
#[derive(Debug, Clone)]
pub struct Wander {
    pub radius: f32,
    /// How far ahead of the agent the wander circle sits, see
    /// [`projected_target`](Self::projected_target)
    pub distance: f32,
    pub jitter: f32,
    pub weight: f32,
    wander_target: Vec2,
    rng: fastrand::Rng,
}

impl Wander {
    pub fn new(radius: f32, distance: f32, jitter: f32) -> Self {
        Self::with_rng(radius, distance, jitter, fastrand::Rng::new())
    }

    /// Creates a wander behavior with a reproducible random sequence
    pub fn with_seed(radius: f32, distance: f32, jitter: f32, seed: u64) -> Self {
        Self::with_rng(radius, distance, jitter, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(radius: f32, distance: f32, jitter: f32, rng: fastrand::Rng) -> Self {
        Self {
            radius,
            distance,
            jitter,
            weight: DEFAULT_STEERING_WEIGHT,
            wander_target: Vec2::new(radius, 0.0),
            rng,
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Gets the current wander target, relative to the circle's center
    pub fn wander_target(&self) -> Vec2 {
        self.wander_target
    }

    /// World-space point the agent is wandering towards
    ///
    /// The circle is centered `distance` ahead of `position` along
    /// `heading`; with a zero heading it is centered on the agent.
    pub fn projected_target(&self, position: Vec3, heading: Vec3) -> Vec3 {
        position
            + heading.normalize_or_zero() * self.distance
            + Vec3::new(self.wander_target.x, self.wander_target.y, 0.0)
    }

    fn random_clamped(&mut self) -> f32 {
        self.rng.f32() * 2.0 - 1.0
    }
}

impl SteeringBehavior for Wander {
    fn calculate(&mut self, _agent: &NavAgent) -> Vec3 {
        let jitter = Vec2::new(self.random_clamped(), self.random_clamped()) * self.jitter;
        let heading = (self.wander_target + jitter).normalize_or_zero();
        self.wander_target = heading * self.radius;

        Vec3::new(heading.x, heading.y, 0.0)
    }

    fn weight(&self) -> f32 {
        self.weight
    }
}
