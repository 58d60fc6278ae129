//! Agents that follow paths across a navigation mesh

use glam::Vec3;
use polynav::NavMesh;
use polynav_common::{distance, move_towards, Error, Result};

/// Default agent radius
pub const DEFAULT_AGENT_RADIUS: f32 = 0.6;

/// Default agent speed, in units per second
pub const DEFAULT_AGENT_SPEED: f32 = 3.5;

/// Agent parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct AgentParams {
    /// Movement speed in units per second
    pub speed: f32,
    /// Radius of the agent, also the tolerance for reaching a waypoint or
    /// the destination
    pub radius: f32,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            speed: DEFAULT_AGENT_SPEED,
            radius: DEFAULT_AGENT_RADIUS,
        }
    }
}

impl AgentParams {
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Validates the parameters
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(Error::InvalidConfig(
                "agent speed must be finite and non-negative".to_string(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(Error::InvalidConfig(
                "agent radius must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// An agent walking a path on a navigation mesh
///
/// The host owns the mesh and the frame loop; the agent only keeps its own
/// position and path. A path is requested when a destination is set and no
/// path is held; once held, it is walked to the end before any new search.
#[derive(Debug, Clone)]
pub struct NavAgent {
    /// Agent parameters
    params: AgentParams,
    /// Current position of the agent
    position: Vec3,
    /// Destination, if any
    target: Option<Vec3>,
    /// Waypoints of the current path
    path: Vec<Vec3>,
    /// Index of the waypoint currently being walked to
    current_waypoint: usize,
}

impl NavAgent {
    /// Creates a new agent at `position`
    pub fn new(position: Vec3, params: AgentParams) -> Self {
        Self {
            params,
            position,
            target: None,
            path: Vec::new(),
            current_waypoint: 0,
        }
    }

    /// Gets the agent's position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Moves the agent without touching its path, e.g. when the host
    /// teleports the entity
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Gets the agent's destination
    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Gets the agent's parameters
    pub fn params(&self) -> &AgentParams {
        &self.params
    }

    /// Gets the waypoints of the current path
    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    /// Gets the index of the waypoint the agent is walking to
    pub fn current_waypoint(&self) -> usize {
        self.current_waypoint
    }

    /// Checks whether the agent holds a path
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Sets a new destination
    ///
    /// Drops the current path; the next [`update`](Self::update) searches
    /// for a new one.
    pub fn set_destination(&mut self, target: Vec3) {
        self.target = Some(target);
        self.clear_path();
    }

    /// Clears the destination and the current path
    pub fn clear_destination(&mut self) {
        self.target = None;
        self.clear_path();
    }

    /// Checks whether the agent is within its radius of the destination
    ///
    /// This looks only at the position, not at how much of the path has
    /// been walked.
    pub fn reached_destination(&self) -> bool {
        self.target
            .is_some_and(|target| distance(&self.position, &target) < self.params.radius)
    }

    /// Advances the agent by one frame
    ///
    /// Does nothing without a destination. Without a path, one is searched
    /// for unless the agent already stands within `radius` of the target;
    /// if the search fails the agent stays put and retries next frame.
    pub fn update(&mut self, delta: f32, nav_mesh: &NavMesh) {
        let Some(target) = self.target else {
            return;
        };

        if self.path.is_empty()
            && (self.reached_destination() || !self.calculate_path(nav_mesh, target))
        {
            return;
        }

        let Some(&waypoint) = self.path.get(self.current_waypoint) else {
            self.clear_path();
            return;
        };

        if distance(&self.position, &waypoint) < self.params.radius {
            self.advance_waypoint();
            return;
        }

        let step = (self.params.speed * delta).max(0.0);
        let (position, reached) = move_towards(&self.position, &waypoint, step);
        self.position = position;
        if reached {
            self.advance_waypoint();
        }
    }

    fn calculate_path(&mut self, nav_mesh: &NavMesh, target: Vec3) -> bool {
        match nav_mesh.find_path(self.position, target) {
            Some(path) => {
                log::trace!(
                    "agent at {:?}: new path with {} waypoints",
                    self.position,
                    path.len()
                );
                self.path = path;
                self.current_waypoint = 0;
                true
            }
            None => {
                log::trace!(
                    "agent at {:?}: no path to {:?}, retrying next frame",
                    self.position,
                    target
                );
                false
            }
        }
    }

    fn advance_waypoint(&mut self) {
        self.current_waypoint += 1;
        if self.current_waypoint >= self.path.len() {
            log::trace!("agent at {:?}: path complete", self.position);
            self.clear_path();
        }
    }

    fn clear_path(&mut self) {
        self.path.clear();
        self.current_waypoint = 0;
    }
}
