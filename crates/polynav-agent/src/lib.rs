//! Path-following agents and steering behaviors
//!
//! This crate moves agents across a [`polynav::NavMesh`]. A [`NavAgent`]
//! requests a path when it has a destination and none to follow, then
//! walks the waypoints at a fixed speed each frame. Steering behaviors
//! ([`Seek`], [`Flee`], [`Wander`]) are independent: they produce desired
//! directions that a host may use instead of, or blended with, path
//! following.
//!
//! # Example
//!
//! ```rust,ignore
//! use polynav_agent::{AgentParams, NavAgent};
//!
//! let mut agent = NavAgent::new(start_pos, AgentParams::default());
//! agent.set_destination(target_pos);
//!
//! // Once per frame
//! agent.update(delta_time, &nav_mesh);
//! transform.translation = agent.position();
//! ```

mod nav_agent;
mod steering;

pub use nav_agent::*;
pub use steering::*;
