//! Configuration for path search on a navigation mesh

use polynav_common::{Error, Result};

/// Node expansions allowed per polygon when no explicit cap is set
///
/// With a consistent heuristic every polygon is expanded at most once, so
/// a well-formed mesh never reaches this bound.
pub const EXPANSIONS_PER_POLYGON: usize = 2;

/// Parameters controlling A* path search
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PathSearchConfig {
    /// Maximum number of nodes popped from the open set before a search
    /// gives up and reports no path
    ///
    /// `None` scales the cap with the mesh, see [`Self::iteration_limit`].
    pub max_iterations: Option<usize>,
}

impl Default for PathSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
        }
    }
}

impl PathSearchConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Cap on node expansions for a search over `polygon_count` polygons
    pub fn iteration_limit(&self, polygon_count: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| polygon_count.saturating_mul(EXPANSIONS_PER_POLYGON).max(1))
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == Some(0) {
            return Err(Error::InvalidConfig(
                "max_iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PathSearchConfig::default();
        assert_eq!(config.max_iterations, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_iteration_limit_scales_with_mesh() {
        let config = PathSearchConfig::default();
        assert_eq!(config.iteration_limit(0), 1);
        assert_eq!(config.iteration_limit(10), 20);
        assert_eq!(config.iteration_limit(5000), 10000);
    }

    #[test]
    fn test_explicit_iteration_limit() {
        let config = PathSearchConfig::new().with_max_iterations(16);
        assert_eq!(config.iteration_limit(5000), 16);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = PathSearchConfig::new().with_max_iterations(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
