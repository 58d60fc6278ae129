//! Common utilities and data structures shared by the polynav crates

mod geometry;
mod vector;

pub use geometry::*;
pub use vector::*;

/// Represents a 3D position
pub type Vec3 = glam::Vec3;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for polynav operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPolygon("needs at least 3 vertices, got 2".to_string());
        assert_eq!(
            err.to_string(),
            "invalid polygon: needs at least 3 vertices, got 2"
        );

        let err = Error::InvalidConfig("max_iterations must be positive".to_string());
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
