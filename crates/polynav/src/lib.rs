//! Polygon navigation meshes and A* path search
//!
//! A [`NavMesh`] owns a list of vertices and a list of [`NavPolygon`]s that
//! index into it. Polygons that share an edge (two or more vertex indices)
//! are neighbors, and [`NavMesh::find_path`] searches that adjacency graph
//! for the cheapest polygon chain between two points.
//!
//! # Example
//!
//! ```rust
//! use polynav::NavMesh;
//! use glam::Vec3;
//!
//! let mut mesh = NavMesh::new();
//! let a = mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0));
//! let b = mesh.add_vertex(Vec3::new(10.0, 0.0, 0.0));
//! let c = mesh.add_vertex(Vec3::new(10.0, 10.0, 0.0));
//! let d = mesh.add_vertex(Vec3::new(0.0, 10.0, 0.0));
//! mesh.add_polygon(&[a, b, c])?;
//! mesh.add_polygon(&[a, c, d])?;
//!
//! let path = mesh
//!     .find_path(Vec3::new(8.0, 2.0, 0.0), Vec3::new(2.0, 8.0, 0.0))
//!     .expect("both points are on the mesh");
//! assert_eq!(path.len(), 2);
//! # Ok::<(), polynav_common::Error>(())
//! ```
//!
//! Distances used by the search are measured on the horizontal X/Y plane;
//! elevation (Z) never contributes to path cost.

mod config;
mod nav_mesh;
mod nav_polygon;
mod path_search;

pub use config::{PathSearchConfig, EXPANSIONS_PER_POLYGON};
pub use nav_mesh::NavMesh;
pub use nav_polygon::NavPolygon;

#[cfg(test)]
pub(crate) mod test_mesh_helpers;


/// Reference to a polygon within a [`NavMesh`]
///
/// Polygon references are insertion indices; since meshes are append-only
/// a reference stays valid for the lifetime of the mesh that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PolyRef(usize);

impl PolyRef {
    /// Creates a new polygon reference
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Gets the polygon index
    pub fn id(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PolyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "poly#{}", self.0)
    }
}
