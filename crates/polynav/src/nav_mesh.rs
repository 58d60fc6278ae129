//! Navigation mesh storage and adjacency
//!
//! The mesh is append-only: vertices and polygons can be added but never
//! removed, so vertex indices and [`PolyRef`]s handed out stay valid.
//! Queries take `&self` and mutation takes `&mut self`; share a finished
//! mesh between threads behind an `Arc` and the borrow rules keep writers
//! out while searches run.

use glam::Vec3;
use polynav_common::{Error, Result};

use super::{NavPolygon, PathSearchConfig, PolyRef};

/// Minimum number of vertices in a polygon
pub const MIN_POLY_VERTS: usize = 3;

/// A planar polygon navigation mesh
#[derive(Debug, Clone, Default)]
pub struct NavMesh {
    /// Vertex positions
    vertices: Vec<Vec3>,
    /// Polygons indexing into `vertices`
    polygons: Vec<NavPolygon>,
    /// Edge-sharing neighbors of each polygon, in polygon insertion order
    links: Vec<Vec<PolyRef>>,
    /// Path search parameters
    config: PathSearchConfig,
}

impl NavMesh {
    /// Creates an empty navigation mesh with the default search config
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty navigation mesh with the given search config
    pub fn with_config(config: PathSearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Builds a mesh from a vertex list and polygon index lists
    ///
    /// Polygons are validated and linked in the order given.
    pub fn from_parts<P>(vertices: Vec<Vec3>, polygons: &[P]) -> Result<Self>
    where
        P: AsRef<[usize]>,
    {
        let mut mesh = Self {
            vertices,
            ..Self::default()
        };
        for indices in polygons {
            mesh.add_polygon(indices.as_ref())?;
        }
        Ok(mesh)
    }

    /// Gets the path search config
    pub fn config(&self) -> &PathSearchConfig {
        &self.config
    }

    /// Appends a vertex and returns its index
    ///
    /// No deduplication is done; adding the same position twice yields two
    /// distinct vertices.
    pub fn add_vertex(&mut self, position: Vec3) -> usize {
        self.vertices.push(position);
        self.vertices.len() - 1
    }

    /// Appends a polygon over the given vertex indices
    ///
    /// The indices must name at least three existing vertices. Winding is
    /// the caller's responsibility. The new polygon is linked to every
    /// existing polygon it shares an edge with.
    pub fn add_polygon(&mut self, indices: &[usize]) -> Result<PolyRef> {
        if indices.len() < MIN_POLY_VERTS {
            return Err(Error::InvalidPolygon(format!(
                "needs at least {} vertices, got {}",
                MIN_POLY_VERTS,
                indices.len()
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&idx| idx >= self.vertices.len()) {
            return Err(Error::InvalidPolygon(format!(
                "vertex index {} out of range (mesh has {} vertices)",
                bad,
                self.vertices.len()
            )));
        }

        let poly_ref = PolyRef::new(self.polygons.len());
        let polygon = NavPolygon::new(indices.to_vec());

        // Existing lists stay sorted: the new ref is larger than any in them.
        let mut links = Vec::new();
        for (i, other) in self.polygons.iter().enumerate() {
            if polygon.shares_edge_with(other) {
                links.push(PolyRef::new(i));
                self.links[i].push(poly_ref);
            }
        }

        self.polygons.push(polygon);
        self.links.push(links);
        Ok(poly_ref)
    }

    /// Gets a vertex position by index
    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    /// Gets all vertex positions
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Gets the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gets a polygon by reference
    pub fn polygon(&self, poly_ref: PolyRef) -> Option<&NavPolygon> {
        self.polygons.get(poly_ref.id())
    }

    /// Gets all polygons, in insertion order
    pub fn polygons(&self) -> &[NavPolygon] {
        &self.polygons
    }

    /// Gets the number of polygons
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Checks if a polygon reference belongs to this mesh
    pub fn is_valid_poly_ref(&self, poly_ref: PolyRef) -> bool {
        poly_ref.id() < self.polygons.len()
    }

    /// Gets the center of a polygon
    pub fn polygon_center(&self, poly_ref: PolyRef) -> Option<Vec3> {
        self.polygon(poly_ref).map(|poly| poly.center(self))
    }

    /// Gets the edge-sharing neighbors of a polygon, in insertion order
    ///
    /// Returns an empty slice for an invalid reference.
    pub fn neighbors(&self, poly_ref: PolyRef) -> &[PolyRef] {
        self.links
            .get(poly_ref.id())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Finds the first polygon, in insertion order, containing `point`
    ///
    /// Where polygons overlap (including points on a shared edge) the
    /// earliest added polygon wins.
    pub fn find_polygon_at(&self, point: Vec3) -> Option<PolyRef> {
        self.polygons
            .iter()
            .position(|poly| poly.contains(self, &point))
            .map(PolyRef::new)
    }
}
