//! Navigation polygons
//!
//! A polygon only stores indices into its mesh's vertex list. Anything that
//! needs actual positions takes the owning [`NavMesh`] as a parameter, so
//! there is no back-pointer from polygon to mesh.

use glam::Vec3;
use polynav_common::{centroid, dist_2d, point_in_polygon_2d};

use super::{NavMesh, PolyRef};

/// Number of shared vertex indices that make two polygons neighbors
const SHARED_EDGE_VERTS: usize = 2;

/// A convex (assumed) region of a navigation mesh
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct NavPolygon {
    /// Boundary vertex indices, in winding order
    indices: Vec<usize>,
}

impl NavPolygon {
    /// Creates a polygon over already validated indices
    pub(crate) fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Gets the vertex indices of the polygon
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Gets the number of vertices of the polygon
    pub fn vertex_count(&self) -> usize {
        self.indices.len()
    }

    /// Resolves the polygon's vertex indices to positions in `mesh`
    pub fn vertices(&self, mesh: &NavMesh) -> Vec<Vec3> {
        self.indices
            .iter()
            .filter_map(|&idx| mesh.vertex(idx))
            .collect()
    }

    /// Arithmetic mean of the polygon's vertex positions
    ///
    /// Not cached: the result is recomputed from the mesh on each call.
    pub fn center(&self, mesh: &NavMesh) -> Vec3 {
        centroid(&self.vertices(mesh))
    }

    /// Checks whether `point` lies inside the polygon on the horizontal plane
    ///
    /// Elevation is ignored, so on a mesh with overlapping floors this
    /// reports every floor under the point.
    pub fn contains(&self, mesh: &NavMesh, point: &Vec3) -> bool {
        point_in_polygon_2d(point, &self.vertices(mesh))
    }

    /// Checks whether the two polygons share at least one edge
    pub fn shares_edge_with(&self, other: &NavPolygon) -> bool {
        let shared = self
            .indices
            .iter()
            .enumerate()
            .filter(|&(i, idx)| !self.indices[..i].contains(idx) && other.indices.contains(idx))
            .count();
        shared >= SHARED_EDGE_VERTS
    }

    /// Every other polygon in `all_polygons` that shares an edge with this one
    ///
    /// References are positions within `all_polygons`, in order. A polygon
    /// with the same index list is treated as this one, so `self` may be a
    /// copy taken out of `all_polygons`.
    pub fn neighbors(&self, all_polygons: &[NavPolygon]) -> Vec<PolyRef> {
        all_polygons
            .iter()
            .enumerate()
            .filter(|(_, other)| other.indices != self.indices && self.shares_edge_with(other))
            .map(|(i, _)| PolyRef::new(i))
            .collect()
    }

    /// Horizontal-plane distance between this polygon's center and `other`'s
    pub fn distance_to(&self, mesh: &NavMesh, other: &NavPolygon) -> f32 {
        dist_2d(&self.center(mesh), &other.center(mesh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_mesh_helpers::*;

    #[test]
    fn test_center_is_vertex_mean() {
        let mesh = create_two_triangle_navmesh();
        let poly = mesh.polygon(PolyRef::new(0)).unwrap();

        let center = poly.center(&mesh);
        assert!((center - Vec3::new(20.0 / 3.0, 10.0 / 3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_center_includes_elevation() {
        let mut mesh = NavMesh::new();
        let a = mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Vec3::new(3.0, 0.0, 3.0));
        let c = mesh.add_vertex(Vec3::new(0.0, 3.0, 6.0));
        let poly_ref = mesh.add_polygon(&[a, b, c]).unwrap();

        let center = mesh.polygon(poly_ref).unwrap().center(&mesh);
        assert!((center - Vec3::new(1.0, 1.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn test_contains() {
        let mesh = create_two_triangle_navmesh();
        let lower = mesh.polygon(PolyRef::new(0)).unwrap();
        let upper = mesh.polygon(PolyRef::new(1)).unwrap();

        assert!(lower.contains(&mesh, &Vec3::new(8.0, 2.0, 0.0)));
        assert!(!lower.contains(&mesh, &Vec3::new(2.0, 8.0, 0.0)));
        assert!(upper.contains(&mesh, &Vec3::new(2.0, 8.0, 0.0)));
        assert!(!upper.contains(&mesh, &Vec3::new(11.0, 5.0, 0.0)));
    }

    #[test]
    fn test_contains_ignores_elevation() {
        let mesh = create_two_triangle_navmesh();
        let lower = mesh.polygon(PolyRef::new(0)).unwrap();

        assert!(lower.contains(&mesh, &Vec3::new(8.0, 2.0, 42.0)));
    }

    #[test]
    fn test_shares_edge_with() {
        let a = NavPolygon::new(vec![0, 1, 2]);
        let b = NavPolygon::new(vec![0, 2, 3]);
        let c = NavPolygon::new(vec![2, 4, 5]);

        assert!(a.shares_edge_with(&b));
        assert!(b.shares_edge_with(&a));
        // A single shared vertex is a corner, not an edge
        assert!(!a.shares_edge_with(&c));
    }

    #[test]
    fn test_repeated_index_counts_once() {
        let a = NavPolygon::new(vec![0, 0, 1, 2]);
        let b = NavPolygon::new(vec![0, 5, 6]);

        assert!(!a.shares_edge_with(&b));
    }

    #[test]
    fn test_neighbors_excludes_self() {
        let mesh = create_chain_navmesh();
        let polys = mesh.polygons();

        assert_eq!(polys[0].neighbors(polys), vec![PolyRef::new(1)]);
        assert_eq!(
            polys[1].neighbors(polys),
            vec![PolyRef::new(0), PolyRef::new(2)]
        );
        assert_eq!(polys[2].neighbors(polys), vec![PolyRef::new(1)]);
    }

    #[test]
    fn test_neighbors_of_cloned_polygon() {
        let mesh = create_chain_navmesh();
        let polys = mesh.polygons();
        let middle = polys[1].clone();

        assert_eq!(
            middle.neighbors(polys),
            vec![PolyRef::new(0), PolyRef::new(2)]
        );
    }

    #[test]
    fn test_distance_to_is_planar() {
        let mut mesh = NavMesh::new();
        let verts = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(3.0, 3.0, 30.0),
            Vec3::new(6.0, 3.0, 30.0),
            Vec3::new(3.0, 6.0, 30.0),
        ];
        for v in verts {
            mesh.add_vertex(v);
        }
        let low = mesh.add_polygon(&[0, 1, 2]).unwrap();
        let high = mesh.add_polygon(&[3, 4, 5]).unwrap();

        let low = mesh.polygon(low).unwrap();
        let high = mesh.polygon(high).unwrap();
        // Centers (1,1,0) and (4,4,30): only the XY offset counts
        let expected = (18.0f32).sqrt();
        assert!((low.distance_to(&mesh, high) - expected).abs() < 1e-5);
        assert!((high.distance_to(&mesh, low) - expected).abs() < 1e-5);
    }
}
