//! Test mesh creation helpers
//!
//! Small hand-built meshes shared by the unit tests. All of them lie on
//! the z = 0 plane unless stated otherwise.

use glam::Vec3;

use crate::NavMesh;

fn build(vertices: &[(f32, f32, f32)], polygons: &[&[usize]]) -> NavMesh {
    let vertices = vertices
        .iter()
        .map(|&(x, y, z)| Vec3::new(x, y, z))
        .collect();
    NavMesh::from_parts(vertices, polygons).expect("test mesh is valid")
}

/// Square of side 10 split along its diagonal into two triangles
///
/// Polygon 0 is `[0, 1, 2]` (below the diagonal), polygon 1 is `[0, 2, 3]`.
pub fn create_two_triangle_navmesh() -> NavMesh {
    build(
        &[
            (0.0, 0.0, 0.0),
            (10.0, 0.0, 0.0),
            (10.0, 10.0, 0.0),
            (0.0, 10.0, 0.0),
        ],
        &[&[0, 1, 2], &[0, 2, 3]],
    )
}

/// Three quads in a row along X: A = [0,3], B = [3,7], C = [7,10]
///
/// A and C only touch B. The center of B is (5, 1, 0).
pub fn create_chain_navmesh() -> NavMesh {
    build(
        &[
            (0.0, 0.0, 0.0),
            (3.0, 0.0, 0.0),
            (7.0, 0.0, 0.0),
            (10.0, 0.0, 0.0),
            (10.0, 2.0, 0.0),
            (7.0, 2.0, 0.0),
            (3.0, 2.0, 0.0),
            (0.0, 2.0, 0.0),
        ],
        &[&[0, 1, 6, 7], &[1, 2, 5, 6], &[2, 3, 4, 5]],
    )
}

/// Two unit-high quads far apart with no shared vertices
pub fn create_island_navmesh() -> NavMesh {
    build(
        &[
            (0.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (2.0, 1.0, 0.0),
            (0.0, 1.0, 0.0),
            (20.0, 0.0, 0.0),
            (22.0, 0.0, 0.0),
            (22.0, 1.0, 0.0),
            (20.0, 1.0, 0.0),
        ],
        &[&[0, 1, 2, 3], &[4, 5, 6, 7]],
    )
}

/// Grid of `cols` x `rows` square cells, each split into two triangles
pub fn create_grid_navmesh(cols: usize, rows: usize, cell: f32) -> NavMesh {
    let mut mesh = NavMesh::new();
    for y in 0..=rows {
        for x in 0..=cols {
            mesh.add_vertex(Vec3::new(x as f32 * cell, y as f32 * cell, 0.0));
        }
    }

    let stride = cols + 1;
    for y in 0..rows {
        for x in 0..cols {
            let a = y * stride + x;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            mesh.add_polygon(&[a, b, c]).expect("grid triangle is valid");
            mesh.add_polygon(&[a, c, d]).expect("grid triangle is valid");
        }
    }
    mesh
}

/// Straight strip of `len` unit quads along X, each sharing an edge with
/// the next
pub fn create_corridor_navmesh(len: usize) -> NavMesh {
    let mut mesh = NavMesh::new();
    for x in 0..=len {
        mesh.add_vertex(Vec3::new(x as f32, 0.0, 0.0));
        mesh.add_vertex(Vec3::new(x as f32, 1.0, 0.0));
    }
    for x in 0..len {
        let a = 2 * x;
        mesh.add_polygon(&[a, a + 2, a + 3, a + 1])
            .expect("corridor quad is valid");
    }
    mesh
}

/// Symmetric diamond of four polygons: S (bottom), A (middle left),
/// B (middle right) and G (top), added in that order
///
/// Both routes S-A-G and S-B-G cost exactly the same on the horizontal
/// plane.
pub fn create_diamond_navmesh() -> NavMesh {
    create_diamond_navmesh_raised(0.0)
}

/// Same as [`create_diamond_navmesh`] with the two outer left vertices of
/// A lifted to `height`
pub fn create_diamond_navmesh_raised(height: f32) -> NavMesh {
    build(
        &[
            (-1.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 2.0, 0.0),
            (0.0, 2.0, 0.0),
            (-1.0, 2.0, height),
            (1.0, 4.0, 0.0),
            (0.0, 4.0, 0.0),
            (-1.0, 4.0, height),
            (1.0, 6.0, 0.0),
            (-1.0, 6.0, 0.0),
        ],
        &[
            &[0, 1, 2, 3, 4],
            &[4, 3, 6, 7],
            &[3, 2, 5, 6],
            &[7, 6, 5, 8, 9],
        ],
    )
}
