//! A* path search over the polygon adjacency graph
//!
//! Edge cost is the horizontal-plane distance between polygon centers and
//! the heuristic is the horizontal-plane distance from a polygon's center to
//! the goal point. The open set is a plain list scanned for the lowest f
//! score, so ties always go to the node that entered the list first; this
//! keeps paths reproducible across runs.

use glam::Vec3;
use polynav_common::dist_2d;

use super::{NavMesh, PolyRef};

/// State of a node in the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    /// Node hasn't been reached yet
    New,
    /// Node is in the open list
    Open,
    /// Node has been popped from the open list
    Closed,
}

/// Per-polygon search bookkeeping
#[derive(Debug, Clone)]
struct Node {
    /// Polygon this node was reached from
    parent: Option<PolyRef>,
    /// Cost from start to this node
    g: f32,
    /// Total cost (g + h)
    f: f32,
    state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            parent: None,
            g: f32::INFINITY,
            f: f32::INFINITY,
            state: NodeState::New,
        }
    }
}

/// Search-local state; every query builds its own
struct SearchState {
    nodes: Vec<Node>,
    open_list: Vec<PolyRef>,
    centers: Vec<Vec3>,
}

impl SearchState {
    fn new(nav_mesh: &NavMesh) -> Self {
        Self {
            nodes: vec![Node::default(); nav_mesh.polygon_count()],
            open_list: Vec::new(),
            centers: nav_mesh
                .polygons()
                .iter()
                .map(|poly| poly.center(nav_mesh))
                .collect(),
        }
    }

    fn node(&mut self, poly_ref: PolyRef) -> &mut Node {
        &mut self.nodes[poly_ref.id()]
    }

    fn center(&self, poly_ref: PolyRef) -> Vec3 {
        self.centers[poly_ref.id()]
    }

    fn push_open(&mut self, poly_ref: PolyRef) {
        self.node(poly_ref).state = NodeState::Open;
        self.open_list.push(poly_ref);
    }

    /// Removes and returns the open node with the lowest f score.
    /// Strict comparison keeps the earliest inserted node on ties.
    fn pop_best(&mut self) -> Option<PolyRef> {
        let mut best: Option<(usize, f32)> = None;
        for (i, poly_ref) in self.open_list.iter().enumerate() {
            let f = self.nodes[poly_ref.id()].f;
            match best {
                Some((_, best_f)) if f >= best_f => {}
                _ => best = Some((i, f)),
            }
        }

        let (i, _) = best?;
        let poly_ref = self.open_list.remove(i);
        self.node(poly_ref).state = NodeState::Closed;
        Some(poly_ref)
    }
}

impl NavMesh {
    /// Finds a path of waypoints from `start_pos` to `end_pos`
    ///
    /// The result starts with `start_pos`, continues through the center of
    /// every polygon strictly between the start and end polygons, and ends
    /// with `end_pos`. Returns `None` when either point is off the mesh,
    /// when no chain of polygons connects them, or when the search exceeds
    /// the configured iteration cap.
    pub fn find_path(&self, start_pos: Vec3, end_pos: Vec3) -> Option<Vec<Vec3>> {
        let corridor = self.find_polygon_path(start_pos, end_pos)?;
        Some(self.corridor_waypoints(start_pos, end_pos, &corridor))
    }

    /// Turns a polygon corridor into waypoints
    ///
    /// `start_pos`, then the center of every polygon strictly inside the
    /// corridor, then `end_pos`.
    pub fn corridor_waypoints(
        &self,
        start_pos: Vec3,
        end_pos: Vec3,
        corridor: &[PolyRef],
    ) -> Vec<Vec3> {
        let mut path = Vec::with_capacity(corridor.len().max(2));
        path.push(start_pos);
        if corridor.len() > 2 {
            path.extend(
                corridor[1..corridor.len() - 1]
                    .iter()
                    .filter_map(|&poly_ref| self.polygon_center(poly_ref)),
            );
        }
        path.push(end_pos);
        path
    }

    /// Finds the chain of polygons connecting `start_pos` to `end_pos`
    ///
    /// The chain includes both the start and end polygon; a single element
    /// means both points lie in the same polygon.
    pub fn find_polygon_path(&self, start_pos: Vec3, end_pos: Vec3) -> Option<Vec<PolyRef>> {
        let Some(start_ref) = self.find_polygon_at(start_pos) else {
            log::debug!("find_path: start {:?} is off the mesh", start_pos);
            return None;
        };
        let Some(end_ref) = self.find_polygon_at(end_pos) else {
            log::debug!("find_path: end {:?} is off the mesh", end_pos);
            return None;
        };

        if start_ref == end_ref {
            return Some(vec![start_ref]);
        }

        self.search(start_ref, end_ref, &end_pos)
    }

    fn search(&self, start_ref: PolyRef, end_ref: PolyRef, end_pos: &Vec3) -> Option<Vec<PolyRef>> {
        let mut state = SearchState::new(self);

        let start_h = dist_2d(&state.center(start_ref), end_pos);
        {
            let start_node = state.node(start_ref);
            start_node.g = 0.0;
            start_node.f = start_h;
        }
        state.push_open(start_ref);

        let max_iterations = self.config().iteration_limit(self.polygon_count());
        let mut iterations = 0;

        while let Some(current) = state.pop_best() {
            if current == end_ref {
                let path = reconstruct_path(&state, end_ref);
                log::debug!(
                    "find_path: {} -> {} through {} polygons after {} iterations",
                    start_ref,
                    end_ref,
                    path.len(),
                    iterations
                );
                return Some(path);
            }

            iterations += 1;
            if iterations > max_iterations {
                log::warn!(
                    "find_path: gave up on {} -> {} after {} iterations",
                    start_ref,
                    end_ref,
                    max_iterations
                );
                return None;
            }

            let current_g = state.nodes[current.id()].g;
            let current_center = state.center(current);

            for &neighbor in self.neighbors(current) {
                let neighbor_center = state.center(neighbor);
                let tentative_g = current_g + dist_2d(&current_center, &neighbor_center);

                let neighbor_state = {
                    let node = state.node(neighbor);
                    if tentative_g >= node.g {
                        continue;
                    }
                    node.parent = Some(current);
                    node.g = tentative_g;
                    node.f = tentative_g + dist_2d(&neighbor_center, end_pos);
                    node.state
                };

                if neighbor_state != NodeState::Open {
                    state.push_open(neighbor);
                }
            }
        }

        log::debug!("find_path: no route from {} to {}", start_ref, end_ref);
        None
    }
}

/// Walks parent links back from `end_ref` and returns the chain start-first
fn reconstruct_path(state: &SearchState, end_ref: PolyRef) -> Vec<PolyRef> {
    let mut path = vec![end_ref];
    let mut current = end_ref;
    while let Some(parent) = state.nodes[current.id()].parent {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
