pub mod construct;
pub mod derive;
pub mod keys;
pub mod select;
pub mod target;

pub use self::construct::*;
pub use self::derive::*;
pub use self::target::{target_centers, target_ranking};

use tracing::{debug, warn};

use crate::mesh::topology::*;
use crate::order::SortOrder;
use crate::Real;

/// A sort criterion with every input supplied by the host resolved.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Criterion<'a, T> {
    /// Ascending element center coordinate.
    Axis(Axis),
    /// Ascending squared distance to each point, interleaved. No points means the origin.
    Points(&'a [[T; 3]]),
    /// Descending weight in the named vertex group.
    VertexGroup(&'a str),
    /// Greedy match against target centers.
    Target {
        centers: &'a [[T; 3]],
        random_order: bool,
        seed: u64,
    },
    Random {
        seed: u64,
    },
    Identity,
}

/// Rank the elements of `kind` by `criterion`.
///
/// Returns one ranking per reference point for point proximity and a single ranking otherwise.
pub fn rankings<T: Real, M: SortMesh<T>>(
    mesh: &M,
    kind: ElementKind,
    criterion: Criterion<T>,
) -> Vec<Vec<usize>> {
    let n = mesh.num_elements(kind);
    match criterion {
        Criterion::Axis(axis) => vec![keys::rank_by_key(&keys::axis_keys(mesh, kind, axis))],
        Criterion::Points(points) if points.is_empty() => {
            let origin = [T::zero(); 3];
            vec![keys::rank_by_key(&keys::distance_keys(mesh, kind, origin))]
        }
        Criterion::Points(points) => points
            .iter()
            .map(|&p| keys::rank_by_key(&keys::distance_keys(mesh, kind, p)))
            .collect(),
        Criterion::VertexGroup(name) => {
            let group = mesh.vertex_group_index(name);
            if group.is_none() {
                warn!("Vertex group \"{}\" not found, all weights are zero", name);
            }
            vec![keys::rank_by_key(&keys::weight_keys(mesh, kind, group))]
        }
        Criterion::Target {
            centers,
            random_order,
            seed,
        } => vec![target_ranking(mesh, kind, centers, random_order, seed)],
        Criterion::Random { seed } => vec![keys::random_ranking(n, seed)],
        Criterion::Identity => vec![keys::identity_ranking(n)],
    }
}

/// Compute a new order for the elements of `kind`.
///
/// With `connected_first` neighbouring elements are kept close together as described in
/// [`construct`].
pub fn sort_elements<T: Real, M: SortMesh<T>>(
    mesh: &M,
    kind: ElementKind,
    criterion: Criterion<T>,
    connected_first: bool,
) -> SortOrder {
    let n = mesh.num_elements(kind);
    let rankings = rankings(mesh, kind, criterion);
    debug!(
        "Sorting {} {} using {} ranking(s){}",
        n,
        kind.plural_name(),
        rankings.len(),
        if connected_first {
            ", connected first"
        } else {
            ""
        }
    );

    if connected_first {
        connected_order(n, &rankings, |elem, buf| {
            mesh.push_neighbours(kind, elem, buf)
        })
    } else {
        plain_order(n, &rankings)
    }
}

/// Useful utilities for testing algorithms in this module.
#[cfg(test)]
pub(crate) mod test_utils {
    use crate::mesh::builder::{AxisPlaneOrientation, GridBuilder};
    use crate::mesh::EditMesh;

    /// Four vertices at x = 3, 1, 4, 2 joined along increasing x.
    pub(crate) fn four_vertices() -> EditMesh<f64> {
        let verts = vec![
            [3.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [4.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
        ];
        EditMesh::from_edges(verts, &[[1, 3], [3, 0], [0, 2]]).unwrap()
    }

    /// A 2x3 grid of quads in the xy plane: 12 vertices, 17 edges and 6 faces.
    pub(crate) fn grid_mesh() -> EditMesh<f64> {
        GridBuilder {
            rows: 2,
            cols: 3,
            orientation: AxisPlaneOrientation::XY,
        }
        .build()
    }

    /// A single row of `n` quads along y. Face `f` is centered at `y = -1 + (2f + 1) / n`.
    pub(crate) fn strip_mesh(n: usize) -> EditMesh<f64> {
        GridBuilder {
            rows: 1,
            cols: n,
            orientation: AxisPlaneOrientation::XY,
        }
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::*;
    use super::*;
    use crate::mesh::builder::PathBuilder;
    use crate::order::is_permutation;

    #[test]
    fn four_vertices_along_x() {
        let mesh = four_vertices();
        let order = sort_elements(&mesh, ElementKind::Vertex, Criterion::Axis(Axis::X), false);
        assert_eq!(order.as_slice(), &[2, 0, 3, 1]);
        assert_eq!(order.reversed().as_slice(), &[1, 3, 0, 2]);

        // The vertices are joined in x order, so connectivity agrees with the axis.
        let order = sort_elements(&mesh, ElementKind::Vertex, Criterion::Axis(Axis::X), true);
        assert_eq!(order.as_slice(), &[2, 0, 3, 1]);
    }

    #[test]
    fn axis_order_is_monotone() {
        let mesh = grid_mesh();
        for &kind in ElementKind::ALL.iter() {
            for &axis in [Axis::X, Axis::Y].iter() {
                let order = sort_elements(&mesh, kind, Criterion::Axis(axis), false);
                assert!(is_permutation(order.as_slice()));
                let c = axis.component();
                let coords: Vec<f64> = order
                    .inverse()
                    .into_iter()
                    .map(|i| mesh.element_center(kind, i)[c])
                    .collect();
                assert!(coords.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }

    #[test]
    fn two_point_round_robin() {
        let mesh: crate::mesh::EditMesh<f64> = PathBuilder::straight(6).build().unwrap();
        let points = [[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]];
        let order = sort_elements(&mesh, ElementKind::Vertex, Criterion::Points(&points), false);
        assert_eq!(order.inverse(), vec![0, 5, 1, 4, 2, 3]);

        // A single point is a plain proximity sort.
        let order = sort_elements(
            &mesh,
            ElementKind::Vertex,
            Criterion::Points(&points[1..]),
            false,
        );
        assert_eq!(order.inverse(), vec![5, 4, 3, 2, 1, 0]);

        // No points sorts by distance to the origin.
        let none: &[[f64; 3]] = &[];
        let order = sort_elements(&mesh, ElementKind::Vertex, Criterion::Points(none), false);
        assert_eq!(order, SortOrder::identity(6));
    }

    #[test]
    fn connected_first_on_paths() {
        // Spatial order matches connectivity.
        let mesh: crate::mesh::EditMesh<f64> = PathBuilder::straight(5).build().unwrap();
        let plain = sort_elements(&mesh, ElementKind::Vertex, Criterion::Axis(Axis::X), false);
        let connected = sort_elements(&mesh, ElementKind::Vertex, Criterion::Axis(Axis::X), true);
        assert_eq!(plain, connected);

        // The path zigzags through x = 0, 3, 1, 4, 2.
        let mesh: crate::mesh::EditMesh<f64> = PathBuilder {
            xs: vec![0.0, 1.0, 2.0, 3.0, 4.0],
            path: vec![0, 3, 1, 4, 2],
        }
        .build()
        .unwrap();
        let plain = sort_elements(&mesh, ElementKind::Vertex, Criterion::Axis(Axis::X), false);
        let connected = sort_elements(&mesh, ElementKind::Vertex, Criterion::Axis(Axis::X), true);
        assert_eq!(plain, SortOrder::identity(5));
        assert_ne!(plain, connected);

        // Consecutive vertices in the new order share an edge.
        let placed = connected.inverse();
        for pair in placed.windows(2) {
            let mut neighbours = Vec::new();
            mesh.push_neighbours(ElementKind::Vertex, pair[0], &mut neighbours);
            assert!(neighbours.contains(&pair[1]));
        }
    }

    #[test]
    fn connected_faces_stay_bijective() {
        let mesh = grid_mesh();
        let points = [[1.0, 1.0, 0.0], [-1.0, -1.0, 0.0], [0.0, 0.0, 0.0]];
        for &kind in ElementKind::ALL.iter() {
            let order = sort_elements(&mesh, kind, Criterion::Points(&points), true);
            assert_eq!(order.len(), mesh.num_elements(kind));
            assert!(is_permutation(order.as_slice()));
        }
    }

    #[test]
    fn random_is_reproducible() {
        let mesh = grid_mesh();
        let a = sort_elements(&mesh, ElementKind::Edge, Criterion::Random { seed: 42 }, false);
        let b = sort_elements(&mesh, ElementKind::Edge, Criterion::Random { seed: 42 }, false);
        assert_eq!(a, b);
        assert!(is_permutation(a.as_slice()));
    }

    #[test]
    fn vertex_group_weights() {
        let mut mesh = four_vertices();
        mesh.add_vertex_group("w", vec![0.1, 0.9, 0.5, 0.0]);
        let order = sort_elements(&mesh, ElementKind::Vertex, Criterion::VertexGroup("w"), false);
        assert_eq!(order.inverse(), vec![1, 2, 0, 3]);

        // A missing group leaves every key at zero, so the order is kept.
        let order = sort_elements(
            &mesh,
            ElementKind::Vertex,
            Criterion::VertexGroup("missing"),
            false,
        );
        assert_eq!(order, SortOrder::identity(4));
    }

    #[test]
    fn identity() {
        let mesh = grid_mesh();
        let order = sort_elements(&mesh, ElementKind::Face, Criterion::Identity, false);
        assert_eq!(order, SortOrder::identity(6));

        // Connected first still regroups faces around the first one.
        let order = sort_elements(&mesh, ElementKind::Face, Criterion::Identity, true);
        assert_eq!(order.inverse(), vec![0, 1, 3, 4, 2, 5]);
    }
}
