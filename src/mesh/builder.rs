/**
 * This module provides convenience functions for building common meshes.
 */
use super::EditMesh;
use crate::error::Result;
use crate::Real;

#[inline]
fn real<T: Real>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::zero)
}

/// Axis plane orientation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AxisPlaneOrientation {
    XY,
    YZ,
    ZX,
}

/// Parameters that define a grid that lies in one of the 3 axis planes in 3D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridBuilder {
    /// Number of grid cells in each column.
    pub rows: usize,
    /// Number of grid cells in each row.
    pub cols: usize,
    /// Axis orientation of the grid.
    pub orientation: AxisPlaneOrientation,
}

impl GridBuilder {
    /// Generate a [-1,1]x[-1,1] mesh grid of quads with the given cell resolution and grid
    /// orientation. The grid nodes are spcified in row major order.
    pub fn build<T: Real>(self) -> EditMesh<T> {
        let GridBuilder {
            rows,
            cols,
            orientation,
        } = self;

        let mut positions = Vec::new();

        // iterate over vertices
        for j in 0..=cols {
            for i in 0..=rows {
                let r = real::<T>(-1.0 + 2.0 * (i as f64) / rows.max(1) as f64);
                let c = real::<T>(-1.0 + 2.0 * (j as f64) / cols.max(1) as f64);
                let node_pos = match orientation {
                    AxisPlaneOrientation::XY => [r, c, T::zero()],
                    AxisPlaneOrientation::YZ => [T::zero(), r, c],
                    AxisPlaneOrientation::ZX => [c, T::zero(), r],
                };
                positions.push(node_pos);
            }
        }

        let mut indices = Vec::new();

        // iterate over faces
        for i in 0..rows {
            for j in 0..cols {
                indices.push(4);
                indices.push((rows + 1) * j + i);
                indices.push((rows + 1) * j + i + 1);
                indices.push((rows + 1) * (j + 1) + i + 1);
                indices.push((rows + 1) * (j + 1) + i);
            }
        }

        EditMesh::new(positions, &indices).expect("grid faces are valid by construction")
    }
}

/// A polyline of vertices connected by edges, visited in the given order of x coordinates.
///
/// Vertex `i` sits at `(xs[i], 0, 0)`. Consecutive entries of `path` are joined by an edge, so
/// the connectivity can differ from the spatial order of the vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct PathBuilder {
    pub xs: Vec<f64>,
    pub path: Vec<usize>,
}

impl PathBuilder {
    /// A straight path through vertices at `0, 1, ..., n - 1` in index order.
    pub fn straight(n: usize) -> Self {
        PathBuilder {
            xs: (0..n).map(|i| i as f64).collect(),
            path: (0..n).collect(),
        }
    }

    /// Build the path mesh.
    ///
    /// Fails if `path` references a missing vertex or repeats a vertex in consecutive entries.
    pub fn build<T: Real>(self) -> Result<EditMesh<T>> {
        let positions = self
            .xs
            .iter()
            .map(|&x| [real::<T>(x), T::zero(), T::zero()])
            .collect();
        let edges: Vec<_> = self.path.windows(2).map(|w| [w[0], w[1]]).collect();
        EditMesh::from_edges(positions, &edges)
    }
}
