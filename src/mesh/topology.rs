//!
//! Element kinds and the adjacency interface through which sorting algorithms see a mesh.
//!
//! A mesh consists of vertices (0D points), edges (1D segments between two vertices) and faces
//! (2D polygons bounded by a loop of edges). Elements of each kind are identified by their stable
//! storage index in `[0, num_elements(kind))`; sorting never needs element handles beyond that.
//!

use crate::utils::math;
use crate::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The granularity of mesh elements being reordered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementKind {
    Vertex,
    Edge,
    Face,
}

impl ElementKind {
    /// All element kinds from the lowest to the highest dimension.
    pub const ALL: [ElementKind; 3] = [ElementKind::Vertex, ElementKind::Edge, ElementKind::Face];

    pub fn plural_name(self) -> &'static str {
        match self {
            ElementKind::Vertex => "vertices",
            ElementKind::Edge => "edges",
            ElementKind::Face => "faces",
        }
    }

    /// The pair of relations that connects an element to its neighbours of the same kind.
    ///
    /// Two vertices are neighbours if they share an edge, two edges are neighbours if they share
    /// a vertex and two faces are neighbours if they share a vertex.
    pub fn neighbour_relations(self) -> (Relation, Relation) {
        match self {
            ElementKind::Vertex => (Relation::EdgesOfVertex, Relation::VerticesOfEdge),
            ElementKind::Edge => (Relation::VerticesOfEdge, Relation::EdgesOfVertex),
            ElementKind::Face => (Relation::VerticesOfFace, Relation::FacesOfVertex),
        }
    }

    /// The next lower dimensional kind used when looking for selected elements.
    pub fn lower(self) -> Option<ElementKind> {
        match self {
            ElementKind::Vertex => None,
            ElementKind::Edge => Some(ElementKind::Vertex),
            ElementKind::Face => Some(ElementKind::Edge),
        }
    }
}

/// Adjacency relation from a source element kind to a target element kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    EdgesOfVertex,
    FacesOfVertex,
    VerticesOfEdge,
    FacesOfEdge,
    VerticesOfFace,
    EdgesOfFace,
}

impl Relation {
    /// Kind of the element adjacency is queried for.
    pub fn source(self) -> ElementKind {
        match self {
            Relation::EdgesOfVertex | Relation::FacesOfVertex => ElementKind::Vertex,
            Relation::VerticesOfEdge | Relation::FacesOfEdge => ElementKind::Edge,
            Relation::VerticesOfFace | Relation::EdgesOfFace => ElementKind::Face,
        }
    }

    /// Kind of the adjacent elements.
    pub fn target(self) -> ElementKind {
        match self {
            Relation::VerticesOfEdge | Relation::VerticesOfFace => ElementKind::Vertex,
            Relation::EdgesOfVertex | Relation::EdgesOfFace => ElementKind::Edge,
            Relation::FacesOfVertex | Relation::FacesOfEdge => ElementKind::Face,
        }
    }

    /// The relation from `from` elements to `to` elements.
    ///
    /// Returns `None` if `from` and `to` are the same kind.
    pub fn between(from: ElementKind, to: ElementKind) -> Option<Relation> {
        use ElementKind::*;
        match (from, to) {
            (Vertex, Edge) => Some(Relation::EdgesOfVertex),
            (Vertex, Face) => Some(Relation::FacesOfVertex),
            (Edge, Vertex) => Some(Relation::VerticesOfEdge),
            (Edge, Face) => Some(Relation::FacesOfEdge),
            (Face, Vertex) => Some(Relation::VerticesOfFace),
            (Face, Edge) => Some(Relation::EdgesOfFace),
            _ => None,
        }
    }
}

/// Coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of the coordinate along this axis.
    #[inline]
    pub fn component(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

// Simple quantifiers
pub trait NumVertices {
    fn num_vertices(&self) -> usize;
}
pub trait NumEdges {
    fn num_edges(&self) -> usize;
}
pub trait NumFaces {
    fn num_faces(&self) -> usize;
}

/// Element counts and adjacency queries.
pub trait ElementTopology {
    /// Number of elements of the given kind.
    fn num_elements(&self, kind: ElementKind) -> usize;

    /// Number of elements adjacent to the element at `index` through `relation`.
    fn num_adjacent(&self, relation: Relation, index: usize) -> usize;

    /// The `which`th element adjacent to the element at `index` through `relation`.
    ///
    /// Adjacent elements are enumerated in a fixed order for a given mesh state.
    fn adjacent(&self, relation: Relation, index: usize, which: usize) -> Option<usize>;

    /// Iterate over the elements adjacent to the element at `index`.
    fn adjacent_iter(&self, relation: Relation, index: usize) -> AdjacentIter<'_, Self>
    where
        Self: Sized,
    {
        AdjacentIter {
            mesh: self,
            relation,
            index,
            which: 0,
        }
    }

    /// Push all neighbours of the element at `index` of the given `kind` to `stack`.
    ///
    /// Neighbours are found by walking two hops through [`ElementKind::neighbour_relations`].
    /// The element itself is never pushed, but a neighbour reachable in more than one way is
    /// pushed more than once.
    fn push_neighbours(&self, kind: ElementKind, index: usize, stack: &mut Vec<usize>) {
        let (first, second) = kind.neighbour_relations();
        for which_via in 0..self.num_adjacent(first, index) {
            let via = match self.adjacent(first, index, which_via) {
                Some(via) => via,
                None => continue,
            };
            for which in 0..self.num_adjacent(second, via) {
                if let Some(neigh) = self.adjacent(second, via, which) {
                    if neigh != index {
                        stack.push(neigh);
                    }
                }
            }
        }
    }
}

/// Iterator over the elements adjacent to a single element.
pub struct AdjacentIter<'a, M: ?Sized> {
    mesh: &'a M,
    relation: Relation,
    index: usize,
    which: usize,
}

impl<'a, M: ElementTopology + ?Sized> Iterator for AdjacentIter<'a, M> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        while self.which < self.mesh.num_adjacent(self.relation, self.index) {
            let which = self.which;
            self.which += 1;
            if let Some(adj) = self.mesh.adjacent(self.relation, self.index, which) {
                return Some(adj);
            }
        }
        None
    }
}

/// Element positions.
pub trait ElementGeometry<T: Real>: ElementTopology {
    /// Position of the vertex at the given index.
    fn vertex_position(&self, vertex: usize) -> [T; 3];

    /// Center of an element.
    ///
    /// This is the position of a vertex, the midpoint of an edge and the mean of the vertex
    /// positions of a face.
    fn element_center(&self, kind: ElementKind, index: usize) -> [T; 3] {
        match kind {
            ElementKind::Vertex => self.vertex_position(index),
            ElementKind::Edge => {
                let a = self.adjacent(Relation::VerticesOfEdge, index, 0);
                let b = self.adjacent(Relation::VerticesOfEdge, index, 1);
                match (a, b) {
                    (Some(a), Some(b)) => {
                        math::midpoint(self.vertex_position(a), self.vertex_position(b))
                    }
                    _ => [T::zero(); 3],
                }
            }
            ElementKind::Face => {
                let num_verts = self.num_adjacent(Relation::VerticesOfFace, index);
                math::mean(
                    (0..num_verts)
                        .filter_map(|which| self.adjacent(Relation::VerticesOfFace, index, which))
                        .map(|v| self.vertex_position(v)),
                )
            }
        }
    }
}

/// Element selection state.
pub trait ElementFlags {
    /// Returns `true` if the element is selected.
    fn is_selected(&self, kind: ElementKind, index: usize) -> bool;
}

/// Named per-vertex weights.
pub trait VertexWeights<T> {
    /// Index of the vertex group with the given name.
    fn vertex_group_index(&self, name: &str) -> Option<usize>;

    /// Weight of a vertex in a group. Vertices not assigned to the group have zero weight.
    fn vertex_weight(&self, vertex: usize, group: usize) -> T;
}

/// SortMesh is a marker trait to allow user code to be generic over meshes providing everything
/// needed to compute sort orders.
pub trait SortMesh<T: Real>: ElementGeometry<T> + ElementFlags + VertexWeights<T> {}
impl<M, T: Real> SortMesh<T> for M where M: ElementGeometry<T> + ElementFlags + VertexWeights<T> {}
