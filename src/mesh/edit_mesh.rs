//!
//! Editable mesh module. This module defines a mesh with explicit vertices, edges and polygonal
//! faces together with the reverse adjacency needed to walk from lower to higher dimensional
//! elements.
//!

use ahash::AHashMap as HashMap;

use crate::error::{Error, Result};
use crate::mesh::topology::*;
use crate::Real;

/// Compressed adjacency from each source element to a list of target elements.
///
/// The targets of source `i` are `indices[offsets[i]..offsets[i + 1]]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Adjacency {
    indices: Vec<usize>,
    offsets: Vec<usize>,
}

impl Adjacency {
    /// Build the reverse of the topology given by `targets_of`, which lists the targets of each of
    /// the `num_src` source elements. The result maps each of `num_dst` targets back to sources in
    /// increasing source order.
    fn reverse<'a>(
        num_src: usize,
        num_dst: usize,
        targets_of: impl Fn(usize) -> &'a [usize],
    ) -> Adjacency {
        let mut counts = vec![0; num_dst];
        for src in 0..num_src {
            for &dst in targets_of(src) {
                counts[dst] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(num_dst + 1);
        offsets.push(0);
        for count in counts.iter() {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        let mut fill = offsets.clone();
        let mut indices = vec![0; offsets[num_dst]];
        for src in 0..num_src {
            for &dst in targets_of(src) {
                indices[fill[dst]] = src;
                fill[dst] += 1;
            }
        }

        Adjacency { indices, offsets }
    }

    #[inline]
    fn len_at(&self, i: usize) -> usize {
        self.offsets
            .get(i + 1)
            .map_or(0, |&end| end - self.offsets[i])
    }

    #[inline]
    fn get(&self, i: usize, which: usize) -> Option<usize> {
        if which < self.len_at(i) {
            Some(self.indices[self.offsets[i] + which])
        } else {
            None
        }
    }
}

/// A named set of per-vertex weights.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexGroup<T> {
    pub name: String,
    /// One weight per vertex. Vertices outside of the group have zero weight.
    pub weights: Vec<T>,
}

/// Mesh with explicit vertices, edges and arbitrarily shaped faces.
///
/// Every consecutive pair of vertices around a face (including the closing pair) is connected by
/// an edge. Edges that don't bound any face ("loose" edges) are allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct EditMesh<T: Real> {
    /// Vertex positions.
    pub(crate) vertex_positions: Vec<[T; 3]>,
    /// Pairs of vertex indices for each edge.
    pub(crate) edges: Vec<[usize; 2]>,
    /// Face vertex loops, concatenated.
    pub(crate) face_indices: Vec<usize>,
    /// Offsets into `face_indices` for each face. The last element is always the length of
    /// `face_indices`.
    pub(crate) face_offsets: Vec<usize>,
    /// Edge between face vertex `k` and `k + 1` of each face, parallel to `face_indices`.
    pub(crate) face_edges: Vec<usize>,
    pub(crate) selection: [Vec<bool>; 3],
    pub(crate) vertex_groups: Vec<VertexGroup<T>>,
    pub(crate) vertex_edges: Adjacency,
    pub(crate) vertex_faces: Adjacency,
    pub(crate) edge_faces: Adjacency,
}

impl<T: Real> EditMesh<T> {
    /// Construct an `EditMesh` from an array of vertices and an array of sizes and indices.
    ///
    /// The `faces` array contains the indices into the vertex array for each face preceeded by the
    /// number of vertices in the corresponding face:
    /// ```verbatim
    ///     n i_1 i_2 ... i_n m j_1 j_2 ... j_m ...
    /// ```
    /// Edges are created in the order in which they are first encountered while walking around
    /// each face.
    ///
    /// # Examples
    /// ```
    /// use meshx_dsort::mesh::{EditMesh, NumEdges, NumFaces};
    /// let points = vec![
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [1.0, 1.0, 0.0]];
    /// let faces = vec![3, 0, 1, 2, // first triangle
    ///                  3, 1, 3, 2]; // second triangle
    ///
    /// let mesh = EditMesh::new(points, &faces).unwrap();
    ///
    /// assert_eq!(mesh.num_faces(), 2);
    /// assert_eq!(mesh.num_edges(), 5);
    /// assert_eq!(mesh.edges()[1], [1, 2]);
    /// ```
    pub fn new(verts: Vec<[T; 3]>, faces: &[usize]) -> Result<EditMesh<T>> {
        Self::from_parts(verts, &[], faces)
    }

    /// Construct a wire mesh consisting only of vertices and edges.
    pub fn from_edges(verts: Vec<[T; 3]>, edges: &[[usize; 2]]) -> Result<EditMesh<T>> {
        Self::from_parts(verts, edges, &[])
    }

    /// Construct a mesh from vertices, an explicit list of edges and faces in the format accepted
    /// by [`EditMesh::new`].
    ///
    /// The given edges keep their indices. Face boundary edges missing from `edges` are appended.
    pub fn from_parts(
        verts: Vec<[T; 3]>,
        edges: &[[usize; 2]],
        faces: &[usize],
    ) -> Result<EditMesh<T>> {
        let num_verts = verts.len();
        let mut edge_map: HashMap<[usize; 2], usize> = HashMap::default();
        let mut all_edges = Vec::with_capacity(edges.len());

        for (edge, &[a, b]) in edges.iter().enumerate() {
            if a >= num_verts || b >= num_verts || a == b {
                return Err(Error::InvalidEdge { edge });
            }
            edge_map.entry(edge_key(a, b)).or_insert(edge);
            all_edges.push([a, b]);
        }

        let mut face_indices = Vec::new();
        let mut face_offsets = vec![0];
        let mut face_edges = Vec::new();
        let mut i = 0;
        while i < faces.len() {
            let face = face_offsets.len() - 1;
            let n = faces[i];
            i += 1;
            if n < 3 || i + n > faces.len() {
                return Err(Error::InvalidFace { face });
            }
            let face_verts = &faces[i..i + n];
            if face_verts.iter().any(|&v| v >= num_verts) {
                return Err(Error::InvalidFace { face });
            }

            for k in 0..n {
                let a = face_verts[k];
                let b = face_verts[(k + 1) % n];
                if a == b {
                    return Err(Error::InvalidFace { face });
                }
                let next_edge = all_edges.len();
                let edge = *edge_map.entry(edge_key(a, b)).or_insert(next_edge);
                if edge == next_edge {
                    all_edges.push([a, b]);
                }
                face_indices.push(a);
                face_edges.push(edge);
            }

            face_offsets.push(face_indices.len());
            i += n;
        }

        let num_edges = all_edges.len();
        let num_faces = face_offsets.len() - 1;
        let mut mesh = EditMesh {
            vertex_positions: verts,
            edges: all_edges,
            face_indices,
            face_offsets,
            face_edges,
            selection: [
                vec![false; num_verts],
                vec![false; num_edges],
                vec![false; num_faces],
            ],
            vertex_groups: Vec::new(),
            vertex_edges: Adjacency::default(),
            vertex_faces: Adjacency::default(),
            edge_faces: Adjacency::default(),
        };
        mesh.rebuild_adjacency();
        Ok(mesh)
    }

    /// Recompute the adjacency from vertices and edges to higher dimensional elements.
    pub(crate) fn rebuild_adjacency(&mut self) {
        let num_verts = self.vertex_positions.len();
        let num_edges = self.edges.len();
        let num_faces = self.face_offsets.len() - 1;

        let EditMesh {
            edges,
            face_indices,
            face_offsets,
            face_edges,
            ..
        } = &*self;

        let vertex_edges = Adjacency::reverse(num_edges, num_verts, |e| &edges[e][..]);
        let vertex_faces = Adjacency::reverse(num_faces, num_verts, |f| {
            &face_indices[face_offsets[f]..face_offsets[f + 1]]
        });
        let edge_faces = Adjacency::reverse(num_faces, num_edges, |f| {
            &face_edges[face_offsets[f]..face_offsets[f + 1]]
        });

        self.vertex_edges = vertex_edges;
        self.vertex_faces = vertex_faces;
        self.edge_faces = edge_faces;
    }

    /// Vertex positions as a slice of triplets.
    #[inline]
    pub fn vertex_positions(&self) -> &[[T; 3]] {
        &self.vertex_positions
    }

    /// Vertex index pairs of every edge.
    #[inline]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// Vertex loop of the given face.
    #[inline]
    pub fn face(&self, face: usize) -> &[usize] {
        &self.face_indices[self.face_offsets[face]..self.face_offsets[face + 1]]
    }

    /// Iterate over the vertex loops of all faces.
    pub fn face_iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.face_offsets
            .windows(2)
            .map(move |w| &self.face_indices[w[0]..w[1]])
    }

    /// Mark an element as selected or deselected.
    ///
    /// Selecting a face does not select its edges or vertices.
    pub fn set_selected(&mut self, kind: ElementKind, index: usize, selected: bool) {
        self.selection[kind as usize][index] = selected;
    }

    /// Deselect all elements.
    pub fn clear_selection(&mut self) {
        for flags in self.selection.iter_mut() {
            flags.iter_mut().for_each(|s| *s = false);
        }
    }

    /// Add a vertex group with the given weights and return its index.
    ///
    /// Missing trailing weights are zero and extra weights are dropped. A group with an existing
    /// name replaces the old group.
    pub fn add_vertex_group(&mut self, name: impl Into<String>, mut weights: Vec<T>) -> usize {
        let name = name.into();
        weights.resize(self.vertex_positions.len(), T::zero());
        let group = VertexGroup { name, weights };
        match self.vertex_group_index(&group.name) {
            Some(idx) => {
                self.vertex_groups[idx] = group;
                idx
            }
            None => {
                self.vertex_groups.push(group);
                self.vertex_groups.len() - 1
            }
        }
    }

    /// All vertex groups of this mesh.
    pub fn vertex_groups(&self) -> &[VertexGroup<T>] {
        &self.vertex_groups
    }
}

#[inline]
fn edge_key(a: usize, b: usize) -> [usize; 2] {
    if a < b {
        [a, b]
    } else {
        [b, a]
    }
}

impl<T: Real> Default for EditMesh<T> {
    /// Produce an empty mesh. This is used as a null case for sorting algorithms.
    fn default() -> Self {
        EditMesh {
            vertex_positions: Vec::new(),
            edges: Vec::new(),
            face_indices: Vec::new(),
            face_offsets: vec![0],
            face_edges: Vec::new(),
            selection: [Vec::new(), Vec::new(), Vec::new()],
            vertex_groups: Vec::new(),
            vertex_edges: Adjacency::default(),
            vertex_faces: Adjacency::default(),
            edge_faces: Adjacency::default(),
        }
    }
}

impl<T: Real> NumVertices for EditMesh<T> {
    #[inline]
    fn num_vertices(&self) -> usize {
        self.vertex_positions.len()
    }
}

impl<T: Real> NumEdges for EditMesh<T> {
    #[inline]
    fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

impl<T: Real> NumFaces for EditMesh<T> {
    #[inline]
    fn num_faces(&self) -> usize {
        self.face_offsets.len() - 1
    }
}

impl<T: Real> ElementTopology for EditMesh<T> {
    #[inline]
    fn num_elements(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Vertex => self.num_vertices(),
            ElementKind::Edge => self.num_edges(),
            ElementKind::Face => self.num_faces(),
        }
    }

    fn num_adjacent(&self, relation: Relation, index: usize) -> usize {
        match relation {
            Relation::EdgesOfVertex => self.vertex_edges.len_at(index),
            Relation::FacesOfVertex => self.vertex_faces.len_at(index),
            Relation::VerticesOfEdge => 2,
            Relation::FacesOfEdge => self.edge_faces.len_at(index),
            Relation::VerticesOfFace | Relation::EdgesOfFace => {
                self.face_offsets[index + 1] - self.face_offsets[index]
            }
        }
    }

    fn adjacent(&self, relation: Relation, index: usize, which: usize) -> Option<usize> {
        match relation {
            Relation::EdgesOfVertex => self.vertex_edges.get(index, which),
            Relation::FacesOfVertex => self.vertex_faces.get(index, which),
            Relation::VerticesOfEdge => self.edges.get(index)?.get(which).copied(),
            Relation::FacesOfEdge => self.edge_faces.get(index, which),
            Relation::VerticesOfFace => {
                if which < self.num_adjacent(relation, index) {
                    Some(self.face_indices[self.face_offsets[index] + which])
                } else {
                    None
                }
            }
            Relation::EdgesOfFace => {
                if which < self.num_adjacent(relation, index) {
                    Some(self.face_edges[self.face_offsets[index] + which])
                } else {
                    None
                }
            }
        }
    }
}

impl<T: Real> ElementGeometry<T> for EditMesh<T> {
    #[inline]
    fn vertex_position(&self, vertex: usize) -> [T; 3] {
        self.vertex_positions[vertex]
    }
}

impl<T: Real> ElementFlags for EditMesh<T> {
    #[inline]
    fn is_selected(&self, kind: ElementKind, index: usize) -> bool {
        self.selection[kind as usize]
            .get(index)
            .copied()
            .unwrap_or(false)
    }
}

impl<T: Real> VertexWeights<T> for EditMesh<T> {
    fn vertex_group_index(&self, name: &str) -> Option<usize> {
        self.vertex_groups.iter().position(|g| g.name == name)
    }

    #[inline]
    fn vertex_weight(&self, vertex: usize, group: usize) -> T {
        self.vertex_groups
            .get(group)
            .and_then(|g| g.weights.get(vertex))
            .copied()
            .unwrap_or_else(T::zero)
    }
}
