//!
//! Physical reordering of mesh storage according to computed sort orders.
//!

use crate::mesh::edit_mesh::EditMesh;
use crate::order::SortOrder;
use crate::utils::slice::{scatter_permutation, scatter_permutation_with_seen};
use crate::Real;

/// A mesh whose element storage can be reordered.
///
/// Each order maps old element indices to new ones. A `None` order leaves the storage of that
/// element kind untouched. Implementers may assume that every given order is a valid permutation
/// over the current number of elements of its kind.
pub trait Remap {
    fn remap(
        &mut self,
        verts: Option<&SortOrder>,
        edges: Option<&SortOrder>,
        faces: Option<&SortOrder>,
    );
}

impl<T: Real> Remap for EditMesh<T> {
    fn remap(
        &mut self,
        verts: Option<&SortOrder>,
        edges: Option<&SortOrder>,
        faces: Option<&SortOrder>,
    ) {
        if verts.is_none() && edges.is_none() && faces.is_none() {
            return;
        }

        if let Some(order) = verts {
            let order = order.as_slice();
            debug_assert_eq!(order.len(), self.vertex_positions.len());
            let mut seen = vec![false; order.len()];
            scatter_permutation_with_seen(order, &mut self.vertex_positions, &mut seen);
            for group in self.vertex_groups.iter_mut() {
                seen.iter_mut().for_each(|s| *s = false);
                scatter_permutation_with_seen(order, &mut group.weights, &mut seen);
            }
            scatter_permutation(order, &mut self.selection[0]);

            for edge in self.edges.iter_mut() {
                *edge = [order[edge[0]], order[edge[1]]];
            }
            for v in self.face_indices.iter_mut() {
                *v = order[*v];
            }
        }

        if let Some(order) = edges {
            let order = order.as_slice();
            debug_assert_eq!(order.len(), self.edges.len());
            scatter_permutation(order, &mut self.edges);
            scatter_permutation(order, &mut self.selection[1]);
            for e in self.face_edges.iter_mut() {
                *e = order[*e];
            }
        }

        if let Some(face_order) = faces {
            let order = face_order.as_slice();
            let num_faces = self.face_offsets.len() - 1;
            debug_assert_eq!(order.len(), num_faces);

            // Faces have variable size, so rebuild the loops in their new order.
            let new_to_old = face_order.inverse();
            let mut face_indices = Vec::with_capacity(self.face_indices.len());
            let mut face_edges = Vec::with_capacity(self.face_edges.len());
            let mut face_offsets = Vec::with_capacity(self.face_offsets.len());
            face_offsets.push(0);
            for &old in new_to_old.iter() {
                let range = self.face_offsets[old]..self.face_offsets[old + 1];
                face_indices.extend_from_slice(&self.face_indices[range.clone()]);
                face_edges.extend_from_slice(&self.face_edges[range]);
                face_offsets.push(face_indices.len());
            }
            self.face_indices = face_indices;
            self.face_edges = face_edges;
            self.face_offsets = face_offsets;
            scatter_permutation(order, &mut self.selection[2]);
        }

        self.rebuild_adjacency();
    }
}
