/*!
 * Sort keys for mesh elements.
 *
 * Every routine in this module produces either one scalar key per element or a ranking: the list
 * of element indices in the order they should be placed. Rankings are what
 * [`construct`](crate::algo::construct) consumes.
 */

use std::cmp::Ordering;

use rand::prelude::*;

use crate::mesh::topology::*;
use crate::utils::math;
use crate::Real;

/// Total order on keys. NaN keys compare greater than every number and equal to each other.
#[inline]
fn compare_keys<T: Real>(a: T, b: T) -> Ordering {
    match (num_traits::Float::is_nan(a), num_traits::Float::is_nan(b)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// List element indices by ascending key.
///
/// The sort is stable, so elements with equal keys keep their iteration order.
pub fn rank_by_key<T: Real>(keys: &[T]) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..keys.len()).collect();
    ranking.sort_by(|&a, &b| compare_keys(keys[a], keys[b]));
    ranking
}

/// Coordinate of every element center along the given axis.
pub fn axis_keys<T: Real, M: ElementGeometry<T>>(mesh: &M, kind: ElementKind, axis: Axis) -> Vec<T> {
    let c = axis.component();
    (0..mesh.num_elements(kind))
        .map(|i| mesh.element_center(kind, i)[c])
        .collect()
}

/// Squared distance from every element center to `point`.
pub fn distance_keys<T: Real, M: ElementGeometry<T>>(
    mesh: &M,
    kind: ElementKind,
    point: [T; 3],
) -> Vec<T> {
    (0..mesh.num_elements(kind))
        .map(|i| math::distance_squared(mesh.element_center(kind, i), point))
        .collect()
}

/// Negated vertex group weight of every element.
///
/// Edges and faces take the mean weight of their vertices. When `group` is `None` every weight
/// reads as zero.
pub fn weight_keys<T, M>(mesh: &M, kind: ElementKind, group: Option<usize>) -> Vec<T>
where
    T: Real,
    M: ElementTopology + VertexWeights<T>,
{
    let n = mesh.num_elements(kind);
    let group = match group {
        Some(group) => group,
        None => return vec![T::zero(); n],
    };

    match Relation::between(kind, ElementKind::Vertex) {
        None => (0..n).map(|v| -mesh.vertex_weight(v, group)).collect(),
        Some(verts_of) => (0..n)
            .map(|i| {
                let weights = (0..mesh.num_adjacent(verts_of, i))
                    .filter_map(|which| mesh.adjacent(verts_of, i, which))
                    .map(|v| mesh.vertex_weight(v, group));
                -math::mean_scalar(weights)
            })
            .collect(),
    }
}

/// Elements in iteration order.
#[inline]
pub fn identity_ranking(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Elements in a shuffled order that only depends on `n` and `seed`.
pub fn random_ranking(n: usize, seed: u64) -> Vec<usize> {
    let mut ranking = identity_ranking(n);
    let mut rng = StdRng::seed_from_u64(seed);
    ranking.shuffle(&mut rng);
    ranking
}
