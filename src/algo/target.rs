/*!
 * Greedy matching of mesh elements to the elements of a target mesh.
 *
 * Positions `0..N` of the resulting ranking are spread evenly over the `L` target centers:
 * position `p` belongs to bucket `p * L / N`. The first position of every bucket is primary,
 * the rest are extras (only present when `N > L`). All primary positions are matched before any
 * extra position, each one taking the closest element not matched yet.
 */

use tracing::warn;

use crate::algo::keys::{identity_ranking, random_ranking};
use crate::error::{Error, Result};
use crate::index::Index;
use crate::mesh::topology::*;
use crate::utils::math;
use crate::Real;

/// Centers of the target elements matched against elements of the given kind.
///
/// Only faces can be matched at the moment.
pub fn target_centers<T: Real, M: ElementGeometry<T>>(
    target: &M,
    kind: ElementKind,
) -> Result<Vec<[T; 3]>> {
    match kind {
        ElementKind::Face => Ok((0..target.num_elements(kind))
            .map(|f| target.element_center(kind, f))
            .collect()),
        _ => Err(Error::UnsupportedTargetKind(kind)),
    }
}

/// Target bucket of position `p` among `n` positions spread over `len` targets.
#[inline]
fn bucket(p: usize, n: usize, len: usize) -> usize {
    (p as u128 * len as u128 / n as u128) as usize
}

#[inline]
fn is_extra(p: usize, n: usize, len: usize) -> bool {
    p > 0 && bucket(p - 1, n, len) == bucket(p, n, len)
}

/// Rank the elements of `mesh` by greedily matching them to the given target centers.
///
/// When `random_order` is set, positions within each pass are visited in an order shuffled with
/// `seed`. With no target centers the elements keep their order.
pub fn target_ranking<T: Real, M: ElementGeometry<T>>(
    mesh: &M,
    kind: ElementKind,
    centers: &[[T; 3]],
    random_order: bool,
    seed: u64,
) -> Vec<usize> {
    let n = mesh.num_elements(kind);
    if centers.is_empty() {
        warn!(
            "Target mesh has no {}, keeping the current order",
            kind.plural_name()
        );
        return identity_ranking(n);
    }

    let len = centers.len();
    let elem_centers: Vec<_> = (0..n).map(|i| mesh.element_center(kind, i)).collect();
    let visit = if random_order {
        random_ranking(n, seed)
    } else {
        identity_ranking(n)
    };

    let mut used = vec![false; n];
    let mut sequence = vec![Index::INVALID; n];

    for extra in [false, true] {
        for &p in visit.iter() {
            if is_extra(p, n, len) != extra {
                continue;
            }
            let target = centers[bucket(p, n, len)];

            let mut closest: Option<(usize, T)> = None;
            for (i, &center) in elem_centers.iter().enumerate() {
                if used[i] {
                    continue;
                }
                let dist = math::distance_squared(center, target);
                match closest {
                    Some((_, best)) if dist < best => closest = Some((i, dist)),
                    None => closest = Some((i, dist)),
                    _ => {}
                }
            }

            // There are as many unmatched elements as unvisited positions.
            if let Some((i, _)) = closest {
                used[i] = true;
                sequence[p] = Index::new(i);
            }
        }
    }

    sequence.into_iter().filter_map(Index::into_option).collect()
}
