/*!
 * Orders derived from the order of another element kind.
 */

use tracing::debug;

use crate::index::Index;
use crate::mesh::topology::*;
use crate::order::SortOrder;

/// Derive an order for `to` elements from an order of `from` elements.
///
/// `from` elements are visited in their new order. Each visited element places its adjacent `to`
/// elements that are not placed yet, in adjacency order. `to` elements that are not adjacent to any
/// `from` element are placed last in index order.
///
/// `from` and `to` must be different kinds.
pub fn derive_order<M: ElementTopology>(
    mesh: &M,
    from: ElementKind,
    from_order: &SortOrder,
    to: ElementKind,
) -> SortOrder {
    let num_to = mesh.num_elements(to);
    let relation = match Relation::between(from, to) {
        Some(relation) => relation,
        None => return from_order.clone(),
    };
    debug_assert_eq!(from_order.len(), mesh.num_elements(from));

    let mut slots = vec![Index::INVALID; num_to];
    let mut rank = 0;
    for from_elem in from_order.inverse() {
        for which in 0..mesh.num_adjacent(relation, from_elem) {
            if let Some(to_elem) = mesh.adjacent(relation, from_elem, which) {
                if !slots[to_elem].is_valid() {
                    slots[to_elem] = Index::new(rank);
                    rank += 1;
                }
            }
        }
    }

    if rank < num_to {
        debug!(
            "{} of {} {} are not adjacent to any of the {}",
            num_to - rank,
            num_to,
            to.plural_name(),
            from.plural_name()
        );
        for slot in slots.iter_mut().filter(|s| !s.is_valid()) {
            *slot = Index::new(rank);
            rank += 1;
        }
    }

    SortOrder::from_slots(slots)
}
