/*!
 * Resolution of reference points from the selection state of a mesh.
 */

use tracing::debug;

use crate::mesh::topology::*;
use crate::settings::MAX_POINTS;
use crate::Real;

/// Centers of up to [`MAX_POINTS`] selected elements of `mesh`.
///
/// Selected elements of `kind` are preferred. If none are selected, lower dimensional kinds are
/// tried in turn (faces, then edges, then vertices).
pub fn selected_centers<T, M>(mesh: &M, kind: ElementKind) -> Vec<[T; 3]>
where
    T: Real,
    M: ElementGeometry<T> + ElementFlags,
{
    let mut kind = Some(kind);
    while let Some(k) = kind {
        let centers: Vec<_> = (0..mesh.num_elements(k))
            .filter(|&i| mesh.is_selected(k, i))
            .take(MAX_POINTS)
            .map(|i| mesh.element_center(k, i))
            .collect();
        if !centers.is_empty() {
            debug!("Using {} selected {}", centers.len(), k.plural_name());
            return centers;
        }
        kind = k.lower();
    }
    Vec::new()
}

/// Reference points for a proximity to selection sort.
///
/// With `use_original_mesh` only the unmodified `original` mesh is searched. Otherwise `mesh` is
/// searched first and `original` second. If nothing is selected anywhere, the single reference
/// point is the origin.
pub fn selected_points<T, M>(
    mesh: &M,
    original: Option<&M>,
    kind: ElementKind,
    use_original_mesh: bool,
) -> Vec<[T; 3]>
where
    T: Real,
    M: ElementGeometry<T> + ElementFlags,
{
    let candidates = if use_original_mesh {
        [Some(original.unwrap_or(mesh)), None]
    } else {
        [Some(mesh), original]
    };

    candidates
        .iter()
        .flatten()
        .map(|m| selected_centers(*m, kind))
        .find(|centers| !centers.is_empty())
        .unwrap_or_else(|| {
            debug!("Nothing is selected, sorting by distance to the origin");
            vec![[T::zero(); 3]]
        })
}
