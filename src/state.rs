//!
//! The sort modifier: cached orders and the state machine deciding when they are recomputed.
//!
//! A modifier starts out pending. The first [`SortModifier::apply`] computes an order for every
//! requested element kind and caches it. Later calls reuse the cached orders as long as the mesh
//! keeps its element counts. When a count changes the cache is dropped, and it is either
//! recomputed right away (with [`SortState::auto_refresh`]) or left empty until a new sort is
//! requested.
//!

use tracing::{debug, info, trace};

use crate::algo::{self, Criterion};
use crate::error::{Error, Result};
use crate::mesh::{ElementKind, ElementTopology, Remap, SortMesh};
use crate::order::SortOrder;
use crate::settings::{check_num_points, DSortSettings, SortElements, SortPolicy};
use crate::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cached sort orders of a modifier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortState {
    /// One order per element kind, indexed by `ElementKind as usize`.
    orders: [Option<SortOrder>; 3],
    is_sorted: bool,
    initiate_sort: bool,
    /// Recompute stale orders automatically instead of waiting for a new sort request.
    pub auto_refresh: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    num_sorts: usize,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            orders: [None, None, None],
            is_sorted: false,
            initiate_sort: false,
            auto_refresh: false,
            num_sorts: 0,
        }
    }
}

impl SortState {
    /// A state waiting for its first sort.
    pub fn pending() -> Self {
        SortState {
            initiate_sort: true,
            ..Default::default()
        }
    }

    /// The cached order for the given kind.
    #[inline]
    pub fn order(&self, kind: ElementKind) -> Option<&SortOrder> {
        self.orders[kind as usize].as_ref()
    }

    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.is_sorted
    }

    /// Returns `true` if orders will be computed on the next apply.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.initiate_sort
    }

    /// Kinds that currently hold an order.
    pub fn sorted_elements(&self) -> SortElements {
        let mut elements = SortElements::NONE;
        for &kind in ElementKind::ALL.iter() {
            if self.order(kind).is_some() {
                elements.insert(kind);
            }
        }
        elements
    }

    /// Number of times orders were computed.
    #[inline]
    pub fn num_sorts(&self) -> usize {
        self.num_sorts
    }

    fn clear_orders(&mut self) {
        self.orders = [None, None, None];
    }

    /// Returns `true` if any cached order no longer matches the number of elements of its kind.
    fn is_stale<M: ElementTopology>(&self, mesh: &M) -> bool {
        ElementKind::ALL.iter().any(|&kind| {
            self.order(kind)
                .is_some_and(|order| order.len() != mesh.num_elements(kind))
        })
    }
}

/// Data owned by the host application that some policies need.
pub struct SortContext<'a, T, M> {
    /// Position of the scene cursor in mesh space.
    pub cursor: [T; 3],
    /// The mesh before any modification, searched for selected elements.
    pub original: Option<&'a M>,
    /// The mesh of the target object resolved by the host.
    pub target: Option<&'a M>,
}

impl<'a, T: Real, M> SortContext<'a, T, M> {
    /// An empty context with the cursor at the origin.
    pub fn new() -> Self {
        SortContext {
            cursor: [T::zero(); 3],
            original: None,
            target: None,
        }
    }

    pub fn with_cursor(mut self, cursor: [T; 3]) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_original(mut self, original: &'a M) -> Self {
        self.original = Some(original);
        self
    }

    pub fn with_target(mut self, target: &'a M) -> Self {
        self.target = Some(target);
        self
    }
}

impl<'a, T: Real, M> Default for SortContext<'a, T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Copy, M> Clone for SortContext<'a, T, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: Copy, M> Copy for SortContext<'a, T, M> {}

/// What an apply call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ApplyStatus {
    /// No orders are cached and none were requested. The mesh is untouched.
    Unsorted,
    /// The settings are incomplete. The mesh is untouched.
    Disabled,
    /// The mesh changed its element counts, so the cached orders were dropped. A new sort must be
    /// requested. The mesh is untouched.
    NeedsResort,
    /// The cached orders were applied.
    Unchanged,
    /// New orders were computed and applied.
    Resorted,
}

/// The result of [`SortModifier::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApplyOutcome {
    pub status: ApplyStatus,
    /// Kinds holding an order after the call.
    pub sorted: SortElements,
}

/// Sort settings together with the orders they produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortModifier<T> {
    pub settings: DSortSettings<T>,
    pub state: SortState,
}

impl<T: Real> Default for SortModifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> SortModifier<T> {
    /// A modifier with default settings that sorts on its first apply.
    pub fn new() -> Self {
        Self::with_settings(DSortSettings::default())
    }

    /// A modifier with the given settings that sorts on its first apply.
    pub fn with_settings(settings: DSortSettings<T>) -> Self {
        SortModifier {
            settings,
            state: SortState::pending(),
        }
    }

    /// Returns `true` if applying this modifier has no effect.
    pub fn is_disabled(&self) -> bool {
        self.settings.is_incomplete() || (!self.state.is_sorted && !self.state.initiate_sort)
    }

    /// Request new orders on the next apply.
    ///
    /// Fails if orders are cached. Those have to be freed with [`SortModifier::free`] first.
    pub fn request_sort(&mut self) -> Result<()> {
        if self.state.is_sorted {
            return Err(Error::AlreadySorted);
        }
        self.state.initiate_sort = true;
        Ok(())
    }

    /// Drop all cached orders and reference points.
    pub fn free(&mut self) {
        self.state.clear_orders();
        self.state.is_sorted = false;
        self.state.initiate_sort = false;
        self.settings.release();
    }

    /// A copy of this modifier with the same settings that sorts anew on its first apply.
    pub fn duplicate(&self) -> Self {
        SortModifier {
            settings: self.settings.clone(),
            state: SortState {
                auto_refresh: self.state.auto_refresh,
                ..SortState::pending()
            },
        }
    }

    /// Reorder the elements of `mesh`, computing new orders if needed.
    ///
    /// `mesh` is expected in the state it enters the modifier, so applying twice to the same
    /// input produces the same output.
    pub fn apply<M>(&mut self, mesh: &mut M, ctx: &SortContext<'_, T, M>) -> Result<ApplyOutcome>
    where
        M: SortMesh<T> + Remap,
    {
        if self.settings.is_incomplete() {
            return Ok(self.outcome(ApplyStatus::Disabled));
        }

        let state = &mut self.state;
        if !state.initiate_sort {
            if !state.is_sorted {
                return Ok(self.outcome(ApplyStatus::Unsorted));
            }
            if state.is_stale(&*mesh) {
                info!("Element counts changed, dropping cached sort orders");
                state.clear_orders();
                state.is_sorted = false;
                if !state.auto_refresh {
                    return Ok(self.outcome(ApplyStatus::NeedsResort));
                }
                state.initiate_sort = true;
            }
        }

        let mut status = ApplyStatus::Unchanged;
        if self.state.initiate_sort {
            if self.settings.elements.is_empty() {
                return Ok(self.outcome(ApplyStatus::Unsorted));
            }
            let orders = compute_orders(&mut self.settings, &*mesh, ctx)?;
            self.state.orders = orders;
            self.state.is_sorted = true;
            self.state.initiate_sort = false;
            self.state.num_sorts += 1;
            status = ApplyStatus::Resorted;
        }

        let [verts, edges, faces] = &self.state.orders;
        mesh.remap(verts.as_ref(), edges.as_ref(), faces.as_ref());
        Ok(self.outcome(status))
    }

    fn outcome(&self, status: ApplyStatus) -> ApplyOutcome {
        ApplyOutcome {
            status,
            sorted: self.state.sorted_elements(),
        }
    }
}

/// Compute an order for every kind in `settings.elements`.
///
/// The lowest requested kind is sorted directly. Higher kinds derive their order from it.
fn compute_orders<T, M>(
    settings: &mut DSortSettings<T>,
    mesh: &M,
    ctx: &SortContext<'_, T, M>,
) -> Result<[Option<SortOrder>; 3]>
where
    T: Real,
    M: SortMesh<T>,
{
    let mut orders = [None, None, None];
    let first = match settings.elements.iter().next() {
        Some(kind) => kind,
        None => return Ok(orders),
    };

    if settings.policy.caches_points() && settings.points.is_empty() {
        settings.points = match settings.policy {
            SortPolicy::Selected { use_original_mesh } => {
                algo::select::selected_points(mesh, ctx.original, first, use_original_mesh)
            }
            _ => vec![ctx.cursor],
        };
    }

    let target_centers = match &settings.policy {
        SortPolicy::Target {
            object: Some(name), ..
        } => {
            if first != ElementKind::Face {
                return Err(Error::UnsupportedTargetKind(first));
            }
            let target = ctx
                .target
                .ok_or_else(|| Error::MissingTarget(name.clone()))?;
            algo::target_centers(target, first)?
        }
        _ => Vec::new(),
    };

    let criterion = match &settings.policy {
        SortPolicy::Axis(axis) => Criterion::Axis(*axis),
        SortPolicy::Points(points) => {
            check_num_points(points.len())?;
            Criterion::Points(points)
        }
        SortPolicy::Cursor | SortPolicy::Selected { .. } => {
            check_num_points(settings.points.len())?;
            Criterion::Points(&settings.points)
        }
        SortPolicy::VertexGroup(name) => Criterion::VertexGroup(name),
        SortPolicy::Target {
            random_order, seed, ..
        } => Criterion::Target {
            centers: &target_centers,
            random_order: *random_order,
            seed: *seed,
        },
        SortPolicy::Random { seed } => Criterion::Random { seed: *seed },
        SortPolicy::Identity => Criterion::Identity,
    };

    for kind in settings.elements.iter() {
        let source = ElementKind::ALL
            .iter()
            .take_while(|&&k| k != kind)
            .find_map(|&k| orders[k as usize].as_ref().map(|order| (k, order)));
        let order = match source {
            Some((from, from_order)) => {
                trace!(
                    "Deriving the order of {} from {}",
                    kind.plural_name(),
                    from.plural_name()
                );
                algo::derive_order(mesh, from, from_order, kind)
            }
            None => algo::sort_elements(mesh, kind, criterion, settings.connected_first),
        };
        orders[kind as usize] = Some(order);
    }

    if settings.reverse {
        for order in orders.iter_mut().flatten() {
            order.reverse();
        }
    }

    debug!("Sorted {:?}", settings.elements);
    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::*;
    use crate::mesh::{Axis, EditMesh, ElementGeometry, NumVertices};
    use crate::order::is_permutation;
    use crate::settings::MAX_POINTS;

    fn axis_modifier(elements: SortElements) -> SortModifier<f64> {
        SortModifier::with_settings(DSortSettings::new(SortPolicy::Axis(Axis::X), elements))
    }

    #[test]
    fn four_vertices_scenario() {
        let input = four_vertices();

        let mut modifier = axis_modifier(SortElements::VERTICES);
        let mut mesh = input.clone();
        let outcome = modifier.apply(&mut mesh, &SortContext::new()).unwrap();
        assert_eq!(outcome.status, ApplyStatus::Resorted);
        assert_eq!(outcome.sorted, SortElements::VERTICES);
        let order = modifier.state.order(ElementKind::Vertex).unwrap();
        assert_eq!(order.as_slice(), &[2, 0, 3, 1]);
        let xs: Vec<f64> = mesh.vertex_positions().iter().map(|p| p[0]).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);

        modifier.settings.reverse = true;
        modifier.free();
        modifier.request_sort().unwrap();
        let mut mesh = input;
        modifier.apply(&mut mesh, &SortContext::new()).unwrap();
        let order = modifier.state.order(ElementKind::Vertex).unwrap();
        assert_eq!(order.as_slice(), &[1, 3, 0, 2]);
        let xs: Vec<f64> = mesh.vertex_positions().iter().map(|p| p[0]).collect();
        assert_eq!(xs, vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn idempotent_apply() {
        let input = grid_mesh();
        let mut modifier = SortModifier::with_settings(DSortSettings::new(
            SortPolicy::Random { seed: 3 },
            SortElements::ALL,
        ));

        let mut first = input.clone();
        let outcome = modifier.apply(&mut first, &SortContext::new()).unwrap();
        assert_eq!(outcome.status, ApplyStatus::Resorted);
        assert_eq!(outcome.sorted, SortElements::ALL);
        let cached = modifier.state.clone();

        let mut second = input.clone();
        let outcome = modifier.apply(&mut second, &SortContext::new()).unwrap();
        assert_eq!(outcome.status, ApplyStatus::Unchanged);
        assert_eq!(modifier.state.num_sorts(), 1);
        assert_eq!(modifier.state, cached);
        assert_eq!(first, second);
        assert_ne!(first, input);
    }

    #[test]
    fn derived_orders() {
        let mut mesh = grid_mesh();
        let input = mesh.clone();
        let mut modifier = axis_modifier(SortElements::ALL);
        modifier.apply(&mut mesh, &SortContext::new()).unwrap();

        let verts = modifier.state.order(ElementKind::Vertex).unwrap();
        let expected =
            algo::sort_elements(&input, ElementKind::Vertex, Criterion::Axis(Axis::X), false);
        assert_eq!(verts, &expected);
        for &kind in [ElementKind::Edge, ElementKind::Face].iter() {
            let order = modifier.state.order(kind).unwrap();
            assert_eq!(
                order,
                &algo::derive_order(&input, ElementKind::Vertex, verts, kind)
            );
            assert!(is_permutation(order.as_slice()));
        }

        // Edges and faces derive from edges when vertices are not sorted.
        let mut mesh = input.clone();
        let mut modifier = axis_modifier(SortElements::EDGES | SortElements::FACES);
        modifier.apply(&mut mesh, &SortContext::new()).unwrap();
        let edges = modifier.state.order(ElementKind::Edge).unwrap();
        assert_eq!(
            modifier.state.order(ElementKind::Face).unwrap(),
            &algo::derive_order(&input, ElementKind::Edge, edges, ElementKind::Face)
        );
        assert!(modifier.state.order(ElementKind::Vertex).is_none());
    }

    #[test]
    fn stale_orders() {
        let mut modifier = axis_modifier(SortElements::VERTICES);
        let mut mesh = four_vertices();
        modifier.apply(&mut mesh, &SortContext::new()).unwrap();
        assert!(modifier.state.is_sorted());

        // A mesh with a different number of vertices invalidates the cache.
        let mut other = grid_mesh();
        let outcome = modifier.apply(&mut other, &SortContext::new()).unwrap();
        assert_eq!(outcome.status, ApplyStatus::NeedsResort);
        assert_eq!(outcome.sorted, SortElements::NONE);
        assert!(!modifier.state.is_sorted());
        assert_eq!(other, grid_mesh());
        assert!(modifier.is_disabled());

        let outcome = modifier.apply(&mut other, &SortContext::new()).unwrap();
        assert_eq!(outcome.status, ApplyStatus::Unsorted);

        modifier.request_sort().unwrap();
        let outcome = modifier.apply(&mut other, &SortContext::new()).unwrap();
        assert_eq!(outcome.status, ApplyStatus::Resorted);
        assert_eq!(
            modifier.state.order(ElementKind::Vertex).unwrap().len(),
            other.num_vertices()
        );
    }

    #[test]
    fn auto_refresh() {
        let mut modifier = axis_modifier(SortElements::FACES);
        modifier.state.auto_refresh = true;
        let mut mesh = grid_mesh();
        modifier.apply(&mut mesh, &SortContext::new()).unwrap();

        let mut strip = strip_mesh(4);
        let outcome = modifier.apply(&mut strip, &SortContext::new()).unwrap();
        assert_eq!(outcome.status, ApplyStatus::Resorted);
        assert_eq!(outcome.sorted, SortElements::FACES);
        assert_eq!(modifier.state.num_sorts(), 2);
        assert_eq!(modifier.state.order(ElementKind::Face).unwrap().len(), 4);
    }

    #[test]
    fn sort_requests() {
        let mut modifier = axis_modifier(SortElements::FACES);
        assert!(modifier.state.is_pending());
        assert!(!modifier.is_disabled());

        let mut mesh = grid_mesh();
        modifier.apply(&mut mesh, &SortContext::new()).unwrap();
        assert_eq!(modifier.request_sort(), Err(Error::AlreadySorted));

        modifier.free();
        assert!(modifier.is_disabled());
        assert_eq!(modifier.state.sorted_elements(), SortElements::NONE);
        assert!(modifier.request_sort().is_ok());
        assert!(modifier.state.is_pending());
    }

    #[test]
    fn nothing_to_sort() {
        let mut modifier = axis_modifier(SortElements::NONE);
        let mut mesh = grid_mesh();
        let outcome = modifier.apply(&mut mesh, &SortContext::new()).unwrap();
        assert_eq!(outcome.status, ApplyStatus::Unsorted);
        assert!(modifier.state.is_pending());
        assert_eq!(mesh, grid_mesh());
    }

    #[test]
    fn incomplete_settings() {
        let mut modifier = SortModifier::with_settings(DSortSettings::new(
            SortPolicy::VertexGroup(String::new()),
            SortElements::VERTICES,
        ));
        assert!(modifier.is_disabled());
        let mut mesh = grid_mesh();
        let outcome = modifier.apply(&mut mesh, &SortContext::new()).unwrap();
        assert_eq!(outcome.status, ApplyStatus::Disabled);
        assert_eq!(mesh, grid_mesh());

        modifier.settings.policy = SortPolicy::Target {
            object: None,
            random_order: false,
            seed: 0,
        };
        assert!(modifier.is_disabled());
    }

    #[test]
    fn cursor_points_are_cached() {
        let input: EditMesh<f64> = crate::mesh::builder::PathBuilder::straight(5).build().unwrap();
        let mut modifier = SortModifier::with_settings(DSortSettings::new(
            SortPolicy::Cursor,
            SortElements::VERTICES,
        ));
        modifier.state.auto_refresh = true;

        let ctx = SortContext::new().with_cursor([4.0, 0.0, 0.0]);
        let mut mesh = input.clone();
        modifier.apply(&mut mesh, &ctx).unwrap();
        assert_eq!(modifier.settings.points, vec![[4.0, 0.0, 0.0]]);
        assert_eq!(
            modifier.state.order(ElementKind::Vertex).unwrap().inverse(),
            vec![4, 3, 2, 1, 0]
        );

        // A refresh keeps the reference point even though the cursor moved.
        let moved = SortContext::new().with_cursor([0.0, 0.0, 0.0]);
        let mut longer: EditMesh<f64> = crate::mesh::builder::PathBuilder::straight(6).build().unwrap();
        modifier.apply(&mut longer, &moved).unwrap();
        assert_eq!(
            modifier.state.order(ElementKind::Vertex).unwrap().inverse(),
            vec![4, 3, 5, 2, 1, 0]
        );

        // Freeing releases the point.
        modifier.free();
        assert!(modifier.settings.points.is_empty());
        modifier.request_sort().unwrap();
        let mut mesh = input;
        modifier.apply(&mut mesh, &moved).unwrap();
        assert_eq!(
            modifier.state.order(ElementKind::Vertex).unwrap(),
            &SortOrder::identity(5)
        );
    }

    #[test]
    fn selected_points_from_original() {
        let mut original = grid_mesh();
        original.set_selected(ElementKind::Face, 5, true);
        let mut modifier = SortModifier::with_settings(DSortSettings::new(
            SortPolicy::Selected {
                use_original_mesh: false,
            },
            SortElements::FACES,
        ));
        let mut mesh = grid_mesh();
        let ctx = SortContext::new().with_original(&original);
        modifier.apply(&mut mesh, &ctx).unwrap();
        assert_eq!(
            modifier.settings.points,
            vec![original.element_center(ElementKind::Face, 5)]
        );
        let faces = modifier.state.order(ElementKind::Face).unwrap();
        assert_eq!(faces.new_index(5), 0);
    }

    #[test]
    fn target_object() {
        let mut modifier = SortModifier::with_settings(DSortSettings::new(
            SortPolicy::Target {
                object: Some("Target".to_string()),
                random_order: false,
                seed: 0,
            },
            SortElements::FACES,
        ));
        let mut mesh = strip_mesh(4);
        assert_eq!(
            modifier.apply(&mut mesh, &SortContext::new()),
            Err(Error::MissingTarget("Target".to_string()))
        );
        assert!(modifier.state.is_pending());

        let mut target = strip_mesh(2);
        target.remap(None, None, Some(&SortOrder::from_vec(vec![1, 0]).unwrap()));
        let ctx = SortContext::new().with_target(&target);
        let outcome = modifier.apply(&mut mesh, &ctx).unwrap();
        assert_eq!(outcome.status, ApplyStatus::Resorted);
        assert_eq!(
            modifier.state.order(ElementKind::Face).unwrap().inverse(),
            vec![2, 3, 0, 1]
        );

        let mut modifier = modifier.duplicate();
        modifier.settings.elements = SortElements::VERTICES | SortElements::FACES;
        let mut mesh = strip_mesh(4);
        assert_eq!(
            modifier.apply(&mut mesh, &ctx),
            Err(Error::UnsupportedTargetKind(ElementKind::Vertex))
        );
    }

    #[test]
    fn duplicate() {
        let mut modifier = SortModifier::with_settings(DSortSettings::new(
            SortPolicy::Cursor,
            SortElements::ALL,
        ));
        modifier.state.auto_refresh = true;
        let mut mesh = grid_mesh();
        modifier
            .apply(&mut mesh, &SortContext::new().with_cursor([1.0, 1.0, 0.0]))
            .unwrap();

        let copy = modifier.duplicate();
        assert_eq!(copy.settings, modifier.settings);
        assert_eq!(copy.settings.points, vec![[1.0, 1.0, 0.0]]);
        assert!(copy.state.is_pending());
        assert!(!copy.state.is_sorted());
        assert!(copy.state.auto_refresh);
        assert_eq!(copy.state.sorted_elements(), SortElements::NONE);
    }

    #[test]
    fn reversed_derived_orders() {
        let input = grid_mesh();
        let mut mesh = input.clone();
        let mut modifier = axis_modifier(SortElements::ALL);
        modifier.settings.reverse = true;
        modifier.apply(&mut mesh, &SortContext::new()).unwrap();

        // Higher kinds derive from the vertex order before it is reversed.
        let verts =
            algo::sort_elements(&input, ElementKind::Vertex, Criterion::Axis(Axis::X), false);
        assert_eq!(
            modifier.state.order(ElementKind::Vertex).unwrap(),
            &verts.clone().reversed()
        );
        for &kind in [ElementKind::Edge, ElementKind::Face].iter() {
            let expected = algo::derive_order(&input, ElementKind::Vertex, &verts, kind).reversed();
            assert_eq!(modifier.state.order(kind).unwrap(), &expected);
        }
    }

    #[test]
    fn too_many_points() {
        let points: Vec<[f64; 3]> = (0..MAX_POINTS + 2).map(|i| [i as f64, 0.0, 0.0]).collect();
        let expected: Result<ApplyOutcome> = Err(Error::TooManyPoints {
            max: MAX_POINTS,
            given: MAX_POINTS + 2,
        });

        // Points given directly to the policy.
        let mut modifier = SortModifier::with_settings(DSortSettings::new(
            SortPolicy::Points(points.clone()),
            SortElements::FACES,
        ));
        let mut mesh = grid_mesh();
        assert_eq!(modifier.apply(&mut mesh, &SortContext::new()), expected);
        assert!(modifier.state.is_pending());
        assert_eq!(mesh, grid_mesh());

        // Cached reference points.
        let mut modifier = SortModifier::with_settings(DSortSettings::new(
            SortPolicy::Cursor,
            SortElements::FACES,
        ));
        modifier.settings.points = points;
        assert_eq!(modifier.apply(&mut mesh, &SortContext::new()), expected);
        assert_eq!(modifier.state.sorted_elements(), SortElements::NONE);
        assert_eq!(mesh, grid_mesh());
    }
}
