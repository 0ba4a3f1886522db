//! Dynamic sorting of mesh elements.
//!
//! # Overview
//!
//! This library computes new storage orders for the vertices, edges and faces of a mesh and
//! applies them. An order can follow a coordinate axis, proximity to one or more reference
//! points, vertex group weights, a target mesh, or a seeded shuffle. Optionally the order prefers
//! elements that are topologically adjacent to the ones already placed ("connected first"), so
//! neighbouring elements stay close together in the output.
//!
//! The mesh itself is accessed through the traits in [`mesh::topology`], so any half-edge or
//! indexed mesh can be sorted. [`mesh::EditMesh`] is a ready-made implementation.
//!
//! ```
//! use meshx_dsort::mesh::{Axis, EditMesh, ElementKind};
//! use meshx_dsort::settings::{DSortSettings, SortElements, SortPolicy};
//! use meshx_dsort::state::{SortContext, SortModifier};
//!
//! let verts = vec![[3.0, 0.0, 0.0], [1.0, 0.0, 0.0], [4.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
//! let mut mesh = EditMesh::from_edges(verts, &[[1, 3], [3, 0], [0, 2]]).unwrap();
//!
//! let settings: DSortSettings<f64> = DSortSettings {
//!     policy: SortPolicy::Axis(Axis::X),
//!     elements: SortElements::VERTICES,
//!     ..Default::default()
//! };
//! let mut modifier = SortModifier::with_settings(settings);
//! modifier.apply(&mut mesh, &SortContext::new()).unwrap();
//!
//! let order = modifier.state.order(ElementKind::Vertex).unwrap();
//! assert_eq!(order.as_slice(), &[2, 0, 3, 1]);
//! assert_eq!(mesh.vertex_positions()[0], [1.0, 0.0, 0.0]);
//! ```

pub mod index;

pub mod algo;
pub mod error;
pub mod mesh;
pub mod order;
pub mod settings;
pub mod state;

pub mod utils {
    pub mod math;
    pub mod slice;
}

// public re-exports
pub use self::error::{Error, Result};
pub use self::index::Index;
pub use self::order::SortOrder;

/// Plain old data trait. Types that implement this trait contain no references and can be copied
/// with `memcpy`. The additional `Any` trait lets us inspect the type more easily.
pub trait Pod: 'static + Copy + Sized + Send + Sync + std::any::Any {}
impl<T> Pod for T where T: 'static + Copy + Sized + Send + Sync + std::any::Any {}

pub trait Real:
    math::ComplexField + num_traits::Float + ::std::fmt::Debug + std::iter::Sum + Pod
{
}
impl<T> Real for T where
    T: math::ComplexField + num_traits::Float + ::std::fmt::Debug + std::iter::Sum + Pod
{
}
