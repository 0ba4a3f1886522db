//!
//! Declarative sort configuration.
//!
//! Settings are plain values owned by the caller. Cloning settings deep-copies every buffer they
//! own, so duplicated settings never share cached reference points.
//!

use std::ops::BitOr;

use crate::error::{Error, Result};
use crate::mesh::{Axis, ElementKind};
use crate::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of reference points interleaved by a proximity sort.
pub const MAX_POINTS: usize = 10;

/// The criterion by which elements are ordered.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortPolicy<T> {
    /// Ascending coordinate of the element center along an axis.
    Axis(Axis),
    /// Ascending squared distance to each of the given points, interleaved round robin.
    ///
    /// Use [`SortPolicy::points`] to construct this variant with a checked number of points.
    Points(Vec<[T; 3]>),
    /// Ascending distance to the scene cursor.
    Cursor,
    /// Ascending distance to the centers of the selected elements.
    Selected {
        /// Look for selected elements on the unmodified original mesh first.
        use_original_mesh: bool,
    },
    /// Descending average weight in the named vertex group.
    VertexGroup(String),
    /// Greedy nearest match against the face centers of a target object's mesh.
    Target {
        /// Name of the target object. The host resolves it to a mesh.
        object: Option<String>,
        /// Visit target positions in a shuffled order.
        random_order: bool,
        seed: u64,
    },
    /// Seeded shuffle.
    Random { seed: u64 },
    /// Keep the current order.
    Identity,
}

impl<T: Real> SortPolicy<T> {
    /// Proximity to the given reference points.
    pub fn points(points: Vec<[T; 3]>) -> Result<Self> {
        check_num_points(points.len())?;
        Ok(SortPolicy::Points(points))
    }
}

/// Fails with [`Error::TooManyPoints`] if `given` exceeds [`MAX_POINTS`].
#[inline]
pub fn check_num_points(given: usize) -> Result<()> {
    if given > MAX_POINTS {
        return Err(Error::TooManyPoints {
            max: MAX_POINTS,
            given,
        });
    }
    Ok(())
}

impl<T> SortPolicy<T> {
    /// Returns `true` if the policy lacks the data it needs to produce any order.
    ///
    /// A vertex group policy needs a group name and a target policy needs a target object.
    pub fn is_incomplete(&self) -> bool {
        match self {
            SortPolicy::VertexGroup(name) => name.is_empty(),
            SortPolicy::Target { object, .. } => object.is_none(),
            _ => false,
        }
    }

    /// Returns `true` for policies that cache reference points in [`DSortSettings::points`].
    pub fn caches_points(&self) -> bool {
        matches!(self, SortPolicy::Cursor | SortPolicy::Selected { .. })
    }
}

impl<T> Default for SortPolicy<T> {
    fn default() -> Self {
        SortPolicy::Axis(Axis::X)
    }
}

/// A set of element kinds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortElements {
    pub vertices: bool,
    pub edges: bool,
    pub faces: bool,
}

impl SortElements {
    pub const NONE: SortElements = SortElements {
        vertices: false,
        edges: false,
        faces: false,
    };
    pub const VERTICES: SortElements = SortElements {
        vertices: true,
        ..Self::NONE
    };
    pub const EDGES: SortElements = SortElements {
        edges: true,
        ..Self::NONE
    };
    pub const FACES: SortElements = SortElements {
        faces: true,
        ..Self::NONE
    };
    pub const ALL: SortElements = SortElements {
        vertices: true,
        edges: true,
        faces: true,
    };

    #[inline]
    pub fn contains(self, kind: ElementKind) -> bool {
        match kind {
            ElementKind::Vertex => self.vertices,
            ElementKind::Edge => self.edges,
            ElementKind::Face => self.faces,
        }
    }

    #[inline]
    pub fn insert(&mut self, kind: ElementKind) {
        match kind {
            ElementKind::Vertex => self.vertices = true,
            ElementKind::Edge => self.edges = true,
            ElementKind::Face => self.faces = true,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Iterate over contained kinds from vertices to faces.
    pub fn iter(self) -> impl Iterator<Item = ElementKind> {
        ElementKind::ALL
            .iter()
            .copied()
            .filter(move |&kind| self.contains(kind))
    }
}

impl From<ElementKind> for SortElements {
    fn from(kind: ElementKind) -> Self {
        let mut elements = SortElements::NONE;
        elements.insert(kind);
        elements
    }
}

impl BitOr for SortElements {
    type Output = SortElements;

    fn bitor(self, rhs: SortElements) -> SortElements {
        SortElements {
            vertices: self.vertices || rhs.vertices,
            edges: self.edges || rhs.edges,
            faces: self.faces || rhs.faces,
        }
    }
}

/// Dynamic sort settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DSortSettings<T> {
    pub policy: SortPolicy<T>,
    /// Reverse every computed order.
    pub reverse: bool,
    /// Prefer elements adjacent to already placed elements over strict key order.
    pub connected_first: bool,
    /// Which element kinds to reorder.
    pub elements: SortElements,
    /// Reference points resolved for the cursor and selection policies.
    ///
    /// These are kept across automatic refreshes so the reference does not move while the mesh
    /// is being edited. They are cleared by [`DSortSettings::release`].
    pub points: Vec<[T; 3]>,
}

impl<T> Default for DSortSettings<T> {
    fn default() -> Self {
        DSortSettings {
            policy: SortPolicy::default(),
            reverse: false,
            connected_first: false,
            elements: SortElements::FACES,
            points: Vec::new(),
        }
    }
}

impl<T> DSortSettings<T> {
    /// Settings that sort the given elements by the given policy.
    pub fn new(policy: SortPolicy<T>, elements: SortElements) -> Self {
        DSortSettings {
            policy,
            elements,
            ..Default::default()
        }
    }

    /// Free cached reference points.
    pub fn release(&mut self) {
        self.points = Vec::new();
    }

    /// Returns `true` if these settings cannot produce an order.
    pub fn is_incomplete(&self) -> bool {
        self.policy.is_incomplete()
    }
}
