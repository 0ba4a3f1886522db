//!
//! Error types produced while building meshes and configuring or applying sorts.
//!
//! Nothing on the steady state sorting path fails: stale caches, incomplete settings and
//! degenerate meshes are reported through [`ApplyStatus`](crate::state::ApplyStatus). The
//! variants here cover misuse of the public API and broken host contracts.
//!

use crate::mesh::ElementKind;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// More reference points were given than a proximity sort can interleave.
    TooManyPoints {
        /// Maximum number of supported points.
        max: usize,
        /// Number of points given.
        given: usize,
    },
    /// A sort was requested while an order is still cached. The cached order must be freed first.
    AlreadySorted,
    /// The target proximity policy names an object for which the host supplied no mesh.
    MissingTarget(String),
    /// Target proximity can only compute orders directly for the given kind.
    UnsupportedTargetKind(ElementKind),
    /// A face references a vertex that doesn't exist or has fewer than three vertices.
    InvalidFace {
        /// Index of the offending face.
        face: usize,
    },
    /// An edge references a vertex that doesn't exist or connects a vertex with itself.
    InvalidEdge {
        /// Index of the offending edge.
        edge: usize,
    },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::TooManyPoints { max, given } => write!(
                f,
                "Given {} reference points, but at most {} are supported",
                given, max
            ),
            Error::AlreadySorted => {
                write!(f, "Elements are already sorted, free the current order first")
            }
            Error::MissingTarget(name) => {
                write!(f, "No mesh was provided for the target object \"{}\"", name)
            }
            Error::UnsupportedTargetKind(kind) => write!(
                f,
                "Sorting {} by target object proximity is not supported",
                kind.plural_name()
            ),
            Error::InvalidFace { face } => write!(f, "Face {} is invalid", face),
            Error::InvalidEdge { edge } => write!(f, "Edge {} is invalid", edge),
        }
    }
}
