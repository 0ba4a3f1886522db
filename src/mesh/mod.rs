pub mod builder;
pub mod edit_mesh;
pub mod remap;
pub mod topology;

// Re-export meshes and traits
pub use self::edit_mesh::*;
pub use self::remap::*;
pub use self::topology::*;
