//! Avatar model definitions and the clothing-texture application layer.
//!
//! Key constraints for this crate:
//! - The model is hardcoded as Rust static data (parts + cuboids); no
//!   runtime mesh-format parsing.
//! - Clothing overlay UVs are derived from the Polytoria atlas tables, so
//!   the model and the converter can never disagree about panel placement.
//! - Texture assignment goes through shared material handles; the single
//!   writer is whichever system holds the `Assets` access.

mod humanoid;
mod mesh;
mod textures;
mod types;

pub use humanoid::*;
pub use mesh::*;
pub use textures::*;
pub use types::*;
