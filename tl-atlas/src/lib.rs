//! Clothing-texture atlas remapping between the Polytoria and Roblox
//! template layouts.
//!
//! Key constraints for this crate:
//! - Layout tables are hardcoded as Rust static data, one per platform.
//! - Conversion is a pure function over (image, direction, tables); no
//!   session or model state leaks in here.
//! - Only PNG is supported at the edges (decode in, encode out).

mod convert;
mod decode;
mod error;
mod layout;
mod region;
mod registry;
#[cfg(test)]
mod tests;

pub use convert::{convert, convert_between, encode_png, template_filename};
pub use decode::{decode_rgba, decode_rgba_with_timeout};
pub use error::AtlasError;
pub use layout::{
    AtlasLayout, ClothingCategory, Direction, POLYTORIA_LAYOUT, Platform, ROBLOX_LAYOUT,
};
pub use region::{CanvasSize, Region};
pub use registry::{layout, layout_by_id, verify_tables};

// Small DSL macro to keep the layout tables readable.
// Intentionally kept as `macro_rules!` (no proc-macro / extra deps).

#[macro_export]
macro_rules! rect {
    ( at: ($x:expr, $y:expr), size: ($w:expr, $h:expr) $(,)? ) => {
        $crate::Region {
            x: $x as u32,
            y: $y as u32,
            width: $w as u32,
            height: $h as u32,
        }
    };
}
