use std::time::Duration;

use thiserror::Error;

/// Failures a single conversion action can surface. Recovered at the
/// boundary of that action; the layout tables are immutable and unaffected.
///
/// A destination category with fewer regions than its source correspondent
/// is deliberately NOT represented here: partial atlases are valid and the
/// unmatched regions are skipped.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Source bytes could not be decoded as a raster image.
    #[error("source image could not be decoded")]
    InvalidImage(#[source] image::ImageError),

    /// Identifier outside the registered platform set.
    #[error("unknown platform id `{0}`")]
    UnknownPlatform(String),

    /// Decode worker did not report back in time. Transient; safe to retry
    /// by re-selecting the file.
    #[error("image decode did not finish within {0:?}")]
    DecodeTimeout(Duration),

    #[error("failed to encode output image")]
    Encode(#[source] image::ImageError),
}
