use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::AtlasError;
use crate::layout::{AtlasLayout, ClothingCategory, Direction};
use crate::region::Region;
use crate::registry;

/// Remap a clothing texture from `direction.source()`'s layout onto a fresh
/// canvas in `direction.dest()`'s layout.
pub fn convert(source: &RgbaImage, direction: Direction) -> RgbaImage {
    convert_between(
        source,
        registry::layout(direction.source()),
        registry::layout(direction.dest()),
    )
}

/// Same blit against explicit layouts. Each correspondent region pair is an
/// independent crop-and-rescale; a source region whose index is missing from
/// the destination category is skipped, not an error.
pub fn convert_between(
    source: &RgbaImage,
    src_layout: &AtlasLayout,
    dst_layout: &AtlasLayout,
) -> RgbaImage {
    let mut dest = RgbaImage::new(dst_layout.canvas.width, dst_layout.canvas.height);

    for category in ClothingCategory::ALL {
        let src_regions = src_layout.regions(category);
        let dst_regions = dst_layout.regions(category);
        for (index, src) in src_regions.iter().enumerate() {
            let Some(dst) = dst_regions.get(index) else {
                debug!(
                    category = category.label(),
                    index, "source region has no destination correspondent, skipping"
                );
                continue;
            };
            let patch = extract_region(source, src);
            // The two platforms' panels are never pixel-identical in size,
            // so this is always a real rescale.
            let scaled = imageops::resize(&patch, dst.width, dst.height, FilterType::Lanczos3);
            imageops::replace(&mut dest, &scaled, i64::from(dst.x), i64::from(dst.y));
        }
    }

    dest
}

/// Copy `region` out of `source` into a fresh buffer of the region's size.
///
/// Region coordinates are absolute against the platform's canonical size.
/// Pixels outside the actual source bounds stay transparent: uploads that
/// don't match the canonical size are accepted and read as partly empty.
fn extract_region(source: &RgbaImage, region: &Region) -> RgbaImage {
    let mut patch = RgbaImage::new(region.width, region.height);
    let (src_w, src_h) = source.dimensions();
    if region.x >= src_w || region.y >= src_h {
        return patch;
    }
    let copy_w = region.width.min(src_w - region.x);
    let copy_h = region.height.min(src_h - region.y);
    for y in 0..copy_h {
        for x in 0..copy_w {
            patch.put_pixel(x, y, *source.get_pixel(region.x + x, region.y + y));
        }
    }
    patch
}

/// Lossless, alpha-preserving bytes for download or disk export.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, AtlasError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(AtlasError::Encode)?;
    Ok(bytes)
}

/// Export filename keyed on the destination platform.
pub fn template_filename(direction: Direction) -> &'static str {
    direction.dest().template_filename()
}
