use std::time::Duration;

use image::{Rgba, RgbaImage};

use crate::layout::{AtlasLayout, ClothingCategory, Direction, Platform};
use crate::region::{CanvasSize, Region};
use crate::{
    AtlasError, convert, convert_between, decode_rgba, decode_rgba_with_timeout, encode_png,
    layout, layout_by_id, rect, template_filename, verify_tables,
};

fn solid(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(px))
}

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

#[test]
fn tables_are_well_formed() {
    verify_tables().unwrap();
}

#[test]
fn table_shape_matches_contract() {
    for platform in [Platform::Polytoria, Platform::Roblox] {
        let table = layout(platform);
        assert_eq!(table.upper_body.len(), 6);
        assert_eq!(table.lower_body.len(), 12);
    }
    assert_eq!(layout(Platform::Polytoria).canvas, CanvasSize::new(1024, 1024));
    assert_eq!(layout(Platform::Roblox).canvas, CanvasSize::new(585, 559));
}

#[test]
fn output_matches_destination_canonical_size() {
    for direction in [Direction::PolytoriaToRoblox, Direction::RobloxToPolytoria] {
        let src = layout(direction.source()).canvas;
        let dst = layout(direction.dest()).canvas;
        let out = convert(&solid(src.width, src.height, [255; 4]), direction);
        assert_eq!(out.dimensions(), (dst.width, dst.height));
    }
}

#[test]
fn white_source_fills_every_destination_region() {
    let out = convert(&solid(1024, 1024, [255; 4]), Direction::PolytoriaToRoblox);
    assert_eq!(out.dimensions(), (585, 559));

    let dst = layout(Platform::Roblox);
    for category in ClothingCategory::ALL {
        for region in dst.regions(category) {
            let samples = [
                (region.x, region.y),
                (region.right() - 1, region.bottom() - 1),
                (region.x + region.width / 2, region.y + region.height / 2),
            ];
            for (x, y) in samples {
                let px = out.get_pixel(x, y).0;
                assert!(
                    px.iter().all(|&c| c >= 250),
                    "{} region {region:?} not white at ({x},{y}): {px:?}",
                    category.label()
                );
            }
        }
    }

    // No region covers the canvas origin; the background stays unset.
    assert_eq!(out.get_pixel(0, 0).0[3], 0);
}

#[test]
fn red_marker_lands_in_correspondent_region() {
    // Marker block at the top-left corner of Roblox upper-body region 0
    // ([199, 74]); its correspondent on Polytoria is [231, 8].
    let mut src = RgbaImage::new(585, 559);
    for y in 74..86 {
        for x in 199..211 {
            src.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        }
    }

    let out = convert(&src, Direction::RobloxToPolytoria);
    assert_eq!(out.dimensions(), (1024, 1024));

    let px = out.get_pixel(231, 8).0;
    assert!(px[0] >= 200, "expected red corner, got {px:?}");
    assert!(px[3] >= 200, "expected opaque corner, got {px:?}");
    assert!(px[1] <= 60 && px[2] <= 60, "expected red corner, got {px:?}");
}

#[test]
fn undersized_source_converts_without_panic() {
    // Wrong-dimension input is accepted; out-of-bounds region reads come
    // back transparent.
    let tiny = solid(1, 1, [0, 255, 0, 255]);
    for direction in [Direction::PolytoriaToRoblox, Direction::RobloxToPolytoria] {
        let dst = layout(direction.dest()).canvas;
        let out = convert(&tiny, direction);
        assert_eq!(out.dimensions(), (dst.width, dst.height));
    }
}

#[test]
fn unknown_platform_id_is_rejected() {
    assert!(layout_by_id("polytoria").is_ok());
    assert!(layout_by_id("roblox").is_ok());
    let err = layout_by_id("nonexistent").unwrap_err();
    assert!(matches!(err, AtlasError::UnknownPlatform(id) if id == "nonexistent"));
}

#[test]
fn conversion_is_deterministic() {
    let src = gradient(1024, 1024);
    let a = convert(&src, Direction::PolytoriaToRoblox);
    let b = convert(&src, Direction::PolytoriaToRoblox);
    assert_eq!(a.as_raw(), b.as_raw());
    assert_eq!(encode_png(&a).unwrap(), encode_png(&b).unwrap());
}

#[test]
fn round_trip_preserves_region_coverage() {
    let src = solid(1024, 1024, [255; 4]);
    let there = convert(&src, Direction::PolytoriaToRoblox);
    let back = convert(&there, Direction::RobloxToPolytoria);
    assert_eq!(back.dimensions(), (1024, 1024));

    // Rescaling twice is lossy, but every panel that was opaque must stay
    // visibly opaque at its center.
    let table = layout(Platform::Polytoria);
    for category in ClothingCategory::ALL {
        for region in table.regions(category) {
            let px = back
                .get_pixel(region.x + region.width / 2, region.y + region.height / 2)
                .0;
            assert!(
                px[3] >= 200,
                "{} region {region:?} lost coverage: {px:?}",
                category.label()
            );
        }
    }
}

static ASYM_SRC_UPPER: [Region; 2] = [
    rect! { at: (0, 0), size: (4, 4) },
    rect! { at: (4, 0), size: (4, 4) },
];
static ASYM_DST_UPPER: [Region; 1] = [rect! { at: (0, 0), size: (4, 4) }];
static ASYM_NONE: [Region; 0] = [];

static ASYM_SRC: AtlasLayout = AtlasLayout {
    platform: Platform::Polytoria,
    canvas: CanvasSize::new(8, 8),
    upper_body: &ASYM_SRC_UPPER,
    lower_body: &ASYM_NONE,
};
static ASYM_DST: AtlasLayout = AtlasLayout {
    platform: Platform::Roblox,
    canvas: CanvasSize::new(8, 8),
    upper_body: &ASYM_DST_UPPER,
    lower_body: &ASYM_NONE,
};

#[test]
fn excess_source_regions_are_skipped() {
    let src = solid(8, 8, [255; 4]);
    let out = convert_between(&src, &ASYM_SRC, &ASYM_DST);
    assert_eq!(out.dimensions(), (8, 8));
    // Matched region is produced.
    assert_eq!(out.get_pixel(1, 1).0, [255, 255, 255, 255]);
    // The unmatched panel's pixels were never written.
    assert_eq!(out.get_pixel(6, 1).0[3], 0);
}

static CLIP_REGION: [Region; 1] = [rect! { at: (1, 1), size: (4, 4) }];
static CLIP_LAYOUT: AtlasLayout = AtlasLayout {
    platform: Platform::Polytoria,
    canvas: CanvasSize::new(8, 8),
    upper_body: &CLIP_REGION,
    lower_body: &ASYM_NONE,
};

#[test]
fn out_of_bounds_source_reads_are_clipped() {
    // 2x2 source; the region reads one in-bounds pixel, the rest is empty.
    let src = solid(2, 2, [255, 0, 0, 255]);
    let out = convert_between(&src, &CLIP_LAYOUT, &CLIP_LAYOUT);
    assert!(out.get_pixel(1, 1).0[3] >= 100);
    assert!(out.get_pixel(4, 4).0[3] <= 50);
}

#[test]
fn invalid_bytes_fail_to_decode() {
    let err = decode_rgba(b"definitely not a png").unwrap_err();
    assert!(matches!(err, AtlasError::InvalidImage(_)));
}

#[test]
fn encoded_output_round_trips_through_decode() {
    let src = gradient(16, 16);
    let bytes = encode_png(&src).unwrap();
    let back = decode_rgba(&bytes).unwrap();
    assert_eq!(back.as_raw(), src.as_raw());
}

#[test]
fn decode_with_timeout_returns_the_image() {
    let bytes = encode_png(&solid(4, 4, [1, 2, 3, 255])).unwrap();
    let img = decode_rgba_with_timeout(bytes, Duration::from_secs(10)).unwrap();
    assert_eq!(img.dimensions(), (4, 4));
}

#[test]
fn template_filenames_follow_destination() {
    assert_eq!(
        template_filename(Direction::PolytoriaToRoblox),
        "roblox_template.png"
    );
    assert_eq!(
        template_filename(Direction::RobloxToPolytoria),
        "polytoria_template.png"
    );
}
