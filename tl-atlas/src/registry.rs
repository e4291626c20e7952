use crate::error::AtlasError;
use crate::layout::{AtlasLayout, POLYTORIA_LAYOUT, Platform, ROBLOX_LAYOUT};

/// Keyed lookup on the closed platform enum. Adding a platform is a new
/// variant plus a table, not a structural change.
pub fn layout(platform: Platform) -> &'static AtlasLayout {
    match platform {
        Platform::Polytoria => &POLYTORIA_LAYOUT,
        Platform::Roblox => &ROBLOX_LAYOUT,
    }
}

/// Lookup by external string identifier (`"polytoria"` / `"roblox"`).
pub fn layout_by_id(id: &str) -> Result<&'static AtlasLayout, AtlasError> {
    match id {
        "polytoria" => Ok(&POLYTORIA_LAYOUT),
        "roblox" => Ok(&ROBLOX_LAYOUT),
        other => Err(AtlasError::UnknownPlatform(other.to_string())),
    }
}

/// Well-formedness check over the compiled-in tables. Table mistakes are
/// programming errors, so this is exercised by tests rather than at every
/// conversion: zero-sized regions, regions outside the canonical canvas,
/// overlapping destination regions, and a region-count mismatch between the
/// two shipped platforms all fail here.
pub fn verify_tables() -> Result<(), String> {
    for platform in [Platform::Polytoria, Platform::Roblox] {
        let table = layout(platform);
        let all: Vec<_> = table
            .upper_body
            .iter()
            .chain(table.lower_body.iter())
            .collect();
        for region in &all {
            if region.width == 0 || region.height == 0 {
                return Err(format!("{}: zero-sized region {region:?}", platform.id()));
            }
            if !table.canvas.contains(region) {
                return Err(format!(
                    "{}: region {region:?} outside {}x{} canvas",
                    platform.id(),
                    table.canvas.width,
                    table.canvas.height
                ));
            }
        }
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                if a.overlaps(b) {
                    return Err(format!(
                        "{}: overlapping regions {a:?} and {b:?}",
                        platform.id()
                    ));
                }
            }
        }
    }

    let (polytoria, roblox) = (layout(Platform::Polytoria), layout(Platform::Roblox));
    if polytoria.upper_body.len() != roblox.upper_body.len()
        || polytoria.lower_body.len() != roblox.lower_body.len()
    {
        return Err("shipped platform tables are not index-aligned".to_string());
    }
    Ok(())
}
