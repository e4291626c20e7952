use crate::rect;
use crate::region::{CanvasSize, Region};

/// Garment categories, in the declared processing order. Conversions iterate
/// this exact sequence so repeated runs produce byte-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClothingCategory {
    UpperBody,
    LowerBody,
}

impl ClothingCategory {
    pub const ALL: [ClothingCategory; 2] = [Self::UpperBody, Self::LowerBody];

    pub const fn label(self) -> &'static str {
        match self {
            Self::UpperBody => "upper-body",
            Self::LowerBody => "lower-body",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Polytoria,
    Roblox,
}

impl Platform {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Polytoria => "polytoria",
            Self::Roblox => "roblox",
        }
    }

    /// Fixed filename the respective platform's upload flow expects.
    pub const fn template_filename(self) -> &'static str {
        match self {
            Self::Polytoria => "polytoria_template.png",
            Self::Roblox => "roblox_template.png",
        }
    }
}

/// Which platform is source vs. destination for one conversion. The only two
/// modes the tool supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PolytoriaToRoblox,
    RobloxToPolytoria,
}

impl Direction {
    pub const fn source(self) -> Platform {
        match self {
            Self::PolytoriaToRoblox => Platform::Polytoria,
            Self::RobloxToPolytoria => Platform::Roblox,
        }
    }

    pub const fn dest(self) -> Platform {
        match self {
            Self::PolytoriaToRoblox => Platform::Roblox,
            Self::RobloxToPolytoria => Platform::Polytoria,
        }
    }
}

/// Where each garment panel lives on one platform's clothing texture.
///
/// Immutable compiled-in data. Region indices are the correspondence: index
/// `i` of a category here and index `i` of the same category on the other
/// platform are the same logical panel.
#[derive(Debug)]
pub struct AtlasLayout {
    pub platform: Platform,
    pub canvas: CanvasSize,
    pub upper_body: &'static [Region],
    pub lower_body: &'static [Region],
}

impl AtlasLayout {
    pub fn regions(&self, category: ClothingCategory) -> &'static [Region] {
        match category {
            ClothingCategory::UpperBody => self.upper_body,
            ClothingCategory::LowerBody => self.lower_body,
        }
    }
}

// Panel order within each category (shared by both platforms):
// upper-body: torso front, torso back, right arm, left arm,
//             right sleeve back, left sleeve back.
// lower-body: waist front, waist back, then per leg front/back/outer/inner
//             (right before left), then right foot, left foot.

static POLYTORIA_UPPER: [Region; 6] = [
    rect! { at: (231, 8), size: (128, 64) },
    rect! { at: (231, 80), size: (128, 64) },
    rect! { at: (87, 8), size: (128, 64) },
    rect! { at: (375, 8), size: (128, 64) },
    rect! { at: (87, 80), size: (128, 64) },
    rect! { at: (375, 80), size: (128, 64) },
];

static POLYTORIA_LOWER: [Region; 12] = [
    rect! { at: (231, 520), size: (128, 48) },
    rect! { at: (231, 576), size: (128, 48) },
    rect! { at: (87, 520), size: (96, 160) },
    rect! { at: (375, 520), size: (96, 160) },
    rect! { at: (87, 688), size: (96, 160) },
    rect! { at: (375, 688), size: (96, 160) },
    rect! { at: (519, 520), size: (96, 160) },
    rect! { at: (519, 688), size: (96, 160) },
    rect! { at: (663, 520), size: (96, 160) },
    rect! { at: (663, 688), size: (96, 160) },
    rect! { at: (231, 632), size: (96, 64) },
    rect! { at: (231, 704), size: (96, 64) },
];

static ROBLOX_UPPER: [Region; 6] = [
    rect! { at: (199, 74), size: (200, 100) },
    rect! { at: (199, 180), size: (200, 100) },
    rect! { at: (19, 74), size: (160, 100) },
    rect! { at: (406, 74), size: (160, 100) },
    rect! { at: (19, 180), size: (160, 100) },
    rect! { at: (406, 180), size: (160, 100) },
];

static ROBLOX_LOWER: [Region; 12] = [
    rect! { at: (199, 300), size: (200, 50) },
    rect! { at: (199, 355), size: (200, 50) },
    rect! { at: (19, 300), size: (80, 120) },
    rect! { at: (486, 300), size: (80, 120) },
    rect! { at: (104, 300), size: (80, 120) },
    rect! { at: (401, 300), size: (80, 120) },
    rect! { at: (19, 430), size: (80, 120) },
    rect! { at: (486, 430), size: (80, 120) },
    rect! { at: (104, 430), size: (80, 120) },
    rect! { at: (401, 430), size: (80, 120) },
    rect! { at: (199, 410), size: (90, 60) },
    rect! { at: (309, 410), size: (90, 60) },
];

pub static POLYTORIA_LAYOUT: AtlasLayout = AtlasLayout {
    platform: Platform::Polytoria,
    canvas: CanvasSize::new(1024, 1024),
    upper_body: &POLYTORIA_UPPER,
    lower_body: &POLYTORIA_LOWER,
};

pub static ROBLOX_LAYOUT: AtlasLayout = AtlasLayout {
    platform: Platform::Roblox,
    canvas: CanvasSize::new(585, 559),
    upper_body: &ROBLOX_UPPER,
    lower_body: &ROBLOX_LOWER,
};
