use bevy::ecs::resource::Resource;

use tl_atlas::{ClothingCategory, Direction};

/// All mutable customizer state, owned by the app and handed to the systems
/// that need it. The converter itself never sees this.
#[derive(Resource)]
pub struct CustomizerSession {
    pub direction: Direction,
    pub active_category: ClothingCategory,
    pub skin_tone: SkinTone,
    pub model_loaded: bool,
    pub status: ConversionStatus,
}

impl Default for CustomizerSession {
    fn default() -> Self {
        Self {
            direction: Direction::RobloxToPolytoria,
            active_category: ClothingCategory::UpperBody,
            skin_tone: SkinTone::Tan,
            model_loaded: false,
            status: ConversionStatus::Idle,
        }
    }
}

/// Outcome of the most recent conversion action, shown in the UI status
/// line. Every failure ends up here; nothing panics the app.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConversionStatus {
    #[default]
    Idle,
    Saved {
        path: String,
    },
    Failed(String),
}

/// Preset skin tones for the avatar's skin material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinTone {
    Porcelain,
    Tan,
    Bronze,
    Umber,
    Ebony,
}

impl SkinTone {
    pub const ALL: [SkinTone; 5] = [
        Self::Porcelain,
        Self::Tan,
        Self::Bronze,
        Self::Umber,
        Self::Ebony,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Porcelain => "Porcelain",
            Self::Tan => "Tan",
            Self::Bronze => "Bronze",
            Self::Umber => "Umber",
            Self::Ebony => "Ebony",
        }
    }

    /// Display-referred sRGB components.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Porcelain => [240, 213, 185],
            Self::Tan => [216, 175, 136],
            Self::Bronze => [176, 127, 87],
            Self::Umber => [126, 84, 54],
            Self::Ebony => [74, 47, 32],
        }
    }
}
