use tl_atlas::ClothingCategory;

use super::{CubeDef, ModelDef, PartDef};

// Part indices for `AVATAR_MODEL`.
pub const AVATAR_HEAD: usize = 0;
pub const AVATAR_TORSO: usize = 1;
pub const AVATAR_RIGHT_ARM: usize = 2;
pub const AVATAR_LEFT_ARM: usize = 3;
pub const AVATAR_RIGHT_LEG: usize = 4;
pub const AVATAR_LEFT_LEG: usize = 5;
pub const AVATAR_SHIRT_TORSO: usize = 6;
pub const AVATAR_SHIRT_RIGHT_ARM: usize = 7;
pub const AVATAR_SHIRT_LEFT_ARM: usize = 8;
pub const AVATAR_PANTS_WAIST: usize = 9;
pub const AVATAR_PANTS_RIGHT_LEG: usize = 10;
pub const AVATAR_PANTS_LEFT_LEG: usize = 11;

const NO_PANELS: [Option<usize>; 6] = [None; 6];

// Face order: [east, west, up, down, north, south]. North is the front of
// the avatar. Panel indices follow the category order in the atlas tables.

pub static AVATAR_MODEL: ModelDef = ModelDef {
    // Model origin is near the shoulders. Lift by 24px so feet sit at Y=0.
    root_offset_px: [0.0, 24.0, 0.0],
    parts: &[
        PartDef {
            name: "head",
            parent: None,
            pivot: [0.0, 0.0, 0.0],
            clothing: None,
            cubes: &[CubeDef {
                from: [-4.0, -8.0, -4.0],
                size: [8.0, 8.0, 8.0],
                inflate: 0.0,
                panels: NO_PANELS,
            }],
        },
        PartDef {
            name: "torso",
            parent: None,
            pivot: [0.0, 0.0, 0.0],
            clothing: None,
            cubes: &[CubeDef {
                from: [-4.0, 0.0, -2.0],
                size: [8.0, 12.0, 4.0],
                inflate: 0.0,
                panels: NO_PANELS,
            }],
        },
        PartDef {
            name: "right_arm",
            parent: None,
            pivot: [-5.0, 2.0, 0.0],
            clothing: None,
            cubes: &[CubeDef {
                from: [-3.0, -2.0, -2.0],
                size: [4.0, 12.0, 4.0],
                inflate: 0.0,
                panels: NO_PANELS,
            }],
        },
        PartDef {
            name: "left_arm",
            parent: None,
            pivot: [5.0, 2.0, 0.0],
            clothing: None,
            cubes: &[CubeDef {
                from: [-1.0, -2.0, -2.0],
                size: [4.0, 12.0, 4.0],
                inflate: 0.0,
                panels: NO_PANELS,
            }],
        },
        PartDef {
            name: "right_leg",
            parent: None,
            pivot: [-1.9, 12.0, 0.0],
            clothing: None,
            cubes: &[CubeDef {
                from: [-2.0, 0.0, -2.0],
                size: [4.0, 12.0, 4.0],
                inflate: 0.0,
                panels: NO_PANELS,
            }],
        },
        PartDef {
            name: "left_leg",
            parent: None,
            pivot: [1.9, 12.0, 0.0],
            clothing: None,
            cubes: &[CubeDef {
                from: [-2.0, 0.0, -2.0],
                size: [4.0, 12.0, 4.0],
                inflate: 0.0,
                panels: NO_PANELS,
            }],
        },
        // Clothing overlays: inflated copies of the parts they cover, only
        // the faces with an assigned panel are meshed.
        PartDef {
            name: "shirt_torso",
            parent: Some(AVATAR_TORSO),
            pivot: [0.0, 0.0, 0.0],
            clothing: Some(ClothingCategory::UpperBody),
            cubes: &[CubeDef {
                from: [-4.0, 0.0, -2.0],
                size: [8.0, 12.0, 4.0],
                inflate: 0.25,
                panels: [None, None, None, None, Some(0), Some(1)],
            }],
        },
        PartDef {
            name: "shirt_right_arm",
            parent: Some(AVATAR_RIGHT_ARM),
            pivot: [0.0, 0.0, 0.0],
            clothing: Some(ClothingCategory::UpperBody),
            cubes: &[CubeDef {
                from: [-3.0, -2.0, -2.0],
                size: [4.0, 12.0, 4.0],
                inflate: 0.25,
                panels: [None, None, None, None, Some(2), Some(4)],
            }],
        },
        PartDef {
            name: "shirt_left_arm",
            parent: Some(AVATAR_LEFT_ARM),
            pivot: [0.0, 0.0, 0.0],
            clothing: Some(ClothingCategory::UpperBody),
            cubes: &[CubeDef {
                from: [-1.0, -2.0, -2.0],
                size: [4.0, 12.0, 4.0],
                inflate: 0.25,
                panels: [None, None, None, None, Some(3), Some(5)],
            }],
        },
        PartDef {
            name: "pants_waist",
            parent: Some(AVATAR_TORSO),
            pivot: [0.0, 0.0, 0.0],
            clothing: Some(ClothingCategory::LowerBody),
            cubes: &[CubeDef {
                from: [-4.0, 6.0, -2.0],
                size: [8.0, 6.0, 4.0],
                inflate: 0.3,
                panels: [None, None, None, None, Some(0), Some(1)],
            }],
        },
        PartDef {
            name: "pants_right_leg",
            parent: Some(AVATAR_RIGHT_LEG),
            pivot: [0.0, 0.0, 0.0],
            clothing: Some(ClothingCategory::LowerBody),
            cubes: &[CubeDef {
                from: [-2.0, 0.0, -2.0],
                size: [4.0, 12.0, 4.0],
                inflate: 0.25,
                // Outer face of the right leg is west (-X).
                panels: [Some(8), Some(6), None, Some(10), Some(2), Some(4)],
            }],
        },
        PartDef {
            name: "pants_left_leg",
            parent: Some(AVATAR_LEFT_LEG),
            pivot: [0.0, 0.0, 0.0],
            clothing: Some(ClothingCategory::LowerBody),
            cubes: &[CubeDef {
                from: [-2.0, 0.0, -2.0],
                size: [4.0, 12.0, 4.0],
                inflate: 0.25,
                panels: [Some(7), Some(9), None, Some(11), Some(3), Some(5)],
            }],
        },
    ],
};
