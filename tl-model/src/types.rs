use tl_atlas::ClothingCategory;

/// Cuboid faces in mesh emission order.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Face {
    East,
    West,
    Up,
    Down,
    North,
    South,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
        Self::North,
        Self::South,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::East => 0,
            Self::West => 1,
            Self::Up => 2,
            Self::Down => 3,
            Self::North => 4,
            Self::South => 5,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CubeDef {
    /// Lower corner (x, y, z) in model pixels (+Y is down, the front of the
    /// avatar faces -Z).
    pub from: [f32; 3],
    /// Dimensions (w, h, d) in model pixels.
    pub size: [f32; 3],
    /// Inflate amount in model pixels; clothing overlays sit slightly
    /// outside the skin they cover.
    pub inflate: f32,
    /// Per-face panel assignment, indexed by `Face::index()`: an index into
    /// the owning category's region table on the Polytoria layout. `None`
    /// on a clothing part leaves that face unmeshed so the skin shows
    /// through; ignored on skin parts, which mesh every face.
    pub panels: [Option<usize>; 6],
}

#[derive(Debug, Clone, Copy)]
pub struct PartDef {
    pub name: &'static str,
    /// Index of the parent part, if any.
    pub parent: Option<usize>,
    /// Rotation point / pivot in model pixels.
    pub pivot: [f32; 3],
    /// Which clothing category textures this part; `None` marks a skin part.
    pub clothing: Option<ClothingCategory>,
    pub cubes: &'static [CubeDef],
}

#[derive(Debug, Clone, Copy)]
pub struct ModelDef {
    /// Offset applied at the model root to place the feet at the origin,
    /// in model pixels, applied before scaling by 1/16.
    pub root_offset_px: [f32; 3],
    pub parts: &'static [PartDef],
}
