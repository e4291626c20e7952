/// Axis-aligned rectangle in pixel units on a platform's clothing canvas.
///
/// Regions have no identity of their own; two regions at the same index in
/// the same category of two different layouts describe the same garment
/// panel at different physical locations/sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &Region) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Fixed texture resolution a platform expects for uploads. A property of
/// the platform itself, never derived from the union of its region bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn contains(&self, region: &Region) -> bool {
        region.right() <= self.width && region.bottom() <= self.height
    }
}
