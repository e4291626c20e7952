use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::RgbaImage;
use tracing::info;

use tl_atlas::ClothingCategory;
use tl_utils::SkinTone;

use super::types::PartDef;

/// Shared material handles for the avatar's mesh sets. Swapping a texture or
/// tone on a handle updates every mesh entity that uses it, so the "mesh
/// set" of a category is addressed by its handle rather than per-entity.
#[derive(Resource)]
pub struct AvatarMaterials {
    pub skin: Handle<StandardMaterial>,
    pub upper_body: Handle<StandardMaterial>,
    pub lower_body: Handle<StandardMaterial>,
}

impl AvatarMaterials {
    pub fn for_part(&self, part: &PartDef) -> Handle<StandardMaterial> {
        match part.clothing {
            None => self.skin.clone(),
            Some(ClothingCategory::UpperBody) => self.upper_body.clone(),
            Some(ClothingCategory::LowerBody) => self.lower_body.clone(),
        }
    }

    pub fn for_category(&self, category: ClothingCategory) -> &Handle<StandardMaterial> {
        match category {
            ClothingCategory::UpperBody => &self.upper_body,
            ClothingCategory::LowerBody => &self.lower_body,
        }
    }
}

pub fn setup_avatar_materials(
    materials: &mut Assets<StandardMaterial>,
    tone: SkinTone,
) -> AvatarMaterials {
    let [r, g, b] = tone.rgb();
    let skin = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(r, g, b),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..Default::default()
    });
    // Clothing overlays start fully transparent; the mask cutoff hides them
    // until a template texture is applied.
    let clothing = StandardMaterial {
        base_color: Color::NONE,
        alpha_mode: AlphaMode::Mask(0.5),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..Default::default()
    };
    AvatarMaterials {
        skin,
        upper_body: materials.add(clothing.clone()),
        lower_body: materials.add(clothing),
    }
}

/// Wrap a converted RGBA buffer as a renderable texture.
///
/// The buffer is used as-is: the mesh UV unwrap expects top-left-origin V,
/// so the rows must not be flipped. `Rgba8UnormSrgb` keeps the pixels
/// display-referred; a linear format here washes the garment colors out.
pub fn clothing_image(rgba: &RgbaImage) -> Image {
    let (width, height) = rgba.dimensions();
    let mut image = Image::new_fill(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.data = Some(rgba.as_raw().clone());

    let mut sampler = ImageSamplerDescriptor::nearest();
    sampler.address_mode_u = ImageAddressMode::ClampToEdge;
    sampler.address_mode_v = ImageAddressMode::ClampToEdge;
    sampler.address_mode_w = ImageAddressMode::ClampToEdge;
    image.sampler = ImageSampler::Descriptor(sampler);

    image
}

/// Assign a converted template to the mesh set of `category`.
pub fn apply_clothing_texture(
    images: &mut Assets<Image>,
    materials: &mut Assets<StandardMaterial>,
    avatar: &AvatarMaterials,
    category: ClothingCategory,
    rgba: &RgbaImage,
) {
    let handle = images.add(clothing_image(rgba));
    if let Some(material) = materials.get_mut(avatar.for_category(category)) {
        material.base_color = Color::WHITE;
        material.base_color_texture = Some(handle);
        info!(category = category.label(), "applied clothing texture");
    }
}

pub fn apply_skin_tone(
    materials: &mut Assets<StandardMaterial>,
    avatar: &AvatarMaterials,
    tone: SkinTone,
) {
    let [r, g, b] = tone.rgb();
    if let Some(material) = materials.get_mut(&avatar.skin) {
        material.base_color = Color::srgb_u8(r, g, b);
    }
}
