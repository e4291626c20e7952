use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use tl_atlas::{POLYTORIA_LAYOUT, Region};

use super::textures::AvatarMaterials;
use super::types::{CubeDef, Face, ModelDef, PartDef};

const PX: f32 = 1.0 / 16.0;

#[derive(Debug, Clone)]
pub struct SpawnedAvatar {
    pub root: Entity,
    /// Bevy entities for each part, in the same order as `model.parts`.
    pub parts: Vec<Entity>,
}

pub fn part_mesh(part: &PartDef) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for cube in part.cubes {
        add_cube(
            part,
            cube,
            &mut positions,
            &mut normals,
            &mut uvs,
            &mut indices,
        );
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

pub fn spawn_avatar(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &AvatarMaterials,
) -> SpawnedAvatar {
    spawn_model(commands, meshes, materials, &super::AVATAR_MODEL)
}

pub fn spawn_model(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &AvatarMaterials,
    model: &'static ModelDef,
) -> SpawnedAvatar {
    let root = commands
        .spawn((
            Name::new("AvatarRoot"),
            Transform::from_translation(Vec3::new(
                model.root_offset_px[0] * PX,
                model.root_offset_px[1] * PX,
                model.root_offset_px[2] * PX,
            )),
            GlobalTransform::default(),
            Visibility::Visible,
            InheritedVisibility::default(),
            ViewVisibility::default(),
        ))
        .id();

    let mut part_entities: Vec<Entity> = vec![Entity::PLACEHOLDER; model.parts.len()];

    // First spawn all part pivots.
    for (idx, part) in model.parts.iter().enumerate() {
        let pivot = Vec3::new(part.pivot[0] * PX, -part.pivot[1] * PX, part.pivot[2] * PX);
        let e = commands
            .spawn((
                Name::new(format!("AvatarPart[{}]", part.name)),
                Transform::from_translation(pivot),
                GlobalTransform::default(),
                Visibility::Visible,
                InheritedVisibility::default(),
                ViewVisibility::default(),
            ))
            .id();
        part_entities[idx] = e;
    }

    // Then attach to the appropriate parent and spawn meshes.
    for (idx, part) in model.parts.iter().enumerate() {
        let part_entity = part_entities[idx];
        let parent_entity = part
            .parent
            .and_then(|p| part_entities.get(p).copied())
            .unwrap_or(root);
        commands.entity(parent_entity).add_child(part_entity);

        if part.cubes.is_empty() {
            continue;
        }
        let mesh = meshes.add(part_mesh(part));
        let mesh_entity = commands
            .spawn((
                Name::new(format!("AvatarMesh[{}]", part.name)),
                Mesh3d(mesh),
                MeshMaterial3d(materials.for_part(part)),
                Transform::IDENTITY,
                GlobalTransform::default(),
                Visibility::Visible,
                InheritedVisibility::default(),
                ViewVisibility::default(),
            ))
            .id();
        commands.entity(part_entity).add_child(mesh_entity);
    }

    SpawnedAvatar {
        root,
        parts: part_entities,
    }
}

fn add_cube(
    part: &PartDef,
    cube: &CubeDef,
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    uvs: &mut Vec<[f32; 2]>,
    indices: &mut Vec<u32>,
) {
    let [x, y, z] = cube.from;
    let [w, h, d] = cube.size;
    let inf = cube.inflate;

    let x1 = x - inf;
    let y1 = y - inf;
    let z1 = z - inf;
    let x2 = x + w + inf;
    let y2 = y + h + inf;
    let z2 = z + d + inf;

    // Convert to bevy units (1px=1/16) and flip Y (model space uses +Y down).
    let p = |xx: f32, yy: f32, zz: f32| -> [f32; 3] { [xx * PX, -yy * PX, zz * PX] };

    let v7 = p(x1, y1, z1);
    let v0 = p(x2, y1, z1);
    let v1 = p(x2, y2, z1);
    let v2 = p(x1, y2, z1);
    let v3 = p(x1, y1, z2);
    let v4 = p(x2, y1, z2);
    let v5 = p(x2, y2, z2);
    let v6 = p(x1, y2, z2);

    for face in Face::ALL {
        let Some(uv) = face_uvs(part, cube, face) else {
            continue;
        };
        let (verts, normal) = match face {
            Face::East => ([v4, v0, v1, v5], [1.0, 0.0, 0.0]),
            Face::West => ([v7, v3, v6, v2], [-1.0, 0.0, 0.0]),
            // +Y in model space is down; normals are fixed by winding.
            Face::Up => ([v4, v3, v7, v0], [0.0, 1.0, 0.0]),
            Face::Down => ([v1, v2, v6, v5], [0.0, -1.0, 0.0]),
            Face::North => ([v0, v7, v2, v1], [0.0, 0.0, -1.0]),
            Face::South => ([v3, v4, v5, v6], [0.0, 0.0, 1.0]),
        };
        add_quad(positions, normals, uvs, indices, verts, normal, uv);
    }
}

/// UV corners for one face, or `None` when the face is not meshed.
///
/// Skin parts mesh every face with a throwaway full-canvas rect (their
/// material is a solid color). Clothing parts mesh only the faces that have
/// a panel, mapped to that panel's region on the Polytoria layout. The V
/// axis is NOT flipped: the panel rects are authored top-left-origin, which
/// is the convention the mesh UVs use as-is.
fn face_uvs(part: &PartDef, cube: &CubeDef, face: Face) -> Option<[[f32; 2]; 4]> {
    let canvas = POLYTORIA_LAYOUT.canvas;
    let region = match part.clothing {
        None => Region {
            x: 0,
            y: 0,
            width: canvas.width,
            height: canvas.height,
        },
        Some(category) => {
            let panel = cube.panels[face.index()]?;
            *POLYTORIA_LAYOUT.regions(category).get(panel)?
        }
    };

    let to_uv = |uu: u32, vv: u32| -> [f32; 2] {
        [uu as f32 / canvas.width as f32, vv as f32 / canvas.height as f32]
    };
    let (u1, v1) = (region.x, region.y);
    let (u2, v2) = (region.right(), region.bottom());
    // Vertex order matches the quads in `add_cube`.
    Some([to_uv(u2, v1), to_uv(u1, v1), to_uv(u1, v2), to_uv(u2, v2)])
}

fn add_quad(
    positions: &mut Vec<[f32; 3]>,
    normals: &mut Vec<[f32; 3]>,
    uvs: &mut Vec<[f32; 2]>,
    indices: &mut Vec<u32>,
    mut verts: [[f32; 3]; 4],
    normal: [f32; 3],
    mut uv: [[f32; 2]; 4],
) {
    // Ensure both triangles are consistently front-facing.
    let a = Vec3::from_array(verts[0]);
    let b = Vec3::from_array(verts[1]);
    let c = Vec3::from_array(verts[2]);
    let actual = (b - a).cross(c - a);
    let expected = Vec3::from_array(normal);
    if actual.dot(expected) < 0.0 {
        verts = [verts[0], verts[3], verts[2], verts[1]];
        uv = [uv[0], uv[3], uv[2], uv[1]];
    }

    let base = positions.len() as u32;
    for i in 0..4 {
        positions.push(verts[i]);
        normals.push(normal);
        uvs.push(uv[i]);
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

#[cfg(test)]
mod tests {
    use bevy::render::mesh::VertexAttributeValues;
    use tl_atlas::{POLYTORIA_LAYOUT, verify_tables};

    use super::super::humanoid::{AVATAR_MODEL, AVATAR_SHIRT_TORSO};
    use super::part_mesh;

    #[test]
    fn panel_indices_stay_inside_the_atlas_tables() {
        verify_tables().unwrap();
        for part in AVATAR_MODEL.parts {
            let Some(category) = part.clothing else {
                continue;
            };
            let regions = POLYTORIA_LAYOUT.regions(category);
            for cube in part.cubes {
                for panel in cube.panels.iter().flatten() {
                    assert!(
                        *panel < regions.len(),
                        "{}: panel {panel} out of range",
                        part.name
                    );
                }
            }
        }
    }

    #[test]
    fn shirt_torso_meshes_only_its_panelled_faces() {
        let mesh = part_mesh(&AVATAR_MODEL.parts[AVATAR_SHIRT_TORSO]);
        let Some(VertexAttributeValues::Float32x2(uvs)) =
            mesh.attribute(bevy::prelude::Mesh::ATTRIBUTE_UV_0)
        else {
            panic!("missing uvs");
        };
        // Two faces (front + back), four vertices each.
        assert_eq!(uvs.len(), 8);
        for uv in uvs {
            assert!(uv[0] >= 0.0 && uv[0] <= 1.0);
            assert!(uv[1] >= 0.0 && uv[1] <= 1.0);
        }
    }

    #[test]
    fn skin_parts_mesh_all_faces() {
        let mesh = part_mesh(&AVATAR_MODEL.parts[0]);
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(bevy::prelude::Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("missing positions");
        };
        assert_eq!(positions.len(), 24);
    }
}
