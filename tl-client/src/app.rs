use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::prelude::*;
use image::RgbaImage;
use tracing::{info, warn};

use tl_atlas::{ClothingCategory, convert, decode_rgba_with_timeout, encode_png, template_filename};
use tl_model::{
    AvatarMaterials, apply_clothing_texture, apply_skin_tone, setup_avatar_materials, spawn_avatar,
};
use tl_utils::{ConversionStatus, CustomizerSession, SkinTone};

pub const DECODE_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_TEMPLATE_BYTES: u64 = 8 * 1024 * 1024;

pub fn run() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "tailor".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(CustomizerPlugin)
        .run();
}

pub struct CustomizerPlugin;

impl Plugin for CustomizerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CustomizerSession>()
            .init_resource::<DroppedTemplateQueue>()
            .add_plugins(crate::ui::CustomizerUiPlugin)
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    collect_dropped_files,
                    process_dropped_templates.after(collect_dropped_files),
                    apply_skin_tone_changes,
                ),
            );
    }
}

#[derive(Default, Resource)]
struct DroppedTemplateQueue {
    paths: VecDeque<PathBuf>,
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut session: ResMut<CustomizerSession>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.2, 3.2).looking_at(Vec3::new(0.0, 0.9, 0.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: false,
            ..Default::default()
        },
        Transform::from_xyz(2.0, 4.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let avatar_materials = setup_avatar_materials(&mut materials, session.skin_tone);
    spawn_avatar(&mut commands, &mut meshes, &avatar_materials);
    commands.insert_resource(avatar_materials);
    session.model_loaded = true;
    info!("avatar model spawned");
}

fn collect_dropped_files(
    mut events: EventReader<FileDragAndDrop>,
    mut queue: ResMut<DroppedTemplateQueue>,
) {
    for event in events.read() {
        if let FileDragAndDrop::DroppedFile { path_buf, .. } = event {
            queue.paths.push_back(path_buf.clone());
        }
    }
}

fn process_dropped_templates(
    mut queue: ResMut<DroppedTemplateQueue>,
    mut session: ResMut<CustomizerSession>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    avatar: Option<Res<AvatarMaterials>>,
) {
    while let Some(path) = queue.paths.pop_front() {
        match convert_one(&path, &session) {
            Ok((converted, out_path)) => {
                session.status = ConversionStatus::Saved {
                    path: out_path.display().to_string(),
                };
                // Live preview only for the shirt-equivalent category; other
                // conversions still export to disk.
                if session.active_category == ClothingCategory::UpperBody
                    && session.model_loaded
                    && let Some(avatar) = avatar.as_deref()
                {
                    apply_clothing_texture(
                        &mut images,
                        &mut materials,
                        avatar,
                        ClothingCategory::UpperBody,
                        &converted,
                    );
                }
            }
            Err(message) => {
                warn!("conversion failed: {message}");
                session.status = ConversionStatus::Failed(message);
            }
        }
    }
}

/// One full conversion action: validate the dropped file, decode with a
/// timeout, remap, and write the template next to the source.
fn convert_one(path: &Path, session: &CustomizerSession) -> Result<(RgbaImage, PathBuf), String> {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if !is_png {
        return Err(format!(
            "{}: only .png templates are accepted",
            path.display()
        ));
    }

    let size = std::fs::metadata(path)
        .map_err(|e| format!("failed to stat {}: {e}", path.display()))?
        .len();
    if size > MAX_TEMPLATE_BYTES {
        return Err(format!(
            "{}: file exceeds the {}MB cap",
            path.display(),
            MAX_TEMPLATE_BYTES / (1024 * 1024)
        ));
    }

    let bytes =
        std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let source = decode_rgba_with_timeout(bytes, DECODE_TIMEOUT).map_err(|e| e.to_string())?;
    let converted = convert(&source, session.direction);
    let encoded = encode_png(&converted).map_err(|e| e.to_string())?;

    let out_path = path.with_file_name(template_filename(session.direction));
    std::fs::write(&out_path, encoded)
        .map_err(|e| format!("failed to write {}: {e}", out_path.display()))?;
    info!(
        direction = ?session.direction,
        "converted {} -> {}",
        path.display(),
        out_path.display()
    );
    Ok((converted, out_path))
}

fn apply_skin_tone_changes(
    session: Res<CustomizerSession>,
    avatar: Option<Res<AvatarMaterials>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut applied: Local<Option<SkinTone>>,
) {
    if *applied == Some(session.skin_tone) {
        return;
    }
    let Some(avatar) = avatar else {
        return;
    };
    apply_skin_tone(&mut materials, &avatar, session.skin_tone);
    *applied = Some(session.skin_tone);
}
