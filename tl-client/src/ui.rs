use bevy::prelude::*;
use bevy_egui::{
    EguiContexts, EguiPlugin, EguiPrimaryContextPass,
    egui::{self},
};

use tl_atlas::{ClothingCategory, Direction};
use tl_utils::{ConversionStatus, CustomizerSession, SkinTone};

pub struct CustomizerUiPlugin;

impl Plugin for CustomizerUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_systems(EguiPrimaryContextPass, customizer_panel);
    }
}

fn customizer_panel(mut contexts: EguiContexts, mut session: ResMut<CustomizerSession>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("customizer").show(ctx, |ui| {
        ui.heading("Template conversion");
        ui.label("Drop a clothing PNG onto the window to convert it.");
        ui.add_space(8.0);
        ui.radio_value(
            &mut session.direction,
            Direction::RobloxToPolytoria,
            "Roblox -> Polytoria",
        );
        ui.radio_value(
            &mut session.direction,
            Direction::PolytoriaToRoblox,
            "Polytoria -> Roblox",
        );
        ui.add_space(4.0);
        ui.label("Active category:");
        ui.radio_value(
            &mut session.active_category,
            ClothingCategory::UpperBody,
            "Shirt (upper body)",
        );
        ui.radio_value(
            &mut session.active_category,
            ClothingCategory::LowerBody,
            "Pants (lower body)",
        );

        ui.separator();
        ui.heading("Skin tone");
        ui.horizontal(|ui| {
            for tone in SkinTone::ALL {
                let [r, g, b] = tone.rgb();
                let swatch = egui::Button::new("")
                    .fill(egui::Color32::from_rgb(r, g, b))
                    .min_size(egui::vec2(24.0, 24.0));
                if ui.add(swatch).on_hover_text(tone.label()).clicked() {
                    session.skin_tone = tone;
                }
            }
        });

        ui.separator();
        match &session.status {
            ConversionStatus::Idle => {
                ui.label("Ready.");
            }
            ConversionStatus::Saved { path } => {
                ui.label(format!("Saved {path}"));
            }
            ConversionStatus::Failed(message) => {
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
        }
    });
}
