//! Left-hand control panel: impact parameters, presets, and actions.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::impact::{compute_impact, ImpactParameters};
use crate::neo::{FetchNeoEvent, NeoCatalog};
use crate::scenarios::{LoadPresetEvent, SaveScenarioEvent, PRESETS};
use crate::types::{Composition, ImpactSurface, LatestImpact, MitigationStrategy, SimulatorParameters};

use super::UiState;

/// System that renders the parameter panel.
#[allow(clippy::too_many_arguments)]
pub fn control_panel(
    mut contexts: EguiContexts,
    mut params: ResMut<SimulatorParameters>,
    mut latest: ResMut<LatestImpact>,
    mut ui_state: ResMut<UiState>,
    catalog: Res<NeoCatalog>,
    mut fetch_events: MessageWriter<FetchNeoEvent>,
    mut save_events: MessageWriter<SaveScenarioEvent>,
    mut preset_events: MessageWriter<LoadPresetEvent>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
        .inner_margin(egui::Margin::same(12));

    egui::SidePanel::left("control_panel")
        .resizable(false)
        .default_width(260.0)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Impact Parameters");
            if let Some(name) = &params.source_name {
                ui.label(egui::RichText::new(format!("From: {name}")).weak());
            }
            ui.separator();

            ui.add(
                egui::Slider::new(&mut params.size_km, 0.01..=20.0)
                    .logarithmic(true)
                    .text("Size (km)"),
            );
            ui.add(egui::Slider::new(&mut params.velocity_km_s, 1.0..=72.0).text("Velocity (km/s)"));
            ui.add(egui::Slider::new(&mut params.angle_deg, 5.0..=90.0).text("Angle (°)"));
            ui.add(egui::Slider::new(&mut params.distance_au, 0.05..=2.0).text("Distance (AU)"));

            ui.add_space(8.0);

            egui::ComboBox::from_label("Composition")
                .selected_text(params.composition.label())
                .show_ui(ui, |ui| {
                    for option in Composition::ALL {
                        ui.selectable_value(&mut params.composition, option, option.label());
                    }
                });

            egui::ComboBox::from_label("Mitigation")
                .selected_text(params.mitigation.label())
                .show_ui(ui, |ui| {
                    for option in MitigationStrategy::ALL {
                        ui.selectable_value(&mut params.mitigation, option, option.label());
                    }
                });

            ui.horizontal(|ui| {
                ui.label("Surface:");
                for option in ImpactSurface::ALL {
                    ui.selectable_value(&mut params.surface, option, option.label());
                }
            });

            ui.add_space(8.0);
            ui.separator();

            if ui
                .add_sized([ui.available_width(), 28.0], egui::Button::new("Calculate Impact"))
                .clicked()
            {
                let inputs = ImpactParameters {
                    size_km: params.size_km,
                    velocity_km_s: params.velocity_km_s,
                    angle_deg: params.angle_deg,
                    composition: params.composition,
                    mitigation: params.mitigation,
                    surface: params.surface,
                };
                let result = compute_impact(&inputs);
                info!(
                    "Computed impact: {:.3e} J, crater {:.2} km",
                    result.energy_joules, result.crater_diameter_km
                );
                latest.result = Some(result);
            }

            if ui
                .add_sized([ui.available_width(), 24.0], egui::Button::new("Save Scenario"))
                .clicked()
            {
                save_events.write(SaveScenarioEvent);
            }

            let fetch_button = egui::Button::new(if catalog.fetching {
                "Fetching..."
            } else {
                "Fetch NASA Data"
            });
            if ui
                .add_enabled(!catalog.fetching, fetch_button)
                .clicked()
            {
                fetch_events.write(FetchNeoEvent);
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label("Presets:");
            for preset in PRESETS {
                if ui
                    .button(preset.name)
                    .on_hover_text(preset.description)
                    .clicked()
                {
                    preset_events.write(LoadPresetEvent {
                        preset_id: preset.id,
                    });
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.checkbox(&mut ui_state.gallery_open, "NEO Gallery");
            ui.checkbox(&mut ui_state.history_open, "Historical Impacts");
        });
}
