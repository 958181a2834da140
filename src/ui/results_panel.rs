//! Right-hand results panel: the latest impact assessment and saved scenarios.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::scenarios::{DeleteScenarioEvent, SavedScenarios};
use crate::types::LatestImpact;

/// System that renders the results panel.
pub fn results_panel(
    mut contexts: EguiContexts,
    latest: Res<LatestImpact>,
    saved: Res<SavedScenarios>,
    mut delete_events: MessageWriter<DeleteScenarioEvent>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
        .inner_margin(egui::Margin::same(12));

    egui::SidePanel::right("results_panel")
        .resizable(false)
        .default_width(280.0)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Impact Assessment");
            ui.separator();

            match &latest.result {
                Some(result) => {
                    ui.label(format!("Energy: {:.3e} J", result.energy_joules));
                    ui.label(format!("         {:.2} Mt TNT", result.energy_megatons()));
                    ui.add_space(4.0);

                    ui.label(format!("Crater: {:.2} km wide", result.crater_diameter_km));
                    ui.label(format!("        {:.2} km deep", result.crater_depth_km));
                    ui.label(format!("Shockwave: {:.1} km", result.shockwave_radius_km));
                    ui.label(format!("Seismic: M{:.1}", result.seismic_magnitude));

                    ui.add_space(4.0);
                    ui.label("Damage zones:");
                    ui.label(format!("  Fireball: {:.1} km", result.fireball_radius_km));
                    ui.label(format!(
                        "  Thermal: {:.1} km",
                        result.thermal_radiation_radius_km
                    ));
                    ui.label(format!(
                        "  Overpressure: {:.1} km",
                        result.overpressure_radius_km
                    ));
                    ui.label(format!("  Debris: {:.1} km", result.debris_zone_km));

                    ui.add_space(4.0);
                    ui.label(format!("Tsunami: {}", result.tsunami_risk));
                    ui.label(format!("Atmosphere: {}", result.atmospheric_effects));
                    ui.label(format!("Casualties: {}", result.casualties));
                }
                None => {
                    ui.label("Set parameters and press Calculate Impact.");
                }
            }

            ui.add_space(8.0);
            ui.separator();
            ui.heading("Saved Scenarios");

            if saved.is_empty() {
                ui.label(egui::RichText::new("Nothing saved yet.").weak());
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for scenario in saved.iter() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&scenario.name).strong());
                        if ui.small_button("✕").on_hover_text("Delete").clicked() {
                            delete_events.write(DeleteScenarioEvent { id: scenario.id });
                        }
                    });
                    ui.label(format!(
                        "  {:.2} km @ {:.1} km/s, {:.0} Mt",
                        scenario.parameters.size_km,
                        scenario.parameters.velocity_km_s,
                        scenario.result.energy_megatons()
                    ));
                    ui.add_space(4.0);
                }
            });
        });
}
