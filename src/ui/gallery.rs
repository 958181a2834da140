//! NEO gallery window: today's close approaches from the feed.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::neo::{self, NeoCatalog};
use crate::types::SimulatorParameters;

use super::{Notifications, UiState};

/// System that renders the fetched-object gallery.
pub fn neo_gallery(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    catalog: Res<NeoCatalog>,
    mut params: ResMut<SimulatorParameters>,
    mut notifications: ResMut<Notifications>,
) {
    if !ui_state.gallery_open {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("NEO Gallery")
        .open(&mut ui_state.gallery_open)
        .default_width(420.0)
        .show(ctx, |ui| {
            match &catalog.fetched_for {
                Some(date) => {
                    ui.label(format!("Close approaches on {date}"));
                }
                None => {
                    ui.label("No data yet. Use Fetch NASA Data in the control panel.");
                    return;
                }
            }
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("neo_grid")
                    .num_columns(6)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Name").strong());
                        ui.label(egui::RichText::new("Diameter").strong());
                        ui.label(egui::RichText::new("Velocity").strong());
                        ui.label(egui::RichText::new("Miss distance").strong());
                        ui.label(egui::RichText::new("PHA").strong());
                        ui.label("");
                        ui.end_row();

                        for object in catalog.objects.iter() {
                            ui.label(&object.name);
                            ui.label(format!("{:.3} km", object.diameter_km));
                            ui.label(format!("{:.1} km/s", object.velocity_km_s));
                            ui.label(format!("{:.4} AU", object.distance_au))
                                .on_hover_text(format!("{:.0} km", object.distance_km));
                            if object.hazardous {
                                ui.label(
                                    egui::RichText::new("YES")
                                        .color(egui::Color32::from_rgb(224, 85, 85)),
                                );
                            } else {
                                ui.label("no");
                            }
                            if ui.small_button("Use").clicked() {
                                neo::apply_neo(&mut params, object);
                                notifications
                                    .push_success(format!("Loaded NEO: {}", object.name));
                            }
                            ui.end_row();
                        }
                    });
            });
        });
}
