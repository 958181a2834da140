//! Historical impacts window.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::history::{Severity, HISTORICAL_IMPACTS};

use super::UiState;

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Moderate => egui::Color32::from_rgb(221, 187, 85),
        Severity::Major => egui::Color32::from_rgb(224, 140, 85),
        Severity::Catastrophic => egui::Color32::from_rgb(224, 85, 85),
    }
}

/// System that renders the historical impacts window.
pub fn history_window(mut contexts: EguiContexts, mut ui_state: ResMut<UiState>) {
    if !ui_state.history_open {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Historical Impacts")
        .open(&mut ui_state.history_open)
        .default_width(460.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for event in HISTORICAL_IMPACTS.iter() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(event.name).strong().size(15.0));
                        ui.label(
                            egui::RichText::new(event.severity.label())
                                .small()
                                .color(severity_color(event.severity)),
                        );
                    });
                    ui.label(format!("{}, {}", event.location, event.date));
                    ui.label(format!(
                        "Diameter: {}  Crater: {}",
                        event.diameter, event.crater_size
                    ));
                    ui.label(egui::RichText::new(event.consequences).weak());
                    ui.separator();
                }
            });
        });
}
