//! egui-based interface: control panel, results panel, and floating windows.

mod control_panel;
mod gallery;
mod history_panel;
mod notifications;
mod results_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use notifications::{Notification, NotificationKind, Notifications};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<Notifications>()
            .add_systems(Update, notifications::expire_notifications)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    control_panel::control_panel,
                    results_panel::results_panel,
                    gallery::neo_gallery,
                    history_panel::history_window,
                    notifications::notification_overlay,
                ),
            );
    }
}

/// Which floating windows are open.
#[derive(Resource, Default)]
pub struct UiState {
    pub gallery_open: bool,
    pub history_open: bool,
}
