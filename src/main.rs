//! Meteor Madness - Asteroid Impact Simulator
//!
//! A desktop application for exploring asteroid impact scenarios: live
//! near-Earth-object data, a simplified impact physics model, and a 3D
//! visualization of the approach.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use meteor_madness::neo::NeoPlugin;
use meteor_madness::render::RenderPlugin;
use meteor_madness::scenarios::ScenarioPlugin;
use meteor_madness::types::{LatestImpact, SimulatorParameters};
use meteor_madness::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Meteor Madness".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SimulatorParameters::default())
        .insert_resource(LatestImpact::default())
        .add_plugins((NeoPlugin, ScenarioPlugin, RenderPlugin, UiPlugin))
        .run();
}
