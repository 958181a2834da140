//! Scenario bookkeeping: session-held saved scenarios and loadable presets.
//!
//! A saved scenario is a frozen (parameters, result) pair with a unique id.
//! The collection is append-ordered, removable by id, and lives only for the
//! session; there is no persistence.

pub mod presets;

use bevy::prelude::*;

pub use presets::{ScenarioPreset, PRESETS};

use crate::impact::{ImpactParameters, ImpactResult};
use crate::types::{LatestImpact, SimulatorParameters};
use crate::ui::Notifications;

/// One saved simulation: the inputs and the result they produced.
#[derive(Clone, Debug)]
pub struct SavedScenario {
    /// Unique within the session, never reused after removal.
    pub id: u64,
    pub name: String,
    pub parameters: ImpactParameters,
    pub result: ImpactResult,
}

/// Session-held, append-ordered collection of saved scenarios.
#[derive(Resource, Default)]
pub struct SavedScenarios {
    next_id: u64,
    scenarios: Vec<SavedScenario>,
}

impl SavedScenarios {
    /// Append a scenario and return its id.
    pub fn save(&mut self, parameters: ImpactParameters, result: ImpactResult) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.scenarios.push(SavedScenario {
            id,
            name: format!("Scenario {}", self.scenarios.len() + 1),
            parameters,
            result,
        });
        id
    }

    /// Remove a scenario by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.scenarios.len();
        self.scenarios.retain(|s| s.id != id);
        self.scenarios.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&SavedScenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Scenarios in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SavedScenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Event requesting the current parameters + result be saved.
#[derive(Message)]
pub struct SaveScenarioEvent;

/// Event requesting removal of a saved scenario.
#[derive(Message)]
pub struct DeleteScenarioEvent {
    pub id: u64,
}

/// Event requesting a preset's parameters be loaded into the sliders.
#[derive(Message)]
pub struct LoadPresetEvent {
    pub preset_id: &'static str,
}

/// Plugin providing scenario management.
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SavedScenarios>()
            .init_resource::<Messages<SaveScenarioEvent>>()
            .init_resource::<Messages<DeleteScenarioEvent>>()
            .init_resource::<Messages<LoadPresetEvent>>()
            .add_systems(Update, (handle_save, handle_delete, handle_load_preset));
    }
}

/// Save the current parameters with their computed result.
fn handle_save(
    mut events: MessageReader<SaveScenarioEvent>,
    mut saved: ResMut<SavedScenarios>,
    mut notifications: ResMut<Notifications>,
    params: Res<SimulatorParameters>,
    latest: Res<LatestImpact>,
) {
    for _ in events.read() {
        let Some(result) = latest.result.clone() else {
            notifications.push_error("Calculate impact first before saving");
            continue;
        };

        let parameters = ImpactParameters {
            size_km: params.size_km,
            velocity_km_s: params.velocity_km_s,
            angle_deg: params.angle_deg,
            composition: params.composition,
            mitigation: params.mitigation,
            surface: params.surface,
        };

        let id = saved.save(parameters, result);
        info!("Saved scenario {id}");
        notifications.push_success("Scenario saved! Compare with other scenarios");
    }
}

/// Remove saved scenarios by id.
fn handle_delete(
    mut events: MessageReader<DeleteScenarioEvent>,
    mut saved: ResMut<SavedScenarios>,
) {
    for event in events.read() {
        if !saved.remove(event.id) {
            warn!("Delete requested for unknown scenario id {}", event.id);
        }
    }
}

/// Load a preset's parameters into the simulator.
fn handle_load_preset(
    mut events: MessageReader<LoadPresetEvent>,
    mut params: ResMut<SimulatorParameters>,
    mut notifications: ResMut<Notifications>,
) {
    for event in events.read() {
        let Some(preset) = presets::get_preset(event.preset_id) else {
            warn!("Unknown preset id: {}", event.preset_id);
            continue;
        };

        params.size_km = preset.size_km;
        params.velocity_km_s = preset.velocity_km_s;
        params.angle_deg = preset.angle_deg;
        params.composition = preset.composition;
        params.mitigation = preset.mitigation;
        params.surface = preset.surface;
        params.source_name = Some(preset.name.to_string());

        info!("Loaded preset: {} ({})", preset.name, preset.id);
        notifications.push_success(format!("Loaded preset: {}", preset.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::compute_impact;

    fn saved_pair() -> (ImpactParameters, ImpactResult) {
        let params = ImpactParameters::default();
        let result = compute_impact(&params);
        (params, result)
    }

    #[test]
    fn test_save_assigns_unique_monotonic_ids() {
        let mut saved = SavedScenarios::default();
        let (p, r) = saved_pair();
        let a = saved.save(p.clone(), r.clone());
        let b = saved.save(p.clone(), r.clone());
        let c = saved.save(p, r);
        assert!(a < b && b < c, "ids must be monotonic: {a} {b} {c}");
        assert_eq!(saved.len(), 3);
    }

    #[test]
    fn test_remove_by_id() {
        let mut saved = SavedScenarios::default();
        let (p, r) = saved_pair();
        let first = saved.save(p.clone(), r.clone());
        let second = saved.save(p, r);

        assert!(saved.remove(first));
        assert_eq!(saved.len(), 1);
        assert!(saved.get(first).is_none());
        assert!(saved.get(second).is_some());

        // Removing again is a no-op
        assert!(!saved.remove(first));
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let mut saved = SavedScenarios::default();
        let (p, r) = saved_pair();
        let first = saved.save(p.clone(), r.clone());
        saved.remove(first);
        let second = saved.save(p, r);
        assert_ne!(first, second);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut saved = SavedScenarios::default();
        let (p, r) = saved_pair();
        let ids: Vec<u64> = (0..4).map(|_| saved.save(p.clone(), r.clone())).collect();
        let iterated: Vec<u64> = saved.iter().map(|s| s.id).collect();
        assert_eq!(ids, iterated);
    }

    #[test]
    fn test_scenario_result_is_stored_verbatim() {
        let mut saved = SavedScenarios::default();
        let (p, r) = saved_pair();
        let id = saved.save(p, r.clone());
        assert_eq!(saved.get(id).unwrap().result, r);
    }
}
